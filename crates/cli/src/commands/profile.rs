//! Profile submission commands: `create`, `update`.
//!
//! Both commands read a JSON field file shaped like the form's draft
//! document (wire field names, all values as text), drive the wizard through
//! its sections, and submit. A file that fails section validation prints the
//! messages a form user would see, field by field.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use corpdir_client::{
    Advance, ApiError, ClientConfig, CompanyApi, CompanyForm, ConfigError, DraftStore, Field,
    FormValues, LogoFile, LogoUploader, Navigation, RecordSync, RegistryClient, SubmitError,
};
use corpdir_core::CompanyId;
use thiserror::Error;

use super::{content_type_for, open_store};

/// Errors that can occur during profile commands.
#[derive(Debug, Error)]
pub enum ProfileCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The field file or logo could not be read.
    #[error("Could not read {0}: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),

    /// The field file is not a valid profile document.
    #[error("Invalid field file: {0}")]
    ParseInput(#[from] serde_json::Error),

    /// The registry API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The logo was rejected or could not be uploaded.
    #[error("Logo upload failed: {0}")]
    Upload(#[from] corpdir_client::UploadError),

    /// The profile failed validation; nothing was submitted.
    #[error("{0} field(s) failed validation")]
    InvalidForm(usize),

    /// Submission failed after validation passed.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Create a company from a field file.
pub async fn create(input: &Path, logo: Option<&Path>) -> Result<(), ProfileCommandError> {
    let (config, store) = open_store()?;
    let parsed = read_values(input)?;
    let client: Arc<dyn CompanyApi> = Arc::new(RegistryClient::new(&config));

    let mut form = CompanyForm::new_create(DraftStore::new(Arc::clone(&store)));
    apply_values(&mut form, &parsed);
    attach_logo(&mut form, &client, &config, logo).await?;
    walk_wizard(&mut form)?;

    let sync = RecordSync::new(client, store);
    let outcome = sync.submit_create(form.values()).await?;

    tracing::info!(
        "Created company {} ({})",
        outcome.record.legal_name,
        outcome.record.id
    );
    if outcome.navigation == Navigation::CompanyList {
        tracing::info!("It is now in the local list; see `corpdir companies`.");
    }
    Ok(())
}

/// Update an existing company from a field file.
///
/// The file holds the complete desired profile; fields it leaves empty end
/// up empty on the record.
pub async fn update(id: &str, input: &Path, logo: Option<&Path>) -> Result<(), ProfileCommandError> {
    let (config, store) = open_store()?;
    let parsed = read_values(input)?;
    let client: Arc<dyn CompanyApi> = Arc::new(RegistryClient::new(&config));

    let id = CompanyId::new(id);
    let record = client.fetch_company(&id).await?;

    let mut form = CompanyForm::new_edit(&record);
    apply_values(&mut form, &parsed);
    attach_logo(&mut form, &client, &config, logo).await?;
    walk_wizard(&mut form)?;

    let sync = RecordSync::new(client, store);
    let outcome = sync.submit_update(&id, form.values()).await?;

    tracing::info!(
        "Updated company {} ({})",
        outcome.record.legal_name,
        outcome.record.id
    );
    Ok(())
}

fn read_values(path: &Path) -> Result<FormValues, ProfileCommandError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ProfileCommandError::ReadFile(path.to_path_buf(), e))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Replays the file's fields into the form as edits, so the usual derivation
/// and draft rules apply.
fn apply_values(form: &mut CompanyForm, parsed: &FormValues) {
    form.set_mailing_differs(parsed.mailing_differs());
    for field in Field::ALL {
        form.set_text(field, parsed.text(field));
    }
}

async fn attach_logo(
    form: &mut CompanyForm,
    client: &Arc<dyn CompanyApi>,
    config: &ClientConfig,
    logo: Option<&Path>,
) -> Result<(), ProfileCommandError> {
    let Some(path) = logo else {
        return Ok(());
    };

    let bytes =
        std::fs::read(path).map_err(|e| ProfileCommandError::ReadFile(path.to_path_buf(), e))?;
    let file = LogoFile {
        name: path
            .file_name()
            .map_or_else(|| "logo".to_owned(), |n| n.to_string_lossy().into_owned()),
        content_type: content_type_for(path).to_owned(),
        bytes,
    };

    let mut uploader = LogoUploader::new(Arc::clone(client), config.max_logo_bytes);
    let key = uploader.attach(file).await?;
    form.set_text(Field::LogoKey, key.as_str());
    tracing::info!("Uploaded logo as {key}");
    Ok(())
}

/// Advances the wizard section by section, printing the messages a form user
/// would see if a section refuses to let go.
fn walk_wizard(form: &mut CompanyForm) -> Result<(), ProfileCommandError> {
    loop {
        match form.next() {
            Advance::Moved(_) => {}
            Advance::AtEnd => return Ok(()),
            Advance::Blocked { .. } => {
                let section = form.active_section();
                tracing::error!("The {} section is incomplete:", section.label());
                for (field, message) in form.errors().iter() {
                    tracing::error!("  {}: {message}", field.path());
                }
                return Err(ProfileCommandError::InvalidForm(form.errors().len()));
            }
        }
    }
}
