//! Company listing commands: `companies`, `show`.

use corpdir_client::{ApiError, CompanyListCache, ConfigError, RegistryClient};
use corpdir_core::{CompanyId, CompanyRecord};
use thiserror::Error;

use super::open_store;

/// Errors that can occur during company commands.
#[derive(Debug, Error)]
pub enum CompanyCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The registry API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// List the locally cached companies.
///
/// The cache only knows about records this machine created or updated; it is
/// a convenience view, not a registry query.
pub fn list() -> Result<(), CompanyCommandError> {
    let (_, store) = open_store()?;
    let records = CompanyListCache::new(store).all();

    if records.is_empty() {
        tracing::info!("No cached companies. Create one with `corpdir create`.");
        return Ok(());
    }

    tracing::info!("{} cached compan{}:", records.len(), plural_y(records.len()));
    for record in &records {
        tracing::info!("  {} - {}", record.id, record.legal_name);
    }
    Ok(())
}

/// Fetch one company from the registry and print its profile.
pub async fn show(id: &str) -> Result<(), CompanyCommandError> {
    let (config, _) = open_store()?;
    let client = RegistryClient::new(&config);

    let record = client.get_company(&CompanyId::new(id)).await?;
    print_record(&record);
    Ok(())
}

fn print_record(record: &CompanyRecord) {
    tracing::info!("{} ({})", record.legal_name, record.id);
    tracing::info!("  Industry: {}", record.industry);
    tracing::info!("  Incorporated in: {}", record.state_of_incorporation);
    tracing::info!("  Email: {}", record.email);
    tracing::info!("  Phone: {}", record.phone);
    tracing::info!(
        "  Employees: {} ({} full-time, {} part-time)",
        record.total_number_of_employees,
        record.number_of_full_time_employees,
        record.number_of_part_time_employees
    );
    if let Some(website) = &record.website {
        tracing::info!("  Website: {website}");
    }
    tracing::info!(
        "  Registered address: {}, {}, {} {}, {}",
        record.registered_address.street,
        record.registered_address.city,
        record.registered_address.state,
        record.registered_address.zip_code,
        record.registered_address.country
    );
    if record.is_mailing_address_different_from_registered_address
        && let Some(mailing) = &record.mailing_address
    {
        tracing::info!(
            "  Mailing address: {}, {}, {} {}, {}",
            mailing.street,
            mailing.city,
            mailing.state,
            mailing.zip_code,
            mailing.country
        );
    }
    tracing::info!(
        "  Contact: {} <{}>",
        record.primary_contact_person.full_name(),
        record.primary_contact_person.email
    );
    if let Some(key) = &record.logo_s3_key {
        tracing::info!("  Logo key: {key}");
    }
}

const fn plural_y(count: usize) -> &'static str {
    if count == 1 { "y" } else { "ies" }
}
