//! Command implementations.

pub mod companies;
pub mod draft;
pub mod profile;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use corpdir_client::{ClientConfig, ConfigError, FileStore, KeyValueStore};

/// Loads the environment configuration and opens the on-disk store under its
/// data directory.
fn open_store() -> Result<(ClientConfig, Arc<dyn KeyValueStore>), ConfigError> {
    let config = ClientConfig::from_env()?;
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.data_dir.clone()));
    Ok((config, store))
}

/// Guesses the MIME type of a logo file from its extension.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_common_extensions() {
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(content_type_for(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("logo.webp")), "image/webp");
        assert_eq!(
            content_type_for(Path::new("logo")),
            "application/octet-stream"
        );
    }
}
