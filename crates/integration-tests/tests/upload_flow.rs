//! Integration tests for the logo upload handshake.
//!
//! The suite runs the grant/transfer/preview handshake against the fake
//! registry and follows an uploaded key all the way into a submitted record.

use std::sync::Arc;

use corpdir_client::validate::Field;
use corpdir_client::{CompanyForm, LogoFile, LogoUploader, RecordSync, UploadError, UploadPhase};
use corpdir_core::StorageKey;
use corpdir_integration_tests::{fake_api, memory_store, sample_record, valid_form_values};

const MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

fn png(name: &str, size: usize) -> LogoFile {
    LogoFile {
        name: name.to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![0_u8; size],
    }
}

// ============================================================================
// The handshake
// ============================================================================

#[tokio::test]
async fn test_handshake_grants_transfers_and_previews() {
    let (fake, api) = fake_api();
    let mut uploader = LogoUploader::new(api, MAX_LOGO_BYTES);

    let key = uploader
        .attach(png("acme.png", 2048))
        .await
        .expect("upload failed");

    assert_eq!(key.as_str(), "logos/acme.png");
    assert_eq!(uploader.phase(), UploadPhase::Complete);
    assert_eq!(
        uploader.preview_url(),
        Some("https://storage.test/logos/acme.png?sig=down")
    );
    // Exactly one call per handshake step.
    assert_eq!(fake.grant_calls(), 1);
    assert_eq!(fake.put_calls(), 1);
    assert_eq!(fake.download_calls(), 1);
}

#[tokio::test]
async fn test_oversized_file_never_reaches_the_network() {
    let (fake, api) = fake_api();
    let mut uploader = LogoUploader::new(api, MAX_LOGO_BYTES);

    let result = uploader.attach(png("huge.png", 6 * 1024 * 1024)).await;

    assert!(matches!(result, Err(UploadError::TooLarge { .. })));
    assert_eq!(fake.total_calls(), 0);
    // The rejection is purely local; the slot looks untouched.
    assert_eq!(uploader.phase(), UploadPhase::Idle);
    assert_eq!(uploader.logo_key(), None);
}

#[tokio::test]
async fn test_failed_transfer_keeps_the_previous_logo_until_a_retry_lands() {
    let (fake, api) = fake_api();
    let mut uploader = LogoUploader::new(api, MAX_LOGO_BYTES);
    uploader.show_existing(StorageKey::new("logos/old.png")).await;

    fake.fail_put(true);
    let result = uploader.attach(png("new.png", 2048)).await;
    assert!(matches!(result, Err(UploadError::Api(_))));
    assert_eq!(uploader.phase(), UploadPhase::Failed);
    assert!(uploader.last_error().is_some());
    // The form keeps showing the last good logo.
    assert_eq!(
        uploader.logo_key().map(StorageKey::as_str),
        Some("logos/old.png")
    );
    assert_eq!(
        uploader.preview_url(),
        Some("https://storage.test/logos/old.png?sig=down")
    );

    fake.fail_put(false);
    let key = uploader
        .attach(png("new.png", 2048))
        .await
        .expect("retry failed");
    assert_eq!(key.as_str(), "logos/new.png");
    assert_eq!(uploader.phase(), UploadPhase::Complete);
    assert_eq!(uploader.last_error(), None);
}

#[tokio::test]
async fn test_unresolvable_preview_still_counts_as_stored() {
    let (fake, api) = fake_api();
    let mut uploader = LogoUploader::new(api, MAX_LOGO_BYTES);
    fake.fail_download(true);

    let key = uploader
        .attach(png("acme.png", 2048))
        .await
        .expect("upload failed");

    assert_eq!(uploader.phase(), UploadPhase::Complete);
    assert_eq!(uploader.logo_key(), Some(&key));
    assert_eq!(uploader.preview_url(), None);
    assert_eq!(fake.put_calls(), 1);
}

// ============================================================================
// From upload to record
// ============================================================================

#[tokio::test]
async fn test_uploaded_key_flows_into_the_submitted_record() {
    let (fake, api) = fake_api();
    let (_, dyn_store) = memory_store();
    let mut uploader = LogoUploader::new(Arc::clone(&api), MAX_LOGO_BYTES);

    let key = uploader
        .attach(png("acme.png", 2048))
        .await
        .expect("upload failed");

    let mut values = valid_form_values();
    values.set_text(Field::LogoKey, key.as_str());

    let sync = RecordSync::new(api, dyn_store);
    let outcome = sync
        .submit_create(&values)
        .await
        .expect("create submission failed");

    let stored = fake
        .stored(outcome.record.id.as_str())
        .expect("backend lost the record");
    assert_eq!(
        stored.logo_s3_key.as_ref().map(StorageKey::as_str),
        Some("logos/acme.png")
    );
}

#[tokio::test]
async fn test_editing_a_record_with_a_logo_resolves_its_preview() {
    let (fake, api) = fake_api();
    let mut record = sample_record("c-1", "Acme Inc.");
    record.logo_s3_key = Some(StorageKey::new("logos/acme.png"));

    // The form carries the key as a field like any other.
    let form = CompanyForm::new_edit(&record);
    assert_eq!(form.values().text(Field::LogoKey), "logos/acme.png");

    // The uploader adopts the stored logo without re-uploading anything.
    let mut uploader = LogoUploader::new(api, MAX_LOGO_BYTES);
    uploader
        .show_existing(StorageKey::new(form.values().text(Field::LogoKey)))
        .await;

    assert_eq!(uploader.phase(), UploadPhase::Complete);
    assert_eq!(
        uploader.preview_url(),
        Some("https://storage.test/logos/acme.png?sig=down")
    );
    assert_eq!(fake.put_calls(), 0);
    assert_eq!(fake.grant_calls(), 0);
    assert_eq!(fake.download_calls(), 1);
}
