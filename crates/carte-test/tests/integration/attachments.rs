//! Attachment materialization through the canned fetchers.

use carte_test::fetchers::{FailingFetcher, StaticFetcher};
use carte_test::fixtures::{PNG_1X1, PNG_1X1_BASE64, REMOTE_PHOTO_URL, sample_record};
use carte_test::rfc::error::RfcError;
use carte_test::rfc::rfc::vcard::{
    AttachmentSlot, FetchError, NoFetcher, VCardVersion, render, render_embedded, render_linked,
};

use super::helpers::{find_property, value_of};

const REMOTE_LOGO_URL: &str = "https://testurl/logo";

#[test_log::test]
fn embedded_photo_payload_is_standard_base64() {
    let mut record = sample_record(VCardVersion::V3);
    record.photo.embed_from_data(PNG_1X1, "png");

    let output = render_embedded(&record).expect("render");
    let photo = find_property(&output, "PHOTO").expect("PHOTO line");

    assert!(photo.starts_with("PHOTO;ENCODING=b;TYPE=PNG:"), "{photo}");
    assert_eq!(value_of(&photo), PNG_1X1_BASE64);
}

#[test_log::test]
fn base64_input_matches_raw_bytes() {
    let mut raw = sample_record(VCardVersion::V4);
    raw.logo.embed_from_data(PNG_1X1, "image/png");
    let mut encoded = sample_record(VCardVersion::V4);
    encoded
        .logo
        .embed_from_base64(PNG_1X1_BASE64, "image/png")
        .expect("valid base64");

    assert_eq!(
        render_embedded(&raw).expect("render raw"),
        render_embedded(&encoded).expect("render encoded")
    );
}

#[test_log::test]
fn invalid_base64_is_rejected() {
    let mut record = sample_record(VCardVersion::V3);
    let result = record.photo.embed_from_base64("not*base64", "png");

    assert!(matches!(result, Err(RfcError::InvalidBase64(_))));
    assert!(!record.photo.is_set());
}

#[test_log::test(tokio::test)]
async fn fetched_and_embedded_payloads_match() {
    for version in [VCardVersion::V2_1, VCardVersion::V3, VCardVersion::V4] {
        let fetcher = StaticFetcher::new().with(REMOTE_PHOTO_URL, PNG_1X1, Some("image/png"));

        let mut remote = sample_record(version);
        remote.photo.attach_from_url(REMOTE_PHOTO_URL, "png");
        let mut embedded = sample_record(version);
        embedded.photo.embed_from_data(PNG_1X1, "png");

        let fetched = render(&remote, &fetcher).await.expect("render fetched");
        assert_eq!(fetched, render_embedded(&embedded).expect("render embedded"));
        assert_eq!(fetcher.requests(), 1);
    }
}

#[test_log::test(tokio::test)]
async fn both_attachments_are_fetched() {
    let fetcher = StaticFetcher::new()
        .with(REMOTE_PHOTO_URL, PNG_1X1, Some("image/png"))
        .with(REMOTE_LOGO_URL, PNG_1X1, Some("image/png"));

    let mut record = sample_record(VCardVersion::V4);
    record.photo.attach_from_url(REMOTE_PHOTO_URL, "");
    record.logo.attach_from_url(REMOTE_LOGO_URL, "");

    let output = render(&record, &fetcher).await.expect("render");
    assert_eq!(fetcher.requests(), 2);

    for name in ["LOGO", "PHOTO"] {
        let line = find_property(&output, name).expect("attachment line");
        assert!(line.contains(";MEDIATYPE=image/png:"), "{line}");
        assert_eq!(value_of(&line), PNG_1X1_BASE64);
    }
}

#[test_log::test(tokio::test)]
async fn media_type_is_sniffed_when_not_reported() {
    let fetcher = StaticFetcher::new().with(REMOTE_LOGO_URL, PNG_1X1, None);

    let mut record = sample_record(VCardVersion::V3);
    record.logo.attach_from_url(REMOTE_LOGO_URL, "");

    let output = render(&record, &fetcher).await.expect("render");
    let logo = find_property(&output, "LOGO").expect("LOGO line");
    assert!(logo.starts_with("LOGO;ENCODING=b;TYPE=PNG:"), "{logo}");
}

#[test_log::test(tokio::test)]
async fn unresolvable_media_type_fails() {
    let fetcher = StaticFetcher::new().with(REMOTE_LOGO_URL, b"plain bytes", None);

    let mut record = sample_record(VCardVersion::V3);
    record.logo.attach_from_url(REMOTE_LOGO_URL, "");

    let err = render(&record, &fetcher).await.expect_err("no media type");
    assert!(matches!(
        err,
        RfcError::UnknownMediaType {
            slot: AttachmentSlot::Logo
        }
    ));
}

#[test_log::test(tokio::test)]
async fn fetch_failures_surface_without_output() {
    for error in [
        FetchError::Timeout,
        FetchError::Status(503),
        FetchError::TooLarge { limit: 16 },
        FetchError::Transport("connection reset".to_string()),
    ] {
        let mut record = sample_record(VCardVersion::V3);
        record.photo.attach_from_url(REMOTE_PHOTO_URL, "png");

        let err = render(&record, &FailingFetcher(error.clone()))
            .await
            .expect_err("fetch fails");
        match err {
            RfcError::FetchFailure { slot, url, source } => {
                assert_eq!(slot, AttachmentSlot::Photo);
                assert_eq!(url, REMOTE_PHOTO_URL);
                assert_eq!(source, error);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test_log::test(tokio::test)]
async fn unknown_url_reports_status() {
    let fetcher = StaticFetcher::new();
    let mut record = sample_record(VCardVersion::V4);
    record.photo.attach_from_url(REMOTE_PHOTO_URL, "png");

    let err = render(&record, &fetcher).await.expect_err("404");
    assert!(matches!(
        err,
        RfcError::FetchFailure {
            source: FetchError::Status(404),
            ..
        }
    ));
}

#[test_log::test(tokio::test)]
async fn no_fetcher_means_unavailable() {
    let mut record = sample_record(VCardVersion::V3);
    record.logo.attach_from_url(REMOTE_LOGO_URL, "png");

    let err = render(&record, &NoFetcher).await.expect_err("no fetcher");
    assert!(matches!(
        err,
        RfcError::FetchFailure {
            source: FetchError::Unavailable,
            ..
        }
    ));
}

#[test_log::test]
fn linked_rendering_writes_references() {
    let mut record = sample_record(VCardVersion::V4);
    record.photo.attach_from_url(REMOTE_PHOTO_URL, "png");

    let output = render_linked(&record).expect("render");
    let photo = find_property(&output, "PHOTO").expect("PHOTO line");
    assert!(photo.starts_with("PHOTO;"), "{photo}");
    assert!(photo.contains("image/png"), "{photo}");
    assert_eq!(value_of(&photo), REMOTE_PHOTO_URL);
}

#[test_log::test]
fn cleared_attachment_produces_no_line() {
    let mut record = sample_record(VCardVersion::V3);
    record.photo.embed_from_data(PNG_1X1, "png").clear();

    let output = render_embedded(&record).expect("render");
    assert!(find_property(&output, "PHOTO").is_none());
}
