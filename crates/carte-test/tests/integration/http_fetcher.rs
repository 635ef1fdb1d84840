//! `HttpFetcher` against a loopback responder.

use std::time::Duration;

use carte_test::carte_core::config::FetchConfig;
use carte_test::fixtures::{PNG_1X1, PNG_1X1_BASE64, sample_record};
use carte_test::rfc::error::RfcError;
use carte_test::rfc::rfc::vcard::{
    AttachmentFetcher, FetchError, HttpFetcher, MediaType, VCardVersion, render,
};
use carte_test::server::{http_response, serve_once, serve_silent};

use super::helpers::{find_property, value_of};

fn fetcher(config: FetchConfig) -> HttpFetcher {
    HttpFetcher::new(&config).expect("client builds")
}

#[test_log::test(tokio::test)]
async fn fetches_body_and_content_type() {
    let base = serve_once(http_response(200, "OK", Some("image/png"), PNG_1X1))
        .await
        .expect("bind");

    let resource = fetcher(FetchConfig::default())
        .fetch(&format!("{base}/photo.png"), MediaType::parse("png").as_ref())
        .await
        .expect("fetch");

    assert_eq!(resource.bytes, PNG_1X1);
    assert_eq!(resource.content_type.as_deref(), Some("image/png"));
}

#[test_log::test(tokio::test)]
async fn error_status_is_reported() {
    let base = serve_once(http_response(404, "Not Found", None, b"missing"))
        .await
        .expect("bind");

    let err = fetcher(FetchConfig::default())
        .fetch(&format!("{base}/gone.png"), None)
        .await
        .expect_err("404");
    assert_eq!(err, FetchError::Status(404));
}

#[test_log::test(tokio::test)]
async fn oversized_body_is_refused() {
    let base = serve_once(http_response(200, "OK", Some("image/png"), PNG_1X1))
        .await
        .expect("bind");
    let config = FetchConfig {
        max_bytes: 16,
        ..FetchConfig::default()
    };

    let err = fetcher(config)
        .fetch(&format!("{base}/photo.png"), None)
        .await
        .expect_err("too large");
    assert_eq!(err, FetchError::TooLarge { limit: 16 });
}

#[test_log::test(tokio::test)]
async fn silent_server_times_out() {
    let base = serve_silent(Duration::from_secs(5)).await.expect("bind");
    let config = FetchConfig {
        timeout_secs: 1,
        ..FetchConfig::default()
    };

    let err = fetcher(config)
        .fetch(&format!("{base}/photo.png"), None)
        .await
        .expect_err("timeout");
    assert_eq!(err, FetchError::Timeout);
}

#[test_log::test(tokio::test)]
async fn renders_fetched_photo() {
    let base = serve_once(http_response(200, "OK", Some("image/png"), PNG_1X1))
        .await
        .expect("bind");

    let mut record = sample_record(VCardVersion::V4);
    record.photo.attach_from_url(format!("{base}/photo"), "");

    let output = render(&record, &fetcher(FetchConfig::default()))
        .await
        .expect("render");
    let photo = find_property(&output, "PHOTO").expect("PHOTO line");

    assert!(photo.starts_with("PHOTO;ENCODING=b;MEDIATYPE=image/png:"), "{photo}");
    assert_eq!(value_of(&photo), PNG_1X1_BASE64);
}

#[test_log::test(tokio::test)]
async fn render_surfaces_http_failure() {
    let base = serve_once(http_response(500, "Internal Server Error", None, b""))
        .await
        .expect("bind");
    let url = format!("{base}/logo.png");

    let mut record = sample_record(VCardVersion::V3);
    record.logo.attach_from_url(url.as_str(), "png");

    let err = render(&record, &fetcher(FetchConfig::default()))
        .await
        .expect_err("server error");
    match err {
        RfcError::FetchFailure { url: failed, source, .. } => {
            assert_eq!(failed, url);
            assert_eq!(source, FetchError::Status(500));
        }
        other => panic!("unexpected error: {other}"),
    }
}
