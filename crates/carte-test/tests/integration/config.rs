//! Settings flowing into the renderer and the fetcher.

use carte_test::carte_core::config::Settings;
use carte_test::carte_core::logging;
use carte_test::fixtures::sample_record;
use carte_test::rfc::rfc::vcard::{
    HttpFetcher, NoFetcher, RenderOptions, VCardVersion, render_with_options,
};

use super::helpers::physical_lines;

#[test_log::test(tokio::test)]
async fn configured_width_drives_folding() {
    let settings = Settings::from_toml_str("[render]\nline_width = 30\n").expect("settings");
    let options = RenderOptions::from(&settings.render);
    assert_eq!(options.line_width, 30);

    let output = render_with_options(&sample_record(VCardVersion::V3), &NoFetcher, options)
        .await
        .expect("render");
    assert!(physical_lines(&output).iter().all(|line| line.len() <= 30));
    assert!(physical_lines(&output).iter().any(|line| line.starts_with(' ')));
}

#[test_log::test]
fn fetcher_builds_from_settings() {
    let settings = Settings::from_toml_str(
        "[fetch]\ntimeout_secs = 2\nmax_bytes = 1024\nuser_agent = \"carte-tests\"\n",
    )
    .expect("settings");

    assert!(HttpFetcher::new(&settings.fetch).is_ok());
}

#[test_log::test]
fn logging_init_defers_to_existing_subscriber() {
    let settings = Settings::default();
    // test-log installed a subscriber already
    assert!(!logging::init(&settings.logging));
}
