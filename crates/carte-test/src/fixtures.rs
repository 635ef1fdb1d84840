//! Sample data.

use chrono::NaiveDate;

use carte_rfc::rfc::vcard::{ContactRecord, VCardVersion};

/// A complete 1x1 transparent PNG.
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4,
    0x89, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60, 0x00, 0x02, 0x00,
    0x00, 0x05, 0x00, 0x01, 0x7a, 0x5e, 0xab, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44,
    0xae, 0x42, 0x60, 0x82,
];

/// [`PNG_1X1`] in standard base64.
pub const PNG_1X1_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR4nGNgAAIAAAUAAXpeqz8AAAAASUVORK5CYII=";

/// URL the remote sample attachments point at.
pub const REMOTE_PHOTO_URL: &str = "https://testurl/photo.png";

/// A fully populated contact without attachments.
#[must_use]
pub fn sample_record(version: VCardVersion) -> ContactRecord {
    let mut card = ContactRecord::with_version(version);
    card.set_last_name("Doe")
        .set_middle_name("D")
        .set_first_name("John")
        .set_name_suffix("JR")
        .set_name_prefix("MR")
        .set_nickname("Test User")
        .set_gender("M")
        .set_organization("ACME Corporation")
        .set_work_phone("312-555-1212")
        .set_home_phone("312-555-1313")
        .set_cell_phone("312-555-1414")
        .set_pager_phone("312-555-1515")
        .set_home_fax("312-555-1616")
        .set_work_fax("312-555-1717")
        .set_title("Crash Test Dummy")
        .set_role("Crash Testing")
        .set_email("john.doe@testmail")
        .set_work_email("john.doe@workmail")
        .set_url("http://johndoe")
        .set_work_url("http://acemecompany/johndoe")
        .set_source("http://sourceurl")
        .set_note("John Doe's \nnotes;,");

    if let Some(date) = NaiveDate::from_ymd_opt(1980, 1, 15) {
        card.set_birthday(date);
    }
    if let Some(date) = NaiveDate::from_ymd_opt(2005, 6, 20) {
        card.set_anniversary(date);
    }

    card.home_address
        .set_label("Home Address")
        .set_street("123 Main Street")
        .set_city("Chicago")
        .set_state_province("IL")
        .set_postal_code("12345")
        .set_country_region("United States of America");

    card.work_address
        .set_label("Work Address")
        .set_street("123 Corporate Loop\nSuite 500")
        .set_city("Los Angeles")
        .set_state_province("CA")
        .set_postal_code("54321")
        .set_country_region("California Republic");

    card.social
        .set("facebook", "https://facebook/johndoe")
        .set("linkedIn", "https://linkedin/johndoe")
        .set("twitter", "https://twitter/johndoe")
        .set("flickr", "https://flickr/johndoe")
        .set_custom("https://custom/johndoe");

    card
}
