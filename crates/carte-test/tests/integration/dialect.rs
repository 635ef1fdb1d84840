//! Version-specific spellings, checked through full renders.

use carte_test::fixtures::sample_record;
use carte_test::rfc::error::RfcError;
use carte_test::rfc::rfc::vcard::{ContactRecord, VCardVersion, render_embedded};

use super::helpers::{find_property, logical_lines};

fn line(record: &ContactRecord, name: &str) -> String {
    let output = render_embedded(record).expect("render");
    find_property(&output, name).unwrap_or_else(|| panic!("no {name} line in\n{output}"))
}

#[test_log::test]
fn telephone_spelling_per_version() {
    let cases = [
        (VCardVersion::V2_1, "TEL;CELL:312-555-1414"),
        (VCardVersion::V3, "TEL;TYPE=CELL:312-555-1414"),
        (VCardVersion::V4, "TEL;VALUE=uri;TYPE=voice,cell:tel:312-555-1414"),
    ];
    for (version, expected) in cases {
        assert_eq!(line(&sample_record(version), "TEL"), expected, "{version}");
    }
}

#[test_log::test]
fn dates_per_version() {
    let cases = [
        (VCardVersion::V2_1, "BDAY:19800115"),
        (VCardVersion::V3, "BDAY:1980-01-15"),
        (VCardVersion::V4, "BDAY:19800115"),
    ];
    for (version, expected) in cases {
        let mut record = ContactRecord::with_version(version);
        record.set_birthday(chrono::NaiveDate::from_ymd_opt(1980, 1, 15).expect("date"));
        assert_eq!(line(&record, "BDAY"), expected, "{version}");
    }
}

#[test_log::test]
fn gender_and_anniversary_are_extensions_before_4_0() {
    for version in [VCardVersion::V2_1, VCardVersion::V3] {
        let record = sample_record(version);
        assert_eq!(line(&record, "X-GENDER"), "X-GENDER:M");
    }
    let record = sample_record(VCardVersion::V4);
    assert_eq!(line(&record, "GENDER"), "GENDER:M");
}

#[test_log::test]
fn labels_become_parameters_in_4_0() {
    let v3 = render_embedded(&sample_record(VCardVersion::V3)).expect("render");
    assert!(find_property(&v3, "LABEL").is_some());

    let v4 = render_embedded(&sample_record(VCardVersion::V4)).expect("render");
    assert!(find_property(&v4, "LABEL").is_none());
    let adr = find_property(&v4, "ADR").expect("ADR line");
    assert!(adr.starts_with("ADR;TYPE=home;LABEL=Home Address:"), "{adr}");
}

#[test_log::test]
fn label_only_address() {
    let mut v4 = ContactRecord::with_version(VCardVersion::V4);
    v4.work_address.set_label("Somewhere, Elsewhere");
    assert_eq!(
        line(&v4, "ADR"),
        "ADR;TYPE=work;LABEL=\"Somewhere, Elsewhere\":;;;;;;"
    );

    let mut v3 = ContactRecord::with_version(VCardVersion::V3);
    v3.work_address.set_label("Somewhere, Elsewhere");
    let output = render_embedded(&v3).expect("render");
    assert!(find_property(&output, "ADR").is_none());
    assert_eq!(
        find_property(&output, "LABEL").as_deref(),
        Some("LABEL;TYPE=WORK:Somewhere\\, Elsewhere")
    );
}

#[test_log::test]
fn social_profiles_are_uris() {
    let mut record = ContactRecord::with_version(VCardVersion::V3);
    record.social.set("twitter", "https://twitter/a,b;c");

    assert_eq!(
        line(&record, "X-SOCIALPROFILE"),
        "X-SOCIALPROFILE;TYPE=twitter:https://twitter/a,b;c"
    );
}

#[test_log::test]
fn version_strings() {
    let mut record = ContactRecord::new();
    assert_eq!(record.version, VCardVersion::V3);

    record.set_version_str("4.0").expect("4.0 is supported");
    assert_eq!(record.version, VCardVersion::V4);

    let err = record.set_version_str("5.0").expect_err("5.0 is not");
    assert!(matches!(err, RfcError::UnsupportedVersion(v) if v == "5.0"));
    assert_eq!(record.version, VCardVersion::V4);
}

#[test_log::test]
fn changing_version_changes_only_spelling() {
    let mut record = sample_record(VCardVersion::V2_1);
    record.set_version(VCardVersion::V3);

    assert_eq!(
        logical_lines(&render_embedded(&record).expect("render")),
        logical_lines(&render_embedded(&sample_record(VCardVersion::V3)).expect("render"))
    );
}
