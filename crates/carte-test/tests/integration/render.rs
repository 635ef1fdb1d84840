//! Structural properties of rendered cards.

use carte_test::fixtures::sample_record;
use carte_test::rfc::rfc::vcard::{ContactRecord, NoFetcher, VCardVersion, render, render_embedded};

use super::helpers::{find_property, physical_lines, value_of};

const VERSIONS: [VCardVersion; 3] = [VCardVersion::V2_1, VCardVersion::V3, VCardVersion::V4];

#[test_log::test]
fn cards_are_enveloped() {
    for version in VERSIONS {
        let output = render_embedded(&sample_record(version)).expect("render");
        let lines = physical_lines(&output);

        assert_eq!(lines.first(), Some(&"BEGIN:VCARD"), "{version}");
        assert_eq!(lines.get(1).copied(), Some(format!("VERSION:{version}").as_str()));
        assert_eq!(lines.last(), Some(&"END:VCARD"), "{version}");
        assert!(output.ends_with("END:VCARD\r\n"));
    }
}

#[test_log::test]
fn every_line_is_a_property_or_continuation() {
    for version in VERSIONS {
        let output = render_embedded(&sample_record(version)).expect("render");
        for line in physical_lines(&output) {
            assert!(
                line.contains(':') || line.starts_with(' '),
                "{version}: malformed line {line:?}"
            );
        }
    }
}

#[test_log::test]
fn lines_end_in_crlf_only() {
    let output = render_embedded(&sample_record(VCardVersion::V3)).expect("render");
    let bare_lf = output
        .match_indices('\n')
        .filter(|(i, _)| *i == 0 || output.as_bytes()[i - 1] != b'\r')
        .count();
    assert_eq!(bare_lf, 0);
}

#[test_log::test]
fn note_special_characters_are_escaped() {
    for version in [VCardVersion::V3, VCardVersion::V4] {
        let mut record = ContactRecord::with_version(version);
        record.set_note("first line\r\nsecond, with; a \\ backslash\u{7}\rlast");

        let output = render_embedded(&record).expect("render");
        let note = find_property(&output, "NOTE").expect("NOTE line");

        assert_eq!(
            value_of(&note),
            "first line\\nsecond\\, with\\; a \\\\ backslash\\nlast"
        );
        assert!(
            !output
                .chars()
                .any(|c| c.is_control() && c != '\r' && c != '\n'),
            "{version}: raw control character in output"
        );
    }
}

#[test_log::test]
fn legacy_note_line_breaks_are_quoted_printable() {
    let mut record = ContactRecord::with_version(VCardVersion::V2_1);
    record.set_note("one\ntwo; three");

    let output = render_embedded(&record).expect("render");
    let note = find_property(&output, "NOTE").expect("NOTE line");

    assert!(note.contains(";ENCODING=QUOTED-PRINTABLE"), "{note}");
    assert!(note.contains(";CHARSET=UTF-8"), "{note}");
    assert_eq!(value_of(&note), "one=0D=0Atwo; three");
}

#[test_log::test]
fn numeric_and_text_postal_codes_match() {
    let mut numeric = sample_record(VCardVersion::V4);
    numeric.home_address.set_postal_code(12345);
    let mut text = sample_record(VCardVersion::V4);
    text.home_address.set_postal_code("12345");

    assert_eq!(
        render_embedded(&numeric).expect("render"),
        render_embedded(&text).expect("render")
    );
}

#[test_log::test]
fn numbers_are_accepted_by_any_text_field() {
    let mut record = ContactRecord::new();
    record.set_organization(42).set_nickname(7.5);

    let output = render_embedded(&record).expect("render");
    assert!(output.contains("\r\nNICKNAME:7.5\r\n"));
    assert!(output.contains("\r\nORG:42\r\n"));
}

#[test_log::test]
fn rendering_twice_is_identical() {
    for version in VERSIONS {
        let record = sample_record(version);
        assert_eq!(
            render_embedded(&record).expect("first render"),
            render_embedded(&record).expect("second render")
        );
    }
}

#[test_log::test]
fn unassigned_fields_produce_no_line() {
    let mut record = ContactRecord::with_version(VCardVersion::V4);
    record.set_first_name("Jane").set_cell_phone("555-0100");

    let output = render_embedded(&record).expect("render");
    let names: Vec<&str> = physical_lines(&output)
        .into_iter()
        .map(|line| line.split([';', ':']).next().unwrap_or_default())
        .collect();

    assert_eq!(names, vec!["BEGIN", "VERSION", "N", "TEL", "END"]);
}

#[test_log::test(tokio::test)]
async fn minimal_card_renders_exactly() {
    let mut record = ContactRecord::with_version(VCardVersion::V3);
    record.set_last_name("Doe").set_first_name("John");

    let output = render(&record, &NoFetcher).await.expect("render");
    assert_eq!(
        output,
        "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;John;;;\r\nEND:VCARD\r\n"
    );
}

#[test_log::test]
fn property_order_is_fixed() {
    let output = render_embedded(&sample_record(VCardVersion::V3)).expect("render");
    let names: Vec<&str> = physical_lines(&output)
        .into_iter()
        .filter(|line| !line.starts_with(' '))
        .map(|line| line.split([';', ':']).next().unwrap_or_default())
        .collect();

    let position = |name: &str| names.iter().position(|n| *n == name);
    let order = [
        "N", "NICKNAME", "X-GENDER", "BDAY", "X-ANNIVERSARY", "EMAIL", "TEL", "LABEL", "ADR",
        "TITLE", "ROLE", "ORG", "URL", "NOTE", "X-SOCIALPROFILE", "SOURCE",
    ];
    for pair in order.windows(2) {
        assert!(
            position(pair[0]) < position(pair[1]),
            "{} should precede {}",
            pair[0],
            pair[1]
        );
    }
}

#[test_log::test]
fn revision_is_emitted_last_when_set() {
    let mut record = sample_record(VCardVersion::V4);
    let at = chrono::DateTime::parse_from_rfc3339("2024-03-01T12:30:00Z")
        .expect("timestamp")
        .with_timezone(&chrono::Utc);
    record.set_revision(at);

    let output = render_embedded(&record).expect("render");
    let lines = physical_lines(&output);
    let rev = lines[lines.len() - 2];
    assert!(rev.starts_with("REV:2024"), "{rev}");
}
