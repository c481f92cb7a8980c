use mdt_table::{Alignment, Error};

// ── Specifier characters ─────────────────────────────────────────

#[test]
fn from_spec_known_characters() {
    assert_eq!(Alignment::from_spec('d').unwrap(), Alignment::Default);
    assert_eq!(Alignment::from_spec('l').unwrap(), Alignment::Left);
    assert_eq!(Alignment::from_spec('r').unwrap(), Alignment::Right);
    assert_eq!(Alignment::from_spec('c').unwrap(), Alignment::Center);
}

#[test]
fn from_spec_rejects_unknown_character() {
    let err = Alignment::from_spec('x').unwrap_err();
    assert!(matches!(err, Error::InvalidAlignment('x')));
    assert!(format!("{err}").contains("invalid alignment character"));
}

#[test]
fn from_spec_is_case_sensitive() {
    assert!(Alignment::from_spec('L').is_err());
}

#[test]
fn try_from_char() {
    assert_eq!(Alignment::try_from('c').unwrap(), Alignment::Center);
    assert!(Alignment::try_from('?').is_err());
}

#[test]
fn parse_spec_sequence() {
    let alignments = Alignment::parse_spec("dlrc").unwrap();
    assert_eq!(
        alignments,
        vec![
            Alignment::Default,
            Alignment::Left,
            Alignment::Right,
            Alignment::Center,
        ]
    );
}

#[test]
fn parse_spec_empty_is_empty() {
    assert!(Alignment::parse_spec("").unwrap().is_empty());
}

#[test]
fn parse_spec_reports_first_bad_character() {
    let err = Alignment::parse_spec("lzq").unwrap_err();
    assert!(matches!(err, Error::InvalidAlignment('z')));
}

#[test]
fn spec_char_roundtrip() {
    for alignment in Alignment::ALL {
        assert_eq!(Alignment::from_spec(alignment.spec_char()).unwrap(), alignment);
    }
}

// ── Separator markers ────────────────────────────────────────────

#[test]
fn marker_minimum_width() {
    assert_eq!(Alignment::Default.marker(3), "---");
    assert_eq!(Alignment::Left.marker(3), ":--");
    assert_eq!(Alignment::Center.marker(3), ":-:");
    assert_eq!(Alignment::Right.marker(3), "--:");
}

#[test]
fn marker_wider_column() {
    assert_eq!(Alignment::Default.marker(6), "------");
    assert_eq!(Alignment::Left.marker(6), ":-----");
    assert_eq!(Alignment::Center.marker(6), ":----:");
    assert_eq!(Alignment::Right.marker(6), "-----:");
}

#[test]
fn marker_narrow_width_is_widened() {
    assert_eq!(Alignment::Center.marker(0), ":-:");
    assert_eq!(Alignment::Right.marker(1), "--:");
}

#[test]
fn from_marker_classifies_segments() {
    assert_eq!(Alignment::from_marker(":---:"), Alignment::Center);
    assert_eq!(Alignment::from_marker("---:"), Alignment::Right);
    assert_eq!(Alignment::from_marker(":---"), Alignment::Left);
    assert_eq!(Alignment::from_marker("-----"), Alignment::Default);
}

#[test]
fn from_marker_trims_whitespace() {
    assert_eq!(Alignment::from_marker("  :-:  "), Alignment::Center);
}

#[test]
fn from_marker_empty_segment_is_default() {
    assert_eq!(Alignment::from_marker(""), Alignment::Default);
    assert_eq!(Alignment::from_marker("   "), Alignment::Default);
}

#[test]
fn marker_roundtrip() {
    for alignment in Alignment::ALL {
        assert_eq!(Alignment::from_marker(&alignment.marker(5)), alignment);
    }
}

// ── Traits ───────────────────────────────────────────────────────

#[test]
fn default_is_default() {
    assert_eq!(Alignment::default(), Alignment::Default);
}

#[test]
fn serializes_lowercase() {
    let json = serde_json::to_string(&Alignment::Center).unwrap();
    assert_eq!(json, "\"center\"");
    let parsed: Alignment = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(parsed, Alignment::Right);
}
