use chrono::NaiveDate;
use rstest::rstest;
use version_checker::{ApplicationVersion, VersionNote, VersionUrl};

fn full_descriptor() -> ApplicationVersion {
    let date = NaiveDate::from_ymd_opt(2009, 12, 9)
        .unwrap()
        .and_hms_opt(9, 45, 30)
        .unwrap();
    let notes = vec![
        VersionNote::new("Fixes", "Fixed the installer").unwrap(),
        VersionNote::new("Features", "Added dark mode").unwrap(),
    ];
    let urls = vec![VersionUrl::new("Homepage", "https://example.com").unwrap()];

    ApplicationVersion::with_details(
        "1.1.0.0",
        Some("A small update"),
        Some("A longer description of the update"),
        Some(date),
        Some(notes),
        Some(urls),
        Some("(C) Example 2015"),
    )
    .unwrap()
}

#[test]
fn decode_of_encode_restores_every_field() {
    let original = full_descriptor();

    let decoded = ApplicationVersion::from_xml(&original.to_xml())
        .unwrap()
        .unwrap();

    assert_eq!(decoded.id(), original.id());
    assert_eq!(decoded.short_description, original.short_description);
    assert_eq!(decoded.long_description, original.long_description);
    assert_eq!(decoded.date, original.date);
    assert_eq!(decoded.notes, original.notes);
    assert_eq!(decoded.urls, original.urls);
    assert_eq!(decoded.copyright, original.copyright);
}

#[test]
fn encode_of_decode_reproduces_canonical_text() {
    let texts = [
        full_descriptor().to_xml(),
        ApplicationVersion::new("2.0").unwrap().to_xml(),
        ApplicationVersion::with_details("3.0", Some(""), None, None, Some(vec![]), Some(vec![]), None)
            .unwrap()
            .to_xml(),
    ];

    for text in texts {
        let decoded = ApplicationVersion::from_xml(&text).unwrap().unwrap();
        assert_eq!(decoded.to_xml(), text);
    }
}

#[rstest]
#[case("1.1.0.0")]
#[case("2.0")]
fn external_spelling_round_trips_by_id(#[case] id: &str) {
    let xml = format!("<Version>\n  <Id>{id}</Id>\n</Version>");

    let decoded = ApplicationVersion::from_xml(&xml).unwrap().unwrap();
    assert_eq!(decoded.id(), id);

    let reencoded = decoded.to_xml();
    let redecoded = ApplicationVersion::from_xml(&reencoded).unwrap().unwrap();
    assert_eq!(redecoded.id(), id);
}

#[test]
fn empty_wrapper_survives_a_round_trip() {
    let xml = "<Version>\n  <Id>1.1.0.0</Id>\n  <Notes>\n  </Notes>\n</Version>";

    let decoded = ApplicationVersion::from_xml(xml).unwrap().unwrap();
    assert_eq!(decoded.notes, Some(vec![]));
    assert_eq!(decoded.urls, None);

    let redecoded = ApplicationVersion::from_xml(&decoded.to_xml())
        .unwrap()
        .unwrap();
    assert_eq!(redecoded.notes, Some(vec![]));
    assert_eq!(redecoded.urls, None);
}

#[test]
fn date_only_input_round_trips_to_midnight() {
    let xml = "<Version><Id>1.0</Id><Date>9/12/2009</Date></Version>";

    let decoded = ApplicationVersion::from_xml(xml).unwrap().unwrap();
    let expected = NaiveDate::from_ymd_opt(2009, 12, 9)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(decoded.date, Some(expected));

    let redecoded = ApplicationVersion::from_xml(&decoded.to_xml())
        .unwrap()
        .unwrap();
    assert_eq!(redecoded.date, decoded.date);
}

#[test]
fn mutating_the_source_collection_does_not_affect_the_descriptor() {
    let mut notes = vec![VersionNote::new("a", "b").unwrap()];

    let version =
        ApplicationVersion::with_details("1.0", None, None, None, Some(notes.clone()), None, None)
            .unwrap();
    notes.push(VersionNote::new("c", "d").unwrap());

    assert_eq!(version.notes.as_ref().unwrap().len(), 1);
}
