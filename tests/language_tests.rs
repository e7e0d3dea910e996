// Language tag parsing and the supported-language fallback.

use speechbridge::{supported_languages, Error, LanguageTag, FALLBACK_LANGUAGES};

#[test]
fn parses_language_only_tags() {
    let tag: LanguageTag = "en".parse().unwrap();
    assert_eq!(tag.language(), "en");
    assert_eq!(tag.region(), None);
    assert_eq!(tag.to_string(), "en");
}

#[test]
fn parses_language_region_tags() {
    let tag: LanguageTag = "fr-FR".parse().unwrap();
    assert_eq!(tag.language(), "fr");
    assert_eq!(tag.region(), Some("FR"));
    assert_eq!(tag.to_string(), "fr-FR");
}

#[test]
fn rejects_malformed_tags() {
    for tag in ["", "-", "en-", "-US", "a-b-c", "en-US-x"] {
        match tag.parse::<LanguageTag>() {
            Err(Error::Language(_)) => {}
            other => panic!("expected LanguageError for {tag:?}, got {other:?}"),
        }
    }
}

#[test]
fn default_tag_is_en_us() {
    assert_eq!(LanguageTag::default().to_string(), "en-US");
}

#[test]
fn serde_round_trips_as_plain_strings() {
    let tag: LanguageTag = "pt-BR".parse().unwrap();
    let json = serde_json::to_string(&tag).unwrap();
    assert_eq!(json, "\"pt-BR\"");

    let back: LanguageTag = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tag);

    assert!(serde_json::from_str::<LanguageTag>("\"not-a-real-tag\"").is_err());
}

#[test]
fn fallback_language_list_is_usable() {
    let languages = supported_languages();

    assert!(languages.len() >= 10);
    assert_eq!(languages.len(), FALLBACK_LANGUAGES.len());
    assert!(languages.iter().any(|l| l == "en-US"));

    // Every fallback tag parses under the module's own rules
    for language in &languages {
        language.parse::<LanguageTag>().unwrap();
    }
}
