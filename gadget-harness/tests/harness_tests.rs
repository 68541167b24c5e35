use gadget_catalog::{Contact, LogLevel, LogSettings, registry};
use gadget_codec::Codec;
use gadget_harness::{TypeSummary, decode_document, demo, describe_types, load_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

// ── Types listing ────────────────────────────────────────────────

#[test]
fn lists_enumerations_before_gadgets() {
    let registry = registry().unwrap();
    let types = describe_types(&registry);

    assert_eq!(types.len(), 9);
    assert_eq!(types[0].to_string(), "LogLevel = debug | info | warning | critical");
    assert!(matches!(&types[1], TypeSummary::Gadget { name, .. } if name == "ColorGadget"));
}

#[test]
fn gadget_lines_show_kinds_and_required_fields() {
    let registry = registry().unwrap();
    let lines: Vec<String> = describe_types(&registry).iter().map(ToString::to_string).collect();

    assert!(lines.contains(
        &"Contact { firstName: text, lastName: text (required), emails: list<text>, avatar: bytes }"
            .to_owned()
    ));
    assert!(lines.contains(
        &"TreeNode { value: int, children: list<TreeNode> }".to_owned()
    ));
}

#[test]
fn summaries_serialize_with_category_tag() {
    let summary = TypeSummary::Enum {
        name: "LogLevel".to_owned(),
        enumerators: vec!["debug".to_owned()],
    };

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"category": "enum", "name": "LogLevel", "enumerators": ["debug"]})
    );
}

// ── Decoding ─────────────────────────────────────────────────────

#[test]
fn decodes_into_named_type() {
    let registry = registry().unwrap();
    let codec = Codec::new(&registry);

    let decoded =
        decode_document(&codec, "LogSettings", r#"{"enumeration": "critical", "verbose": 3}"#)
            .unwrap();

    let settings = decoded.gadget.as_any().downcast_ref::<LogSettings>().unwrap();
    assert_eq!(settings.enumeration(), LogLevel::Critical);
    assert_eq!(decoded.report.diagnostics().len(), 1);
}

#[test]
fn unknown_type_is_rejected() {
    let registry = registry().unwrap();
    let codec = Codec::new(&registry);

    let err = decode_document(&codec, "Spaceship", "{}").unwrap_err();

    assert_eq!(err.to_string(), "unknown gadget type 'Spaceship'");
}

#[test]
fn decode_failure_keeps_the_cause() {
    let registry = registry().unwrap();
    let codec = Codec::new(&registry);

    let err = decode_document(&codec, "Contact", "{}").unwrap_err();

    assert_eq!(err.to_string(), "Failed to decode Contact");
    assert!(format!("{err:#}").contains("lastName"));
}

#[test]
fn decoded_contact_round_trips() {
    let registry = registry().unwrap();
    let codec = Codec::new(&registry);
    let text = r#"{"firstName":"Ada","lastName":"Lovelace"}"#;

    let decoded = decode_document(&codec, "Contact", text).unwrap();

    assert_eq!(codec.encode_to_string(decoded.gadget.as_ref()).unwrap(), text);
    let contact = decoded.gadget.as_any().downcast_ref::<Contact>().unwrap();
    assert_eq!(contact.first_name(), "Ada");
}

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_defaults_without_path() {
    assert_eq!(load_config(None).unwrap().max_depth, 64);
}

#[test]
fn config_is_read_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gadget.toml");
    fs::write(&path, "strict_scalars = true\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();

    assert!(config.strict_scalars);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.toml");

    let err = load_config(Some(path.as_path())).unwrap_err();

    assert!(err.to_string().starts_with("Failed to load config from"));
    assert!(err.to_string().ends_with("typo.toml"));
}

#[test]
fn bad_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gadget.toml");
    fs::write(&path, "max_depth = [").unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();

    assert!(err.to_string().starts_with("Failed to load config from"));
}

// ── Demo ─────────────────────────────────────────────────────────

#[test]
fn demo_shows_copies_are_independent() {
    assert_eq!(
        demo(),
        vec![
            "copy shares payload: true",
            "first color: #0000ff",
            "second color: #ff0000",
            "original priority: 100",
            "original color: #0000ff",
            "modified color: #ff0000",
            "composites equal: false",
        ]
    );
}
