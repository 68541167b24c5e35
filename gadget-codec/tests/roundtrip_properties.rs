//! Round-trip properties: decoding the encoding of a gadget into a fresh
//! default instance reproduces the gadget, and the encoding is stable.

mod common;

use common::catalog;
use gadget_catalog::{Color, ColorGadget, CompositeGadget, Contact, LogLevel, LogSettings, TreeNode};
use gadget_codec::Codec;
use gadget_model::Gadget;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value as Json, json};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 @._-]{0,24}").unwrap()
}

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn extra_strategy() -> impl Strategy<Value = Json> {
    prop_oneof![
        Just(Json::Null),
        any::<i64>().prop_map(Json::from),
        text_strategy().prop_map(Json::from),
        prop::collection::vec(any::<bool>(), 0..4).prop_map(|flags| json!({ "flags": flags })),
    ]
}

fn log_settings_strategy() -> impl Strategy<Value = LogSettings> {
    (
        level_strategy(),
        prop::collection::vec(level_strategy(), 0..5),
        any::<bool>(),
        extra_strategy(),
        prop::collection::vec(text_strategy(), 0..4),
    )
        .prop_map(|(level, levels, verbose, extra, categories)| {
            let mut settings = LogSettings::default();
            settings.set_enumeration(level);
            settings.set_levels(levels);
            settings.set_verbose(verbose);
            settings.set_extra(extra);
            settings.set_categories(categories);
            settings
        })
}

fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        text_strategy(),
        text_strategy(),
        prop::collection::vec(text_strategy(), 0..3),
        prop::collection::vec(any::<u8>(), 0..16),
    )
        .prop_map(|(first, last, emails, avatar)| {
            let mut contact = Contact::new(first, last);
            contact.set_emails(emails);
            contact.set_avatar(avatar);
            contact
        })
}

fn tree_strategy() -> impl Strategy<Value = TreeNode> {
    any::<i64>().prop_map(TreeNode::leaf).prop_recursive(4, 32, 4, |inner| {
        (any::<i64>(), prop::collection::vec(inner, 0..4))
            .prop_map(|(value, children)| TreeNode::with_children(value, children))
    })
}

fn composite_strategy() -> impl Strategy<Value = CompositeGadget> {
    (any::<[u8; 3]>(), any::<i64>()).prop_map(|([r, g, b], priority)| {
        let mut composite = CompositeGadget::default();
        composite.set_advanced(ColorGadget::new(Color::rgb(r, g, b)));
        composite.set_priority(priority);
        composite
    })
}

fn assert_round_trip<G: Gadget + Default + PartialEq>(original: &G) {
    let registry = catalog();
    let codec = Codec::new(&registry);

    let encoded = codec.encode_value(original).unwrap();
    let mut decoded = G::default();
    let report = codec.decode(&mut decoded, &encoded).unwrap();

    assert!(report.is_clean());
    assert!(decoded == *original, "{decoded:?} != {original:?}");
    assert_eq!(codec.encode_value(&decoded).unwrap(), encoded);
}

// =============================================================================
// ROUND-TRIP PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn log_settings_round_trip(settings in log_settings_strategy()) {
        assert_round_trip(&settings);
    }

    #[test]
    fn contact_round_trip(contact in contact_strategy()) {
        assert_round_trip(&contact);
    }

    #[test]
    fn tree_round_trip(tree in tree_strategy()) {
        assert_round_trip(&tree);
    }

    #[test]
    fn composite_round_trip(composite in composite_strategy()) {
        assert_round_trip(&composite);
    }

    /// Decoding never shares a payload with the gadget that was encoded.
    #[test]
    fn decoded_copy_is_independent(tree in tree_strategy()) {
        let registry = catalog();
        let codec = Codec::new(&registry);
        let mut decoded = TreeNode::default();
        codec.decode(&mut decoded, &codec.encode_value(&tree).unwrap()).unwrap();

        let before = tree.clone();
        decoded.push_child(TreeNode::leaf(0));
        prop_assert_eq!(tree, before);
    }
}

// =============================================================================
// FIXED CASES
// =============================================================================

#[test]
fn enumeration_fidelity() {
    let registry = catalog();
    let codec = Codec::new(&registry);
    let source = json!({"enumeration": "debug"});
    let mut settings = LogSettings::default();

    codec.decode(&mut settings, &source).unwrap();

    assert_eq!(codec.encode_value(&settings).unwrap(), source);
}

#[test]
fn children_list_round_trip() {
    let registry = catalog();
    let codec = Codec::new(&registry);
    let source = json!({"children": [{"value": 2}, {"value": 3}]});
    let mut tree = TreeNode::default();

    codec.decode(&mut tree, &source).unwrap();

    assert_eq!(codec.encode_value(&tree).unwrap(), source);
}
