//! End-to-end tests for descriptor construction.
//!
//! Each test hands a definition document to `IndexDescriptor::new` and
//! checks the cached fields, the way a catalog loader would after reading
//! persisted state.

use docstore_rs::{Document, IndexDescriptor, IndexVersion, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn base_definition() -> Document {
    Document::new()
        .with("key", Document::new().with("user_id", 1).with("created", -1))
        .with("name", "user_id_1_created_-1")
        .with("ns", "app.users")
        .with("v", 2)
}

// ============================================================================
// 1. Full definition → every cached field
// ============================================================================

#[test]
fn test_all_cached_fields() {
    let desc = IndexDescriptor::new(
        base_definition()
            .with("unique", true)
            .with("sparse", true)
            .with("partialFilterExpression", Document::new().with("active", true))
            .with("prefix", 42i64),
    );

    assert_eq!(desc.index_name(), "user_id_1_created_-1");
    assert_eq!(desc.parent_namespace(), "app.users");
    assert_eq!(desc.index_namespace(), "app.users.$user_id_1_created_-1");
    assert_eq!(desc.num_fields(), 2);
    assert_eq!(desc.version(), IndexVersion::V2);
    assert_eq!(desc.prefix(), 42);
    assert!(desc.is_unique());
    assert!(desc.is_sparse());
    assert!(desc.is_partial());
    assert!(!desc.is_id_index());

    let fields: Vec<&str> = desc.key_pattern().iter().map(|(n, _)| n).collect();
    assert_eq!(fields, vec!["user_id", "created"]);
}

// ============================================================================
// 2. `_id` index detection and the uniqueness invariant
// ============================================================================

#[test]
fn test_id_index_detection() {
    let desc = IndexDescriptor::new(
        Document::new()
            .with("key", Document::new().with("_id", 1))
            .with("name", "_id_")
            .with("ns", "app.users"),
    );
    assert!(desc.is_id_index());
    assert!(desc.is_unique());
}

#[test]
fn test_id_index_unique_even_when_flag_is_false() {
    let desc = IndexDescriptor::new(
        Document::new()
            .with("key", Document::new().with("_id", -1))
            .with("name", "_id_")
            .with("ns", "app.users")
            .with("unique", false),
    );
    assert!(desc.is_id_index());
    assert!(desc.is_unique());
}

#[test]
fn test_hashed_id_is_not_the_id_index() {
    let desc = IndexDescriptor::new(
        Document::new()
            .with("key", Document::new().with("_id", "hashed"))
            .with("name", "_id_hashed")
            .with("ns", "app.users"),
    );
    assert!(!desc.is_id_index());
    assert!(!desc.is_unique());
}

// ============================================================================
// 3. Defaults: missing fields degrade, construction never fails
// ============================================================================

#[test]
fn test_empty_definition_degrades() {
    let desc = IndexDescriptor::new(Document::new());
    assert!(desc.key_pattern().is_empty());
    assert_eq!(desc.num_fields(), 0);
    assert_eq!(desc.index_name(), "");
    assert_eq!(desc.parent_namespace(), "");
    assert_eq!(desc.index_namespace(), ".$");
    assert_eq!(desc.version(), IndexVersion::V0);
    assert_eq!(desc.prefix(), 0);
}

#[test]
fn test_missing_version_defaults_to_lowest() {
    let desc = IndexDescriptor::new(
        Document::new()
            .with("key", Document::new().with("a", 1))
            .with("name", "a_1")
            .with("ns", "app.users"),
    );
    assert_eq!(desc.version(), IndexVersion::LOWEST);
}

#[test]
fn test_non_numeric_version_defaults_to_lowest() {
    let desc = IndexDescriptor::new(base_definition().with("v", "two"));
    // first occurrence of `v` (the numeric 2) wins; a definition whose only
    // `v` is non-numeric falls back
    let desc2 = IndexDescriptor::new(
        Document::new()
            .with("key", Document::new().with("a", 1))
            .with("v", "two"),
    );
    assert_eq!(desc.version(), IndexVersion::V2);
    assert_eq!(desc2.version(), IndexVersion::V0);
}

#[test]
fn test_flag_truthiness_from_numbers() {
    let desc = IndexDescriptor::new(base_definition().with("unique", 1).with("sparse", 0));
    assert!(desc.is_unique());
    assert!(!desc.is_sparse());
}

#[test]
fn test_partial_is_presence_not_content() {
    let desc = IndexDescriptor::new(
        base_definition().with("partialFilterExpression", Document::new()),
    );
    assert!(desc.is_partial());
}

// ============================================================================
// 4. Raw-option escape hatch
// ============================================================================

#[test]
fn test_raw_option_reaches_unpromoted_fields() {
    let desc = IndexDescriptor::new(
        base_definition()
            .with("weights", Document::new().with("title", 10))
            .with("bucketSize", 1.5)
            .with("expireAfterSeconds", 3600),
    );
    assert_eq!(desc.raw_option("bucketSize"), Some(&Value::Float(1.5)));
    assert_eq!(desc.raw_option("expireAfterSeconds"), Some(&Value::Int(3600)));
    assert!(desc.raw_option("weights").is_some());
    assert_eq!(desc.raw_option("noSuchOption"), None);
}

// ============================================================================
// 5. Round-trip: the retained definition renders identically
// ============================================================================

#[test]
fn test_definition_round_trip() {
    let definition = base_definition()
        .with("unique", true)
        .with("storageEngine", Document::new().with("blockCompressor", "zlib"));
    let rendered_input = definition.to_string();

    let desc = IndexDescriptor::new(definition.clone());
    assert_eq!(desc.definition(), &definition);
    assert_eq!(desc.to_string(), rendered_input);
}

// ============================================================================
// 6. Test-only key-pattern override
// ============================================================================

#[test]
fn test_key_pattern_override_creates_inconsistency() {
    let mut desc = IndexDescriptor::new(base_definition());
    assert_eq!(desc.num_fields(), 2);

    desc.replace_key_pattern_for_test(Document::new().with("zzz", 1));
    assert_eq!(desc.key_pattern().len(), 1);
    // cached fields are deliberately left stale
    assert_eq!(desc.num_fields(), 2);
    assert_eq!(desc.definition().to_string(), base_definition().to_string());
}

// ============================================================================
// 7. Properties
// ============================================================================

proptest! {
    /// Whatever the definition, an `_id` descriptor is unique.
    #[test]
    fn prop_id_index_implies_unique(direction in prop_oneof![Just(1i64), Just(-1i64)],
                                    unique_flag in any::<bool>()) {
        let desc = IndexDescriptor::new(
            Document::new()
                .with("key", Document::new().with("_id", direction))
                .with("name", "_id_")
                .with("ns", "db.c")
                .with("unique", unique_flag),
        );
        prop_assert!(desc.is_id_index());
        prop_assert!(desc.is_unique());
    }

    /// The namespace invariant holds for arbitrary names.
    #[test]
    fn prop_index_namespace_concatenation(ns in "[a-z]{1,8}\\.[a-z]{1,8}",
                                          name in "[a-zA-Z0-9_]{1,12}") {
        let desc = IndexDescriptor::new(
            Document::new()
                .with("key", Document::new().with("a", 1))
                .with("name", name.as_str())
                .with("ns", ns.as_str()),
        );
        prop_assert_eq!(desc.index_namespace(), format!("{ns}.${name}"));
    }

    /// Rendering is deterministic.
    #[test]
    fn prop_rendering_is_deterministic(version in 0i64..3, prefix in any::<i64>()) {
        let desc = IndexDescriptor::new(
            base_definition().with("v", version).with("prefix", prefix),
        );
        prop_assert_eq!(desc.to_string(), desc.to_string());
    }
}
