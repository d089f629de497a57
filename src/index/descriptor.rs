//! The index metadata descriptor: parse once, read forever.

use std::fmt;

use super::compare;
use super::fields;
use super::version::IndexVersion;
use crate::model::{Document, Value};

/// Immutable cache of one secondary index's properties, derived eagerly
/// from its persisted definition document.
///
/// Construction never fails: missing or malformed fields degrade to
/// empty/default values, and downstream validation (not this cache) is
/// responsible for rejecting degenerate definitions before they persist.
/// Once built, a descriptor is read-only and safe to share across threads
/// without synchronization; when a definition changes, the catalog swaps
/// in a freshly built descriptor instead of mutating this one.
#[derive(Debug, Clone)]
pub struct IndexDescriptor {
    /// Owned copy of the full definition document.
    definition: Document,

    // --- cached data from `definition`
    key_pattern: Document,
    num_fields: usize,
    index_name: String,
    parent_ns: String,
    index_ns: String,
    is_id_index: bool,
    sparse: bool,
    unique: bool,
    partial: bool,
    version: IndexVersion,

    /// Placement identifier assigned by the distributed coordinator.
    prefix: i64,
}

impl IndexDescriptor {
    /// Derive every cached field from `definition`.
    pub fn new(definition: Document) -> Self {
        let key_pattern = definition.get_document_or_empty(fields::KEY_PATTERN);
        let index_name = definition.get_str_or_empty(fields::INDEX_NAME).to_owned();
        let parent_ns = definition.get_str_or_empty(fields::NAMESPACE).to_owned();
        let index_ns = compare::make_index_namespace(&parent_ns, &index_name);
        let is_id_index = compare::is_id_index_pattern(&key_pattern);
        let sparse = definition
            .get(fields::SPARSE)
            .is_some_and(Value::is_truthy);
        let unique = is_id_index
            || definition.get(fields::UNIQUE).is_some_and(Value::is_truthy);
        let partial = definition.contains(fields::PARTIAL_FILTER_EXPR);
        let version = definition
            .get(fields::VERSION)
            .and_then(Value::to_int_lossy)
            .and_then(IndexVersion::from_number)
            .unwrap_or(IndexVersion::LOWEST);
        let prefix = definition
            .get(fields::PREFIX)
            .and_then(Value::to_int_lossy)
            .unwrap_or(0);

        if key_pattern.is_empty() || index_name.is_empty() {
            tracing::warn!(
                definition = %definition,
                "degenerate index definition; downstream validation must reject it"
            );
        }
        tracing::debug!(name = %index_name, ns = %parent_ns, %version, "cached index descriptor");

        Self {
            num_fields: key_pattern.len(),
            definition,
            key_pattern,
            index_name,
            parent_ns,
            index_ns,
            is_id_index,
            sparse,
            unique,
            partial,
            version,
            prefix,
        }
    }

    // ========================================================================
    // Key pattern
    // ========================================================================

    /// The user-provided key pattern, e.g. `{geo: "2dsphere", nonGeo: 1}`
    /// or `{foo: 1, bar: -1}`.
    pub fn key_pattern(&self) -> &Document {
        &self.key_pattern
    }

    /// How many fields the key pattern indexes.
    pub fn num_fields(&self) -> usize {
        self.num_fields
    }

    /// Test-only: swap in a key pattern that no longer matches the cached
    /// fields, to exercise downstream handling of an internally
    /// inconsistent descriptor. Deliberately recomputes nothing.
    /// Production code never calls this.
    pub fn replace_key_pattern_for_test(&mut self, pattern: Document) {
        self.key_pattern = pattern;
    }

    // ========================================================================
    // Namespace / collection
    // ========================================================================

    /// The index's name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Fully-qualified name of the indexed collection.
    pub fn parent_namespace(&self) -> &str {
        &self.parent_ns
    }

    /// Name of this index's storage area (`collection.$index`).
    pub fn index_namespace(&self) -> &str {
        &self.index_ns
    }

    // ========================================================================
    // Properties every index has
    // ========================================================================

    /// Which on-disk format version this index uses.
    pub fn version(&self) -> IndexVersion {
        self.version
    }

    /// May each key occur at most once?
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Does the index skip documents missing the indexed fields?
    pub fn is_sparse(&self) -> bool {
        self.sparse
    }

    /// Does a partial-filter predicate restrict coverage?
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Is this the collection's primary `_id` index?
    pub fn is_id_index(&self) -> bool {
        self.is_id_index
    }

    /// Placement identifier assigned by the distributed coordinator;
    /// opaque to this crate beyond storage and retrieval.
    pub fn prefix(&self) -> i64 {
        self.prefix
    }

    // ========================================================================
    // Escape hatches
    // ========================================================================

    /// Raw access to any definition field not promoted to a typed
    /// accessor: geo bucket sizes, text weights, engine knobs.
    pub fn raw_option(&self, name: &str) -> Option<&Value> {
        self.definition.get(name)
    }

    /// The retained definition document.
    pub fn definition(&self) -> &Document {
        &self.definition
    }

    /// Whether `other` specifies the same logical index as `self`,
    /// ignoring `name` and `background`. See [`compare::options_equivalent`].
    pub fn options_equivalent(&self, other: &IndexDescriptor) -> bool {
        compare::options_equivalent(self, other)
    }
}

/// Renders the retained definition. Total, so diagnostics can always print.
impl fmt::Display for IndexDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_definition() -> Document {
        Document::new()
            .with(fields::KEY_PATTERN, Document::new().with("_id", 1))
            .with(fields::INDEX_NAME, "_id_")
            .with(fields::NAMESPACE, "db.coll")
            .with(fields::VERSION, 2)
    }

    #[test]
    fn test_cached_fields() {
        let desc = IndexDescriptor::new(id_definition());
        assert_eq!(desc.index_name(), "_id_");
        assert_eq!(desc.parent_namespace(), "db.coll");
        assert_eq!(desc.index_namespace(), "db.coll.$_id_");
        assert_eq!(desc.num_fields(), 1);
        assert_eq!(desc.version(), IndexVersion::V2);
        assert!(desc.is_id_index());
    }

    #[test]
    fn test_id_index_is_always_unique() {
        let desc = IndexDescriptor::new(id_definition().with(fields::UNIQUE, false));
        assert!(desc.is_unique());
    }

    #[test]
    fn test_missing_fields_degrade_to_defaults() {
        let desc = IndexDescriptor::new(Document::new());
        assert!(desc.key_pattern().is_empty());
        assert_eq!(desc.num_fields(), 0);
        assert_eq!(desc.index_name(), "");
        assert_eq!(desc.index_namespace(), ".$");
        assert_eq!(desc.version(), IndexVersion::LOWEST);
        assert_eq!(desc.prefix(), 0);
        assert!(!desc.is_unique());
        assert!(!desc.is_sparse());
        assert!(!desc.is_partial());
    }

    #[test]
    fn test_mutator_leaves_cached_count_stale() {
        let mut desc = IndexDescriptor::new(id_definition());
        desc.replace_key_pattern_for_test(
            Document::new().with("a", 1).with("b", 1),
        );
        assert_eq!(desc.key_pattern().len(), 2);
        // cached count intentionally untouched
        assert_eq!(desc.num_fields(), 1);
    }
}
