//! Field schema for index definition documents.
//!
//! Every option name a definition may carry is enumerated here, once, with
//! its expected kind and its role in option equivalence. The descriptor
//! reads through these constants; validation collaborators consult the
//! same table instead of scattering string literals.

/// Key pattern sub-document.
pub const KEY_PATTERN: &str = "key";
/// Index name, unique within the owning collection.
pub const INDEX_NAME: &str = "name";
/// Fully-qualified namespace of the indexed collection.
pub const NAMESPACE: &str = "ns";
/// Index format version (integer).
pub const VERSION: &str = "v";
/// Uniqueness flag.
pub const UNIQUE: &str = "unique";
/// Sparsity flag.
pub const SPARSE: &str = "sparse";
/// Presence marks the index partial.
pub const PARTIAL_FILTER_EXPR: &str = "partialFilterExpression";
/// Build-mode hint; never affects index semantics.
pub const BACKGROUND: &str = "background";
/// Legacy duplicate-drop flag.
pub const DROP_DUPS: &str = "dropDups";
/// TTL option.
pub const EXPIRE_AFTER_SECONDS: &str = "expireAfterSeconds";
/// Collation specification.
pub const COLLATION: &str = "collation";
/// Storage-engine-specific options.
pub const STORAGE_ENGINE: &str = "storageEngine";
/// Text-index options.
pub const TEXT_VERSION: &str = "textIndexVersion";
pub const DEFAULT_LANGUAGE: &str = "default_language";
pub const LANGUAGE_OVERRIDE: &str = "language_override";
pub const WEIGHTS: &str = "weights";
/// Geospatial-sphere options.
pub const SPHERE_VERSION: &str = "2dsphereIndexVersion";
pub const COARSEST_INDEXED_LEVEL: &str = "coarsestIndexedLevel";
pub const FINEST_INDEXED_LEVEL: &str = "finestIndexedLevel";
/// Legacy 2-D geo options.
pub const GEO_BITS: &str = "bits";
pub const GEO_MIN: &str = "min";
pub const GEO_MAX: &str = "max";
/// Geo-haystack option.
pub const GEO_BUCKET_SIZE: &str = "bucketSize";
/// Placement-assignment identifier, opaque to this crate.
pub const PREFIX: &str = "prefix";

// ============================================================================
// Schema table
// ============================================================================

/// Expected kind of a recognized field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SubDocument,
    String,
    Number,
    Bool,
}

/// How a field participates in option equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Affects index semantics; compared structurally unless a dedicated
    /// rule covers it.
    Semantic,
    /// Compared by a dedicated rule (key pattern, flags, partial
    /// predicate), not in the residual sweep.
    Dedicated,
    /// Identity or bookkeeping only; never compared.
    Incidental,
}

/// One row of the recognized-field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub role: FieldRole,
}

const fn field(name: &'static str, kind: FieldKind, role: FieldRole) -> FieldSchema {
    FieldSchema { name, kind, role }
}

/// Every recognized definition field.
pub const FIELDS: &[FieldSchema] = &[
    field(KEY_PATTERN, FieldKind::SubDocument, FieldRole::Dedicated),
    field(INDEX_NAME, FieldKind::String, FieldRole::Incidental),
    field(NAMESPACE, FieldKind::String, FieldRole::Incidental),
    field(VERSION, FieldKind::Number, FieldRole::Incidental),
    field(UNIQUE, FieldKind::Bool, FieldRole::Dedicated),
    field(SPARSE, FieldKind::Bool, FieldRole::Dedicated),
    field(PARTIAL_FILTER_EXPR, FieldKind::SubDocument, FieldRole::Dedicated),
    field(BACKGROUND, FieldKind::Bool, FieldRole::Incidental),
    field(DROP_DUPS, FieldKind::Bool, FieldRole::Semantic),
    field(EXPIRE_AFTER_SECONDS, FieldKind::Number, FieldRole::Semantic),
    field(COLLATION, FieldKind::SubDocument, FieldRole::Semantic),
    field(STORAGE_ENGINE, FieldKind::SubDocument, FieldRole::Semantic),
    field(TEXT_VERSION, FieldKind::Number, FieldRole::Semantic),
    field(DEFAULT_LANGUAGE, FieldKind::String, FieldRole::Semantic),
    field(LANGUAGE_OVERRIDE, FieldKind::String, FieldRole::Semantic),
    field(WEIGHTS, FieldKind::SubDocument, FieldRole::Semantic),
    field(SPHERE_VERSION, FieldKind::Number, FieldRole::Semantic),
    field(COARSEST_INDEXED_LEVEL, FieldKind::Number, FieldRole::Semantic),
    field(FINEST_INDEXED_LEVEL, FieldKind::Number, FieldRole::Semantic),
    field(GEO_BITS, FieldKind::Number, FieldRole::Semantic),
    field(GEO_MIN, FieldKind::Number, FieldRole::Semantic),
    field(GEO_MAX, FieldKind::Number, FieldRole::Semantic),
    field(GEO_BUCKET_SIZE, FieldKind::Number, FieldRole::Semantic),
    field(PREFIX, FieldKind::Number, FieldRole::Semantic),
];

/// Look up a recognized field by name.
pub fn lookup(name: &str) -> Option<&'static FieldSchema> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Role of any field name. Unrecognized names are semantic: an
/// engine-specific option nobody enumerated still distinguishes indexes.
pub fn role(name: &str) -> FieldRole {
    lookup(name).map(|f| f.role).unwrap_or(FieldRole::Semantic)
}
