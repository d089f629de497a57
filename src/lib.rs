//! # docstore-rs: Index Catalog Metadata Core
//!
//! The metadata layer a document-store catalog reads instead of re-parsing
//! raw index definitions: each persisted definition is parsed once into an
//! immutable [`IndexDescriptor`], and everything downstream (query
//! planning, index maintenance, catalog comparison) reads typed fields.
//!
//! ## Design Principles
//!
//! 1. **Parse once, read forever**: the descriptor derives every cached
//!    field eagerly and is immutable after construction
//! 2. **Degrade, don't fail**: malformed definitions produce degenerate
//!    descriptors for downstream validation to reject; construction
//!    itself never errors
//! 3. **Policy is a pure function**: version gating takes the
//!    compatibility mode as an explicit parameter, never ambient state
//! 4. **Clean DTOs**: `Document` and `Value` cross all boundaries; no
//!    wire format leaks in
//!
//! ## Quick Start
//!
//! ```rust
//! use docstore_rs::{CompatibilityMode, Document, IndexDescriptor, IndexVersion};
//!
//! // A definition document, as loaded from persisted catalog state.
//! let definition = Document::new()
//!     .with("key", Document::new().with("user_id", 1))
//!     .with("name", "user_id_1")
//!     .with("ns", "app.users")
//!     .with("unique", true)
//!     .with("v", 2);
//!
//! // Gate creation against the deployment's compatibility mode...
//! docstore_rs::allowed_for_creation(
//!     IndexVersion::V2,
//!     CompatibilityMode::Latest,
//!     &definition,
//! )?;
//!
//! // ...then cache it.
//! let descriptor = IndexDescriptor::new(definition);
//! assert!(descriptor.is_unique());
//! assert_eq!(descriptor.index_namespace(), "app.users.$user_id_1");
//! # Ok::<(), docstore_rs::Error>(())
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod index;
pub mod model;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Document, Value};

// ============================================================================
// Re-exports: Index metadata
// ============================================================================

pub use index::{
    allowed_for_creation, id_patterns_equal, is_id_index_pattern, make_index_namespace,
    options_equivalent, CompatibilityMode, IndexDescriptor, IndexVersion,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested index version is not permitted: unsupported
    /// outright, gated by the compatibility mode, or incompatible with
    /// an option in the definition.
    #[error("cannot create index: {0}")]
    CannotCreateIndex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
