//! Index metadata: descriptors, field schema, version policy, comparison.

pub mod compare;
pub mod descriptor;
pub mod fields;
pub mod version;

pub use compare::{
    id_patterns_equal, is_id_index_pattern, make_index_namespace, options_equivalent,
};
pub use descriptor::IndexDescriptor;
pub use version::{allowed_for_creation, CompatibilityMode, IndexVersion};
