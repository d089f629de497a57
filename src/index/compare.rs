//! Structural comparison rules: `_id`-index identity, option equivalence,
//! and namespace derivation.
//!
//! Everything here is a pure function over the model. No descriptor is
//! mutated and ownership never transfers.

use super::descriptor::IndexDescriptor;
use super::fields::{self, FieldRole};
use crate::model::{Document, Value};

/// Name of the primary-key field every collection indexes implicitly.
pub const ID_FIELD: &str = "_id";

// ============================================================================
// Identity rules
// ============================================================================

/// True iff `pattern` is exactly `{_id: 1}` or `{_id: -1}`.
///
/// A pattern like `{_id: "hashed"}` may exist as an ordinary secondary
/// index but is not the primary `_id` index; neither is `{_id: 1, a: 1}`.
pub fn is_id_index_pattern(pattern: &Document) -> bool {
    let Some((name, value)) = pattern.first() else {
        return false;
    };
    if name != ID_FIELD || !matches!(value.as_int(), Some(1) | Some(-1)) {
        return false;
    }
    pattern.len() == 1
}

/// True iff both patterns are single-entry `_id` patterns with numerically
/// equal directions. Comparison is by numeric value, not type tag:
/// `{_id: 1}` equals `{_id: 1.0}`.
pub fn id_patterns_equal(p1: &Document, p2: &Document) -> bool {
    let (Some((n1, v1)), Some((n2, v2))) = (p1.first(), p2.first()) else {
        return false;
    };
    if n1 != ID_FIELD || n2 != ID_FIELD {
        return false;
    }
    match (v1.as_float(), v2.as_float()) {
        (Some(a), Some(b)) if a == b => p1.len() == 1 && p2.len() == 1,
        _ => false,
    }
}

// ============================================================================
// Namespace derivation
// ============================================================================

/// Storage-area identifier for an index: `ns + ".$" + name`.
/// Pure concatenation; character validation belongs to the catalog.
pub fn make_index_namespace(ns: &str, name: &str) -> String {
    format!("{ns}.${name}")
}

// ============================================================================
// Option equivalence
// ============================================================================

/// Whether two descriptors specify the same logical index.
///
/// Key pattern, sparsity, uniqueness, and the partial predicate must
/// match, then every remaining semantic option. `name` and `background`
/// never matter; the catalog uses this to tell "already exists under a
/// different name" apart from a genuine conflict.
pub fn options_equivalent(a: &IndexDescriptor, b: &IndexDescriptor) -> bool {
    if !a.key_pattern().same_document(b.key_pattern()) {
        return false;
    }
    if a.is_sparse() != b.is_sparse() {
        return false;
    }
    // _id uniqueness is intrinsic; an explicit `unique` flag on one side
    // changes nothing.
    if !a.is_id_index() && a.is_unique() != b.is_unique() {
        return false;
    }
    if a.is_partial() != b.is_partial() {
        return false;
    }
    if a.is_partial() {
        let pa = a.definition().get(fields::PARTIAL_FILTER_EXPR);
        let pb = b.definition().get(fields::PARTIAL_FILTER_EXPR);
        match (pa, pb) {
            (Some(x), Some(y)) if x.same_value(y) => {}
            _ => return false,
        }
    }

    let ra = residual_options(a.definition());
    let rb = residual_options(b.definition());
    ra.len() == rb.len()
        && ra.iter().all(|(name, value)| {
            rb.iter()
                .any(|(n, v)| n == name && v.same_value(value))
        })
}

/// Semantic fields not covered by a dedicated rule, first occurrence of
/// each name only. Compared order-insensitively.
fn residual_options(definition: &Document) -> Vec<(&str, &Value)> {
    let mut out: Vec<(&str, &Value)> = Vec::new();
    for (name, value) in definition.iter() {
        if fields::role(name) != FieldRole::Semantic {
            continue;
        }
        if out.iter().any(|(n, _)| *n == name) {
            continue;
        }
        out.push((name, value));
    }
    out
}
