//! Index format versions and the creation-gating policy.
//!
//! Pure decision functions: no storage, no I/O, no ambient configuration.
//! The compatibility mode is always an explicit parameter so every mode
//! combination is unit-testable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields;
use crate::model::Document;
use crate::{Error, Result};

// ============================================================================
// IndexVersion
// ============================================================================

/// On-disk index format version. Closed set, ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndexVersion {
    /// Legacy format. Still the construction default for definitions
    /// persisted without a `v` field, but no longer creatable.
    V0,
    /// Compatibility format, creatable under every mode.
    V1,
    /// Current format: collation-aware keys.
    V2,
}

impl IndexVersion {
    /// The lowest enumerated version, which is what a definition without a
    /// numeric `v` field is taken to mean.
    pub const LOWEST: IndexVersion = IndexVersion::V0;

    /// Map a numeric `v` field to a version. Unrecognized numbers are
    /// not representable in the closed set.
    pub fn from_number(n: i64) -> Option<IndexVersion> {
        match n {
            0 => Some(IndexVersion::V0),
            1 => Some(IndexVersion::V1),
            2 => Some(IndexVersion::V2),
            _ => None,
        }
    }

    /// The numeric form persisted in definition documents.
    pub fn as_number(self) -> i64 {
        match self {
            IndexVersion::V0 => 0,
            IndexVersion::V1 => 1,
            IndexVersion::V2 => 2,
        }
    }

    /// Whether this process can open and maintain indexes of this version.
    /// Fixed process-wide constant, not user-configurable.
    pub fn is_supported(self) -> bool {
        matches!(self, IndexVersion::V1 | IndexVersion::V2)
    }

    /// The full supported set, for diagnostics and validation messages.
    pub fn supported() -> &'static [IndexVersion] {
        &[IndexVersion::V1, IndexVersion::V2]
    }

    /// The version a new index receives when its creator specifies none:
    /// the newest version safe under the given compatibility mode.
    pub fn default_for(mode: CompatibilityMode) -> IndexVersion {
        match mode {
            CompatibilityMode::Stable => IndexVersion::V1,
            CompatibilityMode::Latest => IndexVersion::V2,
        }
    }
}

impl fmt::Display for IndexVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_number())
    }
}

// ============================================================================
// CompatibilityMode
// ============================================================================

/// Deployment-wide compatibility setting. `Stable` keeps every index
/// creatable by the previous release so a downgrade never strands data;
/// `Latest` unlocks the current format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityMode {
    Stable,
    Latest,
}

// ============================================================================
// Creation gating
// ============================================================================

/// Check whether an index of `version` may be created under `mode`.
///
/// The full definition is passed through so version/option combinations
/// that are only invalid together can be vetoed here; a collation on a
/// pre-`v2` index has no key encoding to live in.
pub fn allowed_for_creation(
    version: IndexVersion,
    mode: CompatibilityMode,
    definition: &Document,
) -> Result<()> {
    if !version.is_supported() {
        tracing::debug!(%version, "rejected index creation: unsupported version");
        return Err(Error::CannotCreateIndex(format!(
            "index version {version} is not supported; supported versions: {}",
            format_versions(IndexVersion::supported()),
        )));
    }

    if version > IndexVersion::default_for(mode) {
        tracing::debug!(%version, ?mode, "rejected index creation: version gated by compatibility mode");
        return Err(Error::CannotCreateIndex(format!(
            "index version {version} is not allowed under the {mode:?} \
             compatibility mode; omit the version field or raise the mode",
        )));
    }

    if version < IndexVersion::V2 && definition.contains(fields::COLLATION) {
        tracing::debug!(%version, "rejected index creation: collation requires v2");
        return Err(Error::CannotCreateIndex(format!(
            "index version {version} cannot store a collation; collation-aware \
             indexes require {}",
            IndexVersion::V2,
        )));
    }

    Ok(())
}

fn format_versions(versions: &[IndexVersion]) -> String {
    let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
    rendered.join(", ")
}
