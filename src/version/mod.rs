// src/version/mod.rs

//! Version resolution from the versioned source header
//!
//! The gncpy sources carry their version as a single concatenated digit run
//! in `core.h`:
//!
//! ```c
//! #define GNCPY_VERSION 10003
//! ```
//!
//! The run encodes major + minor + patch where minor and patch are exactly
//! two digits each and major takes whatever remains in front. `10003`
//! therefore resolves to `1.0.3`, and zero-padding in minor/patch is
//! stripped (`000102` is `0.1.2`). This module is the only place that
//! contract lives; downstream version arithmetic assumes it.

use crate::error::{Error, Result};
use regex::Regex;
use semver::Version;
use std::path::Path;
use std::sync::LazyLock;

/// Pattern locating the version declaration. The greedy major group splits
/// the digit run as (remainder, two, two).
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GNCPY_VERSION\s+(\d+)(\d\d)(\d\d)").unwrap());

/// Extract the package version from the header text.
///
/// The first occurrence in the text wins; the artifact is assumed
/// well-formed and no check for duplicate declarations is made. A missing
/// or malformed declaration is a fatal recipe error with no fallback.
pub fn extract_version(content: &str, artifact: &str) -> Result<Version> {
    let caps = VERSION_RE.captures(content).ok_or_else(|| {
        Error::ArtifactFormat(format!(
            "Failed to extract GNCPY_VERSION from {}",
            artifact
        ))
    })?;

    // The groups are all-digit by construction, but a major wider than u64
    // is still a malformed artifact, not a panic.
    let parse = |idx: usize| -> Result<u64> {
        caps[idx].parse::<u64>().map_err(|e| {
            Error::ArtifactFormat(format!(
                "Version component '{}' in {} is out of range: {}",
                &caps[idx], artifact, e
            ))
        })
    };

    Ok(Version::new(parse(1)?, parse(2)?, parse(3)?))
}

/// Resolve the package version by reading the header at `path`.
pub fn resolve_version(path: &Path) -> Result<Version> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::IoError(format!(
            "Failed to read version header {}: {}",
            path.display(),
            e
        ))
    })?;

    extract_version(&content, &path.display().to_string())
}
