// src/recipe/format.rs

//! Recipe file schema
//!
//! A recipe file is a small TOML document carrying the package identity,
//! the resolution policy, and the default option values:
//!
//! ```toml
//! [package]
//! name = "gncpy"
//! header = "include/gncpy/core.h"
//!
//! [policy]
//! min_cppstd = 14
//!
//! [options]
//! with_tests = false
//! with_docs = true
//! shared = false
//! fPIC = true
//!
//! [build]
//! command = "cmake --build --preset release"
//! ```

use crate::options::OptionSet;
use serde::{Deserialize, Serialize};

/// Default minimum language standard required by the recipe
pub const DEFAULT_MIN_CPPSTD: u32 = 14;

/// Top-level recipe file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFile {
    /// Package identity
    pub package: PackageSection,

    /// Resolution policy
    #[serde(default)]
    pub policy: PolicySection,

    /// Default option values, overridable on the command line
    #[serde(default)]
    pub options: OptionSet,

    /// External build invocation
    #[serde(default)]
    pub build: BuildSection,
}

/// The `[package]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name, also the canonical library name
    pub name: String,

    /// Path to the versioned header, relative to the recipe file
    pub header: String,

    /// Short human-readable description
    pub description: Option<String>,
}

/// The `[policy]` section
///
/// The minimum-standard requirement is configurable rather than baked in:
/// the recipe has shipped revisions requiring C++14 and C++20, and the
/// policy section selects which one applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySection {
    /// Minimum C++ standard the native build requires
    #[serde(default = "default_min_cppstd")]
    pub min_cppstd: u32,
}

fn default_min_cppstd() -> u32 {
    DEFAULT_MIN_CPPSTD
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            min_cppstd: DEFAULT_MIN_CPPSTD,
        }
    }
}

/// The `[build]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSection {
    /// Command line handed to the shell for the opaque build/install step
    pub command: Option<String>,
}
