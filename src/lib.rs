// src/lib.rs

//! gncpy recipe configuration resolver
//!
//! Derives a build's effective version and option set from source
//! artifacts and user-supplied settings, assembles dependency and
//! toolchain configuration for the downstream native build tool, and
//! republishes consumable package metadata.
//!
//! # Architecture
//!
//! - Version resolution: the three-part version is extracted from the
//!   versioned `core.h` header, never declared twice
//! - Option snapshots: normalization produces immutable snapshots; an
//!   option removed by a platform or linkage rule is absent, not false
//! - Pure assembly: requirements and toolchain variables are pure
//!   functions of the resolved snapshot, deterministic and idempotent
//! - Fatal errors: a malformed artifact or mismatched toolchain aborts
//!   before any configuration is produced

pub mod dependencies;
pub mod error;
pub mod options;
pub mod package_info;
pub mod recipe;
pub mod settings;
pub mod toolchain;
pub mod version;

pub use dependencies::{assemble, Requirement};
pub use error::{Error, Result};
pub use options::OptionSet;
pub use package_info::PackageInfo;
pub use recipe::{parse_recipe, parse_recipe_file, validate_recipe, Recipe, RecipeFile, Resolution};
pub use settings::{BuildType, Settings, TargetOs};
pub use toolchain::{CacheValue, ToolchainConfig};
pub use version::{extract_version, resolve_version};
