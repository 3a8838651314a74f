// src/recipe/mod.rs

//! Recipe resolution pipeline
//!
//! A recipe describes how the gncpy native library is configured, built,
//! and republished. Resolution runs a fixed sequence of stages, each a
//! pure function of the previous stage's output:
//!
//! 1. Version resolution from the versioned header
//! 2. Platform and linkage normalization of the option set
//! 3. Minimum-standard validation against the configured toolchain
//! 4. Upstream requirement assembly
//! 5. Toolchain configuration-variable generation
//!
//! Stages never mutate shared state; normalization returns a fresh option
//! snapshot and everything downstream reads only that snapshot. A failed
//! stage aborts the invocation with no partial output. Package-metadata
//! publication is a separate post-build stage, run only after the external
//! build/install step succeeds.

mod format;
pub mod parser;

pub use format::{BuildSection, PackageSection, PolicySection, RecipeFile, DEFAULT_MIN_CPPSTD};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe};

use crate::dependencies::{self, Requirement};
use crate::error::{Error, Result};
use crate::options::OptionSet;
use crate::package_info::{self, PackageInfo};
use crate::settings::Settings;
use crate::toolchain::{self, ToolchainConfig};
use crate::version;
use semver::Version;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// A loaded recipe, ready to resolve
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Package name, also the canonical library name
    pub name: String,

    /// Absolute or recipe-relative path to the versioned header
    pub header: PathBuf,

    /// Minimum C++ standard the native build requires
    pub min_cppstd: u32,

    /// Option defaults declared by the recipe file
    pub default_options: OptionSet,

    /// Command line for the opaque external build/install step
    pub build_command: Option<String>,
}

/// The complete output of one resolution run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Version extracted from the header
    pub version: Version,

    /// Normalized option snapshot, frozen for the rest of the invocation
    pub options: OptionSet,

    /// Ordered upstream requirement declarations
    pub requirements: Vec<Requirement>,

    /// Cache variables for the external build tool
    pub toolchain: ToolchainConfig,
}

impl Recipe {
    /// Create a recipe with default policy and options
    pub fn new(name: impl Into<String>, header: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            min_cppstd: DEFAULT_MIN_CPPSTD,
            default_options: OptionSet::default(),
            build_command: None,
        }
    }

    /// Load a recipe from a TOML file. The header path in the file is
    /// taken relative to the recipe file's directory. Validation warnings
    /// are logged, validation errors abort.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = parse_recipe_file(path)?;
        for warning in validate_recipe(&file)? {
            warn!("{}: {}", path.display(), warning);
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self {
            name: file.package.name,
            header: base.join(&file.package.header),
            min_cppstd: file.policy.min_cppstd,
            default_options: file.options,
            build_command: file.build.command,
        })
    }

    /// Validate the configured compiler standard against the recipe's
    /// minimum. An unconfigured standard is permitted and passes.
    pub fn validate_standard(&self, settings: &Settings) -> Result<()> {
        match settings.cppstd {
            Some(configured) if configured < self.min_cppstd => Err(Error::StandardMismatch {
                required: self.min_cppstd,
                configured,
            }),
            _ => Ok(()),
        }
    }

    /// Run the full resolution pipeline.
    ///
    /// Either every stage succeeds and the complete `Resolution` is
    /// returned, or the first failing stage aborts the invocation; there
    /// is no partial output. Resolving the same inputs twice yields
    /// identical output.
    pub fn resolve(&self, settings: &Settings, requested: &OptionSet) -> Result<Resolution> {
        let version = version::resolve_version(&self.header)?;
        debug!("Resolved {} version {}", self.name, version);

        let options = requested.normalized(settings);
        debug!("Normalized options: {}", options);

        self.validate_standard(settings)?;

        let requirements = dependencies::assemble(&options);
        let toolchain = toolchain::generate(&options);

        Ok(Resolution {
            version,
            options,
            requirements,
            toolchain,
        })
    }

    /// Run the opaque external build/install step, then publish the
    /// package metadata. The command is a black box: a non-zero exit is
    /// reported as `BuildFailed` and never interpreted or retried, and no
    /// metadata is produced for a failed build.
    pub fn build(&self, settings: &Settings, command: &str) -> Result<PackageInfo> {
        info!("Running build command: {}", command);
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|e| Error::BuildFailed(format!("Failed to spawn '{}': {}", command, e)))?;

        if !status.success() {
            return Err(Error::BuildFailed(format!(
                "'{}' exited with {}",
                command, status
            )));
        }

        Ok(self.package_info(settings))
    }

    /// Publish the package metadata for a finished build. Post-build only;
    /// callers must not invoke this when the external build step failed.
    pub fn package_info(&self, settings: &Settings) -> PackageInfo {
        package_info::publish(&self.name, settings)
    }
}
