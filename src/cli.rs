// src/cli.rs
//! CLI definitions for the gncpy recipe resolver
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use gncpy_recipe::settings::{BuildType, TargetOs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gncpy-recipe")]
#[command(author = "gncpy Project")]
#[command(version)]
#[command(about = "Package-recipe configuration resolver for the gncpy native library", long_about = None)]
pub struct Cli {
    /// Path to the recipe file
    #[arg(short, long, default_value = "recipe.toml", global = true)]
    pub recipe: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and print the package version from the versioned header
    Version {
        /// Read this header instead of the one named by the recipe
        #[arg(long)]
        header: Option<PathBuf>,
    },

    /// Resolve the full build configuration without building
    Resolve {
        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the toolchain variables to this preset file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Resolve, run the external build command, and publish package metadata
    Build {
        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Build command overriding the recipe's `[build] command`
        #[arg(long)]
        command: Option<String>,
    },

    /// Print the published package metadata for a finished build
    PackageInfo {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Binary-configuration settings, passed in per invocation
#[derive(Args)]
pub struct SettingsArgs {
    /// Target operating system
    #[arg(long, value_enum, default_value_t = TargetOs::Linux)]
    pub os: TargetOs,

    /// Target architecture
    #[arg(long, default_value = "x86_64")]
    pub arch: String,

    /// Build type
    #[arg(long, value_enum, default_value_t = BuildType::Release)]
    pub build_type: BuildType,

    /// Compiler name
    #[arg(long)]
    pub compiler: Option<String>,

    /// Configured C++ standard of the toolchain, if pinned
    #[arg(long)]
    pub cppstd: Option<u32>,
}

/// Option overrides; unset flags keep the recipe file's defaults
#[derive(Args)]
pub struct OptionArgs {
    /// Build and declare the test suite dependency
    #[arg(long, value_name = "BOOL")]
    pub with_tests: Option<bool>,

    /// Enable documentation generation
    #[arg(long, value_name = "BOOL")]
    pub with_docs: Option<bool>,

    /// Shared linkage (not published by this recipe revision)
    #[arg(long, value_name = "BOOL")]
    pub shared: Option<bool>,

    /// Position-independent code for static linkage
    #[arg(long = "fpic", value_name = "BOOL")]
    pub fpic: Option<bool>,
}

/// Output format for resolution results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
