// src/settings.rs

//! Binary configuration settings for a recipe invocation
//!
//! Settings describe the environment a build targets: operating system,
//! architecture, build type, and the compiler with its optionally
//! configured language standard. They are passed in from the command line
//! and never mutated by the resolution pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum TargetOs {
    Linux,
    Macos,
    Windows,
    FreeBsd,
}

impl TargetOs {
    /// Whether the platform has a notion of position-independent-code
    /// toggling at all. Windows does not; the fPIC option is meaningless
    /// there and is removed from the option set, not set to false.
    pub fn supports_pic(&self) -> bool {
        !matches!(self, Self::Windows)
    }

    /// Whether binaries on this platform link the math library separately
    pub fn links_libm(&self) -> bool {
        matches!(self, Self::Linux | Self::FreeBsd)
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Windows => "windows",
            Self::FreeBsd => "freebsd",
        };
        write!(f, "{}", s)
    }
}

/// Build type of the native build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    /// Whether this build type gets the debug library-name suffix
    pub fn is_debug(&self) -> bool {
        matches!(self, Self::Debug)
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Debug => "debug",
            Self::Release => "release",
            Self::RelWithDebInfo => "relwithdebinfo",
            Self::MinSizeRel => "minsizerel",
        };
        write!(f, "{}", s)
    }
}

/// The full settings axis set for one recipe invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target operating system
    pub os: TargetOs,

    /// Target architecture (informational, not branched on)
    pub arch: String,

    /// Build type (drives the debug name suffix)
    pub build_type: BuildType,

    /// Compiler name (informational, not branched on)
    pub compiler: Option<String>,

    /// Configured C++ standard, if the toolchain pins one at all.
    /// An unconfigured standard is permitted and not validated.
    pub cppstd: Option<u32>,
}

impl Settings {
    /// Create settings with the common defaults for a host invocation
    pub fn new(os: TargetOs, build_type: BuildType) -> Self {
        Self {
            os,
            arch: "x86_64".to_string(),
            build_type,
            compiler: None,
            cppstd: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_has_no_pic_concept() {
        assert!(!TargetOs::Windows.supports_pic());
        assert!(TargetOs::Linux.supports_pic());
        assert!(TargetOs::Macos.supports_pic());
        assert!(TargetOs::FreeBsd.supports_pic());
    }

    #[test]
    fn test_libm_is_linux_family_only() {
        assert!(TargetOs::Linux.links_libm());
        assert!(TargetOs::FreeBsd.links_libm());
        assert!(!TargetOs::Macos.links_libm());
        assert!(!TargetOs::Windows.links_libm());
    }

    #[test]
    fn test_only_debug_builds_are_debug() {
        assert!(BuildType::Debug.is_debug());
        assert!(!BuildType::Release.is_debug());
        assert!(!BuildType::RelWithDebInfo.is_debug());
        assert!(!BuildType::MinSizeRel.is_debug());
    }
}
