// src/options/mod.rs

//! Recipe option set and its normalization rules
//!
//! Options are the user-facing knobs of the recipe. `fPIC` is special: it
//! is an *optional* entry, because downstream toolchain generation treats
//! an absent option differently from one set to false. The normalization
//! rules remove it (rather than clearing it) when the target platform has
//! no PIC concept or when shared linkage implies it.
//!
//! Normalization never mutates the requested set; each rule produces a new
//! snapshot so later stages cannot observe a half-normalized state.

use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The recognized recipe options with their requested values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    /// Build and declare the test suite dependency
    #[serde(default)]
    pub with_tests: bool,

    /// Enable documentation generation in the native build
    #[serde(default = "default_true")]
    pub with_docs: bool,

    /// Shared linkage. This recipe revision only ships static libraries,
    /// so the default (and the only supported published configuration)
    /// is false.
    #[serde(default)]
    pub shared: bool,

    /// Position-independent code for static linkage. `None` means the
    /// option does not exist for this configuration, which is distinct
    /// from `Some(false)`.
    #[serde(
        rename = "fPIC",
        default = "default_fpic",
        skip_serializing_if = "Option::is_none"
    )]
    pub fpic: Option<bool>,
}

fn default_true() -> bool {
    true
}

fn default_fpic() -> Option<bool> {
    Some(true)
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            with_tests: false,
            with_docs: true,
            shared: false,
            fpic: Some(true),
        }
    }
}

impl OptionSet {
    /// Apply the platform rule: targets without a PIC concept drop the
    /// fPIC option entirely.
    pub fn normalize_platform(&self, settings: &Settings) -> Self {
        let mut next = self.clone();
        if !settings.os.supports_pic() {
            next.fpic = None;
        }
        next
    }

    /// Apply the linkage rule: shared linkage implies PIC, so the option
    /// is removed rather than left user-configurable. Composes with the
    /// platform rule.
    pub fn normalize_linkage(&self) -> Self {
        let mut next = self.clone();
        if next.shared {
            next.fpic = None;
        }
        next
    }

    /// Run both normalization rules in order and return the frozen
    /// snapshot used by every later stage.
    pub fn normalized(&self, settings: &Settings) -> Self {
        self.normalize_platform(settings).normalize_linkage()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "with_tests={} with_docs={} shared={}",
            self.with_tests, self.with_docs, self.shared
        )?;
        match self.fpic {
            Some(v) => write!(f, " fPIC={}", v),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{BuildType, TargetOs};

    fn settings(os: TargetOs) -> Settings {
        Settings::new(os, BuildType::Release)
    }

    #[test]
    fn test_defaults_match_recipe() {
        let opts = OptionSet::default();
        assert!(!opts.with_tests);
        assert!(opts.with_docs);
        assert!(!opts.shared);
        assert_eq!(opts.fpic, Some(true));
    }

    #[test]
    fn test_windows_removes_fpic() {
        let opts = OptionSet::default();
        let resolved = opts.normalized(&settings(TargetOs::Windows));
        assert_eq!(resolved.fpic, None);
    }

    #[test]
    fn test_shared_removes_fpic_even_when_requested() {
        let opts = OptionSet {
            shared: true,
            fpic: Some(true),
            ..OptionSet::default()
        };
        let resolved = opts.normalized(&settings(TargetOs::Linux));
        assert_eq!(resolved.fpic, None);
    }

    #[test]
    fn test_static_linux_keeps_requested_fpic() {
        let opts = OptionSet {
            fpic: Some(false),
            ..OptionSet::default()
        };
        let resolved = opts.normalized(&settings(TargetOs::Linux));
        assert_eq!(resolved.fpic, Some(false));
    }

    #[test]
    fn test_rules_compose_on_shared_windows() {
        let opts = OptionSet {
            shared: true,
            ..OptionSet::default()
        };
        let resolved = opts.normalized(&settings(TargetOs::Windows));
        assert_eq!(resolved.fpic, None);
    }

    #[test]
    fn test_normalization_does_not_mutate_input() {
        let opts = OptionSet::default();
        let _ = opts.normalized(&settings(TargetOs::Windows));
        assert_eq!(opts.fpic, Some(true));
    }

    #[test]
    fn test_toml_round_trip_uses_fpic_key() {
        let opts: OptionSet = toml::from_str("fPIC = false\nwith_tests = true\n").unwrap();
        assert_eq!(opts.fpic, Some(false));
        assert!(opts.with_tests);
        assert!(opts.with_docs);
    }
}
