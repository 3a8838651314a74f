// src/dependencies/mod.rs

//! Upstream dependency declaration
//!
//! The recipe always requires its two fixed upstream libraries at pinned
//! versions, and pulls in the test framework only when the test suite is
//! enabled. Assembly is a pure function of the option set: resolving the
//! same options twice yields the same ordered declaration list, and
//! nothing outside these conditionals may add or remove a requirement.

use crate::options::OptionSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pinned reference for the general-purpose utility library
pub const BOOST: (&str, &str) = ("boost", "1.82.0");
/// Pinned reference for the linear-algebra library
pub const EIGEN: (&str, &str) = ("eigen", "3.4.0");
/// Pinned reference for the test framework, declared only with tests on
pub const GTEST: (&str, &str) = ("gtest", "cci.20210126");

/// A single upstream requirement: package name plus pinned version reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

impl Requirement {
    /// Build a requirement from one of the pin-table pairs above
    fn pinned((name, version): (&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Assemble the ordered requirement list for the given resolved options.
pub fn assemble(options: &OptionSet) -> Vec<Requirement> {
    let mut requirements = vec![Requirement::pinned(BOOST), Requirement::pinned(EIGEN)];

    if options.with_tests {
        requirements.push(Requirement::pinned(GTEST));
    }

    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_upstreams_always_present() {
        let reqs = assemble(&OptionSet::default());
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].to_string(), "boost/1.82.0");
        assert_eq!(reqs[1].to_string(), "eigen/3.4.0");
    }

    #[test]
    fn test_with_tests_adds_gtest() {
        let opts = OptionSet {
            with_tests: true,
            ..OptionSet::default()
        };
        let reqs = assemble(&opts);
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[2].to_string(), "gtest/cci.20210126");
    }

    #[test]
    fn test_without_tests_excludes_gtest() {
        let reqs = assemble(&OptionSet::default());
        assert!(!reqs.iter().any(|r| r.name == "gtest"));
    }

    #[test]
    fn test_every_pin_carries_a_version() {
        let opts = OptionSet {
            with_tests: true,
            ..OptionSet::default()
        };
        for req in assemble(&opts) {
            assert!(!req.name.is_empty());
            assert!(!req.version.is_empty(), "{} has no pinned version", req.name);
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let opts = OptionSet {
            with_tests: true,
            ..OptionSet::default()
        };
        assert_eq!(assemble(&opts), assemble(&opts));
    }

    #[test]
    fn test_unrelated_options_do_not_change_requirements() {
        let a = assemble(&OptionSet::default());
        let b = assemble(&OptionSet {
            with_docs: false,
            shared: true,
            fpic: None,
            ..OptionSet::default()
        });
        assert_eq!(a, b);
    }
}
