// src/toolchain.rs

//! Toolchain configuration-variable generation
//!
//! The five cache variables handed to the external native build tool are a
//! direct passthrough of the resolved option set plus the fixed
//! installation policy. Generation must run after normalization so that a
//! removed fPIC never reappears here with a stale value: an absent option
//! means an absent variable, not `FPIC=false`.

use crate::options::OptionSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A toolchain cache-variable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CacheValue {
    Bool(bool),
    Str(String),
}

impl fmt::Display for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

/// The write-once variable map consumed by the external build tool.
/// Backed by a `BTreeMap` so repeated generation from the same option set
/// renders byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainConfig {
    #[serde(flatten)]
    vars: BTreeMap<String, CacheValue>,
}

impl ToolchainConfig {
    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&CacheValue> {
        self.vars.get(name)
    }

    /// Whether a variable exists at all
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate variables in render order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheValue)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `KEY=value` lines for the external tool's preset file
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.vars {
            out.push_str(key);
            out.push('=');
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}

/// Generate the toolchain configuration from a resolved option set.
///
/// No conditionals of its own beyond mirroring an optional fPIC; callers
/// must pass the normalized snapshot.
pub fn generate(options: &OptionSet) -> ToolchainConfig {
    let mut vars = BTreeMap::new();
    vars.insert("DOC".to_string(), CacheValue::Bool(options.with_docs));
    vars.insert("TEST".to_string(), CacheValue::Bool(options.with_tests));
    vars.insert("INSTALL".to_string(), CacheValue::Bool(true));
    vars.insert("LIB_DIR".to_string(), CacheValue::Str("lib".to_string()));
    if let Some(fpic) = options.fpic {
        vars.insert("FPIC".to_string(), CacheValue::Bool(fpic));
    }
    ToolchainConfig { vars }
}
