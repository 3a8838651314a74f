// src/package_info.rs

//! Published package metadata
//!
//! After the external build and install succeed, the recipe republishes the
//! artifact for consumers: the canonical library name (with the fixed debug
//! suffix on debug builds), the per-platform system libraries a consumer
//! must also link, and the aliases under which different consuming build
//! systems address the same package. Old and new addressing schemes all
//! resolve to the same artifact so consumers never diverge.

use crate::settings::Settings;
use serde::Serialize;

/// Suffix appended to the library name on debug builds
const DEBUG_SUFFIX: &str = "d";

/// Consumable description of the built package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Canonical library binary name
    pub library: String,

    /// System libraries consumers must link on this platform
    pub system_libs: Vec<String>,

    /// Every name the package is discoverable under
    pub aliases: Vec<String>,
}

/// Publish the package metadata for a finished build.
pub fn publish(package_name: &str, settings: &Settings) -> PackageInfo {
    let library = if settings.build_type.is_debug() {
        format!("{}{}", package_name, DEBUG_SUFFIX)
    } else {
        package_name.to_string()
    };

    let mut system_libs = Vec::new();
    if settings.os.links_libm() {
        system_libs.push("m".to_string());
    }

    // Plain name for legacy consumers, namespaced target for module-style
    // build systems, lib-prefixed name for pkg-config style lookup.
    let aliases = vec![
        package_name.to_string(),
        format!("{0}::{0}", package_name),
        format!("lib{}", package_name),
    ];

    PackageInfo {
        library,
        system_libs,
        aliases,
    }
}
