// src/commands.rs
//! Command handlers for the gncpy-recipe CLI

use anyhow::{bail, Result};
use gncpy_recipe::error::Error;
use gncpy_recipe::recipe::{Recipe, Resolution};
use gncpy_recipe::settings::Settings;
use gncpy_recipe::{options::OptionSet, version};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::{OptionArgs, OutputFormat, SettingsArgs};

impl SettingsArgs {
    /// Turn the CLI flags into the settings snapshot the pipeline consumes
    pub fn to_settings(&self) -> Settings {
        Settings {
            os: self.os,
            arch: self.arch.clone(),
            build_type: self.build_type,
            compiler: self.compiler.clone(),
            cppstd: self.cppstd,
        }
    }
}

impl OptionArgs {
    /// Overlay the CLI overrides on the recipe file's default options
    pub fn merge_into(&self, defaults: &OptionSet) -> OptionSet {
        let mut merged = defaults.clone();
        if let Some(v) = self.with_tests {
            merged.with_tests = v;
        }
        if let Some(v) = self.with_docs {
            merged.with_docs = v;
        }
        if let Some(v) = self.shared {
            merged.shared = v;
        }
        if let Some(v) = self.fpic {
            merged.fpic = Some(v);
        }
        merged
    }
}

/// Print the version extracted from the versioned header
pub fn cmd_version(recipe_path: &Path, header: Option<PathBuf>) -> Result<()> {
    let version = match header {
        Some(path) => version::resolve_version(&path)?,
        None => {
            let recipe = Recipe::from_file(recipe_path)?;
            version::resolve_version(&recipe.header)?
        }
    };
    println!("{}", version);
    Ok(())
}

/// Resolve the full build configuration and print it
pub fn cmd_resolve(
    recipe_path: &Path,
    settings: &SettingsArgs,
    options: &OptionArgs,
    format: OutputFormat,
    out: Option<PathBuf>,
) -> Result<()> {
    let recipe = Recipe::from_file(recipe_path)?;
    let settings = settings.to_settings();
    let requested = options.merge_into(&recipe.default_options);

    let resolution = recipe.resolve(&settings, &requested)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
        OutputFormat::Text => print_resolution(&recipe, &resolution),
    }

    if let Some(path) = out {
        std::fs::write(&path, resolution.toolchain.render())
            .map_err(|e| Error::IoError(format!("Failed to write {}: {}", path.display(), e)))?;
        info!("Wrote toolchain preset to {}", path.display());
    }

    Ok(())
}

/// Resolve, run the opaque external build, then publish package metadata
pub fn cmd_build(
    recipe_path: &Path,
    settings: &SettingsArgs,
    options: &OptionArgs,
    command: Option<String>,
) -> Result<()> {
    let recipe = Recipe::from_file(recipe_path)?;
    let settings = settings.to_settings();
    let requested = options.merge_into(&recipe.default_options);

    let resolution = recipe.resolve(&settings, &requested)?;
    info!("Resolved {} {}", recipe.name, resolution.version);

    let command = match command.or_else(|| recipe.build_command.clone()) {
        Some(c) => c,
        None => bail!("No build command configured; set [build] command or pass --command"),
    };

    // Publication only happens after a successful build+install
    let info = recipe.build(&settings, &command)?;
    println!("Built {} {}", info.library, resolution.version);
    println!("Aliases: {}", info.aliases.join(", "));
    Ok(())
}

/// Print the consumable package metadata
pub fn cmd_package_info(
    recipe_path: &Path,
    settings: &SettingsArgs,
    format: OutputFormat,
) -> Result<()> {
    let recipe = Recipe::from_file(recipe_path)?;
    let info = recipe.package_info(&settings.to_settings());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Text => {
            println!("library: {}", info.library);
            println!("system_libs: {}", info.system_libs.join(" "));
            println!("aliases: {}", info.aliases.join(" "));
        }
    }
    Ok(())
}

fn print_resolution(recipe: &Recipe, resolution: &Resolution) {
    println!("package: {} {}", recipe.name, resolution.version);
    println!("options: {}", resolution.options);
    println!("requirements:");
    for req in &resolution.requirements {
        println!("  {}", req);
    }
    println!("toolchain:");
    for (key, value) in resolution.toolchain.iter() {
        println!("  {}={}", key, value);
    }
}
