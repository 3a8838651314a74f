// src/recipe/parser.rs

//! Recipe file parsing

use crate::error::{Error, Result};
use crate::recipe::format::RecipeFile;
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<RecipeFile> {
    toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe: {}", e)))
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<RecipeFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read recipe file: {}", e)))?;

    parse_recipe(&content)
}

/// Validate a recipe for completeness and correctness
pub fn validate_recipe(recipe: &RecipeFile) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if recipe.package.name.is_empty() {
        return Err(Error::ParseError(
            "Recipe package name cannot be empty".to_string(),
        ));
    }
    if recipe.package.header.is_empty() {
        return Err(Error::ParseError(
            "Recipe version header path cannot be empty".to_string(),
        ));
    }

    // This revision only publishes static libraries
    if recipe.options.shared {
        warnings.push("shared linkage is not published by this recipe revision".to_string());
    }

    if recipe.package.description.is_none() {
        warnings.push("Missing package description".to_string());
    }

    if recipe.build.command.is_none() {
        warnings.push("No build command specified".to_string());
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_recipe() {
        let content = r#"
[package]
name = "gncpy"
header = "include/gncpy/core.h"

[policy]
min_cppstd = 14

[options]
with_tests = false
with_docs = true
fPIC = true
"#;

        let recipe = parse_recipe(content).unwrap();
        assert_eq!(recipe.package.name, "gncpy");
        assert_eq!(recipe.policy.min_cppstd, 14);
        assert_eq!(recipe.options.fpic, Some(true));
    }

    #[test]
    fn test_parse_minimal_recipe_uses_defaults() {
        let content = r#"
[package]
name = "gncpy"
header = "include/gncpy/core.h"
"#;

        let recipe = parse_recipe(content).unwrap();
        assert_eq!(recipe.policy.min_cppstd, 14);
        assert!(!recipe.options.with_tests);
        assert!(recipe.options.with_docs);
        assert!(recipe.build.command.is_none());
    }

    #[test]
    fn test_parse_invalid_recipe() {
        let content = "this is not valid toml at all {}";
        assert!(parse_recipe(content).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let content = r#"
[package]
name = ""
header = "include/gncpy/core.h"
"#;

        let recipe = parse_recipe(content).unwrap();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_warnings() {
        let content = r#"
[package]
name = "gncpy"
header = "include/gncpy/core.h"

[options]
shared = true
"#;

        let recipe = parse_recipe(content).unwrap();
        let warnings = validate_recipe(&recipe).unwrap();
        assert!(warnings.iter().any(|w| w.contains("shared")));
        assert!(warnings.iter().any(|w| w.contains("description")));
        assert!(warnings.iter().any(|w| w.contains("build command")));
    }
}
