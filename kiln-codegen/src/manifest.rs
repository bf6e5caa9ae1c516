//! Target-project manifest detection.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Fallback when the target project has no readable manifest.
pub const DEFAULT_MODULE_PATH: &str = "api-scaffold";

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: Option<String>,
}

/// Read the crate name from `<root>/Cargo.toml`.
///
/// Falls back to [`DEFAULT_MODULE_PATH`] when the manifest is missing,
/// unparseable, or declares no package name. Detection is best-effort; the
/// value only feeds generated file headers.
pub fn detect_module_path(root: &Path) -> String {
    let Ok(content) = fs::read_to_string(root.join("Cargo.toml")) else {
        return DEFAULT_MODULE_PATH.to_string();
    };
    toml::from_str::<CargoManifest>(&content)
        .ok()
        .and_then(|m| m.package)
        .and_then(|p| p.name)
        .unwrap_or_else(|| DEFAULT_MODULE_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_detects_package_name() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Cargo.toml"),
            "[package]\nname = \"shop-api\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        assert_eq!(detect_module_path(temp.path()), "shop-api");
    }

    #[test]
    fn test_missing_manifest_falls_back() {
        let temp = TempDir::new().unwrap();
        assert_eq!(detect_module_path(temp.path()), DEFAULT_MODULE_PATH);
    }

    #[test]
    fn test_manifest_without_package_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Cargo.toml"),
            "[workspace]\nmembers = []\n",
        )
        .unwrap();

        assert_eq!(detect_module_path(temp.path()), DEFAULT_MODULE_PATH);
    }

    #[test]
    fn test_unparseable_manifest_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "not toml [[[").unwrap();

        assert_eq!(detect_module_path(temp.path()), DEFAULT_MODULE_PATH);
    }
}
