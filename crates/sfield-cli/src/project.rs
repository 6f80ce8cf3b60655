//! Output directory discovery from a local `sfdx-project.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use tracing::info;

/// Project descriptor file looked up in the working directory.
pub const PROJECT_FILE: &str = "sfdx-project.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SfdxProject {
    #[serde(default)]
    pub package_directories: Vec<PackageDirectory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageDirectory {
    pub path: String,
    #[serde(default)]
    pub default: bool,
    pub package: Option<String>,
}

impl PackageDirectory {
    /// Package name, or the directory path for unnamed packages.
    pub fn name(&self) -> &str {
        self.package.as_deref().unwrap_or(&self.path)
    }
}

impl SfdxProject {
    /// Parse `sfdx-project.json` from `project_dir`.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(PROJECT_FILE);
        let contents =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
    }

    /// Package directory to write into.
    ///
    /// With `package`, the entry whose path or package name matches;
    /// otherwise the default entry, falling back to the first one.
    pub fn select(&self, package: Option<&str>) -> Result<&PackageDirectory> {
        if self.package_directories.is_empty() {
            bail!("{PROJECT_FILE} declares no package directories");
        }
        match package {
            Some(wanted) => self
                .package_directories
                .iter()
                .find(|dir| same_path(&dir.path, wanted) || dir.package.as_deref() == Some(wanted))
                .ok_or_else(|| anyhow!("package directory '{wanted}' is not declared in {PROJECT_FILE}")),
            None => self
                .package_directories
                .iter()
                .find(|dir| dir.default)
                .or_else(|| self.package_directories.first())
                .ok_or_else(|| anyhow!("{PROJECT_FILE} declares no package directories")),
        }
    }
}

fn same_path(declared: &str, wanted: &str) -> bool {
    declared.trim_end_matches('/') == wanted.trim_end_matches('/')
}

/// Directory the generated files go under.
///
/// An explicit `output_dir` wins; otherwise the package directories of the
/// project in `project_dir` are listed and one is selected.
pub fn resolve_output_dir(
    output_dir: Option<&Path>,
    package: Option<&str>,
    project_dir: &Path,
) -> Result<PathBuf> {
    if let Some(dir) = output_dir {
        return Ok(dir.to_path_buf());
    }
    let project = SfdxProject::load(project_dir)?;
    info!(
        "{} available directories in your project for output",
        project.package_directories.len()
    );
    for dir in &project.package_directories {
        let marker = if dir.default { " (Default)" } else { "" };
        info!(
            "Name: {}{marker} @ {}",
            dir.name(),
            project_dir.join(&dir.path).display()
        );
    }
    let selected = project.select(package)?;
    Ok(project_dir.join(&selected.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(json: &str) -> SfdxProject {
        serde_json::from_str(json).expect("valid project json")
    }

    #[test]
    fn selects_default_directory() {
        let project = project(
            r#"{"packageDirectories":[{"path":"lib"},{"path":"force-app","default":true}]}"#,
        );
        assert_eq!(project.select(None).expect("selected").path, "force-app");
    }

    #[test]
    fn falls_back_to_first_directory() {
        let project = project(r#"{"packageDirectories":[{"path":"lib"},{"path":"app"}]}"#);
        assert_eq!(project.select(None).expect("selected").path, "lib");
    }

    #[test]
    fn selects_named_package() {
        let project = project(
            r#"{"packageDirectories":[{"path":"force-app","default":true},{"path":"utils","package":"Utilities"}]}"#,
        );
        assert_eq!(project.select(Some("utils/")).expect("by path").path, "utils");
        assert_eq!(project.select(Some("Utilities")).expect("by name").path, "utils");
        assert!(project.select(Some("other")).is_err());
    }

    #[test]
    fn empty_project_has_no_directory() {
        assert!(project(r#"{"packageDirectories":[]}"#).select(None).is_err());
    }

    #[test]
    fn explicit_output_dir_skips_project_lookup() {
        let dir = resolve_output_dir(
            Some(Path::new("out")),
            None,
            Path::new("/definitely/not/a/project"),
        )
        .expect("explicit dir");
        assert_eq!(dir, PathBuf::from("out"));
    }
}
