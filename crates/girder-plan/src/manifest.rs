//! Project manifest parsing and types (girder.toml)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PlanError, PlanResult};

fn default_organization() -> String {
    "girder".to_string()
}

/// Project manifest (girder.toml)
///
/// Static facts about the module being built: the library sources, the
/// libraries everything links against, and the test sub-modules. The manifest
/// is immutable input for a planning pass; the planner never writes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectManifest {
    /// Name of the primary library module
    pub module: String,
    /// Organization segment used in bundle identifiers and mobile source trees
    #[serde(default = "default_organization")]
    pub organization: String,
    /// Ordered source files composing the library
    pub sources: Vec<PathBuf>,
    /// Library names every test binary links against; order is link order
    #[serde(default, rename = "depend-libs")]
    pub depend_libs: Vec<String>,
    /// Test sub-module directory names under the test base path
    #[serde(default, rename = "test-cases")]
    pub test_cases: Vec<String>,
    /// Built as a dependency of another project; no test artifacts are planned
    #[serde(default)]
    pub submodule: bool,
    /// Bundle identifier pattern for app bundles; `$(binname)` expands to the
    /// artifact's binary name
    #[serde(
        default,
        rename = "bundle-identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub bundle_identifier: Option<String>,
}

impl ProjectManifest {
    /// Create a manifest with the given module name and library sources
    pub fn new(module: impl Into<String>, sources: Vec<PathBuf>) -> Self {
        Self {
            module: module.into(),
            organization: default_organization(),
            sources,
            depend_libs: Vec::new(),
            test_cases: Vec::new(),
            submodule: false,
            bundle_identifier: None,
        }
    }

    /// Parse manifest from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load manifest from file
    pub fn from_file(path: &std::path::Path) -> PlanResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PlanError::manifest_read(path, e))?;
        Self::from_str(&content).map_err(|e| PlanError::manifest_read(path, e))
    }

    /// Serialize to TOML string
    pub fn to_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Add dependency libraries
    pub fn with_depend_libs(mut self, depend_libs: Vec<String>) -> Self {
        self.depend_libs = depend_libs;
        self
    }

    /// Add test cases
    pub fn with_test_cases(mut self, test_cases: Vec<String>) -> Self {
        self.test_cases = test_cases;
        self
    }

    /// Mark the manifest as a submodule build
    pub fn with_submodule(mut self, submodule: bool) -> Self {
        self.submodule = submodule;
        self
    }

    /// Set the organization segment
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Bundle identifier for the given binary name
    ///
    /// Uses the declared pattern when present, otherwise
    /// `com.<organization>.<module>.<binname>`.
    pub fn bundle_identifier_for(&self, binname: &str) -> String {
        match &self.bundle_identifier {
            Some(pattern) => pattern.replace("$(binname)", binname),
            None => format!("com.{}.{}.{}", self.organization, self.module, binname),
        }
    }

    /// Validate the manifest configuration
    ///
    /// A malformed manifest is a configuration error reported before any
    /// artifact is produced; there is no partial plan.
    pub fn validate(&self) -> PlanResult<()> {
        if self.module.is_empty() {
            return Err(PlanError::invalid_manifest("module name cannot be empty"));
        }

        if self.sources.is_empty() {
            return Err(PlanError::invalid_manifest(format!(
                "module '{}' has no library sources",
                self.module
            )));
        }

        if self.test_cases.iter().any(|case| case.is_empty()) {
            return Err(PlanError::invalid_manifest(format!(
                "module '{}' has a test case with an empty name",
                self.module
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn obj_manifest() -> ProjectManifest {
        ProjectManifest::new("obj", vec![PathBuf::from("obj.c")])
    }

    #[test]
    fn test_validate_empty_module() {
        let manifest = ProjectManifest::new("", vec![PathBuf::from("obj.c")]);
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_no_sources() {
        let manifest = ProjectManifest::new("obj", vec![]);
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_empty_test_case_name() {
        let manifest = obj_manifest().with_test_cases(vec![String::new()]);
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_bundle_identifier_default() {
        let manifest = obj_manifest().with_organization("maniccoder");
        assert_eq!(
            manifest.bundle_identifier_for("test-all"),
            "com.maniccoder.obj.test-all"
        );
    }

    #[test]
    fn test_bundle_identifier_pattern() {
        let mut manifest = obj_manifest();
        manifest.bundle_identifier = Some("org.example.obj.$(binname)".to_string());
        assert_eq!(
            manifest.bundle_identifier_for("test-obj"),
            "org.example.obj.test-obj"
        );
    }
}
