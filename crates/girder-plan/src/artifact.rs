/// Artifact declarations produced by the planner
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of planned artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Static library built from the module sources
    Library,
    /// Plain executable binary
    Binary,
    /// Platform application bundle carrying packaged resources
    AppBundle,
}

impl ArtifactKind {
    /// Whether this artifact kind may carry bundled resources
    pub fn carries_resources(&self) -> bool {
        matches!(self, Self::AppBundle)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::Binary => write!(f, "binary"),
            Self::AppBundle => write!(f, "app-bundle"),
        }
    }
}

/// One buildable output declared by the planner
///
/// Declarations are value types constructed once per planning pass and never
/// mutated afterwards. Every list is ordered: sources and linked libraries
/// keep manifest order, and the emitter receives artifacts library-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Output binary name
    pub name: String,
    /// Source files, library-relative for the library and test-relative otherwise
    pub sources: Vec<PathBuf>,
    /// Artifacts that must already exist before this one is built
    #[serde(default)]
    pub implicit_deps: Vec<String>,
    /// Linked library names in link order
    #[serde(default)]
    pub libs: Vec<String>,
    /// Bundled resource files
    #[serde(default)]
    pub resources: Vec<PathBuf>,
    /// Header search paths
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,
    /// Bundle identifier, app bundles only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_identifier: Option<String>,
}

impl Artifact {
    /// Create a new artifact declaration
    pub fn new(name: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            kind,
            name: name.into(),
            sources: Vec::new(),
            implicit_deps: Vec::new(),
            libs: Vec::new(),
            resources: Vec::new(),
            include_paths: Vec::new(),
            bundle_identifier: None,
        }
    }

    /// Set the source files
    pub fn with_sources(mut self, sources: Vec<PathBuf>) -> Self {
        self.sources = sources;
        self
    }

    /// Set the implicit dependencies
    pub fn with_implicit_deps(mut self, implicit_deps: Vec<String>) -> Self {
        self.implicit_deps = implicit_deps;
        self
    }

    /// Set the linked libraries
    pub fn with_libs(mut self, libs: Vec<String>) -> Self {
        self.libs = libs;
        self
    }

    /// Set the bundled resources
    pub fn with_resources(mut self, resources: Vec<PathBuf>) -> Self {
        self.resources = resources;
        self
    }

    /// Set the header search paths
    pub fn with_include_paths(mut self, include_paths: Vec<PathBuf>) -> Self {
        self.include_paths = include_paths;
        self
    }

    /// Set the bundle identifier
    pub fn with_bundle_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.bundle_identifier = Some(identifier.into());
        self
    }

    /// Validate the declaration's internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Artifact name cannot be empty".to_string());
        }

        if self.sources.is_empty() {
            return Err(format!("Artifact '{}' has no source files", self.name));
        }

        if !self.resources.is_empty() && !self.kind.carries_resources() {
            return Err(format!(
                "{} artifact '{}' cannot carry resources",
                self.kind, self.name
            ));
        }

        if self.kind != ArtifactKind::Library && self.implicit_deps.is_empty() {
            return Err(format!(
                "{} artifact '{}' must depend on the library artifact",
                self.kind, self.name
            ));
        }

        Ok(())
    }
}
