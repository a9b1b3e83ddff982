//! Target platform kinds and toolchain facts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PlanError, PlanResult};

/// Kind of target platform
///
/// A closed enumeration: adding a platform is a single-point change checked
/// by every exhaustive match over this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformKind {
    /// Desktop or server target without app packaging (linux, windows, bsd)
    GenericDesktop,
    /// macOS target packaged as an application bundle
    MacOsApp,
    /// iOS target
    Ios,
    /// Android target
    Android,
    /// Tizen target
    Tizen,
}

impl PlatformKind {
    /// Parse a platform kind from its command-line name
    ///
    /// Unknown names are rejected rather than defaulted; guessing a platform
    /// would emit plain binaries for a target that requires bundling.
    pub fn from_name(name: &str) -> PlanResult<Self> {
        match name {
            "desktop" => Ok(Self::GenericDesktop),
            "macos" => Ok(Self::MacOsApp),
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "tizen" => Ok(Self::Tizen),
            other => Err(PlanError::unsupported_platform(other)),
        }
    }

    /// Get the platform's command-line name
    pub fn name(&self) -> &'static str {
        match self {
            Self::GenericDesktop => "desktop",
            Self::MacOsApp => "macos",
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Tizen => "tizen",
        }
    }

    /// Whether test binaries are packaged as application bundles
    pub fn uses_app_bundle(&self) -> bool {
        matches!(self, Self::MacOsApp | Self::Ios | Self::Android | Self::Tizen)
    }

    /// Whether platform policy forces all test cases into one binary
    pub fn forces_monolithic(&self) -> bool {
        matches!(self, Self::Ios | Self::Android | Self::Tizen)
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Test-binary grouping policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkageMode {
    /// One binary per test case
    PerArtifact,
    /// One binary containing every test case
    Monolithic,
}

impl LinkageMode {
    /// Resolve platform policy against the toolchain's declared mode
    ///
    /// Ios, Android and Tizen always link monolithically regardless of the
    /// toolchain's preference.
    pub fn resolve(platform: PlatformKind, monolithic_toolchain: bool) -> Self {
        if monolithic_toolchain || platform.forces_monolithic() {
            Self::Monolithic
        } else {
            Self::PerArtifact
        }
    }
}

impl std::fmt::Display for LinkageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerArtifact => write!(f, "per-artifact"),
            Self::Monolithic => write!(f, "monolithic"),
        }
    }
}

/// Read-only facts about the active target and toolchain
///
/// Resolved once per planning pass. A failing query aborts planning; the
/// planner never retries or substitutes defaults.
pub trait ToolchainQuery {
    /// Kind of the current target platform
    fn platform_kind(&self) -> PlanResult<PlatformKind>;

    /// Whether the toolchain links test binaries monolithically
    fn is_monolithic(&self) -> PlanResult<bool>;

    /// Build configurations offered by the toolchain
    ///
    /// Passed through to the emitter uninterpreted.
    fn configurations(&self) -> PlanResult<Vec<String>>;
}

/// Resolved inputs for one planning pass
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Target platform
    pub platform: PlatformKind,
    /// Resolved test-binary grouping
    pub linkage: LinkageMode,
    /// Pre-resolved include paths for test artifacts, passed through unchanged
    pub include_paths: Vec<PathBuf>,
    /// Build configurations, passed through unchanged
    pub configurations: Vec<String>,
}

impl PlanRequest {
    /// Create a request for the given platform and toolchain linkage preference
    pub fn new(platform: PlatformKind, monolithic_toolchain: bool) -> Self {
        Self {
            platform,
            linkage: LinkageMode::resolve(platform, monolithic_toolchain),
            include_paths: Vec::new(),
            configurations: Vec::new(),
        }
    }

    /// Resolve a request from a toolchain query
    pub fn from_query(query: &dyn ToolchainQuery) -> PlanResult<Self> {
        let platform = query.platform_kind()?;
        let monolithic = query.is_monolithic()?;
        let configurations = query.configurations()?;
        Ok(Self::new(platform, monolithic).with_configurations(configurations))
    }

    /// Set the test include paths
    pub fn with_include_paths(mut self, include_paths: Vec<PathBuf>) -> Self {
        self.include_paths = include_paths;
        self
    }

    /// Set the build configurations
    pub fn with_configurations(mut self, configurations: Vec<String>) -> Self {
        self.configurations = configurations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name_round_trip() {
        for platform in [
            PlatformKind::GenericDesktop,
            PlatformKind::MacOsApp,
            PlatformKind::Ios,
            PlatformKind::Android,
            PlatformKind::Tizen,
        ] {
            assert_eq!(PlatformKind::from_name(platform.name()).unwrap(), platform);
        }
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let result = PlatformKind::from_name("beos");
        assert!(matches!(result, Err(PlanError::UnsupportedPlatform(name)) if name == "beos"));
    }

    #[test]
    fn test_bundle_platforms() {
        assert!(!PlatformKind::GenericDesktop.uses_app_bundle());
        assert!(PlatformKind::MacOsApp.uses_app_bundle());
        assert!(PlatformKind::Ios.uses_app_bundle());
        assert!(PlatformKind::Android.uses_app_bundle());
        assert!(PlatformKind::Tizen.uses_app_bundle());
    }

    #[test]
    fn test_monolithic_forcing() {
        assert!(!PlatformKind::GenericDesktop.forces_monolithic());
        assert!(!PlatformKind::MacOsApp.forces_monolithic());
        assert!(PlatformKind::Ios.forces_monolithic());
        assert!(PlatformKind::Android.forces_monolithic());
        assert!(PlatformKind::Tizen.forces_monolithic());
    }

    #[test]
    fn test_linkage_resolution() {
        assert_eq!(
            LinkageMode::resolve(PlatformKind::GenericDesktop, false),
            LinkageMode::PerArtifact
        );
        assert_eq!(
            LinkageMode::resolve(PlatformKind::GenericDesktop, true),
            LinkageMode::Monolithic
        );
        // Platform policy wins over the toolchain preference
        assert_eq!(
            LinkageMode::resolve(PlatformKind::Ios, false),
            LinkageMode::Monolithic
        );
        assert_eq!(
            LinkageMode::resolve(PlatformKind::MacOsApp, false),
            LinkageMode::PerArtifact
        );
    }
}
