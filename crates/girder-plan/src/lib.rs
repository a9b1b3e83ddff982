//! Girder artifact planning
//!
//! Decides which concrete build artifacts a module produces for a target
//! platform and toolchain mode, and what each artifact's inputs are:
//! - Project manifest types (girder.toml)
//! - Platform kinds, linkage modes and the toolchain query interface
//! - The artifact planner, a pure function from manifest + facts to an
//!   ordered artifact list
//! - The emitter interface consumed by build-graph writers
//!
//! The planner performs no I/O of its own; discovery and graph writing
//! belong to the callers on either side of it.

pub mod artifact;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod planner;
pub mod platform;

// Re-export main types
pub use artifact::{Artifact, ArtifactKind};
pub use emit::{emit_plan, Emitter};
pub use error::{PlanError, PlanResult};
pub use manifest::ProjectManifest;
pub use planner::{plan, plan_all, ALL_CASE, TEST_SUPPORT_LIB};
pub use platform::{LinkageMode, PlanRequest, PlatformKind, ToolchainQuery};
