//! Artifact planning
//!
//! The decision engine: a pure function from a project manifest and resolved
//! platform facts to an ordered list of artifact declarations. The library
//! artifact always comes first so later artifacts can name it as an implicit
//! dependency. Calling [`plan`] twice with identical inputs yields identical
//! output; the emitter relies on a stable plan for incremental rebuilds.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::artifact::{Artifact, ArtifactKind};
use crate::error::PlanResult;
use crate::manifest::ProjectManifest;
use crate::platform::{LinkageMode, PlanRequest, PlatformKind};

/// Test-support library linked first into every test binary
pub const TEST_SUPPORT_LIB: &str = "test";

/// Reserved case combining every test case into one convenience binary
pub const ALL_CASE: &str = "all";

/// Output name of the combined test binary
const ALL_BINARY: &str = "test-all";

/// Entry-point file contributed by each test case directory
const CASE_ENTRY: &str = "main.c";

/// Plan the artifacts to build for one target platform
///
/// Declares the library artifact first, then the test artifacts dictated by
/// the packaging kind of `request.platform` and the resolved linkage mode.
/// A submodule build plans the library alone.
pub fn plan(manifest: &ProjectManifest, request: &PlanRequest) -> PlanResult<Vec<Artifact>> {
    manifest.validate()?;

    let mut artifacts = vec![library_artifact(manifest)];

    // Submodules are consumed by another project; their test artifacts are
    // never planned.
    if manifest.submodule {
        return Ok(artifacts);
    }

    match request.linkage {
        LinkageMode::Monolithic => {
            artifacts.push(monolithic_artifact(manifest, request));
        }
        LinkageMode::PerArtifact => {
            for case in &manifest.test_cases {
                artifacts.push(case_artifact(manifest, request, case));
            }
            // Desktop-like platforms also get the combined binary as its own
            // standalone artifact, built from the reserved case.
            if !request.platform.uses_app_bundle() {
                artifacts.push(case_artifact(manifest, request, ALL_CASE));
            }
        }
    }

    Ok(artifacts)
}

/// Plan several independent target platforms in parallel
///
/// Each pass is a pure computation over the same manifest, so the passes
/// share nothing and the output order follows the request order.
pub fn plan_all(
    manifest: &ProjectManifest,
    requests: &[PlanRequest],
) -> PlanResult<Vec<Vec<Artifact>>> {
    requests
        .par_iter()
        .map(|request| plan(manifest, request))
        .collect()
}

fn library_artifact(manifest: &ProjectManifest) -> Artifact {
    Artifact::new(&manifest.module, ArtifactKind::Library).with_sources(manifest.sources.clone())
}

/// Linked libraries for every test artifact: the test-support library, the
/// module library, then the dependency libraries, verbatim. Link order
/// carries symbol-resolution semantics and must never be permuted.
fn test_libs(manifest: &ProjectManifest) -> Vec<String> {
    let mut libs = Vec::with_capacity(2 + manifest.depend_libs.len());
    libs.push(TEST_SUPPORT_LIB.to_string());
    libs.push(manifest.module.clone());
    libs.extend(manifest.depend_libs.iter().cloned());
    libs
}

fn case_entry(case: &str) -> PathBuf {
    PathBuf::from(case).join(CASE_ENTRY)
}

/// One artifact per test case; also used for the reserved `all` case, which
/// is built exactly like a single case.
fn case_artifact(manifest: &ProjectManifest, request: &PlanRequest, case: &str) -> Artifact {
    test_artifact(
        manifest,
        request,
        format!("test-{case}"),
        vec![case_entry(case)],
        case,
    )
}

/// The single artifact containing every test case merged together
fn monolithic_artifact(manifest: &ProjectManifest, request: &PlanRequest) -> Artifact {
    let mut sources: Vec<PathBuf> = manifest.test_cases.iter().map(|c| case_entry(c)).collect();
    sources.extend(extra_sources(request.platform, manifest));
    test_artifact(manifest, request, ALL_BINARY.to_string(), sources, ALL_CASE)
}

fn test_artifact(
    manifest: &ProjectManifest,
    request: &PlanRequest,
    name: String,
    sources: Vec<PathBuf>,
    case: &str,
) -> Artifact {
    let kind = if request.platform.uses_app_bundle() {
        ArtifactKind::AppBundle
    } else {
        ArtifactKind::Binary
    };

    let mut artifact = Artifact::new(&name, kind)
        .with_sources(sources)
        .with_implicit_deps(vec![manifest.module.clone()])
        .with_libs(test_libs(manifest))
        .with_include_paths(request.include_paths.clone());

    if kind == ArtifactKind::AppBundle {
        artifact = artifact
            .with_resources(resources(request.platform, case))
            .with_bundle_identifier(manifest.bundle_identifier_for(&name));
    }

    artifact
}

/// Resource set bundled into an app-bundle artifact, test-base-relative
///
/// macOS resources are named per test case; the mobile platforms ship one
/// shared set under the reserved case directory since they only ever build
/// the monolithic binary.
fn resources(platform: PlatformKind, case: &str) -> Vec<PathBuf> {
    match platform {
        PlatformKind::GenericDesktop => Vec::new(),
        PlatformKind::MacOsApp => vec![
            PathBuf::from("osx").join(format!("test-{case}.plist")),
            PathBuf::from("osx").join("Images.xcassets"),
            PathBuf::from("osx").join(format!("test-{case}.xib")),
        ],
        PlatformKind::Ios => {
            let base = PathBuf::from(ALL_CASE).join("ios");
            vec![
                base.join("test-all.plist"),
                base.join("Images.xcassets"),
                base.join("test-all.xib"),
            ]
        }
        PlatformKind::Android => {
            let base = PathBuf::from(ALL_CASE).join("android");
            let mut resources = vec![
                base.join("AndroidManifest.xml"),
                base.join("layout").join("main.xml"),
                base.join("values").join("strings.xml"),
            ];
            for density in ["ldpi", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
                resources.push(base.join(format!("drawable-{density}")).join("icon.png"));
            }
            resources
        }
        PlatformKind::Tizen => {
            let base = PathBuf::from(ALL_CASE).join("tizen");
            vec![
                base.join("tizen-manifest.xml"),
                base.join("res").join("tizenapp.png"),
            ]
        }
    }
}

/// Platform-specific sources appended after the test-case entry points
fn extra_sources(platform: PlatformKind, manifest: &ProjectManifest) -> Vec<PathBuf> {
    match platform {
        PlatformKind::Ios => vec![PathBuf::from(ALL_CASE).join("ios").join("viewcontroller.m")],
        PlatformKind::Android => vec![PathBuf::from(ALL_CASE)
            .join("android")
            .join("java")
            .join("com")
            .join(&manifest.organization)
            .join(&manifest.module)
            .join("test")
            .join("TestActivity.java")],
        PlatformKind::GenericDesktop | PlatformKind::MacOsApp | PlatformKind::Tizen => Vec::new(),
    }
}
