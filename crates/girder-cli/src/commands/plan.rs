//! Plan command - resolve platform facts and write the artifact plan

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use girder_plan::{
    emit_plan, plan, PlanRequest, PlanResult, PlatformKind, ProjectManifest, ToolchainQuery,
};

use crate::emit::{plan_document, PlanFileWriter};
use crate::host;

/// Plan command arguments
#[derive(Default)]
pub struct PlanArgs {
    /// Path to the project manifest
    pub manifest: PathBuf,
    /// Target platform name; host platform when absent
    pub platform: Option<String>,
    /// Toolchain links all test cases into one binary
    pub monolithic: bool,
    /// Plan as a submodule regardless of the manifest flag
    pub submodule: bool,
    /// Pass-through build configurations
    pub configs: Vec<String>,
    /// Pass-through test include paths
    pub include_paths: Vec<PathBuf>,
    /// Output plan file
    pub output: PathBuf,
    /// Print the plan to stdout as JSON instead of writing the plan file
    pub json: bool,
    /// Quiet output (errors only)
    pub quiet: bool,
}

/// Toolchain facts taken from command-line flags
struct FlagQuery {
    platform: Option<String>,
    monolithic: bool,
    configs: Vec<String>,
}

impl ToolchainQuery for FlagQuery {
    fn platform_kind(&self) -> PlanResult<PlatformKind> {
        match &self.platform {
            Some(name) => PlatformKind::from_name(name),
            None => Ok(host::host_platform()),
        }
    }

    fn is_monolithic(&self) -> PlanResult<bool> {
        Ok(self.monolithic)
    }

    fn configurations(&self) -> PlanResult<Vec<String>> {
        Ok(self.configs.clone())
    }
}

/// Run the plan command
pub fn run(args: PlanArgs) -> Result<()> {
    let mut manifest = ProjectManifest::from_file(&args.manifest)
        .with_context(|| format!("Failed to load {}", args.manifest.display()))?;

    // The invoking build decides submodule consumption, not just the manifest
    if args.submodule {
        manifest.submodule = true;
    }

    let query = FlagQuery {
        platform: args.platform,
        monolithic: args.monolithic,
        configs: args.configs,
    };
    let request = PlanRequest::from_query(&query)
        .context("Failed to resolve platform facts")?
        .with_include_paths(args.include_paths);

    let artifacts = plan(&manifest, &request).context("Planning failed")?;

    if args.json {
        let document = plan_document(&manifest, &request, &artifacts);
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let mut writer = PlanFileWriter::new(&args.output, &manifest, &request);
    emit_plan(&artifacts, &mut writer)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if !args.quiet {
        println!(
            "{} {} artifacts for {} ({} linkage)",
            "Planned".green().bold(),
            artifacts.len(),
            request.platform,
            request.linkage
        );
        for artifact in &artifacts {
            println!("  {:<10} {}", artifact.kind.to_string(), artifact.name);
        }
        println!("Plan written to {}", args.output.display());
    }

    Ok(())
}
