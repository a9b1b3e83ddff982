//! Init command - write a starter girder.toml

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use girder_plan::ProjectManifest;

/// Run the init command
pub fn run(module: &str, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join("girder.toml");

    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let manifest = ProjectManifest::new(module, vec![PathBuf::from(format!("{module}.c"))])
        .with_test_cases(vec![module.to_string()]);
    manifest
        .validate()
        .context("Invalid module name for manifest")?;

    let content = manifest.to_string().context("Failed to serialize manifest")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}
