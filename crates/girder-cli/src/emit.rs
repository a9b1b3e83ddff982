//! Plan file writing
//!
//! The plan file is the hand-off to the downstream build-graph writer: one
//! JSON document carrying the pass-through toolchain facts and the planned
//! artifacts in dependency order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use girder_plan::{Artifact, Emitter, PlanRequest, PlanResult, ProjectManifest};

/// Assemble the plan document for one planning pass
pub fn plan_document(
    manifest: &ProjectManifest,
    request: &PlanRequest,
    artifacts: &[Artifact],
) -> serde_json::Value {
    serde_json::json!({
        "module": manifest.module,
        "platform": request.platform.name(),
        "linkage": request.linkage.to_string(),
        "configurations": request.configurations,
        "artifacts": artifacts,
    })
}

/// Emitter that writes the plan document to a file
pub struct PlanFileWriter {
    path: PathBuf,
    manifest: ProjectManifest,
    request: PlanRequest,
    artifacts: Vec<Artifact>,
}

impl PlanFileWriter {
    /// Create a writer for the given output path
    pub fn new(
        path: impl Into<PathBuf>,
        manifest: &ProjectManifest,
        request: &PlanRequest,
    ) -> Self {
        Self {
            path: path.into(),
            manifest: manifest.clone(),
            request: request.clone(),
            artifacts: Vec::new(),
        }
    }
}

impl Emitter for PlanFileWriter {
    fn emit(&mut self, artifact: &Artifact) -> PlanResult<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }

    fn finish(&mut self) -> PlanResult<()> {
        let document = plan_document(&self.manifest, &self.request, &self.artifacts);
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
