//! Emitter interface consumed by build-graph writers

use crate::artifact::Artifact;
use crate::error::PlanResult;

/// Consumer of planned artifacts
///
/// Artifacts arrive in dependency order, library first, and each declaration
/// is internally consistent; an emitter never reorders or re-resolves them.
pub trait Emitter {
    /// Emit build rules for one artifact
    fn emit(&mut self, artifact: &Artifact) -> PlanResult<()>;

    /// Called once after the last artifact has been emitted
    fn finish(&mut self) -> PlanResult<()> {
        Ok(())
    }
}

/// Feed a plan through an emitter, preserving plan order
pub fn emit_plan(plan: &[Artifact], emitter: &mut dyn Emitter) -> PlanResult<()> {
    for artifact in plan {
        emitter.emit(artifact)?;
    }
    emitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactKind;
    use std::path::PathBuf;

    /// Records emitted artifact names in arrival order
    #[derive(Default)]
    struct RecordingEmitter {
        names: Vec<String>,
        finished: bool,
    }

    impl Emitter for RecordingEmitter {
        fn emit(&mut self, artifact: &Artifact) -> PlanResult<()> {
            self.names.push(artifact.name.clone());
            Ok(())
        }

        fn finish(&mut self) -> PlanResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_emit_preserves_plan_order() {
        let plan = vec![
            Artifact::new("obj", ArtifactKind::Library)
                .with_sources(vec![PathBuf::from("obj.c")]),
            Artifact::new("test-obj", ArtifactKind::Binary)
                .with_sources(vec![PathBuf::from("obj/main.c")])
                .with_implicit_deps(vec!["obj".to_string()]),
        ];

        let mut emitter = RecordingEmitter::default();
        emit_plan(&plan, &mut emitter).unwrap();

        assert_eq!(emitter.names, vec!["obj", "test-obj"]);
        assert!(emitter.finished);
    }
}
