//! External tool collaborators: diagram generation and state queries.
//!
//! Subprocess invocation goes through the [`CommandRunner`] trait so the
//! pipeline can be exercised with stubs instead of the real executables.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tracing::warn;

use crate::error::{DocgenError, Result};

/// Relative path of the generated diagram image.
pub const DIAGRAM_IMAGE: &str = "docs/diagrams/infrastructure.png";

/// Output of one external command.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
}

/// Injected subprocess capability.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ToolOutput>;
}

/// Runs commands on the host system.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<ToolOutput> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| DocgenError::Tool(format!("failed to run {program}: {e}")))?;

        Ok(ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Wrapper around the `terraform-visual` executable.
pub struct DiagramGenerator<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> DiagramGenerator<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Render the diagram image for the given environment. Returns the image
    /// path relative to the project root, or `None` when the tool is missing
    /// or fails; the run continues either way.
    pub fn generate(&self, root: &Path, env_dir: &Path) -> Option<PathBuf> {
        let output_path = root.join(DIAGRAM_IMAGE);
        if let Some(diagram_dir) = output_path.parent() {
            if let Err(err) = std::fs::create_dir_all(diagram_dir) {
                warn!("Could not create {}: {}", diagram_dir.display(), err);
                return None;
            }
        }

        let env = env_dir.display().to_string();
        let out = output_path.display().to_string();
        let result = self.runner.run(
            "terraform-visual",
            &["--dir", &env, "--output", &out],
            None,
        );

        match result {
            Ok(output) if output.success => Some(PathBuf::from(DIAGRAM_IMAGE)),
            Ok(_) => {
                warn!("terraform-visual exited with a failure; skipping diagram image");
                None
            }
            Err(err) => {
                warn!("Could not generate infrastructure diagram: {}", err);
                None
            }
        }
    }
}

/// Wrapper around `terraform output -json`, used to inspect the deployed
/// output values of an environment. Failures degrade to an empty map.
pub struct StateQuery<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> StateQuery<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    pub fn outputs(&self, env_dir: &Path) -> serde_json::Map<String, Value> {
        match self.runner.run("terraform", &["output", "-json"], Some(env_dir)) {
            Ok(output) if output.success => serde_json::from_str::<Value>(&output.stdout)
                .ok()
                .and_then(|v| v.as_object().cloned())
                .unwrap_or_default(),
            _ => serde_json::Map::new(),
        }
    }
}
