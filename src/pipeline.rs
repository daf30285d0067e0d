//! Linear pipeline: walk the project, extract metadata, render the
//! sections, and rewrite the README around the sentinel marker.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{ManifestExtractor, TerraformExtractor};
use crate::project::{ManifestRecord, ModuleRecord, ProjectWalker, DEFAULT_ENV_DIR};
use crate::readme;
use crate::render::{markdown, mermaid};
use crate::tools::{CommandRunner, DiagramGenerator, StateQuery};

/// Run the whole pipeline against one project root. Fatal only when the
/// `modules/` directory is missing or the README cannot be written;
/// everything else degrades to omitted content.
pub fn update_readme(root: &Path, runner: &dyn CommandRunner) -> Result<()> {
    let walker = ProjectWalker::new(root);

    let modules: Vec<ModuleRecord> = walker
        .module_files()?
        .iter()
        .map(|(name, files)| TerraformExtractor::scan_module(name, files))
        .collect();

    let manifests: Vec<ManifestRecord> = walker
        .manifest_files()
        .iter()
        .map(|path| ManifestExtractor::scan_file(path))
        .collect();

    let env_dir = root.join(DEFAULT_ENV_DIR);

    let deployed = StateQuery::new(runner).outputs(&env_dir);
    if !deployed.is_empty() {
        debug!("terraform reports {} deployed output value(s)", deployed.len());
    }

    let image = DiagramGenerator::new(runner)
        .generate(root, &env_dir)
        .map(|p| p.to_string_lossy().into_owned());

    let overview = mermaid::diagram(&modules, &manifests);
    let sections = vec![
        markdown::diagram_section(&overview, image.as_deref()),
        markdown::module_section(&modules),
        markdown::kubernetes_section(&manifests),
    ];

    let readme_path = root.join("README.md");
    let prefix = readme::load_prefix(&readme_path);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    readme::write(&readme_path, &readme::merge(&prefix, &timestamp, &sections))?;

    info!(
        "README.md updated ({} modules, {} manifest files)",
        modules.len(),
        manifests.len()
    );
    Ok(())
}
