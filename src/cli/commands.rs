use std::path::PathBuf;

use clap::Parser;

use infra_docgen::tools::SystemRunner;
use infra_docgen::Result;

#[derive(Parser)]
#[command(name = "infra-docgen")]
#[command(about = "Regenerates the auto-generated README section from Terraform modules and Kubernetes manifests")]
#[command(version)]
pub struct Cli {
    /// Project root containing `modules/` and `kubernetes/manifests/`
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

pub fn update(cli: &Cli) -> Result<()> {
    infra_docgen::update_readme(&cli.root, &SystemRunner)
}
