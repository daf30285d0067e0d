pub mod error;
pub mod extract;
pub mod pipeline;
pub mod project;
pub mod readme;
pub mod render;
pub mod tools;

pub use error::{DocgenError, Result};
pub use extract::{ManifestExtractor, TerraformExtractor};
pub use pipeline::update_readme;
pub use project::{
    ManifestEntry, ManifestRecord, ModuleRecord, ProjectWalker, VariableRecord,
};
pub use tools::{CommandRunner, DiagramGenerator, StateQuery, SystemRunner, ToolOutput};
