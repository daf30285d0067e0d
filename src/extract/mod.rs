//! Structural extraction from parsed configuration files.

pub mod manifest;
pub mod terraform;

pub use manifest::ManifestExtractor;
pub use terraform::TerraformExtractor;
