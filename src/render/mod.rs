//! Rendering of extracted metadata into Markdown and Mermaid text.

pub mod markdown;
pub mod mermaid;
