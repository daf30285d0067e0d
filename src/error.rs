use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing directory: {0}")]
    MissingDirectory(String),

    #[error("External tool failed: {0}")]
    Tool(String),
}

pub type Result<T> = std::result::Result<T, DocgenError>;
