#[derive(Debug, thiserror::Error)]
pub enum VetError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read file {}: {source}", .path.display())]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog YAML at {path}: {source}")]
    CatalogYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("duplicate clinic id in catalog: {0}")]
    DuplicateClinic(String),
    #[error("failed to load fragment {path}: {source}")]
    FragmentLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unsafe fragment path: {0}")]
    UnsafeFragmentPath(String),
}

pub type VetResult<T> = std::result::Result<T, VetError>;
