use std::path::PathBuf;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Edge multiplicity must be at least 2, got {0}")]
    EdgeMultiplicityTooSmall(usize),
    #[error("Thread count must be at least 1, got {0}")]
    ThreadCountTooSmall(usize),
    #[error("Vertex count must be at least 1")]
    NoVertices,
    #[error("Graph with {vertices} vertices and multiplicity {multiplicity} is too large")]
    TooManyStubs { vertices: usize, multiplicity: usize },
    #[error("Attractiveness must be a positive finite number, got {0}")]
    InvalidAttractiveness(f64),
    #[error("Invalid attractiveness sweep: start = {start}, floor = {floor}, step = {step}")]
    InvalidSweep { start: f64, floor: f64, step: f64 },
    #[error("BRGEN_MAX_THREADS must be a positive integer, got {0:?}")]
    InvalidMaxThreads(String),
    #[error("Malformed size specifier {0:?}, expected <vertices>;<multiplicity>")]
    MalformedSizeSpec(String),
}

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Degree ledger exhausted: {len} stubs already recorded, room for {capacity}")]
    LedgerExhausted { len: usize, capacity: usize },
    #[error("Fold range {from}..{to} is not aligned to multiplicity {multiplicity}")]
    MisalignedFoldRange {
        from: usize,
        to: usize,
        multiplicity: usize,
    },
    #[error("Fold range {from}..{to} is outside of the stub graph with {len} stubs")]
    FoldRangeOutOfBounds { from: usize, to: usize, len: usize },
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Failed to write to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode document: {0}")]
    Json(#[from] serde_json::Error),
}
