/// Errors raised while building graphs from k-mers and reads, or while parsing inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no k-mers or reads were supplied")]
    EmptyInput,

    #[error("k-mer size must be at least 2, got {k}")]
    KmerTooShort { k: usize },

    #[error("k-mer size must be at most 255, got {k}")]
    KmerTooLong { k: usize },

    #[error("k-mer '{kmer}' has length {found}, expected {expected}")]
    InconsistentKmerLength {
        expected: usize,
        found: usize,
        kmer: String,
    },

    #[error("read '{read}' contains non-ASCII symbols")]
    InvalidRead { read: String },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("graph has no Eulerian circuit")]
    NoEulerianCircuit,

    #[error("line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fastx(#[from] needletail::errors::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
