use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthError>;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("File IO error")]
    Io(#[from] std::io::Error),

    #[error("Failed to reserve point buffer")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("Invalid class definition '{name}': {reason}")]
    InvalidClass { name: String, reason: String },

    #[error("Failed to build normal distribution")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Binary point file has {len} bytes, not a whole number of xyz triples")]
    MalformedBinary { len: u64 },

    #[error("Invalid progress bar template")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}
