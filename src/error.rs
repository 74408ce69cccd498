use thiserror::Error;

/// Errors raised by the collaborators around the core engine: dictionary
/// loading and the HTTP boundary. The core trie/scan API itself never
/// returns an error (spec §7: "the core never panics on data content").
#[derive(Error, Debug)]
pub enum SensitiveError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch dictionary: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SensitiveError>;
