//! Dictionary loading collaborators: file and network sources. Neither
//! touches the trie directly; each returns the parsed phrase list for the
//! caller to feed into [`crate::Filter::load_many`].

use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;

/// One phrase per line, UTF-8, trailing newline optional, blank lines
/// ignored (spec §6).
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn is_network_path(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let phrases = parse_lines(&contents);
    info!(count = phrases.len(), "loaded dictionary file");
    Ok(phrases)
}

#[instrument(skip(url))]
pub async fn load_url(url: &str) -> Result<Vec<String>> {
    let body = reqwest::get(url).await?.text().await?;
    let phrases = parse_lines(&body);
    info!(count = phrases.len(), "loaded dictionary over network");
    Ok(phrases)
}
