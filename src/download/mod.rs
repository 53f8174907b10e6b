//! Forced file download
//!
//! Fetches a URL and saves the body to a local file named after the last
//! URL path segment.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a completed download
#[derive(Debug, Clone)]
pub struct Download {
    /// Source URL
    pub url: String,
    /// Path the body was written to
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes: u64,
}

/// Derive a local file name from the URL's final path segment.
///
/// Query strings and fragments are ignored; a URL with no usable path
/// segment falls back to "download".
pub fn file_name_from_url(url: &str) -> String {
    let trimmed = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);

    let mut segments = after_scheme.split('/');
    let _host = segments.next();
    match segments.filter(|s| !s.is_empty()).last() {
        Some(name) => name.to_string(),
        None => "download".to_string(),
    }
}

/// GET `url` and write the body into `dest_dir`, named after the URL.
pub fn download_to(url: &str, dest_dir: impl AsRef<Path>) -> Result<Download> {
    let dest_dir = dest_dir.as_ref();
    std::fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create directory: {:?}", dest_dir))?;

    let response = match ureq::get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            let text = resp.into_string().unwrap_or_default();
            bail!("Download failed ({}): {}", code, text);
        }
        Err(e) => return Err(e.into()),
    };

    let path = dest_dir.join(file_name_from_url(url));
    let mut file =
        File::create(&path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let bytes = io::copy(&mut response.into_reader(), &mut file)
        .context("Failed to write response body")?;

    Ok(Download {
        url: url.to_string(),
        path,
        bytes,
    })
}
