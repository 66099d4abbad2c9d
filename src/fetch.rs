//! Fetching remote videos over HTTP for offline processing.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Errors that can occur while downloading a video.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request failed or returned a non-success status.
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// A filesystem operation on the download target failed.
    #[error("io error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Download a video over HTTP into `output_dir` and return the saved path.
///
/// The directory is created if it does not exist. When `file_name` is `None`
/// the name is taken from the last path segment of the URL, falling back to
/// `video.mp4` when the URL has no usable segment.
///
/// # Arguments
/// * `url` - Direct URL of the video file
/// * `output_dir` - Directory the video is saved into
/// * `file_name` - Optional name for the saved file
///
/// # Returns
/// The path of the downloaded file, or a [`FetchError`].
pub fn download_video(
    url: &str,
    output_dir: impl AsRef<Path>,
    file_name: Option<&str>,
) -> Result<PathBuf, FetchError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|source| FetchError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let name = file_name.unwrap_or_else(|| file_name_from_url(url));
    let path = output_dir.join(name);

    let response = ureq::get(url).call().map_err(|source| FetchError::Http {
        url: url.to_string(),
        source: Box::new(source),
    })?;

    let mut reader = response.into_reader();
    let mut file = File::create(&path).map_err(|source| FetchError::Io {
        path: path.clone(),
        source,
    })?;
    io::copy(&mut reader, &mut file).map_err(|source| FetchError::Io {
        path: path.clone(),
        source,
    })?;

    info!("download completed, video saved to {}", path.display());
    Ok(path)
}

/// Derive a file name from the last path segment of a URL, ignoring query
/// and fragment parts.
fn file_name_from_url(url: &str) -> &str {
    let trimmed = match url.find(['?', '#']) {
        Some(idx) => &url[..idx],
        None => url,
    };
    match trimmed.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => "video.mp4",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_plain_url() {
        assert_eq!(
            file_name_from_url("https://example.com/media/clip.mp4"),
            "clip.mp4"
        );
    }

    #[test]
    fn test_file_name_strips_query_and_fragment() {
        assert_eq!(
            file_name_from_url("https://example.com/media/clip.mp4?token=abc#t=10"),
            "clip.mp4"
        );
    }

    #[test]
    fn test_file_name_falls_back_on_trailing_slash() {
        assert_eq!(file_name_from_url("https://example.com/media/"), "video.mp4");
    }
}
