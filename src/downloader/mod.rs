mod fetcher;
mod filename;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use fetcher::{FetchResult, FetchedResponse, ImageFetcher, UreqFetcher};
pub use filename::resolve_filename;

#[cfg(test)]
use fetcher::MockFetcher;

/// Failure preparing the target directory. Either kind halts the run before
/// any network call.
#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("permission denied: cannot create directory")]
    Permission,
    #[error("unexpected error creating directory: {0}")]
    Other(String),
}

/// One terminal failure kind per run. Nothing is retried.
#[derive(Debug, Error, PartialEq)]
pub enum DownloadError {
    #[error("connection timeout: the server took too long to respond")]
    Timeout,
    #[error("connection error: could not connect to the server")]
    Connection,
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("permission denied: cannot write to file")]
    FileWritePermission,
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Confirmation of a completed download. `size` is read back from disk
/// after the write.
#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub filename: String,
    pub file: PathBuf,
    pub size: u64,
}

pub struct Downloader<F: ImageFetcher> {
    fetcher: F,
    directory: PathBuf,
}

impl<F> Downloader<F>
where
    F: ImageFetcher,
{
    /// Prepares the target directory and wraps the given fetcher. Fails
    /// without touching the network when the directory cannot be created.
    pub fn with_fetcher(directory: &str, fetcher: F) -> Result<Self, DirectoryError> {
        let directory = prepare_directory(directory)?;

        Ok(Downloader { fetcher, directory })
    }

    /// Fetches `url` and writes the body under the resolved filename,
    /// silently overwriting any existing file at that path.
    pub fn download(&self, url: &str) -> Result<Download, DownloadError> {
        match self.fetcher.fetch(url) {
            FetchResult::Timeout => Err(DownloadError::Timeout),
            FetchResult::ConnectionFailed => Err(DownloadError::Connection),
            FetchResult::HttpStatus(code) => Err(DownloadError::HttpStatus(code)),
            FetchResult::NetworkError(message) => Err(DownloadError::Network(message)),

            FetchResult::Ok(response) => self.save(url, response),
        }
    }

    fn save(&self, url: &str, response: FetchedResponse) -> Result<Download, DownloadError> {
        let filename = resolve_filename(url, &response);
        let file = self.directory.join(&filename);

        fs::write(&file, response.into_body()).map_err(classify_write_error)?;

        let size = fs::metadata(&file).map_err(classify_write_error)?.len();

        Ok(Download {
            source: url.to_string(),
            filename,
            file,
            size,
        })
    }
}

impl Downloader<UreqFetcher> {
    pub fn new(directory: &str) -> Result<Self, DirectoryError> {
        Downloader::with_fetcher(directory, UreqFetcher::new())
    }
}

/// Ensures the target directory exists, creating missing parents. Relative
/// names are resolved against the current working directory. Idempotent.
pub fn prepare_directory(name: &str) -> Result<PathBuf, DirectoryError> {
    let path = Path::new(name);

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(classify_directory_error)?
            .join(path)
    };

    if !absolute.exists() {
        fs::create_dir_all(&absolute).map_err(classify_directory_error)?;
    }

    Ok(absolute)
}

fn classify_directory_error(err: io::Error) -> DirectoryError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        DirectoryError::Permission
    } else {
        DirectoryError::Other(err.to_string())
    }
}

fn classify_write_error(err: io::Error) -> DownloadError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        DownloadError::FileWritePermission
    } else {
        DownloadError::Unexpected(err.to_string())
    }
}
