mod downloader;

pub use downloader::{
    prepare_directory, resolve_filename, DirectoryError, Download, DownloadError, Downloader,
    FetchResult, FetchedResponse, ImageFetcher, UreqFetcher,
};
