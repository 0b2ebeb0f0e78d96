mod ureq_fetcher;

pub use ureq_fetcher::UreqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

/// Headers and body of one successful HTTP exchange. Dropped as soon as the
/// body has been written to disk.
#[derive(Debug)]
pub struct FetchedResponse {
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl FetchedResponse {
    pub fn new(headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self { headers, body }
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Transport-level outcome of one GET, before it is mapped into the
/// downloader's error taxonomy.
#[derive(Debug)]
pub enum FetchResult {
    Ok(FetchedResponse),
    HttpStatus(u16),
    Timeout,
    ConnectionFailed,
    NetworkError(String),
}

impl FetchResult {
    pub fn ok(headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self::Ok(FetchedResponse::new(headers, body))
    }

    pub fn http_status(code: u16) -> Self {
        Self::HttpStatus(code)
    }

    pub fn timeout() -> Self {
        Self::Timeout
    }

    pub fn connection_failed() -> Self {
        Self::ConnectionFailed
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> FetchResult;
}
