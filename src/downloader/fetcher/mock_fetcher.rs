use std::cell::RefCell;

use super::{FetchResult, ImageFetcher};

pub struct MockFetcher {
    results: RefCell<Vec<FetchResult>>,
}

impl ImageFetcher for MockFetcher {
    fn fetch(&self, _url: &str) -> FetchResult {
        let mut results = self.results.borrow_mut();

        if results.is_empty() {
            FetchResult::network_error("no scripted response")
        } else {
            results.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(results: Vec<FetchResult>) -> Self {
        Self {
            results: RefCell::new(results),
        }
    }
}
