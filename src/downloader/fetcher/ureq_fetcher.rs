use std::error::Error;
use std::io::{self, Read};
use std::time::Duration;

use super::{FetchResult, ImageFetcher};

const USER_AGENT: &str = "ImageFetcher/1.0 (Community Image Download Tool)";
const TIMEOUT: Duration = Duration::from_secs(30);

pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl ImageFetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> FetchResult {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let headers = collect_headers(&response);

                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                match body {
                    Ok(body) => FetchResult::ok(headers, body),
                    Err(err) if is_timeout(&err) => FetchResult::timeout(),
                    Err(err) => FetchResult::network_error(err.to_string()),
                }
            }

            Err(ureq::Error::Status(code, _)) => FetchResult::http_status(code),

            Err(ureq::Error::Transport(transport)) => classify_transport(transport),
        }
    }
}

fn collect_headers(response: &ureq::Response) -> Vec<(String, String)> {
    response
        .headers_names()
        .into_iter()
        .filter_map(|name| {
            let value = response.header(&name)?.to_string();
            Some((name, value))
        })
        .collect()
}

fn classify_transport(transport: ureq::Transport) -> FetchResult {
    let timed_out = transport
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(|err| is_timeout(err))
        .unwrap_or(false);

    if timed_out {
        return FetchResult::timeout();
    }

    match transport.kind() {
        ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
            FetchResult::connection_failed()
        }
        _ => FetchResult::network_error(transport.to_string()),
    }
}

fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}

impl UreqFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .build();

        UreqFetcher { agent }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
