//! Filename resolution for a fetched image.
//!
//! Picks the name to save under from, in order: the Content-Disposition
//! header, the last dotted segment of the URL path, or a generic
//! `image<ext>` derived from the Content-Type.

mod content_disposition;
mod media_type;

use percent_encoding::percent_decode_str;
use url::Url;

use super::fetcher::FetchedResponse;

/// Extension used when the Content-Type is absent or unmapped.
const DEFAULT_EXTENSION: &str = ".bin";

/// Resolves the filename for a download. Pure function of the URL and the
/// response headers; always yields a non-empty name.
///
/// A Content-Disposition filename is used verbatim, path separators
/// included. That matches the upstream tool; the trade-off is recorded in
/// DESIGN.md.
pub fn resolve_filename(url: &str, response: &FetchedResponse) -> String {
    if let Some(name) = response
        .header("Content-Disposition")
        .and_then(content_disposition::filename_parameter)
    {
        return name;
    }

    if let Some(name) = dotted_url_segment(url) {
        return name;
    }

    let media_type = response
        .header("Content-Type")
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .unwrap_or("");

    let extension = media_type::extension_for(media_type).unwrap_or(DEFAULT_EXTENSION);

    format!("image{extension}")
}

/// Last path segment of the URL, percent-decoded, if it looks like a
/// filename (non-empty and containing a dot). A bare trailing dot counts.
fn dotted_url_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;

    if segment.is_empty() || !segment.contains('.') {
        return None;
    }

    Some(percent_decode(segment))
}

pub(super) fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(headers: &[(&str, &str)]) -> FetchedResponse {
        let headers = headers
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();

        FetchedResponse::new(headers, vec![])
    }

    #[test]
    fn content_disposition_wins_over_url_and_content_type() {
        let response = response(&[
            ("Content-Disposition", "attachment; filename=\"given.png\""),
            ("Content-Type", "image/jpeg"),
        ]);

        let name = resolve_filename("https://x.test/photos/other.jpeg", &response);

        assert_eq!(name, "given.png");
    }

    #[test]
    fn content_disposition_value_is_percent_decoded() {
        let response = response(&[("Content-Disposition", "inline; filename=\"cat%20pic.png\"")]);

        let name = resolve_filename("https://x.test/download", &response);

        assert_eq!(name, "cat pic.png");
    }

    #[test]
    fn content_disposition_path_separators_pass_through() {
        let response = response(&[(
            "Content-Disposition",
            "attachment; filename=\"../../etc/passwd\"",
        )]);

        let name = resolve_filename("https://x.test/a.png", &response);

        assert_eq!(name, "../../etc/passwd");
    }

    #[test]
    fn dotted_url_segment_is_used() {
        let response = response(&[("Content-Type", "image/jpeg")]);

        let name = resolve_filename(
            "https://x.test/photos/32690481/pexels-photo-32690481.jpeg",
            &response,
        );

        assert_eq!(name, "pexels-photo-32690481.jpeg");
    }

    #[test]
    fn url_segment_is_percent_decoded() {
        let response = response(&[]);

        let name = resolve_filename("https://x.test/shots/summer%20trip.jpeg", &response);

        assert_eq!(name, "summer trip.jpeg");
    }

    #[test]
    fn trailing_dot_segment_is_accepted() {
        let response = response(&[]);

        let name = resolve_filename("https://x.test/snapshot.", &response);

        assert_eq!(name, "snapshot.");
    }

    #[test]
    fn query_string_does_not_reach_the_segment() {
        let response = response(&[]);

        let name = resolve_filename("https://x.test/pic.jpg?token=a.b", &response);

        assert_eq!(name, "pic.jpg");
    }

    #[test]
    fn undotted_segment_falls_back_to_content_type() {
        let response = response(&[("Content-Type", "image/jpeg")]);

        let name = resolve_filename("https://x.test/download", &response);

        assert_eq!(name, "image.jpg");
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let response = response(&[("Content-Type", "image/png; charset=binary")]);

        let name = resolve_filename("https://x.test/download", &response);

        assert_eq!(name, "image.png");
    }

    #[test]
    fn unmapped_content_type_defaults_to_bin() {
        let response = response(&[("Content-Type", "application/octet-stream")]);

        let name = resolve_filename("https://x.test/download", &response);

        assert_eq!(name, "image.bin");
    }

    #[test]
    fn missing_content_type_defaults_to_bin() {
        let response = response(&[]);

        let name = resolve_filename("https://x.test/download", &response);

        assert_eq!(name, "image.bin");
    }

    #[test]
    fn unparseable_url_falls_through_to_content_type() {
        let response = response(&[("Content-Type", "image/gif")]);

        let name = resolve_filename("not a url", &response);

        assert_eq!(name, "image.gif");
    }
}
