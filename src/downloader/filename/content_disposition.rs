//! Content-Disposition `filename=` parameter extraction.

/// Extracts the `filename=` value from a Content-Disposition header.
///
/// Accepts a value quoted with `"` or `'` (quotes stripped) or a bare token
/// terminated by `;`. The result is percent-decoded. Returns `None` when the
/// parameter is absent or its value is empty, so resolution can fall through
/// to the URL path.
pub(super) fn filename_parameter(header_value: &str) -> Option<String> {
    let (_, rest) = header_value.split_once("filename=")?;
    let rest = rest.trim_start();

    let raw = match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &rest[1..];
            match inner.find(quote) {
                Some(end) => &inner[..end],
                None => inner,
            }
        }
        _ => rest.split(';').next().unwrap_or(rest).trim(),
    };

    if raw.is_empty() {
        return None;
    }

    Some(super::percent_decode(raw))
}
