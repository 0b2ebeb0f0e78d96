//! Media type to file extension mapping.

/// Maps a media type (parameters already stripped) to a file extension,
/// dot included. Returns `None` for types not in the table.
pub(super) fn extension_for(media_type: &str) -> Option<&'static str> {
    let extension = match media_type.to_ascii_lowercase().as_str() {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "image/bmp" => ".bmp",
        "image/tiff" => ".tiff",
        "image/svg+xml" => ".svg",
        "image/avif" => ".avif",
        "image/heic" => ".heic",
        "image/x-icon" | "image/vnd.microsoft.icon" => ".ico",
        _ => return None,
    };

    Some(extension)
}
