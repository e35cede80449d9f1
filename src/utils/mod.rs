use url::Url;

const FALLBACK_FILENAME: &str = "download.bin";

/// Derive a destination filename from the last path segment of a URL,
/// falling back to a fixed name when the path yields nothing usable.
pub fn filename_from_url(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}
