use crate::domain::model::PathSegments;
use crate::utils::error::Result;
use std::borrow::Cow;
use url::Url;

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Splits a URL path into router segments.
///
/// Empty pieces are dropped and each piece is percent-decoded; a piece that
/// does not decode to UTF-8 is kept as written.
pub fn segments_from_path(path: &str) -> PathSegments {
    path.split('/')
        .filter(|piece| !piece.is_empty())
        .map(decode_segment)
        .collect()
}

/// Router segments of an absolute URL. Query and fragment are ignored.
pub fn segments_from_url(input: &str) -> Result<PathSegments> {
    let url = Url::parse(input)?;
    let segments = url
        .path_segments()
        .map(|pieces| {
            pieces
                .filter(|piece| !piece.is_empty())
                .map(decode_segment)
                .collect()
        })
        .unwrap_or_default();
    Ok(segments)
}

/// Accepts either an absolute URL or a bare path such as `/@nuxt/kit/v/1.0.0`.
///
/// Only the part before any query or fragment decides which form it is.
pub fn segments_from_location(input: &str) -> Result<PathSegments> {
    let path = input.split(['?', '#']).next().unwrap_or_default();

    if path.contains("://") {
        return segments_from_url(input);
    }

    Ok(segments_from_path(path))
}
