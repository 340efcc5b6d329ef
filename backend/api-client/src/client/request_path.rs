//! Validation of caller-supplied request paths and resolution against the origin.
//!
//! Paths are built from caller identifiers, so they are treated as untrusted:
//! they must be root-relative, carry no fragment, no backslashes or control
//! characters, and contain no `.`/`..` segment even after percent-decoding.

use crate::error::ClientError;

use url::Url;

#[track_caller]
pub(crate) fn validate_path(path: &str) -> Result<(), ClientError> {
    if path.is_empty() {
        return Err(ClientError::invalid_path(path, "path cannot be empty"));
    }

    if !path.starts_with('/') {
        return Err(ClientError::invalid_path(
            path,
            "path must be root-relative (start with '/')",
        ));
    }

    if path.starts_with("//") {
        return Err(ClientError::invalid_path(
            path,
            "protocol-relative paths would replace the host",
        ));
    }

    if path.contains('#') {
        return Err(ClientError::invalid_path(path, "fragments are not allowed"));
    }

    if path.contains('\\') {
        return Err(ClientError::invalid_path(path, "backslashes are not allowed"));
    }

    if path.chars().any(char::is_control) {
        return Err(ClientError::invalid_path(
            path,
            "control characters are not allowed",
        ));
    }

    let path_part = path.split_once('?').map_or(path, |(before, _)| before);
    for segment in path_part.split('/') {
        if is_dot_segment(segment) {
            return Err(ClientError::invalid_path(
                path,
                "'.' and '..' segments are not allowed",
            ));
        }
    }

    Ok(())
}

/// Resolve a validated `path` (with any query it carries) against `base`.
#[track_caller]
pub(crate) fn resolve(base: &Url, path: &str) -> Result<Url, ClientError> {
    validate_path(path)?;

    let url = base
        .join(path)
        .map_err(|e| ClientError::invalid_path(path, format!("cannot be resolved: {e}")))?;

    if url.origin() != base.origin() {
        return Err(ClientError::invalid_path(
            path,
            "resolved URL points outside the configured origin",
        ));
    }

    Ok(url)
}

/// True if the segment is `.`/`..` once decoded, including encoded separators
/// that would split it into such pieces server-side.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = urlencoding::decode_binary(segment.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);

    decoded
        .split(['/', '\\'])
        .any(|piece| piece == "." || piece == "..")
}
