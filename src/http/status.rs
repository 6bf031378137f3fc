/// Offset of the three status digits in a well-formed `HTTP/1.x NNN` line.
const STATUS_OFFSET: usize = 9;
const STATUS_LEN: usize = 3;

/// Extracts the three-character status code from a raw response.
///
/// Returns `None` when fewer than 12 bytes arrived, instead of reading
/// garbage past a truncated status line.
pub(super) fn status_code(response: &[u8]) -> Option<String> {
    let code = response.get(STATUS_OFFSET..STATUS_OFFSET + STATUS_LEN)?;
    Some(String::from_utf8_lossy(code).into_owned())
}

/// True for codes in the 4xx and 5xx classes.
pub(crate) fn is_error_code(code: &str) -> bool {
    matches!(code.as_bytes().first(), Some(b'4' | b'5'))
}
