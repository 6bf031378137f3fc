/// Host and request path derived from a raw URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub path: String,
}

/// Splits a raw URL into the host and the request path.
///
/// A literal leading `http://` is stripped first, then a literal leading
/// `https://` from what remains; the checks are literal substring matches,
/// so `http://` never fires on an `https://` URL. The first `/` afterwards
/// separates host from path, and the path keeps its leading slash. No
/// normalization, no percent-decoding, no default scheme, no port handling;
/// every input produces a pair.
pub fn split_url(raw: &str) -> Target {
    let rest = raw.strip_prefix("http://").unwrap_or(raw);
    let rest = rest.strip_prefix("https://").unwrap_or(rest);

    match rest.find('/') {
        Some(index) => {
            let (host, path) = rest.split_at(index);
            Target {
                host: host.to_owned(),
                path: path.to_owned(),
            }
        }
        None => Target {
            host: rest.to_owned(),
            path: String::new(),
        },
    }
}
