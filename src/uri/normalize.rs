//! URI normalization and equivalence, RFC 3986 section 6.
//!
//! This is kept separate from [`Uri`] itself, normalizing is opt-in and never
//! changes the components of a `Uri`.

use std::borrow::Cow;

use crate::uri::percent::normalize_triplets;
use crate::Uri;

/// Returns the normalized form of `uri`.
///
/// On top of the normalization done when a [`Uri`] is created (lowercase scheme
/// and host) this:
///  * uppercases the hex digits in percent-encoded triplets,
///  * decodes triplets that encode an unreserved character,
///  * sorts the query parameters by name, keeping the order of parameters with
///    the same name,
///  * uses `/` as path for a URI with a scheme and an empty path.
pub fn normalize(uri: &Uri) -> String {
    let mut path = normalize_triplets(&uri.path()).into_owned();
    if path.is_empty() && !uri.scheme.is_empty() {
        path.push('/');
    }

    let normalized = Uri {
        scheme: uri.scheme.clone(),
        user_info: normalize_triplets(&uri.user_info).into_owned(),
        host: normalize_triplets(&uri.host).into_owned(),
        port: uri.port(),
        path,
        query: normalize_query(&uri.query()),
        fragment: normalize_triplets(&uri.fragment()).into_owned(),
    };
    normalized.to_string()
}

/// Returns `true` if the normalized forms of `left` and `right` are equal.
pub fn equivalent(left: &Uri, right: &Uri) -> bool {
    normalize(left) == normalize(right)
}

/// Sort the parameters in `query` by name.
fn normalize_query(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<Cow<'_, str>> = query.split('&').map(normalize_triplets).collect();
    params.sort_by(|left, right| param_name(left).cmp(param_name(right)));
    params.join("&")
}

/// Returns the name of the query parameter `param`.
fn param_name(param: &str) -> &str {
    match param.split_once('=') {
        Some((name, _)) => name,
        None => param,
    }
}
