//! Query-string encoding.

/// Percent-encode query pairs into `a=1&b=2` form.
///
/// Pairs with an empty value are omitted entirely; returns `None` when
/// nothing remains, so callers can skip the `?` separator.
pub fn encode(pairs: &[(String, String)]) -> Option<String> {
    let encoded: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| {
            format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
        })
        .collect();
    if encoded.is_empty() {
        None
    } else {
        Some(encoded.join("&"))
    }
}
