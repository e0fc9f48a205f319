//! `{name}` placeholder substitution for path templates.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::MissingPathParam;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("valid regex"));

/// Replace every `{name}` placeholder in `template` with the
/// percent-encoded value from `params`.
///
/// A placeholder with no matching entry substitutes an empty string and is
/// recorded; substitution keeps going so one pass collects every missing
/// name, not just the first.
pub fn substitute(
    template: &str,
    params: &BTreeMap<String, String>,
) -> (String, Vec<MissingPathParam>) {
    let mut missing = Vec::new();
    let path = PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match params.get(name) {
                Some(value) => urlencoding::encode(value).into_owned(),
                None => {
                    missing.push(MissingPathParam(name.to_string()));
                    String::new()
                }
            }
        })
        .into_owned();
    (path, missing)
}
