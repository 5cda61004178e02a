//! Leaf-level value normalization.
//!
//! Two rules are applied while shapes are decoded:
//!
//! - **Assets**: a path written in the document (`img/logo.png`) becomes a URL
//!   under the static-asset root. Absolute URLs pass through untouched.
//! - **Lengths**: a bare number (`12`) gains the point unit (`"12pt"`). Strings
//!   are the author's explicit CSS value (`"40%"`) and pass through.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::DeckOptions;
use crate::value::Value;

/// Unit appended to bare numeric lengths.
pub const POINT_UNIT: &str = "pt";

/// Characters escaped in resolved asset paths. `/` separates segments and
/// `%` is left alone so pre-encoded names are not encoded twice.
const ASSET_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Resolve a document path to the URL the renderer should emit.
///
/// - `""` stays `""`
/// - `"https://host/a.png"` is returned unchanged
/// - `"img/a.png"` becomes `"/static/img/a.png"`, or `"static/img/a.png"`
///   when [`DeckOptions::relative_urls`] is set
pub fn resolve_asset(path: &str, options: &DeckOptions) -> String {
    if path.is_empty() {
        return String::new();
    }
    if is_absolute_url(path) {
        return path.to_string();
    }
    let encoded = utf8_percent_encode(path.trim_start_matches('/'), ASSET_PATH).to_string();
    let root = options.static_url.trim_end_matches('/');
    let resolved = if options.relative_urls {
        let root = root.trim_start_matches('/');
        if root.is_empty() {
            encoded
        } else {
            format!("{root}/{encoded}")
        }
    } else {
        format!("{root}/{encoded}")
    };
    log::trace!("resolved asset {path} -> {resolved}");
    resolved
}

/// Render a length value as a CSS length string.
///
/// Returns `None` for values that are neither strings nor numbers.
pub fn resolve_unit(value: &Value) -> Option<String> {
    match value {
        Value::Str(text) => Some(text.clone()),
        Value::Int(n) => Some(format!("{n}{POINT_UNIT}")),
        Value::Float(n) => Some(format!("{n}{POINT_UNIT}")),
        _ => None,
    }
}

/// True when `candidate` has a scheme, a host and a path (`https://x/y.png`).
///
/// Scheme-only forms (`mailto:a@b`), protocol-relative forms (`//cdn/x.png`)
/// and bare hosts (`https://x`) are all treated as asset paths.
fn is_absolute_url(candidate: &str) -> bool {
    let Some((scheme, rest)) = candidate.split_once(':') else {
        return false;
    };
    let scheme_ok = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok {
        return false;
    }
    let Some(rest) = rest.strip_prefix("//") else {
        return false;
    };
    let before_query = rest.split(['?', '#']).next().unwrap_or("");
    match before_query.find('/') {
        Some(slash) => slash > 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative() -> DeckOptions {
        DeckOptions::default().with_relative_urls(true)
    }

    #[test]
    fn empty_asset_stays_empty() {
        assert_eq!(resolve_asset("", &DeckOptions::default()), "");
        assert_eq!(resolve_asset("", &relative()), "");
    }

    #[test]
    fn absolute_url_unchanged() {
        let url = "https://x/y.png";
        assert_eq!(resolve_asset(url, &DeckOptions::default()), url);
        assert_eq!(resolve_asset(url, &relative()), url);
    }

    #[test]
    fn absolute_url_with_query_unchanged() {
        let url = "http://cdn.example.com/a/b.svg?v=3#frag";
        assert_eq!(resolve_asset(url, &DeckOptions::default()), url);
    }

    #[test]
    fn relative_path_resolves_under_static_root() {
        assert_eq!(
            resolve_asset("img/a.png", &DeckOptions::default()),
            "/static/img/a.png"
        );
    }

    #[test]
    fn relative_url_mode_drops_leading_slash() {
        assert_eq!(resolve_asset("img/a.png", &relative()), "static/img/a.png");
    }

    #[test]
    fn leading_slash_in_path_is_not_doubled() {
        assert_eq!(
            resolve_asset("/img/a.png", &DeckOptions::default()),
            "/static/img/a.png"
        );
    }

    #[test]
    fn custom_static_url() {
        let options = DeckOptions {
            static_url: "https://cdn.example.com/deck/".to_string(),
            ..DeckOptions::default()
        };
        assert_eq!(
            resolve_asset("img/a.png", &options),
            "https://cdn.example.com/deck/img/a.png"
        );
    }

    #[test]
    fn root_static_url_in_relative_mode() {
        let options = DeckOptions {
            static_url: "/".to_string(),
            relative_urls: true,
            ..DeckOptions::default()
        };
        assert_eq!(resolve_asset("img/a.png", &options), "img/a.png");
    }

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(
            resolve_asset("img/my photo.png", &DeckOptions::default()),
            "/static/img/my%20photo.png"
        );
    }

    #[test]
    fn incomplete_urls_are_treated_as_paths() {
        let options = DeckOptions::default();
        assert_eq!(resolve_asset("https://x", &options), "/static/https://x");
        assert_eq!(
            resolve_asset("mailto:me@example.com", &options),
            "/static/mailto:me@example.com"
        );
        assert_eq!(resolve_asset("//cdn/x.png", &options), "/static/cdn/x.png");
    }

    #[test]
    fn is_absolute_url_cases() {
        assert!(is_absolute_url("https://x/y.png"));
        assert!(is_absolute_url("ftp://host/"));
        assert!(!is_absolute_url("https://x"));
        assert!(!is_absolute_url("https:///y.png"));
        assert!(!is_absolute_url("1http://x/y"));
        assert!(!is_absolute_url("C:/images/a.png"));
        assert!(!is_absolute_url("img/a.png"));
    }

    #[test]
    fn numeric_unit_gains_points() {
        assert_eq!(resolve_unit(&Value::Int(12)).as_deref(), Some("12pt"));
        assert_eq!(resolve_unit(&Value::Float(1.5)).as_deref(), Some("1.5pt"));
    }

    #[test]
    fn string_unit_passes_through() {
        assert_eq!(resolve_unit(&Value::from("40%")).as_deref(), Some("40%"));
        assert_eq!(resolve_unit(&Value::from("")).as_deref(), Some(""));
    }

    #[test]
    fn non_scalar_unit_is_rejected() {
        assert_eq!(resolve_unit(&Value::Bool(true)), None);
        assert_eq!(resolve_unit(&Value::List(vec![])), None);
    }
}
