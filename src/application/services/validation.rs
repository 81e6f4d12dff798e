//! Request validation for link creation.
//!
//! Checks run in a fixed order and short-circuit on the first failure, so
//! every invalid request maps to exactly one machine code. Validation is a
//! pure function over its inputs and the static technique catalog; URL
//! validity is syntactic only.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::mode::Mode;
use crate::domain::technique::Technique;
use crate::error::AppError;

/// RFC-1123-style label sequence ending in an alphabetic top-level label of
/// at least two characters.
static BARE_DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$").unwrap()
});

/// A request that passed every check, with strictly typed fields.
///
/// `exclude` has duplicates collapsed, order of first appearance preserved.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub link: String,
    pub mode: Mode,
    pub exclude: Vec<Technique>,
}

/// Validates a creation request, reporting the first failing check.
///
/// Check order: missing link, missing mode, missing exclude list, link
/// syntax, mode identifier, exclude entries. `exclude: None` marks an
/// absent/null list; an empty list is valid.
///
/// The exclusion-size constraint (fewer entries than the catalog holds)
/// applies only to educational requests: prank mode never invokes technique
/// selection, so excluding the whole catalog is allowed there. Unknown
/// entries are rejected in every mode.
pub fn validate_create_link(
    link: &str,
    mode: &str,
    exclude: Option<&[String]>,
) -> Result<ValidatedRequest, AppError> {
    if link.is_empty() {
        return Err(AppError::validation(
            "MISSING_URL",
            "A URL is required to create a link.",
        ));
    }

    if mode.is_empty() {
        return Err(AppError::validation(
            "MISSING_MODE",
            "A mode must be selected.",
        ));
    }

    let Some(exclude) = exclude else {
        return Err(AppError::validation(
            "MISSING_EXCLUDE",
            "An exclude list is required. Pass an empty array if you have no exclusions.",
        ));
    };

    validate_link_syntax(link)?;

    let mode = Mode::parse(mode).ok_or_else(|| {
        AppError::validation_with_value("INVALID_MODE", "The provided mode is not valid.", mode)
    })?;

    let exclude = validate_excludes(exclude, mode)?;

    Ok(ValidatedRequest {
        link: link.to_string(),
        mode,
        exclude,
    })
}

/// Accepts an absolute http(s) URL with a host, or a bare domain.
///
/// Inputs carrying an `http://`/`https://` scheme must parse as URLs; any
/// other input must match the bare-domain pattern. Live reachability is
/// deliberately not checked.
fn validate_link_syntax(link: &str) -> Result<(), AppError> {
    if link.starts_with("http://") || link.starts_with("https://") {
        let parsed = Url::parse(link).map_err(|_| invalid_url(link))?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid_url(link));
        }
        return Ok(());
    }

    if BARE_DOMAIN_REGEX.is_match(link) {
        return Ok(());
    }

    Err(invalid_url(link))
}

fn invalid_url(link: &str) -> AppError {
    AppError::validation_with_value(
        "INVALID_URL",
        "The URL or domain is not valid. Provide an absolute http(s) URL or a bare domain.",
        link,
    )
}

/// Resolves exclude entries against the catalog, collapsing duplicates.
fn validate_excludes(entries: &[String], mode: Mode) -> Result<Vec<Technique>, AppError> {
    if mode == Mode::Educational && entries.len() >= Technique::ALL.len() {
        return Err(AppError::validation_with_value(
            "INVALID_EXCLUDE",
            "The exclude list leaves no technique available.",
            format!(
                "Length of exclude array must be less than {}",
                Technique::ALL.len()
            ),
        ));
    }

    let mut exclude = Vec::new();
    for entry in entries {
        let technique = Technique::parse(entry).ok_or_else(|| {
            AppError::validation_with_value(
                "INVALID_EXCLUDE",
                "One or more exclude entries are not recognized techniques.",
                entry,
            )
        })?;

        if !exclude.contains(&technique) {
            exclude.push(technique);
        }
    }

    Ok(exclude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(
        link: &str,
        mode: &str,
        exclude: Option<Vec<&str>>,
    ) -> Result<ValidatedRequest, AppError> {
        let exclude: Option<Vec<String>> =
            exclude.map(|e| e.into_iter().map(String::from).collect());
        validate_create_link(link, mode, exclude.as_deref())
    }

    fn code(err: AppError) -> &'static str {
        match err {
            AppError::Validation { code, .. } => code,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_link() {
        let err = validate("", "educational", Some(vec![])).unwrap_err();
        assert_eq!(code(err), "MISSING_URL");
    }

    #[test]
    fn test_missing_mode() {
        let err = validate("amazon.com", "", Some(vec![])).unwrap_err();
        assert_eq!(code(err), "MISSING_MODE");
    }

    #[test]
    fn test_missing_exclude() {
        let err = validate("amazon.com", "educational", None).unwrap_err();
        assert_eq!(code(err), "MISSING_EXCLUDE");
    }

    #[test]
    fn test_missing_mode_takes_precedence_over_bad_link() {
        // Structural checks run before semantic ones.
        let err = validate("not a url", "", Some(vec![])).unwrap_err();
        assert_eq!(code(err), "MISSING_MODE");
    }

    #[test]
    fn test_invalid_url_carries_value() {
        let err = validate("not a url", "prank", Some(vec![])).unwrap_err();
        match err {
            AppError::Validation { code, value, .. } => {
                assert_eq!(code, "INVALID_URL");
                assert_eq!(value.as_deref(), Some("not a url"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_mode_carries_value() {
        let err = validate("amazon.com", "Educational", Some(vec![])).unwrap_err();
        match err {
            AppError::Validation { code, value, .. } => {
                assert_eq!(code, "INVALID_MODE");
                assert_eq!(value.as_deref(), Some("Educational"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_link_syntax_checked_before_mode() {
        let err = validate("not a url", "sketchy", Some(vec![])).unwrap_err();
        assert_eq!(code(err), "INVALID_URL");
    }

    #[test]
    fn test_unknown_exclude_entry() {
        let err = validate(
            "amazon.com",
            "educational",
            Some(vec!["homoglyphs", "dns-poisoning"]),
        )
        .unwrap_err();
        match err {
            AppError::Validation { code, value, .. } => {
                assert_eq!(code, "INVALID_EXCLUDE");
                assert_eq!(value.as_deref(), Some("dns-poisoning"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_educational_full_exclusion_rejected() {
        let all: Vec<&str> = Technique::ALL.iter().map(|t| t.as_str()).collect();
        let err = validate("amazon.com", "educational", Some(all)).unwrap_err();
        assert_eq!(code(err), "INVALID_EXCLUDE");
    }

    #[test]
    fn test_educational_length_violation_regardless_of_content() {
        // Sixteen copies of one valid entry still trip the length check.
        let entries = vec!["homoglyphs"; Technique::ALL.len()];
        let err = validate("amazon.com", "educational", Some(entries)).unwrap_err();
        assert_eq!(code(err), "INVALID_EXCLUDE");
    }

    #[test]
    fn test_prank_full_exclusion_allowed() {
        // Prank mode never selects a technique, so excluding the whole
        // catalog is fine.
        let all: Vec<&str> = Technique::ALL.iter().map(|t| t.as_str()).collect();
        let valid = validate("amazon.com", "prank", Some(all)).unwrap();
        assert_eq!(valid.mode, Mode::Prank);
        assert_eq!(valid.exclude.len(), 16);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let valid = validate(
            "amazon.com",
            "educational",
            Some(vec!["homoglyphs", "homoglyphs", "punycode"]),
        )
        .unwrap();
        assert_eq!(
            valid.exclude,
            vec![Technique::Homoglyphs, Technique::Punycode]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let exclude = vec!["tld-swap".to_string()];

        let first =
            validate_create_link("amazon.com", "educational", Some(exclude.as_slice())).unwrap();
        let second =
            validate_create_link("amazon.com", "educational", Some(exclude.as_slice())).unwrap();

        assert_eq!(first.link, second.link);
        assert_eq!(first.mode, second.mode);
        assert_eq!(first.exclude, second.exclude);
    }

    #[test]
    fn test_accepts_absolute_urls() {
        for link in [
            "https://example.com",
            "https://example.com/path?q=1",
            "http://sub.example.co.uk/a/b",
            "https://example.com:8443/login",
        ] {
            assert!(
                validate(link, "prank", Some(vec![])).is_ok(),
                "expected {link} to validate"
            );
        }
    }

    #[test]
    fn test_accepts_bare_domains() {
        for link in ["amazon.com", "sub.domain.co.uk", "a1.example.io"] {
            assert!(
                validate(link, "prank", Some(vec![])).is_ok(),
                "expected {link} to validate"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_links() {
        for link in [
            "http://",
            "localhost",
            "example.c",
            "example.123",
            "-bad.com",
            "bad-.com",
            "ftp://example.com/file",
            "just words",
        ] {
            let err = validate(link, "prank", Some(vec![])).unwrap_err();
            assert_eq!(code(err), "INVALID_URL", "expected {link} to be rejected");
        }
    }
}
