//! Pure helpers for HTTP handling.

use url::Url;

use crate::error::FetchError;

/// Whether `status` asks the client to look elsewhere.
pub fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Resolve a `Location` header against the URL that produced it.
///
/// Absolute locations are returned as-is; relative ones are joined onto `base`.
pub fn resolve_location(base: &str, location: &str) -> Result<String, FetchError> {
    let base = Url::parse(base).map_err(|_| FetchError::InvalidUrl(base.to_string()))?;
    base.join(location)
        .map(String::from)
        .map_err(|_| FetchError::InvalidUrl(location.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_redirect() {
        assert!(is_redirect(301));
        assert!(is_redirect(302));
        assert!(is_redirect(307));
        assert!(!is_redirect(200));
        assert!(!is_redirect(404));
        assert!(!is_redirect(400));
    }

    #[test]
    fn test_resolve_absolute_location() {
        let resolved = resolve_location(
            "https://github.com/o/r/releases/download/v1/a.br",
            "https://objects.githubusercontent.com/blob?sig=1",
        )
        .unwrap();
        assert_eq!(resolved, "https://objects.githubusercontent.com/blob?sig=1");
    }

    #[test]
    fn test_resolve_relative_location() {
        let resolved = resolve_location("https://mirror.test/a/b/c.gz", "/x/c.gz").unwrap();
        assert_eq!(resolved, "https://mirror.test/x/c.gz");

        let resolved = resolve_location("https://mirror.test/a/b/c.gz", "d.gz").unwrap();
        assert_eq!(resolved, "https://mirror.test/a/b/d.gz");
    }

    #[test]
    fn test_resolve_invalid_base() {
        assert!(matches!(
            resolve_location("not a url", "/x"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
