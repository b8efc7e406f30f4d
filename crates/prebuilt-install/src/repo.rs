//! Repository reference parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::RepositoryRef;

/// Accepted shapes, highest priority first.
static PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // https://github.com/o/r, git+ssh://git@github.com/o/r.git, ...
        Regex::new(
            r"(?i)^(?:https?|git|git\+ssh|git\+https?)://(?:[^@/]+@)?github\.com/([^/]+)/([^/]+?)(?:\.git)?(?:[/#?].*)?$",
        )
        .expect("valid url pattern"),
        // github:o/r#branch
        Regex::new(r"^github:([^/]+)/([^#]+)(?:#.*)?$").expect("valid github pattern"),
        // o/r#branch
        Regex::new(r"^([^:/]+)/([^#]+)(?:#.*)?$").expect("valid shorthand pattern"),
    ]
});

/// Extract `{owner, name}` from a repository location.
///
/// Returns `None` for empty input or when no accepted shape matches.
pub fn parse(reference: &str) -> Option<RepositoryRef> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    PATTERNS.iter().find_map(|pattern| {
        let captures = pattern.captures(reference)?;
        Some(RepositoryRef::new(&captures[1], &captures[2]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn o_r() -> Option<RepositoryRef> {
        Some(RepositoryRef::new("o", "r"))
    }

    #[test]
    fn test_all_shapes_resolve() {
        assert_eq!(parse("https://github.com/o/r"), o_r());
        assert_eq!(parse("git+ssh://github.com/o/r.git"), o_r());
        assert_eq!(parse("github:o/r"), o_r());
        assert_eq!(parse("o/r"), o_r());
    }

    #[test]
    fn test_url_variants() {
        assert_eq!(parse("http://github.com/o/r/"), o_r());
        assert_eq!(parse("git://github.com/o/r.git"), o_r());
        assert_eq!(parse("git+https://github.com/o/r.git"), o_r());
        assert_eq!(parse("git+http://github.com/o/r"), o_r());
        assert_eq!(parse("git+ssh://git@github.com/o/r.git"), o_r());
        assert_eq!(parse("HTTPS://GitHub.com/o/r/tree/main"), o_r());
    }

    #[test]
    fn test_dotted_name() {
        assert_eq!(
            parse("https://github.com/socketio/socket.io.git"),
            Some(RepositoryRef::new("socketio", "socket.io"))
        );
    }

    #[test]
    fn test_fragment_is_dropped() {
        assert_eq!(parse("github:o/r#v1.2.3"), o_r());
        assert_eq!(parse("o/r#main"), o_r());
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("just-a-name"), None);
        assert_eq!(parse("gitlab:o/r"), None);
        assert_eq!(parse("https://gitlab.com/o/r"), None);
        assert_eq!(parse("ftp://github.com/o/r"), None);
    }

    #[test]
    fn test_url_wins_over_shorthand() {
        let parsed = parse("https://github.com/uhop/node-re2.git").unwrap();
        assert_eq!(parsed.owner, "uhop");
        assert_eq!(parsed.name, "node-re2");
    }

    proptest! {
        #[test]
        fn every_shape_yields_the_same_ref(
            owner in "[A-Za-z0-9][A-Za-z0-9_-]{0,15}",
            name in "[A-Za-z0-9][A-Za-z0-9_-]{0,15}",
        ) {
            let expected = Some(RepositoryRef::new(owner.clone(), name.clone()));
            prop_assert_eq!(parse(&format!("https://github.com/{owner}/{name}")), expected.clone());
            prop_assert_eq!(parse(&format!("git+ssh://github.com/{owner}/{name}.git")), expected.clone());
            prop_assert_eq!(parse(&format!("github:{owner}/{name}")), expected.clone());
            prop_assert_eq!(parse(&format!("{owner}/{name}")), expected);
        }
    }
}
