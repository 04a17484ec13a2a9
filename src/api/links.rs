//! Canonical resource paths used in `Location` headers.

use regex::Regex;
use std::sync::LazyLock;

/// A moniker must be a single URL path segment made of unreserved characters.
static MONIKER_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*$").unwrap());

/// Segments under `/api/camps` that are routes of their own.
const RESERVED_SEGMENTS: [&str; 1] = ["search"];

/// Path of a camp, or `None` if the moniker cannot form a canonical URL.
pub fn camp_path(moniker: &str) -> Option<String> {
    if !MONIKER_SEGMENT.is_match(moniker) || RESERVED_SEGMENTS.contains(&moniker) {
        return None;
    }
    Some(format!("/api/camps/{moniker}"))
}

/// Path of a talk under its camp.
pub fn talk_path(moniker: &str, talk_id: i64) -> Option<String> {
    camp_path(moniker).map(|camp| format!("{camp}/talks/{talk_id}"))
}

pub fn speaker_path(speaker_id: i64) -> String {
    format!("/api/speakers/{speaker_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camp_path() {
        assert_eq!(camp_path("ATL2018").as_deref(), Some("/api/camps/ATL2018"));
        assert_eq!(
            camp_path("code-camp_2019.v2").as_deref(),
            Some("/api/camps/code-camp_2019.v2")
        );
    }

    #[test]
    fn test_camp_path_rejects_non_segments() {
        assert_eq!(camp_path(""), None);
        assert_eq!(camp_path("   "), None);
        assert_eq!(camp_path("ATL 2018"), None);
        assert_eq!(camp_path("a/b"), None);
        assert_eq!(camp_path("-leading"), None);
        assert_eq!(camp_path("what?"), None);
    }

    #[test]
    fn test_camp_path_rejects_route_segments() {
        assert_eq!(camp_path("search"), None);
        assert_eq!(talk_path("search", 1), None);
        assert_eq!(
            camp_path("search2019").as_deref(),
            Some("/api/camps/search2019")
        );
    }

    #[test]
    fn test_talk_and_speaker_paths() {
        assert_eq!(
            talk_path("ATL2018", 7).as_deref(),
            Some("/api/camps/ATL2018/talks/7")
        );
        assert_eq!(talk_path("bad moniker", 7), None);
        assert_eq!(speaker_path(3), "/api/speakers/3");
    }
}
