//! Pagination Link Header Parser
//!
//! Pure parsing of HTTP `Link` headers (comma-separated
//! `<url>; rel="name"` entries) into relation-name → URL mappings.

use std::collections::HashMap;

/// Relation name advertising the next result page.
pub const REL_NEXT: &str = "next";

/// Parse a `Link` header value into a relation → URL map.
///
/// Tolerates zero, one, or many relations. Malformed entries are skipped
/// rather than failing the whole header; an absent relation is simply an
/// absent key.
pub fn parse_link_header(value: &str) -> HashMap<String, String> {
    let mut relations = HashMap::new();

    for entry in value.split(',') {
        let mut parts = entry.split(';');
        let Some(url_part) = parts.next() else {
            continue;
        };
        let url_part = url_part.trim();
        if !(url_part.starts_with('<') && url_part.ends_with('>')) {
            continue;
        }
        let url = &url_part[1..url_part.len() - 1];

        for param in parts {
            if let Some(name) = param.trim().strip_prefix("rel=") {
                let name = name.trim_matches('"');
                if !name.is_empty() {
                    relations.insert(name.to_string(), url.to_string());
                }
            }
        }
    }

    relations
}

/// The `next` relation of an optional `Link` header, if advertised.
///
/// A missing header and a header without a `next` entry both mean "no
/// further page".
pub fn next_relation(header: Option<&str>) -> Option<String> {
    header
        .map(parse_link_header)
        .and_then(|mut relations| relations.remove(REL_NEXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_next_relation() {
        let relations = parse_link_header(r#"<https://api.x/?page=2>; rel="next""#);
        assert_eq!(
            relations.get("next").map(String::as_str),
            Some("https://api.x/?page=2")
        );
        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn test_multiple_relations() {
        let header = r#"<https://api.x/?page=2>; rel="next", <https://api.x/?page=34>; rel="last""#;
        let relations = parse_link_header(header);
        assert_eq!(
            relations.get("next").map(String::as_str),
            Some("https://api.x/?page=2")
        );
        assert_eq!(
            relations.get("last").map(String::as_str),
            Some("https://api.x/?page=34")
        );
    }

    #[test]
    fn test_absent_next_yields_no_key() {
        let relations = parse_link_header(r#"<https://api.x/?page=1>; rel="prev""#);
        assert!(!relations.contains_key("next"));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let header = r#"https://no-brackets/; rel="next", garbage, <https://api.x/?page=2>; rel="next""#;
        let relations = parse_link_header(header);
        assert_eq!(
            relations.get("next").map(String::as_str),
            Some("https://api.x/?page=2")
        );
    }

    #[test]
    fn test_entry_without_rel_is_skipped() {
        let relations = parse_link_header("<https://api.x/?page=2>");
        assert!(relations.is_empty());
    }

    #[test]
    fn test_empty_header() {
        assert!(parse_link_header("").is_empty());
    }

    #[test]
    fn test_next_relation_helper() {
        assert_eq!(next_relation(None), None);
        assert_eq!(next_relation(Some(r#"<https://api.x/?page=1>; rel="prev""#)), None);
        assert_eq!(
            next_relation(Some(r#"<https://api.x/?page=2>; rel="next""#)),
            Some("https://api.x/?page=2".to_string())
        );
    }

    #[test]
    fn test_unquoted_rel_value() {
        let relations = parse_link_header("<https://api.x/?page=2>; rel=next");
        assert_eq!(
            relations.get("next").map(String::as_str),
            Some("https://api.x/?page=2")
        );
    }
}
