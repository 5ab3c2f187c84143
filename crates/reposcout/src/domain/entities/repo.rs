//! RepoSummary - one repository search hit

use serde::Deserialize;

/// A single repository returned by the search endpoint.
///
/// The controller never interprets these fields; they are deserialized so a
/// list renderer has something to show, and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_search_hit_ignoring_extra_fields() {
        let json = r#"{
            "id": 10270250,
            "full_name": "facebook/react",
            "html_url": "https://github.com/facebook/react",
            "description": "A declarative JavaScript library",
            "stargazers_count": 230000,
            "watchers_count": 230000,
            "fork": false
        }"#;

        let repo: RepoSummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "facebook/react");
        assert_eq!(repo.stargazers_count, 230_000);
    }

    #[test]
    fn test_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "full_name": "octo/repo",
            "html_url": "https://github.com/octo/repo"
        }"#;

        let repo: RepoSummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, None);
        assert_eq!(repo.stargazers_count, 0);
    }
}
