/// Search query used for any unrecognized category key.
pub const DEFAULT_QUERY: &str = "mental health";

/// Category key → NewsData.io search query.
const QUERY_TABLE: &[(&str, &str)] = &[
    ("all", "mental health"),
    ("anxiety", "anxiety"),
    ("depression", "depression"),
    ("stress", "stress"),
    ("relationships", "relationships"),
    ("self_esteem", "self esteem"),
    ("academic", "student stress"),
    ("sleep", "sleep health"),
];

/// Maps a category filter to its search query.
pub fn query_for(filter: &str) -> &'static str {
    QUERY_TABLE
        .iter()
        .find(|(key, _)| *key == filter)
        .map(|(_, query)| *query)
        .unwrap_or(DEFAULT_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_key_maps_to_its_query() {
        let expected = [
            ("all", "mental health"),
            ("anxiety", "anxiety"),
            ("depression", "depression"),
            ("stress", "stress"),
            ("relationships", "relationships"),
            ("self_esteem", "self esteem"),
            ("academic", "student stress"),
            ("sleep", "sleep health"),
        ];
        for (key, query) in expected {
            assert_eq!(query_for(key), query, "key {key}");
        }
    }

    #[test]
    fn test_unknown_key_uses_default_query() {
        assert_eq!(query_for("nutrition"), DEFAULT_QUERY);
        assert_eq!(query_for(""), DEFAULT_QUERY);
        assert_eq!(query_for("Sleep"), DEFAULT_QUERY);
    }
}
