//! Profile endpoint wire type

use serde::{Deserialize, Serialize};

/// User profile returned by the provider's profile endpoint
///
/// Field names follow the provider's JSON (`userId`, `displayName`,
/// `pictureUrl`). Absent fields become empty/`None`; no validation is
/// performed. Serializable so it can be stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub picture_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parses_provider_field_names() {
        let json = r#"{
            "userId": "U1",
            "displayName": "Alice",
            "pictureUrl": "http://x/p.png"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_id, "U1");
        assert_eq!(profile.display_name, "Alice");
        assert_eq!(profile.picture_url.as_deref(), Some("http://x/p.png"));
    }

    #[test]
    fn test_absent_fields_become_empty() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.user_id.is_empty());
        assert!(profile.display_name.is_empty());
        assert!(profile.picture_url.is_none());
    }
}
