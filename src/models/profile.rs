use serde::{Deserialize, Serialize};

/// The author's profile as served by the external account store. All
/// fields are nullable there; the composer substitutes fallback wording
/// for anything absent and never prints a raw absence marker.
///
/// Field names follow the store's wire contract (snake_case).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}
