//! Records returned by the current-member lookups by state and district.

use serde::{Deserialize, Serialize};

use crate::serde_util;

/// One sitting member from `/members/{chamber}/{state}/current.json` or the
/// district-scoped variant. A slimmer shape than the chamber roster rows.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CurrentMember {
    /// Bioguide member identifier.
    pub id: String,

    /// Full display name.
    pub name: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Role label, e.g. "Representative" or "Senator, 2nd Class".
    pub role: Option<String>,

    pub gender: Option<String>,

    pub party: Option<String>,

    pub times_topics_url: Option<String>,

    pub twitter_id: Option<String>,

    pub facebook_account: Option<String>,

    pub youtube_id: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub seniority: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub next_election: Option<String>,

    pub api_uri: Option<String>,
}
