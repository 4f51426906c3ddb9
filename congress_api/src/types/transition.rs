//! Records for members entering or leaving Congress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde_util;

/// One member joining (`/members/new.json`) or departing
/// (`/{congress}/{chamber}/members/leaving.json`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemberTransition {
    /// Bioguide member identifier.
    pub id: String,

    pub api_uri: Option<String>,

    pub first_name: Option<String>,

    pub middle_name: Option<String>,

    pub last_name: Option<String>,

    pub suffix: Option<String>,

    pub party: Option<String>,

    pub chamber: Option<String>,

    pub state: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub end_date: Option<NaiveDate>,

    /// Why the member is leaving, e.g. "Retiring" or "Seeking another office".
    pub status: Option<String>,

    pub note: Option<String>,
}
