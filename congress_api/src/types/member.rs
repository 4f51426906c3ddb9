//! Member records returned by the roster and member-detail endpoints.
//!
//! The endpoints share most of their fields, so the records are built from
//! flattened field groups instead of per-endpoint copies. Everything the
//! upstream API omits inconsistently is an explicit `Option`; a vote count of
//! zero is a value, not an absence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Role;
use crate::serde_util;

/// Fields identifying a member, shared by every member-shaped record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Identity {
    /// Bioguide member identifier (e.g. "K000388").
    pub id: String,

    /// Formal title, e.g. "Senator, 1st Class".
    pub title: Option<String>,

    pub short_title: Option<String>,

    pub first_name: Option<String>,

    pub middle_name: Option<String>,

    pub last_name: Option<String>,

    pub suffix: Option<String>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub date_of_birth: Option<NaiveDate>,

    /// Single-letter party code ("D", "R", "I").
    pub party: Option<String>,
}

/// Identifiers for this member in external databases. All opaque strings; the
/// API serves some of them as numbers, so each one decodes leniently.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExternalIds {
    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub govtrack_id: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub cspan_id: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub votesmart_id: Option<String>,

    /// Inter-university Consortium for Political and Social Research ID.
    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub icpsr_id: Option<String>,

    /// Center for Responsive Politics (OpenSecrets) ID.
    pub crp_id: Option<String>,

    pub google_entity_id: Option<String>,

    pub fec_candidate_id: Option<String>,

    /// ID in the congressional Legislative Information System.
    pub lis_id: Option<String>,

    pub ocd_id: Option<String>,
}

/// Office contact details.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ContactInfo {
    pub office: Option<String>,

    pub phone: Option<String>,

    pub fax: Option<String>,

    /// The member's official website.
    pub url: Option<String>,

    pub rss_url: Option<String>,

    /// The member's online contact form.
    pub contact_form: Option<String>,
}

/// Social media account handles.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SocialAccounts {
    pub twitter_account: Option<String>,

    pub facebook_account: Option<String>,

    pub youtube_account: Option<String>,
}

/// Voting statistics. The API serves the counts as strings on some endpoints
/// and integers on others; they normalize to integers here.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VoteRecord {
    #[serde(default, deserialize_with = "serde_util::int_or_string")]
    pub total_votes: Option<i64>,

    #[serde(default, deserialize_with = "serde_util::int_or_string")]
    pub missed_votes: Option<i64>,

    #[serde(default, deserialize_with = "serde_util::int_or_string")]
    pub present_votes: Option<i64>,

    #[serde(default, deserialize_with = "serde_util::float_or_string")]
    pub missed_votes_pct: Option<f64>,

    #[serde(default, deserialize_with = "serde_util::float_or_string")]
    pub votes_with_party_pct: Option<f64>,
}

/// One row of a chamber roster (`/{congress}/{chamber}/members.json`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(flatten)]
    pub external_ids: ExternalIds,

    #[serde(flatten)]
    pub contact: ContactInfo,

    #[serde(flatten)]
    pub social: SocialAccounts,

    #[serde(flatten)]
    pub votes: VoteRecord,

    /// Two-letter state code, passed through as the API sends it.
    pub state: Option<String>,

    /// House district. A string because at-large seats are non-numeric.
    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub senate_class: Option<String>,

    pub state_rank: Option<String>,

    pub leadership_role: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub seniority: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub next_election: Option<String>,

    #[serde(default, deserialize_with = "serde_util::bool_or_string")]
    pub in_office: Option<bool>,

    /// DW-NOMINATE ideological score.
    #[serde(default, deserialize_with = "serde_util::float_or_string")]
    pub dw_nominate: Option<f64>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub ideal_point: Option<String>,

    /// Endpoint for information about only this member.
    pub api_uri: Option<String>,
}

/// Full record from the by-ID lookup (`/members/{id}.json`), including one
/// [`Role`] per term served.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemberDetail {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(flatten)]
    pub external_ids: ExternalIds,

    #[serde(flatten)]
    pub social: SocialAccounts,

    pub url: Option<String>,

    pub rss_url: Option<String>,

    #[serde(default, deserialize_with = "serde_util::bool_or_string")]
    pub in_office: Option<bool>,

    pub current_party: Option<String>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub most_recent_vote: Option<NaiveDate>,

    pub api_uri: Option<String>,

    #[serde(default)]
    pub roles: Vec<Role>,
}
