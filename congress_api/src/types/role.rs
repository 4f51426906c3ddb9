//! Terms of service and committee assignments, nested in member detail
//! responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ContactInfo, VoteRecord};
use crate::serde_util;

/// One term a member served, with the committee seats held during it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Role {
    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub congress: Option<String>,

    pub chamber: Option<String>,

    pub title: Option<String>,

    pub short_title: Option<String>,

    pub state: Option<String>,

    pub party: Option<String>,

    pub leadership_role: Option<String>,

    pub fec_candidate_id: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub seniority: Option<String>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "serde_util::bool_or_string")]
    pub at_large: Option<bool>,

    #[serde(default, deserialize_with = "serde_util::string_or_number")]
    pub next_election: Option<String>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub end_date: Option<NaiveDate>,

    #[serde(flatten)]
    pub contact: ContactInfo,

    #[serde(flatten)]
    pub votes: VoteRecord,

    #[serde(default)]
    pub committees: Vec<CommitteePost>,

    #[serde(default)]
    pub subcommittees: Vec<SubcommitteePost>,
}

/// A committee seat held during a role.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommitteePost {
    pub name: Option<String>,

    /// Committee code (e.g. "SSAF"), opaque to this client.
    pub code: Option<String>,

    pub api_uri: Option<String>,

    /// Majority or minority side.
    pub side: Option<String>,

    pub title: Option<String>,

    #[serde(default, deserialize_with = "serde_util::int_or_string")]
    pub rank_in_party: Option<i64>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub begin_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub end_date: Option<NaiveDate>,
}

/// A subcommittee seat held during a role.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubcommitteePost {
    pub name: Option<String>,

    pub code: Option<String>,

    /// Code of the parent committee.
    pub parent_committee_id: Option<String>,

    pub api_uri: Option<String>,

    pub side: Option<String>,

    pub title: Option<String>,

    #[serde(default, deserialize_with = "serde_util::int_or_string")]
    pub rank_in_party: Option<i64>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub begin_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "serde_util::iso_date")]
    pub end_date: Option<NaiveDate>,
}
