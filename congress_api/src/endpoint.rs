//! Endpoint descriptors.
//!
//! Each API operation is a data declaration: the rendered request path plus
//! the [`Unwrap`] strategy that extracts its entity list from the response
//! envelope. String parameters are checked for presence only; chamber and
//! state values pass through to the API verbatim.

use crate::decode::Unwrap;
use crate::Error;

#[derive(Debug)]
pub(crate) struct Endpoint {
    pub(crate) path: String,
    pub(crate) unwrap: Unwrap,
}

impl Endpoint {
    /// `/{congress}/{chamber}/members.json`
    pub(crate) fn chamber_members(congress: u32, chamber: &str) -> Result<Self, Error> {
        require("chamber", chamber)?;
        Ok(Self {
            path: format!("/{congress}/{chamber}/members.json"),
            unwrap: Unwrap::FirstGroup,
        })
    }

    /// `/members/{id}.json`
    pub(crate) fn member(member_id: &str) -> Result<Self, Error> {
        require("member_id", member_id)?;
        Ok(Self {
            path: format!("/members/{member_id}.json"),
            unwrap: Unwrap::FirstGroupSingle,
        })
    }

    /// `/members/{chamber}/{state}/current.json`
    pub(crate) fn current_members(chamber: &str, state: &str) -> Result<Self, Error> {
        require("chamber", chamber)?;
        require("state", state)?;
        Ok(Self {
            path: format!("/members/{chamber}/{state}/current.json"),
            unwrap: Unwrap::DirectList,
        })
    }

    /// `/members/{chamber}/{state}/{district}/current.json`
    pub(crate) fn current_members_by_district(
        chamber: &str,
        state: &str,
        district: u32,
    ) -> Result<Self, Error> {
        require("chamber", chamber)?;
        require("state", state)?;
        Ok(Self {
            path: format!("/members/{chamber}/{state}/{district}/current.json"),
            unwrap: Unwrap::DirectList,
        })
    }

    /// `/members/new.json`
    pub(crate) fn new_members() -> Self {
        Self {
            path: "/members/new.json".to_string(),
            unwrap: Unwrap::FirstGroup,
        }
    }

    /// `/{congress}/{chamber}/members/leaving.json`
    ///
    /// Results come back split into one group per chamber.
    pub(crate) fn leaving_members(congress: u32, chamber: &str) -> Result<Self, Error> {
        require("chamber", chamber)?;
        Ok(Self {
            path: format!("/{congress}/{chamber}/members/leaving.json"),
            unwrap: Unwrap::AllGroups,
        })
    }
}

fn require(name: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        tracing::error!("Missing required path parameter: {}", name);
        return Err(Error::Transport);
    }
    Ok(())
}
