//! HTTP client for the ProPublica Congress API.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{
    endpoint::Endpoint,
    transport::Transport,
    types::{CurrentMember, Member, MemberDetail, MemberTransition},
    Error,
};

/// Client for the ProPublica Congress API.
///
/// Holds the endpoint URL and API key, immutable after construction. Every
/// operation is one authenticated GET followed by envelope decoding; there
/// are no retries and the HTTP status code is never inspected. All methods
/// take `&self`, so one client can be shared across call sites.
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Creates a client pointing at the production Congress API.
    pub fn new(key: &str) -> Self {
        Self::with_endpoint("https://api.propublica.org/congress/v1", key)
    }

    /// Creates a client with a custom endpoint URL. Used for testing with
    /// wiremock.
    pub fn with_endpoint(endpoint: &str, key: &str) -> Self {
        Self {
            transport: Transport::new(endpoint, key),
        }
    }

    /// Sets the per-request deadline. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_timeout(timeout);
        self
    }

    async fn execute<T>(&self, endpoint: Endpoint) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.transport.get(&endpoint.path).await?;
        crate::decode::decode_results(&body, endpoint.unwrap)
    }

    /// Fetches the roster of a chamber ("house" or "senate") for a session
    /// of Congress (e.g. 115).
    pub async fn get_chamber_members(
        &self,
        congress: u32,
        chamber: &str,
    ) -> Result<Vec<Member>, Error> {
        self.execute(Endpoint::chamber_members(congress, chamber)?)
            .await
    }

    /// Fetches a single member by Bioguide ID. Returns `None` when the API
    /// responds with an empty result list.
    pub async fn get_member(&self, member_id: &str) -> Result<Option<MemberDetail>, Error> {
        let entities = self.execute(Endpoint::member(member_id)?).await?;
        Ok(entities.into_iter().next())
    }

    /// Fetches the sitting members of one chamber for a state.
    pub async fn get_current_members(
        &self,
        chamber: &str,
        state: &str,
    ) -> Result<Vec<CurrentMember>, Error> {
        self.execute(Endpoint::current_members(chamber, state)?)
            .await
    }

    /// Fetches the sitting members for a single district of a state.
    pub async fn get_current_members_by_district(
        &self,
        chamber: &str,
        state: &str,
        district: u32,
    ) -> Result<Vec<CurrentMember>, Error> {
        self.execute(Endpoint::current_members_by_district(
            chamber, state, district,
        )?)
        .await
    }

    /// Fetches the sitting members for a state across both chambers: the
    /// house lookup followed by the senate lookup, concatenated in that
    /// order. If either call fails the whole operation fails with that
    /// error and the already-fetched results are discarded.
    pub async fn get_current_members_both_chambers(
        &self,
        state: &str,
    ) -> Result<Vec<CurrentMember>, Error> {
        let mut members = self.get_current_members("house", state).await?;
        members.extend(self.get_current_members("senate", state).await?);
        Ok(members)
    }

    /// Fetches the most recent new members of Congress.
    pub async fn get_new_members(&self) -> Result<Vec<MemberTransition>, Error> {
        self.execute(Endpoint::new_members()).await
    }

    /// Fetches the members who left the given chamber during a session of
    /// Congress. The API splits the results into one group per chamber;
    /// they come back concatenated in the API's group order.
    pub async fn get_leaving_members(
        &self,
        congress: u32,
        chamber: &str,
    ) -> Result<Vec<MemberTransition>, Error> {
        self.execute(Endpoint::leaving_members(congress, chamber)?)
            .await
    }
}
