//! Response envelope decoding.
//!
//! Every API response shares an outer envelope of status, copyright, and a
//! `results` list. How the entity list is nested inside `results` varies by
//! endpoint; [`Unwrap`] names the supported shapes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// The outer wrapper shared by all API responses.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    copyright: Option<String>,
    #[serde(default)]
    results: Vec<Value>,
}

/// A `results` element that groups its entities under a `members` key.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Group<T> {
    #[serde(default)]
    members: Vec<T>,
}

/// How to extract the flat entity list from an envelope's `results` field.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Unwrap {
    /// `results` is itself the entity list.
    DirectList,
    /// The first `results` element holds the entity list; later elements
    /// are ignored.
    FirstGroup,
    /// The first `results` element is itself the entity.
    FirstGroupSingle,
    /// Every `results` element holds its own entity list; all of them are
    /// concatenated in list order.
    AllGroups,
}

/// Decodes a raw response body into the entity list for one endpoint shape.
///
/// Absence of data is not an error: an empty or missing `results` list, or a
/// group without a `members` key, yields an empty list. Malformed JSON or an
/// envelope whose fields have the wrong types fails with [`Error::Decode`].
pub(crate) fn decode_results<T>(body: &[u8], unwrap: Unwrap) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    let envelope = serde_json::from_slice::<Envelope>(body).map_err(|e| {
        tracing::error!("Failed to decode response envelope: {}", e);
        Error::Decode
    })?;
    tracing::trace!(
        "Decoded envelope: status={:?} copyright={:?} results={}",
        envelope.status,
        envelope.copyright,
        envelope.results.len()
    );

    let entities = match unwrap {
        Unwrap::DirectList => envelope
            .results
            .into_iter()
            .map(serde_json::from_value::<T>)
            .collect(),
        Unwrap::FirstGroup => match envelope.results.into_iter().next() {
            Some(group) => serde_json::from_value::<Group<T>>(group).map(|g| g.members),
            None => Ok(Vec::new()),
        },
        Unwrap::FirstGroupSingle => match envelope.results.into_iter().next() {
            Some(entity) => serde_json::from_value::<T>(entity).map(|e| vec![e]),
            None => Ok(Vec::new()),
        },
        Unwrap::AllGroups => envelope
            .results
            .into_iter()
            .map(serde_json::from_value::<Group<T>>)
            .collect::<Result<Vec<_>, _>>()
            .map(|groups| groups.into_iter().flat_map(|g| g.members).collect()),
    };
    entities.map_err(|e| {
        tracing::error!("Response results did not match the expected shape: {}", e);
        Error::Decode
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Row {
        id: String,
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn direct_list_preserves_order() {
        let body = br#"{"status":"OK","copyright":"c","results":[{"id":"a"},{"id":"b"},{"id":"c"}]}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::DirectList).unwrap();
        assert_eq!(ids(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn first_group_ignores_later_groups() {
        let body = br#"{"results":[{"members":[{"id":"a"},{"id":"b"}]},{"members":[{"id":"x"}]}]}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::FirstGroup).unwrap();
        assert_eq!(ids(&rows), vec!["a", "b"]);
    }

    #[test]
    fn first_group_without_members_key_is_empty() {
        let body = br#"{"results":[{"congress":"115","num_results":0}]}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::FirstGroup).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn first_group_single_returns_the_entity() {
        let body = br#"{"status":"OK","copyright":"c","results":[{"id":"only"}]}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::FirstGroupSingle).unwrap();
        assert_eq!(ids(&rows), vec!["only"]);
    }

    #[test]
    fn all_groups_concatenate_in_group_order() {
        let body = br#"{"results":[
            {"chamber":"house","members":[{"id":"a"},{"id":"b"}]},
            {"chamber":"senate","members":[{"id":"c"}]}
        ]}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::AllGroups).unwrap();
        assert_eq!(ids(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn all_groups_skip_groups_without_members() {
        let body = br#"{"results":[{"chamber":"house"},{"chamber":"senate","members":[{"id":"c"}]}]}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::AllGroups).unwrap();
        assert_eq!(ids(&rows), vec!["c"]);
    }

    #[test]
    fn empty_results_is_empty_for_every_strategy() {
        let body = br#"{"status":"OK","copyright":"c","results":[]}"#;
        for unwrap in [
            Unwrap::DirectList,
            Unwrap::FirstGroup,
            Unwrap::FirstGroupSingle,
            Unwrap::AllGroups,
        ] {
            let rows: Vec<Row> = decode_results(body, unwrap).unwrap();
            assert!(rows.is_empty(), "strategy {unwrap:?}");
        }
    }

    #[test]
    fn missing_results_field_is_empty() {
        let body = br#"{"status":"OK","copyright":"c"}"#;
        let rows: Vec<Row> = decode_results(body, Unwrap::DirectList).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let body = b"{not valid json}";
        let err = decode_results::<Row>(body, Unwrap::DirectList).unwrap_err();
        assert!(matches!(err, Error::Decode));
    }

    #[test]
    fn wrong_envelope_field_types_are_a_decode_error() {
        let body = br#"{"status":7,"copyright":"c","results":[]}"#;
        let err = decode_results::<Row>(body, Unwrap::DirectList).unwrap_err();
        assert!(matches!(err, Error::Decode));

        let body = br#"{"status":"OK","copyright":"c","results":{"id":"a"}}"#;
        let err = decode_results::<Row>(body, Unwrap::DirectList).unwrap_err();
        assert!(matches!(err, Error::Decode));
    }
}
