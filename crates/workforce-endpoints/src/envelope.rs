//! List envelopes.
//!
//! List endpoints answer in one of three shapes: a bare array, `{data: [...]}`
//! or `{data: {list: [...]}}`. Which endpoint uses which shape is not part of
//! any published contract, so every list response is decoded against exactly
//! these three alternatives and the observed shape is logged. Anything else is
//! a decode error.

use serde::Deserialize;
use workforce_client::{ApiClient, ApiResult, RequestOptions};

/// Envelope shape a list response arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `[...]`
    Bare,
    /// `{"data": [...]}`
    Data,
    /// `{"data": {"list": [...]}}`
    DataList,
}

#[derive(Debug, Deserialize)]
pub struct ListBody<T> {
    list: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DataBody<T> {
    Items(Vec<T>),
    Nested(ListBody<T>),
}

#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    data: DataBody<T>,
}

/// A decoded list response in any of the observed shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped(DataEnvelope<T>),
}

impl<T> ListEnvelope<T> {
    pub fn shape(&self) -> EnvelopeShape {
        match self {
            ListEnvelope::Bare(_) => EnvelopeShape::Bare,
            ListEnvelope::Wrapped(DataEnvelope {
                data: DataBody::Items(_),
            }) => EnvelopeShape::Data,
            ListEnvelope::Wrapped(DataEnvelope {
                data: DataBody::Nested(_),
            }) => EnvelopeShape::DataList,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped(DataEnvelope {
                data: DataBody::Items(items),
            }) => items,
            ListEnvelope::Wrapped(DataEnvelope {
                data: DataBody::Nested(ListBody { list }),
            }) => list,
        }
    }
}

/// GET a list endpoint and unwrap its envelope.
pub(crate) async fn fetch_list<T>(
    client: &ApiClient,
    path: &str,
    options: RequestOptions,
) -> ApiResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let envelope: ListEnvelope<T> = client.get(path, options).await?;
    let shape = envelope.shape();
    let items = envelope.into_items();
    tracing::debug!(path, shape = ?shape, count = items.len(), "Fetched list");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    fn decode(json: &str) -> serde_json::Result<ListEnvelope<Row>> {
        serde_json::from_str(json)
    }

    #[test]
    fn decodes_bare_array() {
        let envelope = decode(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(envelope.shape(), EnvelopeShape::Bare);
        assert_eq!(envelope.into_items(), vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn decodes_data_array() {
        let envelope = decode(r#"{"data":[{"id":3}]}"#).unwrap();
        assert_eq!(envelope.shape(), EnvelopeShape::Data);
        assert_eq!(envelope.into_items(), vec![Row { id: 3 }]);
    }

    #[test]
    fn decodes_nested_list() {
        let envelope = decode(r#"{"data":{"list":[{"id":4}],"total":1}}"#).unwrap();
        assert_eq!(envelope.shape(), EnvelopeShape::DataList);
        assert_eq!(envelope.into_items(), vec![Row { id: 4 }]);
    }

    #[test]
    fn empty_lists_in_every_shape() {
        assert!(decode("[]").unwrap().into_items().is_empty());
        assert!(decode(r#"{"data":[]}"#).unwrap().into_items().is_empty());
        assert!(decode(r#"{"data":{"list":[]}}"#).unwrap().into_items().is_empty());
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(decode(r#"{"items":[{"id":1}]}"#).is_err());
        assert!(decode(r#"{"data":{"rows":[{"id":1}]}}"#).is_err());
        assert!(decode(r#"{"data":{"id":1}}"#).is_err());
        assert!(decode("null").is_err());
    }

    #[test]
    fn rejects_items_that_do_not_match_schema() {
        assert!(decode(r#"[{"id":"not-a-number"}]"#).is_err());
        assert!(decode(r#"{"data":[{"name":"x"}]}"#).is_err());
    }
}
