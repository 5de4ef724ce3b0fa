//! The generic response wrapper returned by every API call.
//!
//! Every response is a JSON object carrying pagination and quota
//! metadata plus an `items` array whose element schema depends on the
//! endpoint. [`parse_wrapper`] decodes the metadata into a [`Wrapper`]
//! and the items into whatever destination type the caller names, so
//! new entity types never require decoder changes.
//!
//! See: <https://api.stackexchange.com/docs/wrapper>

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::Error;

/// Error report embedded in the response wrapper.
///
/// The API reports request failures inside an otherwise well-formed
/// wrapper; decoding such a response still succeeds and the report is
/// surfaced through [`Wrapper::error`] for the caller to inspect. The
/// type implements [`std::error::Error`] so callers that do treat it as
/// fatal can propagate it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({id} {name})")]
pub struct ApiError {
    pub id: u32,
    pub name: String,
    pub message: String,
}

/// Common metadata fields of the response wrapper.
///
/// The `items` payload is deliberately not part of this type; it is
/// decoded straight into the destination given to [`parse_wrapper`], so
/// the wrapper's shape is independent of the payload type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wrapper {
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
    /// Server-suggested delay before the next request, in seconds;
    /// 0 means none. Advisory only, never enforced by this crate.
    pub backoff: u32,
    pub quota_max: u32,
    pub quota_remaining: u32,
    pub total: u64,
    /// Wire `type` tag naming the item kind.
    pub kind: String,
    /// Error report, present when the API rejected the request.
    pub error: Option<ApiError>,
}

impl Wrapper {
    /// Backoff hint as a [`Duration`], or `None` when the server did not
    /// request one.
    #[must_use]
    pub fn backoff_duration(&self) -> Option<Duration> {
        (self.backoff != 0).then(|| Duration::from_secs(u64::from(self.backoff)))
    }
}

/// Wire shape of the wrapper. `items` stays raw until the caller's
/// destination type is known.
#[derive(Deserialize)]
struct WireWrapper<'a> {
    #[serde(borrow, default)]
    items: Option<&'a RawValue>,

    #[serde(default)]
    error_id: u32,
    #[serde(default)]
    error_name: String,
    #[serde(default)]
    error_message: String,

    #[serde(default)]
    page: u32,
    #[serde(default)]
    page_size: u32,
    #[serde(default)]
    has_more: bool,

    #[serde(default)]
    backoff: u32,
    #[serde(default)]
    quota_max: u32,
    #[serde(default)]
    quota_remaining: u32,

    #[serde(default)]
    total: u64,
    #[serde(default, rename = "type")]
    kind: String,
}

/// Decode a response body into its wrapper metadata and items payload.
///
/// The `items` array is decoded into any `T` the caller chooses,
/// typically a `Vec` of one of the [`crate::models`] types; a body
/// without `items` yields `T::default()`. An API-reported error
/// (`error_id` set) is not a decode failure: the wrapper decodes `Ok`
/// with [`Wrapper::error`] populated, and the caller decides whether to
/// treat it as fatal.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the body is not a wrapper object or
/// when `items` does not match `T`. Wrapper metadata that decoded before
/// the failure rides along in the error (see [`Error::wrapper`]).
pub fn parse_wrapper<T>(body: &str) -> Result<(Wrapper, T), Error>
where
    T: DeserializeOwned + Default,
{
    let wire: WireWrapper<'_> = serde_json::from_str(body).map_err(|e| Error::Decode {
        source: e,
        wrapper: Box::new(Wrapper::default()),
    })?;

    let WireWrapper {
        items,
        error_id,
        error_name,
        error_message,
        page,
        page_size,
        has_more,
        backoff,
        quota_max,
        quota_remaining,
        total,
        kind,
    } = wire;

    let error = (error_id != 0 || !error_name.is_empty() || !error_message.is_empty()).then(|| {
        ApiError {
            id: error_id,
            name: error_name,
            message: error_message,
        }
    });

    let wrapper = Wrapper {
        page,
        page_size,
        has_more,
        backoff,
        quota_max,
        quota_remaining,
        total,
        kind,
        error,
    };

    let items = match items {
        Some(raw) => serde_json::from_str(raw.get()).map_err(|e| Error::Decode {
            source: e,
            wrapper: Box::new(wrapper.clone()),
        })?,
        None => T::default(),
    };

    Ok((wrapper, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Question};

    const QUESTION_PAGE: &str = r#"{
        "items": [
            {"question_id": 11227809, "title": "Branch prediction", "score": 27453,
             "is_answered": true, "creation_date": 1340805096,
             "owner": {"user_id": 87234, "display_name": "GMan", "reputation": 502417}},
            {"question_id": 927358, "title": "Undo commits", "score": 26113,
             "is_answered": true, "creation_date": 1243620554}
        ],
        "has_more": true,
        "page": 1,
        "page_size": 2,
        "quota_max": 300,
        "quota_remaining": 297,
        "total": 0,
        "type": "question"
    }"#;

    #[test]
    fn test_decodes_metadata_and_items() {
        let (wrapper, questions): (Wrapper, Vec<Question>) =
            parse_wrapper(QUESTION_PAGE).unwrap();

        assert_eq!(wrapper.page, 1);
        assert_eq!(wrapper.page_size, 2);
        assert!(wrapper.has_more);
        assert_eq!(wrapper.quota_max, 300);
        assert_eq!(wrapper.quota_remaining, 297);
        assert_eq!(wrapper.kind, "question");
        assert_eq!(wrapper.error, None);
        assert_eq!(wrapper.backoff_duration(), None);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 11_227_809);
        assert_eq!(questions[0].title, "Branch prediction");
        assert_eq!(questions[0].creation_date.unwrap().timestamp(), 1_340_805_096);
        assert_eq!(
            questions[0].owner.as_ref().unwrap().display_name,
            "GMan"
        );
        assert_eq!(questions[1].owner, None);
    }

    #[test]
    fn test_same_decode_path_handles_other_entity_kinds() {
        let body = r#"{
            "items": [
                {"answer_id": 11227902, "question_id": 11227809, "score": 35214,
                 "is_accepted": true, "creation_date": 1340807843}
            ],
            "has_more": false,
            "type": "answer"
        }"#;
        let (wrapper, answers): (Wrapper, Vec<Answer>) = parse_wrapper(body).unwrap();

        assert_eq!(wrapper.kind, "answer");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].id, 11_227_902);
        assert_eq!(answers[0].question_id, 11_227_809);
        assert!(answers[0].is_accepted);
    }

    #[test]
    fn test_api_error_is_data_not_a_decode_failure() {
        let body = r#"{
            "error_id": 502,
            "error_name": "throttle_violation",
            "error_message": "too many requests from this IP",
            "items": []
        }"#;
        let (wrapper, items): (Wrapper, Vec<Question>) = parse_wrapper(body).unwrap();

        let err = wrapper.error.expect("error report should be populated");
        assert_eq!(err.id, 502);
        assert_eq!(err.name, "throttle_violation");
        assert_eq!(
            err.to_string(),
            "too many requests from this IP (502 throttle_violation)"
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_mismatched_items_keep_partial_wrapper() {
        let body = r#"{
            "items": ["not", "questions"],
            "page": 3,
            "total": 900,
            "quota_remaining": 250
        }"#;
        let err = parse_wrapper::<Vec<Question>>(body).unwrap_err();

        let wrapper = err.wrapper().expect("metadata should survive");
        assert_eq!(wrapper.page, 3);
        assert_eq!(wrapper.total, 900);
        assert_eq!(wrapper.quota_remaining, 250);
    }

    #[test]
    fn test_invalid_body_yields_zero_wrapper() {
        let err = parse_wrapper::<Vec<Question>>("not json").unwrap_err();
        assert_eq!(err.wrapper(), Some(&Wrapper::default()));
    }

    #[test]
    fn test_absent_fields_default() {
        let (wrapper, items): (Wrapper, Vec<Question>) = parse_wrapper("{}").unwrap();
        assert_eq!(wrapper, Wrapper::default());
        assert!(items.is_empty());
    }

    #[test]
    fn test_backoff_duration() {
        let (wrapper, _): (Wrapper, Vec<Question>) =
            parse_wrapper(r#"{"items": [], "backoff": 10}"#).unwrap();
        assert_eq!(wrapper.backoff_duration(), Some(Duration::from_secs(10)));
    }
}
