//! Entity records returned by the API.
//!
//! These are decode destinations for [`crate::wrapper::parse_wrapper`]
//! and nothing more: the library never retains them after a call
//! returns. Fields cover the subset of the wire schema this crate's
//! consumers read, and every struct tolerates absent fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A question on one of the Stack Exchange sites.
///
/// <https://api.stackexchange.com/docs/types/question>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    #[serde(rename = "question_id")]
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub score: i64,
    pub is_answered: bool,
    pub answer_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_answer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_vote_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_vote_count: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<Answer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_activity_date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_edit_date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub closed_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_reason: Option<String>,
}

/// An answer to a question.
///
/// <https://api.stackexchange.com/docs/types/answer>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Answer {
    #[serde(rename = "answer_id")]
    pub id: u64,
    pub question_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub score: i64,
    pub is_accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_activity_date: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_edit_date: Option<DateTime<Utc>>,
}

/// A comment on a question or an answer.
///
/// <https://api.stackexchange.com/docs/types/comment>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(rename = "comment_id")]
    pub id: u64,
    pub post_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub score: i64,
    pub edited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
}

/// A user, as embedded in posts or returned by the user endpoints.
///
/// <https://api.stackexchange.com/docs/types/user>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: u64,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub reputation: i64,
    pub user_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_counts: Option<BadgeCount>,
}

/// Badge totals a user has earned.
///
/// <https://api.stackexchange.com/docs/types/badge-count>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeCount {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
}

impl BadgeCount {
    /// Total badges across all three tiers.
    #[must_use]
    pub fn total(self) -> u32 {
        self.bronze + self.silver + self.gold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_decodes_nested_entities() {
        let json = r#"{
            "question_id": 11227809,
            "title": "Why is processing a sorted array faster?",
            "link": "https://stackoverflow.com/q/11227809",
            "score": 27453,
            "is_answered": true,
            "answer_count": 26,
            "accepted_answer_id": 11227902,
            "tags": ["java", "c++", "performance"],
            "creation_date": 1340805096,
            "owner": {
                "user_id": 87234,
                "display_name": "GMan",
                "reputation": 502417,
                "user_type": "registered",
                "badge_counts": {"bronze": 340, "silver": 295, "gold": 56}
            },
            "answers": [
                {"answer_id": 11227902, "question_id": 11227809,
                 "score": 35214, "is_accepted": true, "creation_date": 1340807843}
            ],
            "comments": [
                {"comment_id": 14841766, "post_id": 11227809, "score": 68,
                 "edited": false, "creation_date": 1340807210}
            ]
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, 11_227_809);
        assert_eq!(question.accepted_answer_id, Some(11_227_902));
        assert_eq!(question.tags, vec!["java", "c++", "performance"]);
        assert_eq!(question.creation_date.unwrap().timestamp(), 1_340_805_096);

        let owner = question.owner.unwrap();
        assert_eq!(owner.display_name, "GMan");
        assert_eq!(owner.user_type, "registered");
        assert_eq!(owner.badge_counts.unwrap().total(), 340 + 295 + 56);

        assert_eq!(question.answers.len(), 1);
        assert!(question.answers[0].is_accepted);
        assert_eq!(question.comments[0].post_id, question.id);
    }

    #[test]
    fn test_entities_tolerate_absent_fields() {
        let question: Question = serde_json::from_str("{}").unwrap();
        assert_eq!(question, Question::default());

        let answer: Answer = serde_json::from_str(r#"{"answer_id": 7}"#).unwrap();
        assert_eq!(answer.id, 7);
        assert_eq!(answer.creation_date, None);
        assert!(answer.comments.is_empty());
    }

    #[test]
    fn test_unset_fields_are_omitted_on_serialization() {
        let value = serde_json::to_value(Answer {
            id: 7,
            question_id: 42,
            score: 1,
            ..Answer::default()
        })
        .unwrap();

        assert_eq!(value["answer_id"], 7);
        assert!(value.get("body").is_none());
        assert!(value.get("creation_date").is_none());
        assert!(value.get("comments").is_none());
    }
}
