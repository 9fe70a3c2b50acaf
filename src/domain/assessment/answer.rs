//! Likert answers (1-5 scale) and the raw answer sheet.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A single Likert response: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Answer(u8);

impl Answer {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates an Answer, rejecting anything outside 1..=5.
    ///
    /// Out-of-range answers are never clamped.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        Self::try_for_question("answer", value)
    }

    /// Same as [`Answer::try_new`] but names the question in the error.
    pub fn try_for_question(question_id: &str, value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                question_id,
                f64::from(Self::MIN),
                f64::from(Self::MAX),
                value as f64,
            ));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Answer {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Answer> for u8 {
    fn from(answer: Answer) -> Self {
        answer.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw answer sheet: question id to answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an answer sheet from raw integers, validating every value.
    pub fn try_from_raw<I, K>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut answers = BTreeMap::new();
        for (question_id, value) in raw {
            let question_id = question_id.into();
            let answer = Answer::try_for_question(&question_id, value)?;
            answers.insert(question_id, answer);
        }
        Ok(Self(answers))
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.0.insert(question_id.into(), answer);
    }

    pub fn get(&self, question_id: &str) -> Option<Answer> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_accepts_likert_range() {
        for v in 1..=5 {
            assert_eq!(Answer::try_new(v).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn answer_rejects_out_of_range_without_clamping() {
        assert!(Answer::try_new(0).is_err());
        assert!(Answer::try_new(6).is_err());
        assert!(Answer::try_new(-3).is_err());
    }

    #[test]
    fn answer_error_names_question() {
        match Answer::try_for_question("i2", 9) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "i2");
                assert_eq!(actual, 9.0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn answers_try_from_raw_validates_each_value() {
        let ok = Answers::try_from_raw(vec![("v1", 3), ("a1", 5)]).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.get("a1").map(|a| a.value()), Some(5));

        assert!(Answers::try_from_raw(vec![("v1", 3), ("a1", 7)]).is_err());
    }

    #[test]
    fn answers_deserialize_from_json_object() {
        let answers: Answers = serde_json::from_str(r#"{"v1": 4, "d2": 1}"#).unwrap();
        assert_eq!(answers.get("v1").map(|a| a.value()), Some(4));
        assert!(serde_json::from_str::<Answers>(r#"{"v1": 0}"#).is_err());
    }
}
