//! Questionnaire definition: which question feeds which dimension.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Dimension;
use crate::domain::foundation::ValidationError;

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub dimension: Dimension,
    pub prompt: String,
}

impl Question {
    pub fn new(id: impl Into<String>, dimension: Dimension, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dimension,
            prompt: prompt.into(),
        }
    }
}

/// An ordered, validated set of questions.
///
/// # Invariants
///
/// 1. Question ids are non-blank and unique
/// 2. Every dimension has at least one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct QuestionnaireDocument {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Creates a questionnaire, enforcing the invariants above.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if question.id.trim().is_empty() {
                return Err(ValidationError::empty_field("question.id"));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(ValidationError::duplicate_question(&question.id));
            }
        }

        for dimension in Dimension::ALL {
            if !questions.iter().any(|q| q.dimension == dimension) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("no question measures dimension {}", dimension.code()),
                ));
            }
        }

        Ok(Self { questions })
    }

    /// Parses a YAML document of the form `questions: [{id, dimension, prompt}]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let doc: QuestionnaireDocument = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("questionnaire", e.to_string()))?;
        Self::new(doc.questions)
    }

    /// The built-in VALID questionnaire: four questions per dimension.
    pub fn standard() -> &'static Questionnaire {
        &STANDARD_QUESTIONNAIRE
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Questions measuring a single dimension, in questionnaire order.
    pub fn questions_for(&self, dimension: Dimension) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.dimension == dimension)
    }
}

const STANDARD_QUESTIONS: &[(&str, Dimension, &str)] = &[
    ("v1", Dimension::Verity, "I look for hard evidence before accepting a claim at work."),
    ("v2", Dimension::Verity, "When data contradicts my colleagues, I side with the data."),
    ("v3", Dimension::Verity, "I ask for sources when a new initiative is proposed."),
    ("v4", Dimension::Verity, "I change my mind when presented with better evidence."),
    ("a1", Dimension::Association, "I trust information more when it comes from people I know."),
    ("a2", Dimension::Association, "My team's consensus strongly shapes my own view."),
    ("a3", Dimension::Association, "I check with my network before making an important call."),
    ("a4", Dimension::Association, "Loyalty to my group matters when I weigh competing opinions."),
    ("l1", Dimension::LivedExperience, "My own past experience is my best guide to what will work."),
    ("l2", Dimension::LivedExperience, "I rely on what I have seen first-hand over reports."),
    ("l3", Dimension::LivedExperience, "Stories from the front line persuade me more than statistics."),
    ("l4", Dimension::LivedExperience, "I trust my instincts built over years in the role."),
    ("i1", Dimension::Institutional, "If a policy says so, I follow it even when I have doubts."),
    ("i2", Dimension::Institutional, "Official channels are the right way to validate a decision."),
    ("i3", Dimension::Institutional, "Titles and formal authority carry weight in my judgement."),
    ("i4", Dimension::Institutional, "I prefer established procedures over improvised solutions."),
    ("d1", Dimension::Desire, "I am drawn to ideas that match the future I want to build."),
    ("d2", Dimension::Desire, "A compelling vision can outweigh missing details for me."),
    ("d3", Dimension::Desire, "I champion initiatives that excite me before they are proven."),
    ("d4", Dimension::Desire, "What we aspire to achieve guides which facts I pay attention to."),
];

static STANDARD_QUESTIONNAIRE: Lazy<Questionnaire> = Lazy::new(|| Questionnaire {
    questions: STANDARD_QUESTIONS
        .iter()
        .map(|(id, dimension, prompt)| Question::new(*id, *dimension, *prompt))
        .collect(),
});

#[cfg(test)]
mod tests {
    use super::*;

    fn one_per_dimension() -> Vec<Question> {
        Dimension::ALL
            .iter()
            .map(|d| Question::new(d.code().to_lowercase(), *d, "prompt"))
            .collect()
    }

    #[test]
    fn standard_questionnaire_is_valid() {
        let standard = Questionnaire::standard();
        assert_eq!(standard.len(), 20);
        assert!(Questionnaire::new(standard.questions().to_vec()).is_ok());
        for dimension in Dimension::ALL {
            assert_eq!(standard.questions_for(dimension).count(), 4);
        }
    }

    #[test]
    fn get_looks_up_question() {
        let standard = Questionnaire::standard();
        assert_eq!(standard.get("i3").map(|q| q.dimension), Some(Dimension::Institutional));
        assert!(standard.get("zz").is_none());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let mut questions = one_per_dimension();
        questions.push(Question::new("v", Dimension::Desire, "again"));

        match Questionnaire::new(questions) {
            Err(ValidationError::DuplicateQuestion { question_id }) => {
                assert_eq!(question_id, "v")
            }
            other => panic!("Expected DuplicateQuestion, got {:?}", other),
        }
    }

    #[test]
    fn new_rejects_blank_ids() {
        let mut questions = one_per_dimension();
        questions[0].id = "  ".to_string();
        assert!(matches!(
            Questionnaire::new(questions),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn new_requires_every_dimension() {
        let questions: Vec<Question> = one_per_dimension()
            .into_iter()
            .filter(|q| q.dimension != Dimension::Desire)
            .collect();

        match Questionnaire::new(questions) {
            Err(ValidationError::InvalidFormat { reason, .. }) => {
                assert!(reason.contains("D"), "{}", reason)
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn from_yaml_str_parses_document() {
        let yaml = r#"
questions:
  - { id: q1, dimension: V, prompt: "Evidence first" }
  - { id: q2, dimension: A, prompt: "Network first" }
  - { id: q3, dimension: L, prompt: "Experience first" }
  - { id: q4, dimension: I, prompt: "Policy first" }
  - { id: q5, dimension: D, prompt: "Vision first" }
"#;
        let questionnaire = Questionnaire::from_yaml_str(yaml).unwrap();
        assert_eq!(questionnaire.len(), 5);
        assert_eq!(questionnaire.get("q4").map(|q| q.dimension), Some(Dimension::Institutional));
    }

    #[test]
    fn from_yaml_str_rejects_unknown_dimension() {
        let yaml = "questions:\n  - { id: q1, dimension: X, prompt: nope }\n";
        assert!(matches!(
            Questionnaire::from_yaml_str(yaml),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
