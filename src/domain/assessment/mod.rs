//! Assessment module - questionnaire, answers and dimension scoring.
//!
//! An answer sheet (question id -> 1..=5) is reduced by the
//! [`ScoreAggregator`] into [`DimensionScores`] over the five VALID
//! dimensions. Classification of those scores lives in `persona`.

pub mod aggregator;
pub mod answer;
pub mod dimension;
pub mod events;
pub mod questionnaire;
pub mod result;
pub mod scores;

pub use aggregator::ScoreAggregator;
pub use answer::{Answer, Answers};
pub use dimension::Dimension;
pub use events::AssessmentCompleted;
pub use questionnaire::{Question, Questionnaire};
pub use result::AssessmentResult;
pub use scores::DimensionScores;
