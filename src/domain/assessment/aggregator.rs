//! Score Aggregator - reduces raw answers into dimension percentages.

use super::{Answer, Answers, Dimension, DimensionScores, Questionnaire};
use crate::domain::foundation::{Percentage, ValidationError};

/// Reduces an answer sheet into [`DimensionScores`].
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Computes each dimension as the rounded percentage of its answers
    /// relative to the maximum possible score:
    /// `round(sum / (count * 5) * 100)`.
    ///
    /// # Errors
    ///
    /// - `UnknownQuestion` if an answer references a question that is not in
    ///   the questionnaire
    /// - `MissingAnswer` if a questionnaire question has no answer
    pub fn aggregate(
        answers: &Answers,
        questionnaire: &Questionnaire,
    ) -> Result<DimensionScores, ValidationError> {
        if let Some(unknown) = answers
            .question_ids()
            .find(|id| questionnaire.get(id).is_none())
        {
            return Err(ValidationError::unknown_question(unknown));
        }

        let percentage = |dimension: Dimension| -> Result<Percentage, ValidationError> {
            let (mut sum, mut count) = (0u32, 0u32);
            for question in questionnaire.questions_for(dimension) {
                let answer = answers
                    .get(&question.id)
                    .ok_or_else(|| ValidationError::missing_answer(&question.id))?;
                sum += u32::from(answer.value());
                count += 1;
            }
            if count == 0 {
                return Err(ValidationError::missing_dimension(dimension.code()));
            }
            let max = f64::from(count) * f64::from(Answer::MAX);
            Percentage::try_for_field(dimension.code(), (f64::from(sum) / max * 100.0).round())
        };

        Ok(DimensionScores::from_percentages(
            percentage(Dimension::Verity)?,
            percentage(Dimension::Association)?,
            percentage(Dimension::LivedExperience)?,
            percentage(Dimension::Institutional)?,
            percentage(Dimension::Desire)?,
        ))
    }
}
