//! Request DTOs for team endpoints.

use serde::Deserialize;
use std::collections::HashMap;

use crate::adapters::http::assessment::handlers::parse_assessment_id;
use crate::application::handlers::TeamMembers;
use crate::domain::assessment::DimensionScores;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Body of `POST /api/teams/risk`.
///
/// Exactly one of `assessment_ids` (stored results) or `members` (raw
/// score maps) must be given.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamRiskRequest {
    #[serde(default)]
    pub assessment_ids: Option<Vec<String>>,
    #[serde(default)]
    pub members: Option<Vec<HashMap<String, f64>>>,
}

impl TeamRiskRequest {
    pub fn into_members(self) -> Result<TeamMembers, DomainError> {
        match (self.assessment_ids, self.members) {
            (Some(ids), None) => {
                let ids = ids
                    .iter()
                    .map(|raw| parse_assessment_id(raw))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TeamMembers::Assessments(ids))
            }
            (None, Some(members)) => {
                let scores = members
                    .iter()
                    .map(DimensionScores::from_map)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TeamMembers::Scores(scores))
            }
            _ => Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Provide exactly one of 'assessment_ids' or 'members'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AssessmentId;

    fn parse(json: &str) -> TeamRiskRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn members_become_scores() {
        let request = parse(r#"{"members": [{"V": 10, "A": 20, "L": 15, "I": 78, "D": 10}]}"#);
        match request.into_members().unwrap() {
            TeamMembers::Scores(scores) => assert_eq!(scores.len(), 1),
            other => panic!("unexpected members: {:?}", other),
        }
    }

    #[test]
    fn assessment_ids_are_parsed() {
        let id = AssessmentId::new();
        let request = parse(&format!(r#"{{"assessment_ids": ["{}"]}}"#, id));
        match request.into_members().unwrap() {
            TeamMembers::Assessments(ids) => assert_eq!(ids, vec![id]),
            other => panic!("unexpected members: {:?}", other),
        }
    }

    #[test]
    fn both_or_neither_source_is_rejected() {
        let neither = parse("{}").into_members().unwrap_err();
        assert_eq!(neither.code, ErrorCode::ValidationFailed);

        let both = parse(r#"{"assessment_ids": [], "members": []}"#)
            .into_members()
            .unwrap_err();
        assert_eq!(both.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn malformed_id_is_invalid_format() {
        let err = parse(r#"{"assessment_ids": ["nope"]}"#)
            .into_members()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn incomplete_member_scores_are_rejected() {
        let err = parse(r#"{"members": [{"V": 10}]}"#).into_members().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDimension);
    }
}
