//! Team handlers.

mod assess_team_risk;

pub use assess_team_risk::{AssessTeamRiskHandler, AssessTeamRiskQuery, TeamMembers};
