//! Team analysis collaborator.
//!
//! The analysis service receives a complete [`TeamCreate`] and returns an
//! opaque report. The builder never interprets the report; it only stores it
//! so the UI can render it, and drops it whenever a slot changes.

use async_trait::async_trait;
use thiserror::Error;

use team_core::TeamCreate;

/// Report returned by the analysis service, kept as raw JSON.
pub type AnalysisReport = serde_json::Value;

/// Failure reported by a remote collaborator. Passed to callers verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered and refused the request.
    #[error("service rejected the request ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The service could not be reached or did not answer.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, team: &TeamCreate) -> Result<AnalysisReport, ServiceError>;
}

/// Offline analysis: summarizes the payload without contacting anything.
///
/// Used by the command line tool when no remote service is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalAnalysis;

#[async_trait]
impl AnalysisService for LocalAnalysis {
    async fn analyze(&self, team: &TeamCreate) -> Result<AnalysisReport, ServiceError> {
        let monsters: Vec<u32> = team.user_monsters.iter().map(|s| s.monster_id.0).collect();
        let boosted: usize = team
            .user_monsters
            .iter()
            .map(|s| s.talent.boosted_count())
            .sum();

        Ok(serde_json::json!({
            "name": team.name,
            "magic_item_id": team.magic_item_id.0,
            "monster_ids": monsters,
            "boosted_stats": boosted,
        }))
    }
}

#[cfg(test)]
mod tests {
    use team_core::{MagicItemId, MonsterId, Slot};

    use super::*;

    #[tokio::test]
    async fn local_analysis_summarizes_the_payload() {
        let slot = Slot {
            monster_id: MonsterId(5),
            ..Slot::default()
        };
        let team = TeamCreate {
            name: "Local".into(),
            magic_item_id: MagicItemId(3),
            user_monsters: vec![slot; 6],
        };

        let report = LocalAnalysis.analyze(&team).await.unwrap();

        assert_eq!(report["magic_item_id"], 3);
        assert_eq!(report["monster_ids"][5], 5);
        assert_eq!(report["boosted_stats"], 0);
    }

    #[test]
    fn service_errors_render_their_detail() {
        let err = ServiceError::Rejected {
            status: 422,
            detail: "bad team".into(),
        };

        assert_eq!(
            err.to_string(),
            "service rejected the request (422): bad team"
        );
    }
}
