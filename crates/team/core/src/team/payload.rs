use crate::ids::{MagicItemId, TeamId};
use crate::slot::Slot;

/// Payload sent to the analysis and persistence services.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamCreate {
    pub name: String,
    pub magic_item_id: MagicItemId,
    pub user_monsters: Vec<Slot>,
}

/// A team as returned by the persistence service.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedTeam {
    pub id: TeamId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_item_id: Option<MagicItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_monsters: Vec<Slot>,
}

impl SavedTeam {
    /// Record for a payload the service has stored under `id`.
    pub fn from_create(id: TeamId, team: TeamCreate) -> Self {
        Self {
            id,
            name: Some(team.name),
            magic_item_id: Some(team.magic_item_id),
            user_monsters: team.user_monsters,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn saved_team_tolerates_missing_optional_fields() {
        let saved: SavedTeam = serde_json::from_value(serde_json::json!({
            "id": 12,
            "user_monsters": [{"monster_id": 5, "move1_id": 10}]
        }))
        .unwrap();

        assert_eq!(saved.id, TeamId(12));
        assert_eq!(saved.name, None);
        assert_eq!(saved.magic_item_id, None);
        assert_eq!(saved.user_monsters[0].moves[0], crate::ids::MoveId(10));
    }

    #[test]
    fn illegal_boost_fails_at_the_boundary() {
        let result = serde_json::from_value::<SavedTeam>(serde_json::json!({
            "id": 1,
            "user_monsters": [{"talent": {"hp_boost": 5}}]
        }));

        assert!(result.is_err());
    }
}
