//! Loads the bundled `data/` directory end to end.

use std::path::PathBuf;

use team_content::ContentFactory;
use team_core::{
    CatalogOracle, ElementId, LoadMode, MagicItemId, MonsterId, MoveId, SlotStatus, TeamId,
    TeamStore, extract_legacy_info,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn snapshot_contains_catalog_and_details() {
    let snapshot = factory().load_snapshot().unwrap();

    assert_eq!(snapshot.creatures().len(), 6);
    assert_eq!(snapshot.detail_count(), 6);
    assert_eq!(snapshot.types().len(), 7);
    assert_eq!(
        snapshot.magic_item(MagicItemId(2)).map(|item| item.name),
        Some("Hourglass".to_owned())
    );
    // Catalog move entries win over the copies embedded in detail pools.
    assert_eq!(
        snapshot.move_info(MoveId(77)).map(|info| info.name),
        Some("Cinder Legacy".to_owned())
    );
}

#[test]
fn legacy_tables_normalize_across_shapes() {
    let snapshot = factory().load_snapshot().unwrap();
    let legacy = |id: u32| {
        let detail = snapshot.creature_detail(MonsterId(id)).unwrap();
        extract_legacy_info(&detail)
    };

    let ember = legacy(1);
    assert_eq!(ember.move_for_type(ElementId(4)), Some(MoveId(88)));

    let tide = legacy(2);
    assert_eq!(tide.move_for_type(ElementId(6)), Some(MoveId(92)));

    let moss = legacy(3);
    assert_eq!(moss.move_for_type(ElementId(7)), Some(MoveId(93)));

    let volt = legacy(4);
    assert_eq!(volt.len(), 1);
    assert_eq!(volt.skipped(), 2);

    assert!(legacy(6).is_empty());
}

#[test]
fn saved_team_loads_into_a_submittable_store() {
    let factory = factory();
    let config = factory.load_config().unwrap();
    let saved = factory.load_team(TeamId(1)).unwrap();
    let mut store: TeamStore = TeamStore::new(config);

    store.load_saved(&saved, LoadMode::Edit).unwrap();

    assert_eq!(store.name(), "Ember Rush");
    assert!(store.validate().is_submittable());
    assert!(store.prepare_submission().is_ok());
}

#[test]
fn draft_team_reports_its_gaps() {
    let factory = factory();
    let saved = factory.load_team(TeamId(2)).unwrap();
    let mut store: TeamStore = TeamStore::default();

    store.load_saved(&saved, LoadMode::Copy).unwrap();
    let report = store.validate();

    assert_eq!(store.name(), "Draft (Copy)");
    assert!(report.missing_magic_item);
    assert_eq!(report.incomplete_slots(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(store.slot_status(0), Ok(SlotStatus::InProgress));
    assert_eq!(store.slot_status(3), Ok(SlotStatus::Empty));
}
