//! Triage runs over a scripted session: gold, potions, and the stash pass.

mod common;

use std::time::Duration;

use crucible_core::{ItemId, LocationKind, LockMask, NeverMatches, Profile, RecipeCatalog};
use crucible_runtime::StorageTriage;

use common::{FakeSession, FixedRules, RecordingSink, storage_item, workspace_item};

#[test]
fn first_run_banks_everything_without_events() {
    let mut session = FakeSession::new(vec![
        workspace_item(1, "CrudeAxe", 0, 0),
        workspace_item(2, "BoneWand", 1, 0),
    ]);
    let profile = Profile::default();
    let catalog = RecipeCatalog::default();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &NeverMatches, &sink);
    triage.run(true).unwrap();

    assert!(session.item(1).unwrap().location.is_storage());
    assert!(session.item(2).unwrap().location.is_storage());
    assert!(sink.stashed.borrow().is_empty());
    assert!(!session.is_storage_open());
}

#[test]
fn quest_items_stay_put_under_quest_exemption() {
    let mut session = FakeSession::new(vec![
        workspace_item(1, "HoradricRelic", 0, 0).with_quest_origin(true),
        workspace_item(2, "BoneWand", 1, 0),
    ]);
    let profile = Profile {
        quest_exempt: true,
        ..Profile::default()
    };
    let catalog = RecipeCatalog::default();
    let rules = FixedRules::full_match();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &rules, &sink);
    triage.run(false).unwrap();

    assert_eq!(
        session.item(1).unwrap().location.kind,
        LocationKind::Workspace
    );
    assert!(session.item(2).unwrap().location.is_storage());

    let stashed = sink.stashed.borrow();
    assert_eq!(stashed.len(), 1);
    assert_eq!(stashed[0].item, "BoneWand");
    assert_eq!(
        stashed[0].rule.as_ref().map(|r| r.origin.as_str()),
        Some("keep.rules:7")
    );
}

#[test]
fn over_quantity_items_never_trigger_a_run() {
    let mut session = FakeSession::new(vec![workspace_item(1, "HealingDraught", 0, 0)]);
    let profile = Profile::default();
    let catalog = RecipeCatalog::default();
    let rules = FixedRules::over_quantity();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &rules, &sink);
    triage.run(false).unwrap();

    assert!(session.tab_switches.is_empty());
    assert!(!session.is_storage_open());
    assert_eq!(
        session.item(1).unwrap().location.kind,
        LocationKind::Workspace
    );
}

#[test]
fn gold_is_banked_into_tabs_with_headroom() {
    let mut session = FakeSession::new(vec![]);
    session.carried_gold = 100_000;
    session.gold_capacity = 50_000;
    session.stored_gold = vec![Profile::GOLD_CAP_PER_TAB, 0, 0, 0];
    let profile = Profile::default();
    let catalog = RecipeCatalog::default();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &NeverMatches, &sink);
    triage.run(false).unwrap();

    // Tab 1 is capped, tab 2 takes the whole deposit.
    assert_eq!(session.deposits, vec![2]);
    assert_eq!(session.carried_gold, 0);
    assert_eq!(session.stored_gold[1], 100_000);
}

#[test]
fn full_tab_advances_to_the_next_one() {
    let mut session =
        FakeSession::new(vec![workspace_item(1, "BoneWand", 0, 0)]).with_full_tabs(&[1]);
    let profile = Profile::default();
    let catalog = RecipeCatalog::default();
    let rules = FixedRules::full_match();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &rules, &sink);
    triage.run(false).unwrap();

    assert_eq!(session.tab_switches, vec![1, 2]);
    let location = session.item(1).unwrap().location;
    assert_eq!(location.kind, LocationKind::SharedStorage);
    assert_eq!(location.page, 1);
    assert_eq!(sink.stashed.borrow().len(), 1);
}

#[test]
fn shared_banking_starts_on_the_first_shared_tab() {
    let mut session = FakeSession::new(vec![workspace_item(1, "BoneWand", 0, 0)]);
    let profile = Profile {
        bank_to_shared: true,
        ..Profile::default()
    };
    let catalog = RecipeCatalog::default();
    let rules = FixedRules::full_match();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &rules, &sink);
    triage.run(false).unwrap();

    assert_eq!(session.tab_switches, vec![2]);
    let location = session.item(1).unwrap().location;
    assert_eq!(location.kind, LocationKind::SharedStorage);
    assert_eq!(location.page, 1);
}

#[test]
fn protected_slot_potions_are_reordered_and_kept() {
    let mut rows = vec![vec![0u8; Profile::GRID_COLS]; Profile::GRID_ROWS];
    rows[0][0] = 1;
    let mut session = FakeSession::new(vec![
        workspace_item(9, "HealingDraught", 0, 0).with_potion(true),
        workspace_item(2, "BoneWand", 1, 0),
    ]);
    let profile = Profile {
        lock_mask: LockMask::from_rows(rows),
        ..Profile::default()
    };
    let catalog = RecipeCatalog::default();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &NeverMatches, &sink);
    triage.run(true).unwrap();

    assert_eq!(session.right_clicks, vec![ItemId(9)]);
    assert_eq!(
        session.item(9).unwrap().location.kind,
        LocationKind::Workspace
    );
    assert!(session.item(2).unwrap().location.is_storage());
}

#[test]
fn recipe_materials_already_stored_are_left_alone() {
    // A stored wand plus nothing in the workspace: the run has nothing to do
    // and must not touch the session.
    let mut session = FakeSession::new(vec![storage_item(1, "BoneWand", 1)]);
    let profile = Profile::default();
    let catalog = RecipeCatalog::default();
    let sink = RecordingSink::default();

    let mut triage = StorageTriage::new(&mut session, &profile, &catalog, &NeverMatches, &sink);
    triage.run(false).unwrap();

    assert!(session.tab_switches.is_empty());
    assert!(session.deposits.is_empty());
    assert_eq!(session.settled, Duration::ZERO);
}
