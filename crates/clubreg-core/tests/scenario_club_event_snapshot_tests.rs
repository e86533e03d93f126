//! End-to-end scenarios over the in-memory store through `apply()`

mod common;

use clubreg_core::queries::club_stats;
use clubreg_core::{
    apply, AlwaysConfirm, Category, Changed, ClubDraft, Command, EventDraft, NeverConfirm,
    Outcome, Store,
};

fn run(store: Store, cmd: Command) -> (Store, Outcome) {
    apply(store, cmd, &AlwaysConfirm).unwrap()
}

#[test]
fn scenario_stats_then_attach_twice() {
    // Given: a club with no sub-groups
    let (store, _) = run(
        Store::new(),
        Command::ClubCreate {
            draft: ClubDraft::new("Alpha", "1. Central"),
        },
    );

    // Then: every sub-group count is zero
    let stats = club_stats(store.clubs());
    assert_eq!(
        (stats.aventureros, stats.conquistadores, stats.guias),
        (0, 0, 0)
    );
    assert_eq!(stats.total, 1);

    // When: an event without clubs is added and Alpha attached
    let (store, _) = run(
        store,
        Command::EventCreate {
            draft: EventDraft::new("Camp", "2024-01-01").with_category(Category::Zona),
        },
    );
    let alpha = store.get_club("Alpha").unwrap().clone();
    let (store, outcome) = run(
        store,
        Command::EventAttachClub {
            event_name: "Camp".to_string(),
            club: alpha.clone(),
        },
    );
    assert_eq!(outcome, Outcome::ClubAttached);
    assert_eq!(store.get_event("Camp").unwrap().club_count(), 1);

    // And: the same call is repeated
    let (store, outcome) = run(
        store,
        Command::EventAttachClub {
            event_name: "Camp".to_string(),
            club: alpha,
        },
    );

    // Then: still one club, with a warning and nothing to persist
    assert_eq!(outcome, Outcome::ClubAlreadyAttached);
    assert!(outcome.is_warning());
    assert_eq!(outcome.changed(), Changed::Nothing);
    assert_eq!(store.get_event("Camp").unwrap().club_count(), 1);
}

#[test]
fn scenario_deleting_club_keeps_event_snapshot() {
    let (store, _) = run(
        Store::new(),
        Command::ClubCreate {
            draft: ClubDraft::new("Alpha", "1. Central").with_guias("6"),
        },
    );
    let alpha = store.get_club("Alpha").unwrap().clone();
    let (store, _) = run(
        store,
        Command::EventCreate {
            draft: EventDraft::new("Camp", "2024-01-01")
                .with_category(Category::Guias)
                .with_club(alpha),
        },
    );

    let (store, outcome) = run(
        store,
        Command::ClubDelete {
            name: "Alpha".to_string(),
        },
    );

    assert_eq!(outcome, Outcome::ClubsDeleted(1));
    assert!(store.clubs().is_empty());
    let event = store.get_event("Camp").unwrap();
    assert_eq!(event.club_count(), 1);
    assert_eq!(event.clubs[0].guia, "6");
}

#[test]
fn scenario_declined_deletion_changes_nothing() {
    let (store, _) = run(
        Store::new(),
        Command::ClubCreate {
            draft: ClubDraft::new("Alpha", "1. Central"),
        },
    );

    let (store, outcome) = apply(
        store,
        Command::ClubDelete {
            name: "Alpha".to_string(),
        },
        &NeverConfirm,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::DeletionDeclined);
    assert_eq!(outcome.changed(), Changed::Nothing);
    assert_eq!(store.clubs().len(), 1);
}

#[test]
fn scenario_failed_command_leaves_clone_untouched() {
    let (store, _) = run(
        Store::new(),
        Command::ClubCreate {
            draft: ClubDraft::new("Alpha", "1. Central"),
        },
    );
    let before = store.clone();

    let result = apply(
        store.clone(),
        Command::EventAttachClub {
            event_name: "Ghost".to_string(),
            club: before.clubs()[0].clone(),
        },
        &AlwaysConfirm,
    );

    assert!(result.is_err());
    assert_eq!(store, before);
}

#[test]
fn scenario_clear_events_reports_count() {
    let (store, _) = run(
        Store::new(),
        Command::EventCreate {
            draft: EventDraft::new("Camp", "2024-01-01").with_category(Category::Zona),
        },
    );

    let (store, outcome) = run(store, Command::EventsClear);

    assert_eq!(outcome, Outcome::EventsCleared(1));
    assert_eq!(outcome.changed(), Changed::Events);
    assert!(store.events().is_empty());
}

#[test]
fn test_command_op_names_are_distinct() {
    let commands = [
        Command::ClubCreate {
            draft: ClubDraft::default(),
        },
        Command::ClubDelete {
            name: String::new(),
        },
        Command::EventCreate {
            draft: EventDraft::default(),
        },
        Command::EventDelete {
            event_name: String::new(),
        },
        Command::EventDetachClub {
            event_name: String::new(),
            club_name: String::new(),
        },
        Command::EventsClear,
    ];
    let mut names: Vec<_> = commands.iter().map(Command::op_name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), commands.len());
}
