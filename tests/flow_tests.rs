mod common;
use activitylog::core::calculator::daily::{daily_totals, grand_total};
use activitylog::core::text::render_text;
use activitylog::core::{ActivityFlow, FlowOutcome};
use activitylog::errors::{AppError, FormField};
use activitylog::models::{ActivityForm, EditState};
use activitylog::store::RecordStore;
use activitylog::store::journal;
use common::{day, rec, setup_data_file};
use std::fs;

fn form(date: chrono::NaiveDate, hours: f64, title: &str, description: &str) -> ActivityForm {
    ActivityForm {
        date,
        hours,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn seeded_store(name: &str) -> RecordStore {
    let store = RecordStore::new(setup_data_file(name));
    store
        .save(&[
            rec(day(2024, 1, 1), 1.0, "A"),
            rec(day(2024, 1, 2), 2.0, "B"),
            rec(day(2024, 1, 3), 3.0, "C"),
        ])
        .expect("seed");
    store
}

#[test]
fn test_submit_in_idle_appends_and_persists() {
    let store = RecordStore::new(setup_data_file("flow_add"));
    let mut flow = ActivityFlow::new(&store);

    let view = flow
        .submit(&form(day(2024, 1, 1), 2.5, "Review", "Reviewed PR"))
        .expect("submit");

    assert_eq!(view.outcome, Some(FlowOutcome::Added { position: 0 }));
    assert_eq!(flow.state(), EditState::Idle);
    assert_eq!(view.records.len(), 1);
    assert_eq!(store.load().expect("reload"), view.records);
    assert_eq!(view.totals.len(), 1);
}

#[test]
fn test_invalid_forms_never_touch_the_file() {
    let store = seeded_store("flow_validation");
    let before = fs::read(store.path()).expect("read");
    let mut flow = ActivityFlow::new(&store);

    let cases = [
        (form(day(2024, 1, 9), 1.0, "", "desc"), vec![FormField::Title]),
        (form(day(2024, 1, 9), 1.0, "title", "   "), vec![FormField::Description]),
        (form(day(2024, 1, 9), 0.0, "title", "desc"), vec![FormField::Hours]),
        (form(day(2024, 1, 9), -2.0, "title", "desc"), vec![FormField::Hours]),
        (
            form(day(2024, 1, 9), f64::NAN, "", ""),
            vec![FormField::Hours, FormField::Title, FormField::Description],
        ),
    ];

    for (f, expected) in cases {
        match flow.submit(&f) {
            Err(AppError::Validation(e)) => assert_eq!(e.fields, expected),
            other => panic!("expected a validation error, got {:?}", other.map(|v| v.outcome)),
        }
    }

    assert_eq!(fs::read(store.path()).expect("read"), before);
}

#[test]
fn test_invalid_submit_while_editing_keeps_the_edit_slot() {
    let store = seeded_store("flow_validation_editing");
    let mut flow = ActivityFlow::new(&store);

    flow.start_edit(1).expect("start edit");
    assert!(flow.submit(&form(day(2024, 1, 2), 0.0, "B", "B")).is_err());

    assert_eq!(flow.state(), EditState::Editing(1));
}

#[test]
fn test_edit_replaces_in_place_and_returns_to_idle() {
    let store = seeded_store("flow_edit");
    let mut flow = ActivityFlow::new(&store);

    let prefilled = flow.start_edit(1).expect("start edit");
    assert_eq!(flow.state(), EditState::Editing(1));
    assert_eq!(prefilled.title, "B");
    assert_eq!(prefilled.hours, 2.0);

    let view = flow
        .submit(&form(day(2024, 1, 5), 4.5, "B'", "changed"))
        .expect("submit edit");

    assert_eq!(view.outcome, Some(FlowOutcome::Edited { position: 1 }));
    assert_eq!(flow.state(), EditState::Idle);

    let titles: Vec<&str> = view.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["A", "B'", "C"]);
    assert_eq!(view.records[1].hours, 4.5);
}

#[test]
fn test_starting_another_edit_overwrites_the_slot() {
    let store = seeded_store("flow_edit_switch");
    let mut flow = ActivityFlow::new(&store);

    flow.start_edit(0).expect("edit 0");
    let prefilled = flow.start_edit(2).expect("edit 2");

    assert_eq!(flow.state(), EditState::Editing(2));
    assert_eq!(prefilled.title, "C");
}

#[test]
fn test_start_edit_out_of_range_leaves_state_alone() {
    let store = seeded_store("flow_edit_range");
    let mut flow = ActivityFlow::new(&store);

    let err = flow.start_edit(3).unwrap_err();
    assert!(matches!(err, AppError::InvalidPosition { position: 3, len: 3 }));
    assert_eq!(flow.state(), EditState::Idle);
}

#[test]
fn test_stale_edit_slot_aborts_without_writing() {
    let store = seeded_store("flow_edit_stale");
    let mut flow = ActivityFlow::new(&store);

    flow.start_edit(2).expect("start edit");

    // another invocation shrinks the file underneath
    store
        .save(&[rec(day(2024, 1, 1), 1.0, "A")])
        .expect("concurrent save");
    let before = fs::read(store.path()).expect("read");

    let err = flow
        .submit(&form(day(2024, 1, 3), 1.0, "C'", "late"))
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidPosition { position: 2, len: 1 }));
    assert_eq!(flow.state(), EditState::Idle);
    assert_eq!(fs::read(store.path()).expect("read"), before);
}

#[test]
fn test_delete_removes_and_shifts() {
    let store = seeded_store("flow_delete");
    let mut flow = ActivityFlow::new(&store);

    let view = flow.delete(0).expect("delete");

    match view.outcome {
        Some(FlowOutcome::Deleted { position, record }) => {
            assert_eq!(position, 0);
            assert_eq!(record.title, "A");
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let titles: Vec<&str> = view.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["B", "C"]);
    assert_eq!(store.load().expect("reload").len(), 2);
}

#[test]
fn test_delete_while_editing_adjusts_the_slot() {
    let store = seeded_store("flow_delete_editing");
    let mut flow = ActivityFlow::new(&store);

    // earlier record removed: the slot follows its record down
    flow.start_edit(2).expect("edit");
    flow.delete(0).expect("delete");
    assert_eq!(flow.state(), EditState::Editing(1));

    // the record under edit removed: edit cancelled
    flow.delete(1).expect("delete");
    assert_eq!(flow.state(), EditState::Idle);
}

#[test]
fn test_delete_out_of_range_is_an_error() {
    let store = seeded_store("flow_delete_range");
    let mut flow = ActivityFlow::new(&store);

    assert!(matches!(
        flow.delete(10).unwrap_err(),
        AppError::InvalidPosition { position: 10, len: 3 }
    ));
    assert_eq!(store.load().expect("load").len(), 3);
}

#[test]
fn test_mutations_are_journaled() {
    let store = RecordStore::new(setup_data_file("flow_journal"));
    let mut flow = ActivityFlow::new(&store);

    flow.submit(&form(day(2024, 1, 1), 1.0, "A", "a")).expect("add");
    flow.start_edit(0).expect("edit");
    flow.submit(&form(day(2024, 1, 1), 2.0, "A2", "a")).expect("edit");
    flow.delete(0).expect("delete");

    let entries = journal::read_all(&store.journal_path()).expect("journal");
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();

    assert_eq!(ops, ["add", "edit", "del"]);
    assert!(entries.iter().all(|e| e.target == "#1"));
}

#[test]
fn test_daily_totals_sum_per_day_in_date_order() {
    let records = vec![
        rec(day(2024, 1, 2), 1.0, "late"),
        rec(day(2024, 1, 1), 2.0, "x"),
        rec(day(2024, 1, 1), 3.5, "y"),
    ];

    let totals = daily_totals(&records);
    let pairs: Vec<(String, f64)> = totals.iter().map(|t| (t.label(), t.total_hours)).collect();

    assert_eq!(
        pairs,
        vec![("01/01/2024".to_string(), 5.5), ("02/01/2024".to_string(), 1.0)]
    );
    assert_eq!(grand_total(&totals), 6.5);
}

#[test]
fn test_empty_store_views() {
    assert!(daily_totals(&[]).is_empty());
    assert_eq!(render_text(&[]), "");
}

#[test]
fn test_text_rendering_truncates_hours() {
    let records = vec![
        activitylog::models::ActivityRecord::new(day(2024, 1, 1), 2.9, "Standup", "Daily sync"),
        activitylog::models::ActivityRecord::new(day(2024, 1, 2), 0.5, "Call", "Client"),
    ];

    assert_eq!(
        render_text(&records),
        "01/01/2024 | 2 | Standup | Daily sync\n02/01/2024 | 0 | Call | Client"
    );
}
