//! Editing session tests — add, remove, and list/record lockstep.

use spawn_core::{
    catalog::{BuffPolicy, Monster},
    config::ToolConfig,
    editor::{MonsterToolEditor, RemoveOutcome},
    error::ToolError,
    list_view::ListView,
    types::RecordId,
};

fn session() -> MonsterToolEditor {
    // RUST_LOG=debug shows the session's log lines for a failing test.
    let _ = env_logger::builder().is_test(true).try_init();
    MonsterToolEditor::new(ToolConfig::default())
}

/// The visible list and the record collection must match row for row.
fn assert_lockstep(editor: &MonsterToolEditor) {
    let records = editor.records();
    assert_eq!(
        editor.list().row_count(),
        records.len(),
        "list has {} rows but session has {} records",
        editor.list().row_count(),
        records.len()
    );
    for (i, record) in records.iter().enumerate() {
        assert_eq!(editor.list().row_key(i), Some(record.id()), "row {i} key mismatch");
        assert_eq!(editor.list().row_text(i), Some(record.to_string().as_str()));
    }
}

/// Adding converts seconds to milliseconds and appends a row.
#[test]
fn add_appends_record_and_row() {
    let mut editor = session();
    let id = editor.add_record(Monster::Boar, 1.5, "WINDFALL").unwrap();

    let record = &editor.records()[0];
    assert_eq!(record.id(), id);
    assert_eq!(record.monster, "Boar");
    assert_eq!(record.arrival_time, 1500);
    assert_eq!(record.buffs(), ["WINDFALL"]);
    assert_eq!(
        editor.list().row_text(0),
        Some("id: 1 Boar 1500(ms) [\"WINDFALL\"]")
    );
    assert_lockstep(&editor);
}

/// Buff order typed by the user does not matter.
#[test]
fn buff_input_is_normalized() {
    let mut editor = session();
    editor.add_record(Monster::Boar, 0.0, "EVER_CHANGING WINDFALL").unwrap();
    editor.add_record(Monster::Boar, 0.0, "  WINDFALL   EVER_CHANGING  ").unwrap();

    let a = editor.records()[0].buffs();
    let b = editor.records()[1].buffs();
    assert_eq!(a, ["EVER_CHANGING", "WINDFALL"]);
    assert_eq!(a, b);
}

/// Both ends of the range are accepted.
#[test]
fn arrival_bounds_are_inclusive() {
    let mut editor = session();
    editor.add_record(Monster::Boar, 0.0, "").unwrap();
    editor.add_record(Monster::Boar, 600.0, "").unwrap();
    assert_eq!(editor.records()[0].arrival_time, 0);
    assert_eq!(editor.records()[1].arrival_time, 600_000);
}

/// Out-of-range arrival is rejected and nothing changes, not even the id counter.
#[test]
fn out_of_range_arrival_is_rejected() {
    let mut editor = session();
    for bad in [-0.5, 600.001, f64::NAN, f64::INFINITY] {
        let err = editor.add_record(Monster::Boar, bad, "").unwrap_err();
        assert!(matches!(err, ToolError::ArrivalOutOfRange { .. }), "{bad} gave {err:?}");
    }
    assert!(editor.is_empty());
    assert_eq!(editor.list().row_count(), 0);
    assert_eq!(editor.add_record(Monster::Boar, 1.0, "").unwrap(), RecordId(1));
}

/// Unknown buffs are stored verbatim under the default policy.
#[test]
fn unknown_buffs_accepted_by_default() {
    let mut editor = session();
    editor.add_record(Monster::Boar, 1.0, "HASTE").unwrap();
    assert_eq!(editor.records()[0].buffs(), ["HASTE"]);
}

/// Strict policy rejects unknown buffs without touching the session.
#[test]
fn strict_policy_rejects_unknown_buffs() {
    let config = ToolConfig { buff_policy: BuffPolicy::Strict, ..ToolConfig::default() };
    let mut editor = MonsterToolEditor::new(config);
    let err = editor.add_record(Monster::Boar, 1.0, "WINDFALL HASTE").unwrap_err();
    assert!(matches!(err, ToolError::UnknownBuff { ref token } if token == "HASTE"));
    assert!(editor.is_empty());

    editor.add_record(Monster::Boar, 1.0, "WINDFALL EVER_CHANGING").unwrap();
    assert_eq!(editor.records().len(), 1);
}

/// Removing the selected row removes exactly that record.
#[test]
fn remove_selected_row() {
    let mut editor = session();
    let a = editor.add_record(Monster::Boar, 1.0, "").unwrap();
    let b = editor.add_record(Monster::Boar, 2.0, "").unwrap();
    let c = editor.add_record(Monster::Boar, 3.0, "").unwrap();

    editor.list_mut().set_selected_row(Some(1));
    let outcome = editor.remove_selected().unwrap();
    assert_eq!(outcome, RemoveOutcome::Removed { id: b });

    let remaining: Vec<RecordId> = editor.records().iter().map(|r| r.id()).collect();
    assert_eq!(remaining, vec![a, c]);
    assert_eq!(editor.list().selected_row(), None, "selection clears after removal");
    assert_lockstep(&editor);
}

/// Removal finds the record by id even when its twin has identical fields.
#[test]
fn remove_targets_the_row_not_a_lookalike() {
    let mut editor = session();
    let first = editor.add_record(Monster::Boar, 5.0, "WINDFALL").unwrap();
    let second = editor.add_record(Monster::Boar, 5.0, "WINDFALL").unwrap();

    editor.remove_row(Some(1)).unwrap();
    assert_eq!(editor.records().len(), 1);
    assert_eq!(editor.records()[0].id(), first);
    assert_ne!(editor.records()[0].id(), second);
    assert_lockstep(&editor);
}

/// No selection: nothing removed, named outcome.
#[test]
fn remove_with_nothing_selected_is_noop() {
    let mut editor = session();
    editor.add_record(Monster::Boar, 1.0, "").unwrap();
    editor.add_record(Monster::Boar, 2.0, "").unwrap();
    let before = editor.row_texts();

    assert_eq!(editor.remove_selected().unwrap(), RemoveOutcome::NothingSelected);
    assert_eq!(editor.remove_row(None).unwrap(), RemoveOutcome::NothingSelected);

    assert_eq!(editor.records().len(), 2);
    assert_eq!(editor.row_texts(), before);
    assert_lockstep(&editor);
}

/// A selection past the end of the list is treated as no selection.
#[test]
fn remove_out_of_range_is_noop() {
    let mut editor = session();
    editor.add_record(Monster::Boar, 1.0, "").unwrap();
    let before = editor.row_texts();

    editor.list_mut().set_selected_row(Some(1));
    assert_eq!(editor.remove_selected().unwrap(), RemoveOutcome::NothingSelected);
    assert_eq!(editor.remove_row(Some(99)).unwrap(), RemoveOutcome::NothingSelected);

    assert_eq!(editor.records().len(), 1);
    assert_eq!(editor.row_texts(), before);
}

/// Removing from an empty session is a no-op.
#[test]
fn remove_from_empty_session() {
    let mut editor = session();
    assert_eq!(editor.remove_row(Some(0)).unwrap(), RemoveOutcome::NothingSelected);
    assert!(editor.is_empty());
}

/// Interleaved adds and removes keep list and records aligned.
#[test]
fn lockstep_survives_mixed_edits() {
    let mut editor = session();
    for i in 0..6 {
        editor.add_record(Monster::Boar, i as f64, "").unwrap();
    }
    editor.remove_row(Some(0)).unwrap();
    editor.remove_row(Some(3)).unwrap();
    editor.add_record(Monster::Boar, 10.0, "WINDFALL").unwrap();
    editor.remove_row(Some(2)).unwrap();

    assert_eq!(editor.records().len(), 4);
    assert_lockstep(&editor);
    let ids: Vec<u64> = editor.records().iter().map(|r| r.id().0).collect();
    assert_eq!(ids, vec![2, 3, 6, 7]);
}

/// Seconds convert by rounding: 4.35 s is 4350 ms, not the 4349 ms truncation gives.
#[test]
fn seconds_round_to_nearest_millisecond() {
    let mut editor = session();
    editor.add_record(Monster::Boar, 4.35, "").unwrap();
    editor.add_record(Monster::Boar, 1.001, "").unwrap();
    assert_eq!(editor.records()[0].arrival_time, 4350);
    assert_eq!(editor.records()[1].arrival_time, 1001);
}
