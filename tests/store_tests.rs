//! Table store: sorting, sorted-view index mapping, row and column CRUD,
//! change notification.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use gridlayer::store::EditPolicy;
use gridlayer::{CellValue, GridError, Record, SortDirection, SortState, TableStore};

use common::{people, people_columns};

const NOME: usize = 1;
const IDADE: usize = 2;
const ATIVO: usize = 3;

fn store() -> TableStore {
    TableStore::new(people_columns(), people())
}

fn names(store: &TableStore) -> Vec<String> {
    store
        .display_rows()
        .map(|r| r.get("nome").map(CellValue::display).unwrap_or_default())
        .collect()
}

fn ids(store: &TableStore) -> Vec<u64> {
    store.rows().iter().map(Record::id).collect()
}

type Log = Rc<RefCell<Vec<usize>>>;

/// Record the row count of every change notification.
fn watch(store: &mut TableStore) -> Log {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    store.set_on_change(Some(Box::new(move |rows: &[Record]| {
        sink.borrow_mut().push(rows.len());
    })));
    log
}

// ---- Sorting ----

#[test]
fn test_sort_cycle_asc_desc_none() {
    let mut store = store();
    assert_eq!(names(&store), ["Bruno", "Ana", "Carla", "Diego"]);

    store.toggle_sort(NOME).unwrap();
    assert_eq!(store.sort_state(), Some(&SortState::asc("nome")));
    assert_eq!(names(&store), ["Ana", "Bruno", "Carla", "Diego"]);

    store.toggle_sort(NOME).unwrap();
    assert_eq!(store.sort_state().map(|s| s.direction), Some(SortDirection::Desc));
    assert_eq!(names(&store), ["Diego", "Carla", "Bruno", "Ana"]);

    store.toggle_sort(NOME).unwrap();
    assert_eq!(store.sort_state(), None);
    assert_eq!(names(&store), ["Bruno", "Ana", "Carla", "Diego"]);
}

#[test]
fn test_undefined_sorts_last_both_directions() {
    let mut store = store();
    store.toggle_sort(IDADE).unwrap();
    assert_eq!(names(&store), ["Ana", "Bruno", "Diego", "Carla"]);
    store.toggle_sort(IDADE).unwrap();
    assert_eq!(names(&store), ["Diego", "Bruno", "Ana", "Carla"]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let mut store = store();
    store.toggle_sort(ATIVO).unwrap();
    // false first, then the three `true` rows in insertion order
    assert_eq!(names(&store), ["Ana", "Bruno", "Carla", "Diego"]);
}

#[test]
fn test_other_column_restarts_ascending() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    store.toggle_sort(NOME).unwrap();
    store.toggle_sort(IDADE).unwrap();
    assert_eq!(store.sort_state(), Some(&SortState::asc("idade")));
}

#[test]
fn test_sort_does_not_touch_storage_or_notify() {
    let mut store = store();
    let log = watch(&mut store);
    store.toggle_sort(NOME).unwrap();
    assert_eq!(ids(&store), [1, 2, 3, 4]);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_sorted_column_title_carries_arrow() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    assert_eq!(store.display_columns()[NOME].title, "Nome ↑");
    store.toggle_sort(NOME).unwrap();
    assert_eq!(store.display_columns()[NOME].title, "Nome ↓");
    // stored titles stay undecorated
    assert_eq!(store.columns()[NOME].title, "Nome");
}

#[test]
fn test_sort_disabled() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    store.set_sorting_enabled(false);
    assert_eq!(store.sort_state(), None);
    assert_eq!(names(&store), ["Bruno", "Ana", "Carla", "Diego"]);
    assert!(matches!(
        store.sort_by("nome"),
        Err(GridError::FeatureDisabled("sorting"))
    ));
}

#[test]
fn test_sort_unknown_column() {
    let mut store = store();
    assert!(matches!(store.sort_by("nope"), Err(GridError::UnknownColumn(_))));
    assert!(matches!(
        store.toggle_sort(99),
        Err(GridError::ColumnOutOfRange { index: 99, .. })
    ));
}

// ---- Editing through the sorted view ----

#[test]
fn test_edit_maps_display_row_to_storage() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    // display row 0 is Ana (id 2, storage slot 1)
    assert_eq!(store.storage_index(0), Some(1));
    store.edit_cell(IDADE, 0, CellValue::Number(29.0)).unwrap();

    assert_eq!(store.rows()[1].get("idade"), Some(&CellValue::Number(29.0)));
    assert_eq!(store.rows()[0].get("idade"), Some(&CellValue::Number(34.0)));
}

#[test]
fn test_edit_resorts_view() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    store.edit_cell(NOME, 0, "Zoe".into()).unwrap();
    assert_eq!(names(&store), ["Bruno", "Carla", "Diego", "Zoe"]);
}

#[test]
fn test_edit_notifies_with_storage_order() {
    let mut store = store();
    let seen: Rc<RefCell<Vec<Vec<u64>>>> = Rc::default();
    let sink = Rc::clone(&seen);
    store.set_on_change(Some(Box::new(move |rows: &[Record]| {
        sink.borrow_mut().push(rows.iter().map(Record::id).collect());
    })));
    store.toggle_sort(NOME).unwrap();
    store.edit_cell(NOME, 3, "Dani".into()).unwrap();
    assert_eq!(*seen.borrow(), [vec![1, 2, 3, 4]]);
}

#[test]
fn test_id_column_is_protected() {
    let mut store = store();
    let log = watch(&mut store);
    let err = store.edit_cell(0, 0, CellValue::Number(99.0)).unwrap_err();
    assert!(matches!(err, GridError::ProtectedColumn { action: "edited" }));
    assert_eq!(ids(&store), [1, 2, 3, 4]);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_policy_blocks_edits() {
    let mut store = store();
    store.set_locked(true);
    assert!(matches!(
        store.edit_cell(NOME, 0, "X".into()),
        Err(GridError::CellNotEditable { col: NOME, row: 0 })
    ));

    store.set_policy(EditPolicy {
        editing: true,
        locked: false,
        editable_columns: [("nome".to_string(), false)].into(),
    });
    assert!(store.edit_cell(NOME, 0, "X".into()).is_err());
    assert!(store.edit_cell(IDADE, 0, CellValue::Number(1.0)).is_ok());
}

#[test]
fn test_edit_out_of_range() {
    let mut store = store();
    assert!(matches!(
        store.edit_cell(NOME, 10, "X".into()),
        Err(GridError::RowOutOfRange { index: 10, len: 4 })
    ));
}

// ---- Row CRUD ----

#[test]
fn test_append_seeds_blank_values() {
    let mut store = store();
    let log = watch(&mut store);
    let id = store.append_row();
    assert_eq!(id, 5);
    assert_eq!(*log.borrow(), [5]);

    let row = store.rows().last().unwrap();
    assert_eq!(row.get("nome"), Some(&CellValue::Text(String::new())));
    assert_eq!(row.get("idade"), Some(&CellValue::Number(0.0)));
    assert_eq!(row.get("ativo"), Some(&CellValue::Bool(false)));
    assert_eq!(row.get("status"), Some(&CellValue::List(Vec::new())));
}

#[test]
fn test_append_then_delete_restores_rows() {
    let mut store = store();
    let before = store.rows().to_vec();
    store.append_row();
    store.delete_row(4).unwrap();
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn test_row_ids_never_reused() {
    let mut store = store();
    let first = store.append_row();
    store.delete_row(4).unwrap();
    let second = store.append_row();
    assert_eq!(first, 5);
    assert_eq!(second, 6);
}

#[test]
fn test_empty_store_starts_ids_at_one() {
    let mut store = TableStore::new(people_columns(), Vec::new());
    assert_eq!(store.append_row(), 1);
}

#[test]
fn test_ids_at_safe_integer_limit() {
    let top: Record = serde_json::from_str(r#"{"id": 9007199254740991}"#).unwrap();
    let mut store = TableStore::new(people_columns(), vec![Record::new(1), top]);

    let appended = store.append_row();
    assert_eq!(appended, 2);
    let inserted = store.insert_row_at(0).unwrap();
    assert_eq!(inserted, 3);

    let all = ids(&store);
    let unique: std::collections::BTreeSet<u64> = all.iter().copied().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_ids_past_safe_integer_rejected() {
    assert!(serde_json::from_str::<Record>(r#"{"id": 9007199254740992}"#).is_err());
    assert!(serde_json::from_str::<Vec<Record>>(r#"[{"id": 1}, {"id": 1e20}]"#).is_err());
}

#[test]
fn test_insert_above_and_below() {
    let mut store = store();
    store.insert_row_at(1).unwrap();
    assert_eq!(ids(&store), [1, 5, 2, 3, 4]);
    store.insert_row_at(5).unwrap();
    assert_eq!(ids(&store), [1, 5, 2, 3, 4, 6]);
    assert!(matches!(
        store.insert_row_at(9),
        Err(GridError::RowOutOfRange { .. })
    ));
}

#[test]
fn test_insert_in_sorted_view_goes_before_displayed_row() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    // display row 1 is Bruno, storage slot 0
    store.insert_row_at(1).unwrap();
    assert_eq!(ids(&store), [5, 1, 2, 3, 4]);
}

#[test]
fn test_delete_in_sorted_view() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    let removed = store.delete_row(0).unwrap();
    assert_eq!(removed.id(), 2);
    assert_eq!(names(&store), ["Bruno", "Carla", "Diego"]);
}

#[test]
fn test_last_row_cannot_be_deleted() {
    let mut store = TableStore::new(people_columns(), vec![Record::new(7)]);
    let log = watch(&mut store);
    assert!(matches!(store.delete_row(0), Err(GridError::LastRow)));
    assert_eq!(store.row_count(), 1);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_move_row() {
    let mut store = store();
    let log = watch(&mut store);
    store.move_row(0, 2).unwrap();
    assert_eq!(ids(&store), [2, 3, 1, 4]);
    assert_eq!(log.borrow().len(), 1);
}

// ---- Column CRUD ----

#[test]
fn test_add_column_after_anchor() {
    let mut store = store();
    let log = watch(&mut store);
    let id = store.add_column(NOME).unwrap();
    assert_eq!(id, "col_1");
    let added = &store.columns()[NOME + 1];
    assert_eq!(added.title, "New Column");
    assert_eq!(added.width, 150.0);
    assert!(log.borrow().is_empty());

    assert_eq!(store.add_column(0).unwrap(), "col_2");
}

#[test]
fn test_add_column_skips_taken_ids() {
    let mut columns = people_columns();
    columns.push(gridlayer::ColumnDescriptor::new("col_1", "Taken", 100.0));
    let mut store = TableStore::new(columns, people());
    assert_eq!(store.add_column(0).unwrap(), "col_2");
}

#[test]
fn test_remove_column_keeps_values() {
    let mut store = store();
    let removed = store.remove_column(IDADE).unwrap();
    assert_eq!(removed.id, "idade");
    assert_eq!(store.column_index("idade"), None);
    assert_eq!(store.rows()[0].get("idade"), Some(&CellValue::Number(34.0)));
}

#[test]
fn test_remove_sorted_column_clears_sort() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    store.remove_column(NOME).unwrap();
    assert_eq!(store.sort_state(), None);
    assert_eq!(store.storage_index(0), Some(0));
}

#[test]
fn test_id_column_cannot_be_removed_or_renamed() {
    let mut store = store();
    assert!(matches!(
        store.remove_column(0),
        Err(GridError::ProtectedColumn { action: "removed" })
    ));
    assert!(matches!(
        store.rename_column(0, "Key"),
        Err(GridError::ProtectedColumn { action: "renamed" })
    ));
    assert_eq!(store.columns()[0].title, "ID");
}

#[test]
fn test_rename_changes_title_only() {
    let mut store = store();
    store.rename_column(NOME, "Full name").unwrap();
    let column = &store.columns()[NOME];
    assert_eq!(column.id, "nome");
    assert_eq!(column.title, "Full name");
}

#[test]
fn test_move_and_resize_columns() {
    let mut store = store();
    let log = watch(&mut store);
    store.move_column(NOME, IDADE).unwrap();
    assert_eq!(store.columns()[IDADE].id, "nome");
    store.resize_column("nome", 320.0).unwrap();
    assert_eq!(store.columns()[IDADE].width, 320.0);
    assert!(store.resize_column("missing", 10.0).is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_reset_columns_drops_stale_sort() {
    let mut store = store();
    store.toggle_sort(NOME).unwrap();
    store.reset_columns(people_columns());
    assert!(store.sort_state().is_some());

    let without_nome = people_columns()
        .into_iter()
        .filter(|c| c.id != "nome")
        .collect();
    store.reset_columns(without_nome);
    assert_eq!(store.sort_state(), None);
}
