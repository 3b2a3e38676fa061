//! Shared fixtures for the gridlayer integration tests.
//!
//! A small people table in the shape the demo host uses, plus helpers to
//! build grids and capture callbacks.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use gridlayer::config::FeatureFlags;
use gridlayer::{ColumnDescriptor, DataGrid, GridProps, Preset, Record};

/// Columns: id, nome, idade, ativo, progresso, status, avatar, bio, email.
#[must_use]
pub fn people_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "ID", 60.0),
        ColumnDescriptor::new("nome", "Nome", 200.0),
        ColumnDescriptor::new("idade", "Idade", 80.0),
        ColumnDescriptor::new("ativo", "Ativo", 80.0),
        ColumnDescriptor::new("progresso", "Progresso", 120.0),
        ColumnDescriptor::new("status", "Status", 120.0).with_group("Meta"),
        ColumnDescriptor::new("avatar", "Avatar", 80.0).with_group("Meta"),
        ColumnDescriptor::new("bio", "Bio", 240.0),
        ColumnDescriptor::new("email", "Email", 200.0),
    ]
}

#[must_use]
pub fn person(id: u64, nome: &str, idade: f64, ativo: bool) -> Record {
    Record::new(id)
        .with("nome", nome)
        .with("idade", idade)
        .with("ativo", ativo)
        .with("progresso", idade / 2.0)
        .with("status", vec!["Ativo".to_string()])
        .with("avatar", format!("https://example.com/{id}.png"))
        .with("bio", format!("**{nome}**"))
        .with("email", format!("{}@example.com", nome.to_lowercase()))
}

/// Four people; Carla has no `idade`.
#[must_use]
pub fn people() -> Vec<Record> {
    vec![
        person(1, "Bruno", 34.0, true),
        person(2, "Ana", 28.0, false),
        Record::new(3)
            .with("nome", "Carla")
            .with("ativo", true)
            .with("status", vec!["Inativo".to_string()])
            .with("email", "carla@example.com"),
        person(4, "Diego", 41.0, true),
    ]
}

#[must_use]
pub fn people_props() -> GridProps {
    GridProps::new(people_columns(), people())
}

#[must_use]
pub fn preset_props(preset: Preset) -> GridProps {
    GridProps {
        preset,
        ..people_props()
    }
}

#[must_use]
pub fn props_with_features(features: FeatureFlags) -> GridProps {
    GridProps {
        features,
        ..people_props()
    }
}

#[must_use]
pub fn grid() -> DataGrid {
    DataGrid::new(people_props())
}

/// Names in display order.
#[must_use]
pub fn names(grid: &DataGrid) -> Vec<String> {
    grid.store()
        .display_rows()
        .map(|r| r.get("nome").map(|v| v.display()).unwrap_or_default())
        .collect()
}

/// Records every `onDataChange` payload.
pub type ChangeLog = Rc<RefCell<Vec<Vec<Record>>>>;

pub fn capture_changes(grid: &mut DataGrid) -> ChangeLog {
    let log: ChangeLog = Rc::default();
    let sink = Rc::clone(&log);
    grid.set_on_data_change(Some(Box::new(move |rows: &[Record]| {
        sink.borrow_mut().push(rows.to_vec());
    })));
    log
}
