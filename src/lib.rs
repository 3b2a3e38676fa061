//! gridlayer - configuration and data layer for canvas-rendered data grids
//!
//! Sits between a host page and an external canvas grid engine:
//! - Resolves presets, feature flags and explicit props into one effective config
//! - Owns the row/column data with sorting, editing and row/column CRUD
//! - Maps every cell to a typed descriptor (text, number, boolean, image, ...)
//! - Tracks context menus, the rename editor, the search bar and selection
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridlayer';
//! await init();
//! const grid = new GridView({ preset: "default", columns, initialData });
//! grid.setOnDataChange(rows => save(rows));
//! const props = grid.engineProps();
//! // getCellContent: ([col, row]) => grid.getCellContent(col, row)
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use gridlayer::{ColumnDescriptor, DataGrid, GridProps, Record};
//!
//! let columns = vec![
//!     ColumnDescriptor::new("id", "ID", 60.0),
//!     ColumnDescriptor::new("nome", "Nome", 200.0),
//! ];
//! let rows = vec![Record::new(1).with("nome", "Ana")];
//! let mut grid = DataGrid::new(GridProps::new(columns, rows));
//! grid.row_appended();
//! assert_eq!(grid.store().row_count(), 2);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod render;
pub mod store;
pub mod types;

use wasm_bindgen::prelude::*;

pub use config::{ConfigResolver, EffectiveConfig, GridProps, Preset};
pub use content::{CellDescriptor, EditedCell};
pub use error::{GridError, Result};
pub use grid::DataGrid;
#[cfg(target_arch = "wasm32")]
pub use grid::GridView;
pub use store::{SortDirection, SortState, TableStore};

pub use types::*;

/// Resolve a props object into its effective configuration without
/// mounting a grid.
///
/// # Errors
/// Returns an error if the props cannot be deserialized.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "resolveConfig")]
pub fn resolve_config(props: JsValue) -> std::result::Result<JsValue, JsValue> {
    let props: GridProps =
        serde_wasm_bindgen::from_value(props).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&EffectiveConfig::resolve(&props))
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
        .and_then(|json| js_sys::JSON::parse(&json))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
