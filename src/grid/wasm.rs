//! `GridView` - the `DataGrid` exported to JavaScript.
//!
//! The JS shim mounts the canvas engine, feeds it `engineProps()` and
//! `getCellContent()`, and forwards each engine callback to the matching
//! method here. Every handler returns whether the grid changed, so the shim
//! can request a redraw.

use js_sys::Function;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

use super::DataGrid;
use crate::config::GridProps;
use crate::content::EditedCell;
use crate::interaction::{ColumnMenuAction, RowMenuAction};
use crate::render::{apply_engine_defaults, GridColors};
use crate::types::{GridSelection, Point, Rect, Record, Size};

/// CSS custom properties read as base grid colors.
const CSS_COLOR_VARS: [(&str, fn(&mut GridColors, String)); 6] = [
    ("--gdg-bg-grid", |c, v| c.bg_grid = Some(v)),
    ("--gdg-bg-cell", |c, v| c.bg_cell = Some(v)),
    ("--gdg-border-hor", |c, v| c.border_horizontal = Some(v)),
    ("--gdg-border-ver", |c, v| c.border_vertical = Some(v)),
    ("--gdg-border-header", |c, v| c.border_header = Some(v)),
    ("--gdg-border-row-marker", |c, v| c.border_row_marker = Some(v)),
];

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::default();
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(dim(window.inner_width()), dim(window.inner_height()))
}

fn computed_root_style() -> Option<web_sys::CssStyleDeclaration> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    window.get_computed_style(&root).ok().flatten()
}

fn read_css_colors() -> GridColors {
    let mut colors = GridColors::default();
    let Some(style) = computed_root_style() else {
        return colors;
    };
    for (name, set) in CSS_COLOR_VARS {
        if let Ok(value) = style.get_property_value(name) {
            let value = value.trim();
            if !value.is_empty() {
                set(&mut colors, value.to_string());
            }
        }
    }
    colors
}

fn root_font_size() -> f64 {
    computed_root_style()
        .and_then(|s| s.get_property_value("font-size").ok())
        .and_then(|v| crate::config::features::parse_leading_f64(&v))
        .unwrap_or(crate::config::features::DEFAULT_ROOT_FONT_SIZE)
}

/// A grid instance exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    grid: DataGrid,
}

#[wasm_bindgen]
impl GridView {
    /// Build a grid from the same props object the component accepts.
    #[wasm_bindgen(constructor)]
    pub fn new(props: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let props: GridProps = from_js(props)?;
        let mut grid = DataGrid::new(props);
        grid.set_css_colors(read_css_colors());
        grid.set_on_notice(Some(Box::new(alert)));
        Ok(GridView { grid })
    }

    // ---- Callbacks ----

    #[wasm_bindgen(js_name = "setOnDataChange")]
    pub fn set_on_data_change(&mut self, callback: Option<Function>) {
        self.grid.set_on_data_change(callback.map(|f| {
            Box::new(move |rows: &[Record]| {
                if let Ok(value) = to_js(rows) {
                    let _ = f.call1(&JsValue::NULL, &value);
                }
            }) as Box<dyn FnMut(&[Record])>
        }));
    }

    /// Replaces `window.alert` for blocked-action notices.
    #[wasm_bindgen(js_name = "setOnNotice")]
    pub fn set_on_notice(&mut self, callback: Option<Function>) {
        let listener: Box<dyn FnMut(&str)> = match callback {
            Some(f) => Box::new(move |message: &str| {
                let _ = f.call1(&JsValue::NULL, &JsValue::from_str(message));
            }),
            None => Box::new(alert),
        };
        self.grid.set_on_notice(Some(listener));
    }

    #[wasm_bindgen(js_name = "setOnSelectionChange")]
    pub fn set_on_selection_change(&mut self, callback: Option<Function>) {
        self.grid.set_on_selection_change(callback.map(|f| {
            Box::new(move |selection: &GridSelection| {
                if let Ok(value) = to_js(selection) {
                    let _ = f.call1(&JsValue::NULL, &value);
                }
            }) as Box<dyn FnMut(&GridSelection)>
        }));
    }

    #[wasm_bindgen(js_name = "setOnSearchClose")]
    pub fn set_on_search_close(&mut self, callback: Option<Function>) {
        self.grid.set_on_search_close(callback.map(|f| {
            Box::new(move || {
                let _ = f.call0(&JsValue::NULL);
            }) as Box<dyn FnMut()>
        }));
    }

    #[wasm_bindgen(js_name = "setOnRowAppended")]
    pub fn set_on_row_appended(&mut self, callback: Option<Function>) {
        self.grid.set_on_row_appended(callback.map(|f| {
            Box::new(move || {
                let _ = f.call0(&JsValue::NULL);
            }) as Box<dyn FnMut()>
        }));
    }

    // ---- Render inputs ----

    #[wasm_bindgen(js_name = "getCellContent")]
    pub fn get_cell_content(&self, col: usize, row: usize) -> Result<JsValue, JsValue> {
        to_js(&self.grid.cell_content(col, row))
    }

    #[wasm_bindgen(js_name = "engineProps")]
    pub fn engine_props(&self) -> Result<JsValue, JsValue> {
        to_js(&self.grid.engine_props())
    }

    #[wasm_bindgen(js_name = "effectiveConfig")]
    pub fn effective_config(&self) -> Result<JsValue, JsValue> {
        to_js(self.grid.config())
    }

    #[wasm_bindgen(js_name = "headerBar")]
    pub fn header_bar(&self) -> Result<JsValue, JsValue> {
        to_js(&self.grid.header_bar())
    }

    /// The open menu or rename editor, `{ type: "closed" }` when none.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        to_js(self.grid.overlay())
    }

    pub fn rows(&self) -> Result<JsValue, JsValue> {
        to_js(self.grid.store().rows())
    }

    #[wasm_bindgen(js_name = "updateProps")]
    pub fn update_props(&mut self, props: JsValue) -> Result<(), JsValue> {
        let props: GridProps = from_js(props)?;
        self.grid.update_props(props);
        Ok(())
    }

    /// Re-read the page's `--gdg-*` color variables.
    #[wasm_bindgen(js_name = "refreshCssColors")]
    pub fn refresh_css_colors(&mut self) {
        self.grid.set_css_colors(read_css_colors());
    }

    // ---- Engine callbacks ----

    #[wasm_bindgen(js_name = "onHeaderClicked")]
    pub fn on_header_clicked(&mut self, col: usize) -> bool {
        self.grid.header_clicked(col)
    }

    #[wasm_bindgen(js_name = "onCellEdited")]
    pub fn on_cell_edited(&mut self, col: usize, row: usize, cell: JsValue) -> Result<bool, JsValue> {
        let cell: EditedCell = from_js(cell)?;
        Ok(self.grid.cell_edited(col, row, cell))
    }

    #[wasm_bindgen(js_name = "onRowAppended")]
    pub fn on_row_appended(&mut self) -> bool {
        self.grid.row_appended()
    }

    #[wasm_bindgen(js_name = "onColumnMoved")]
    pub fn on_column_moved(&mut self, from: usize, to: usize) -> bool {
        self.grid.column_moved(from, to)
    }

    #[wasm_bindgen(js_name = "onColumnResize")]
    pub fn on_column_resize(&mut self, column_id: &str, width: f64) -> bool {
        self.grid.column_resized(column_id, width)
    }

    #[wasm_bindgen(js_name = "onRowMoved")]
    pub fn on_row_moved(&mut self, from: usize, to: usize) -> bool {
        self.grid.row_moved(from, to)
    }

    #[wasm_bindgen(js_name = "onGridSelectionChange")]
    pub fn on_grid_selection_change(&mut self, selection: JsValue) -> Result<bool, JsValue> {
        let selection: GridSelection = from_js(selection)?;
        Ok(self.grid.selection_changed(selection))
    }

    #[wasm_bindgen(js_name = "onHeaderContextMenu")]
    pub fn on_header_context_menu(&mut self, col: usize, x: f64, y: f64, w: f64, h: f64) -> bool {
        self.grid
            .header_context_menu(col, Rect::new(x, y, w, h), viewport_size())
    }

    #[wasm_bindgen(js_name = "onCellContextMenu")]
    pub fn on_cell_context_menu(
        &mut self,
        col: i32,
        row: usize,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> bool {
        self.grid
            .cell_context_menu(i64::from(col), row, Rect::new(x, y, w, h), viewport_size())
    }

    // ---- Menus ----

    /// `action`: `"addColumn" | "renameColumn" | "removeColumn"`.
    #[wasm_bindgen(js_name = "columnMenuAction")]
    pub fn column_menu_action(&mut self, action: JsValue) -> Result<bool, JsValue> {
        let action: ColumnMenuAction = from_js(action)?;
        Ok(self.grid.column_menu_action(action))
    }

    /// `action`: `"insertAbove" | "insertBelow" | "deleteRow"`.
    #[wasm_bindgen(js_name = "rowMenuAction")]
    pub fn row_menu_action(&mut self, action: JsValue) -> Result<bool, JsValue> {
        let action: RowMenuAction = from_js(action)?;
        Ok(self.grid.row_menu_action(action))
    }

    #[wasm_bindgen(js_name = "renameInput")]
    pub fn rename_input(&mut self, value: &str) {
        self.grid.rename_input(value);
    }

    #[wasm_bindgen(js_name = "renameKey")]
    pub fn rename_key(&mut self, key: &str) -> bool {
        self.grid.rename_key(key)
    }

    #[wasm_bindgen(js_name = "renameBlur")]
    pub fn rename_blur(&mut self) -> bool {
        self.grid.rename_blur()
    }

    #[wasm_bindgen(js_name = "clickOutside")]
    pub fn click_outside(&mut self) -> bool {
        self.grid.click_outside()
    }

    // ---- Toolbar and search ----

    #[wasm_bindgen(js_name = "toggleLock")]
    pub fn toggle_lock(&mut self) -> bool {
        self.grid.toggle_lock()
    }

    #[wasm_bindgen(js_name = "toggleSearch")]
    pub fn toggle_search(&mut self) -> bool {
        self.grid.toggle_search()
    }

    #[wasm_bindgen(js_name = "onSearchClose")]
    pub fn on_search_close(&mut self) -> bool {
        self.grid.search_closed()
    }

    /// Initial search-bar placement inside the grid container.
    #[wasm_bindgen(js_name = "placeSearch")]
    pub fn place_search(
        &mut self,
        container_w: f64,
        container_h: f64,
        bar_w: f64,
        bar_h: f64,
    ) -> Result<JsValue, JsValue> {
        let placement = self.grid.place_search(
            Size::new(container_w, container_h),
            Size::new(bar_w, bar_h),
            root_font_size(),
        );
        to_js(&placement)
    }

    #[wasm_bindgen(js_name = "searchPointerDown")]
    #[allow(clippy::too_many_arguments)]
    pub fn search_pointer_down(
        &mut self,
        on_handle: bool,
        x: f64,
        y: f64,
        wrapper_x: f64,
        wrapper_y: f64,
        wrapper_w: f64,
        wrapper_h: f64,
    ) -> bool {
        self.grid.search_pointer_down(
            on_handle,
            Point::new(x, y),
            Rect::new(wrapper_x, wrapper_y, wrapper_w, wrapper_h),
            viewport_size(),
        )
    }

    #[wasm_bindgen(js_name = "searchPointerMove")]
    pub fn search_pointer_move(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        to_js(&self.grid.search_pointer_move(Point::new(x, y)))
    }

    /// Pointer up, pointer cancel, or window blur.
    #[wasm_bindgen(js_name = "searchPointerUp")]
    pub fn search_pointer_up(&mut self) -> bool {
        self.grid.search_pointer_up()
    }
}

/// Fill engine defaults into a partial engine props object (caller wins).
#[wasm_bindgen(js_name = "applyEngineDefaults")]
pub fn apply_engine_defaults_js(overrides: JsValue) -> Result<JsValue, JsValue> {
    let overrides = if overrides.is_undefined() || overrides.is_null() {
        crate::config::EngineOverrides::default()
    } else {
        from_js(overrides)?
    };
    to_js(&apply_engine_defaults(overrides))
}
