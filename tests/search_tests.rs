//! Search bar visibility (controlled and uncontrolled), initial placement and
//! drag repositioning.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use gridlayer::config::{EngineOverrides, FeatureFlags, SearchConfig};
use gridlayer::interaction::PositionMode;
use gridlayer::{DataGrid, GridProps, Point, Preset, Rect, Size};

use common::{grid, people_props, preset_props, props_with_features};

const CONTAINER: Size = Size::new(800.0, 600.0);
const BAR: Size = Size::new(300.0, 40.0);
const VIEWPORT: Size = Size::new(1024.0, 768.0);

fn controlled(show: bool) -> GridProps {
    GridProps {
        engine: EngineOverrides {
            show_search: Some(show),
            ..EngineOverrides::default()
        },
        ..people_props()
    }
}

fn count_closes(grid: &mut DataGrid) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    grid.set_on_search_close(Some(Box::new(move || sink.set(sink.get() + 1))));
    count
}

fn with_offsets(x: &str, y: &str) -> DataGrid {
    DataGrid::new(props_with_features(FeatureFlags {
        search: Some(SearchConfig {
            offset_x: Some(x.into()),
            offset_y: Some(y.into()),
            ..SearchConfig::default()
        }),
        ..FeatureFlags::default()
    }))
}

// ---- Visibility ----

#[test]
fn test_uncontrolled_toggle() {
    let mut grid = grid();
    assert!(!grid.search().is_visible());
    assert!(!grid.engine_props().show_search);

    assert!(grid.toggle_search());
    assert!(grid.search().is_visible());
    assert!(grid.engine_props().show_search);
    assert_eq!(
        grid.header_bar().search_button.map(|b| b.active),
        Some(true)
    );

    assert!(grid.toggle_search());
    assert!(!grid.search().is_visible());
}

#[test]
fn test_engine_close_hides_and_notifies() {
    let mut grid = grid();
    let closes = count_closes(&mut grid);
    grid.toggle_search();
    assert!(grid.search_closed());
    assert!(!grid.search().is_visible());
    assert_eq!(closes.get(), 1);
}

#[test]
fn test_controlled_open_asks_host_to_close() {
    let mut grid = DataGrid::new(controlled(true));
    let closes = count_closes(&mut grid);
    assert!(grid.search().is_controlled());
    assert!(grid.search().is_visible());

    assert!(!grid.toggle_search());
    assert_eq!(closes.get(), 1);
    assert!(grid.search().is_visible(), "host owns visibility");

    grid.search_closed();
    assert!(grid.search().is_visible());
    assert_eq!(closes.get(), 2);

    grid.update_props(controlled(false));
    assert!(!grid.search().is_visible());
}

#[test]
fn test_controlled_closed_toggle_does_nothing() {
    let mut grid = DataGrid::new(controlled(false));
    let closes = count_closes(&mut grid);
    assert!(!grid.toggle_search());
    assert!(!grid.search().is_visible());
    assert_eq!(closes.get(), 0);
}

#[test]
fn test_search_disabled() {
    let mut grid = DataGrid::new(preset_props(Preset::Compact));
    assert!(!grid.search().enabled());
    assert!(!grid.toggle_search());
    assert!(grid.header_bar().search_button.is_none());
    assert!(!grid.engine_props().handlers.search_close);
    assert_eq!(grid.engine_props().keybindings.get("search"), Some(&false));
}

#[test]
fn test_disabled_search_ignores_controlled_show() {
    let props = GridProps {
        preset: Preset::Compact,
        ..controlled(true)
    };
    let grid = DataGrid::new(props);
    assert!(!grid.search().is_visible());
    assert!(!grid.engine_props().show_search);
}

#[test]
fn test_animation_class() {
    let grid = DataGrid::new(props_with_features(FeatureFlags {
        search: Some(SearchConfig {
            animation: Some(gridlayer::config::SearchAnimation::Blur),
            ..SearchConfig::default()
        }),
        ..FeatureFlags::default()
    }));
    assert_eq!(grid.engine_props().search_animation_class, "gdg-search-anim-blur");
}

// ---- Placement ----

#[test]
fn test_initial_placement_right_aligned() {
    let mut grid = grid();
    assert_eq!(grid.place_search(CONTAINER, BAR, 16.0), None, "hidden");

    grid.toggle_search();
    let placement = grid.place_search(CONTAINER, BAR, 16.0).unwrap();
    assert_eq!(placement.left, 800.0 - 300.0 - 20.0);
    assert_eq!(placement.top, 0.0);
    assert_eq!(placement.mode, PositionMode::Absolute);
    assert!(placement.animate);
    assert_eq!(grid.search().placement(), Some(placement));
}

#[test]
fn test_offsets_in_units() {
    let mut grid = with_offsets("10%", "1rem");
    grid.toggle_search();
    let placement = grid.place_search(CONTAINER, BAR, 20.0).unwrap();
    assert_eq!(placement.left, 500.0 - 80.0);
    assert_eq!(placement.top, 20.0);

    let mut grid = with_offsets("12px", "8");
    grid.toggle_search();
    let placement = grid.place_search(CONTAINER, BAR, 16.0).unwrap();
    assert_eq!(placement.left, 488.0);
    assert_eq!(placement.top, 8.0);
}

#[test]
fn test_unparsable_offset_falls_back() {
    let mut grid = with_offsets("wide", "auto");
    grid.toggle_search();
    let placement = grid.place_search(CONTAINER, BAR, 16.0).unwrap();
    assert_eq!(placement.left, 480.0);
    assert_eq!(placement.top, 0.0);
}

#[test]
fn test_placement_clamped_to_container() {
    let mut grid = with_offsets("2000", "2000");
    grid.toggle_search();
    let placement = grid.place_search(CONTAINER, BAR, 16.0).unwrap();
    assert_eq!(placement.left, 0.0);
    assert_eq!(placement.top, 560.0);
}

// ---- Dragging ----

#[test]
fn test_drag_moves_in_viewport_coordinates() {
    let mut grid = grid();
    grid.toggle_search();
    let wrapper = Rect::new(480.0, 0.0, 300.0, 40.0);
    assert!(grid.search_pointer_down(true, Point::new(500.0, 10.0), wrapper, VIEWPORT));
    assert!(grid.search().is_dragging());

    let moved = grid.search_pointer_move(Point::new(600.0, 60.0)).unwrap();
    assert_eq!((moved.left, moved.top), (580.0, 50.0));
    assert_eq!(moved.mode, PositionMode::Fixed);
    assert!(!moved.animate);

    let clamped = grid.search_pointer_move(Point::new(2000.0, -100.0)).unwrap();
    assert_eq!((clamped.left, clamped.top), (1024.0 - 300.0, 0.0));

    assert!(grid.search_pointer_up());
    assert!(!grid.search_pointer_up());
    assert_eq!(grid.search_pointer_move(Point::new(0.0, 0.0)), None);
    assert_eq!(grid.search().placement(), Some(clamped));
}

#[test]
fn test_drag_only_from_handle() {
    let mut grid = grid();
    grid.toggle_search();
    let wrapper = Rect::new(480.0, 0.0, 300.0, 40.0);
    assert!(!grid.search_pointer_down(false, Point::new(500.0, 10.0), wrapper, VIEWPORT));
    assert_eq!(grid.search_pointer_move(Point::new(600.0, 60.0)), None);
}

#[test]
fn test_no_drag_while_hidden() {
    let mut grid = grid();
    let wrapper = Rect::new(480.0, 0.0, 300.0, 40.0);
    assert!(!grid.search_pointer_down(true, Point::new(500.0, 10.0), wrapper, VIEWPORT));
}

#[test]
fn test_hiding_ends_drag_and_forgets_position() {
    let mut grid = grid();
    grid.toggle_search();
    let wrapper = Rect::new(480.0, 0.0, 300.0, 40.0);
    grid.search_pointer_down(true, Point::new(500.0, 10.0), wrapper, VIEWPORT);
    grid.search_pointer_move(Point::new(510.0, 20.0));
    grid.toggle_search();
    assert!(!grid.search().is_dragging());
    assert_eq!(grid.search().placement(), None);
}
