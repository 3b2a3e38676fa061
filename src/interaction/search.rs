//! Search-bar visibility and drag repositioning.
//!
//! Visibility is either internal or driven by the host's `showSearch` prop.
//! Dragging is a small state machine over pointer events: down on the handle
//! starts it, moves reposition the bar in viewport coordinates, and
//! up/cancel/window blur end it.

use serde::Serialize;

use crate::config::features::{
    resolve_offset, DEFAULT_ROOT_FONT_SIZE, SEARCH_DEFAULT_OFFSET_X, SEARCH_DEFAULT_OFFSET_Y,
};
use crate::config::ResolvedSearch;
use crate::types::{clamp, Point, Rect, Size};

/// CSS `position` the wrapper is placed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// Relative to the grid container.
    Absolute,
    /// Relative to the viewport (after the bar has been dragged).
    Fixed,
}

/// Where the search-bar wrapper sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPlacement {
    pub left: f64,
    pub top: f64,
    pub mode: PositionMode,
    /// Entry animation is suppressed once the bar has been moved by hand.
    pub animate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start: Point,
    origin: Point,
    max_left: f64,
    max_top: f64,
}

/// Result of pressing the search toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchToggle {
    Shown,
    Hidden,
    /// Visibility is controlled by the host; it must close the bar.
    CloseRequested,
    /// Nothing to do (search disabled, or controlled and already closed).
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBar {
    config: ResolvedSearch,
    visible: bool,
    controlled: Option<bool>,
    placement: Option<SearchPlacement>,
    drag: Option<Drag>,
}

impl SearchBar {
    #[must_use]
    pub fn new(config: ResolvedSearch, controlled: Option<bool>) -> Self {
        let mut bar = Self {
            config,
            visible: false,
            controlled: None,
            placement: None,
            drag: None,
        };
        bar.sync(controlled);
        bar
    }

    /// Re-apply the host's controlled visibility (and the enabled flag).
    pub fn sync(&mut self, controlled: Option<bool>) {
        self.controlled = controlled;
        if !self.config.active {
            self.hide();
        } else if let Some(show) = controlled {
            if show {
                self.visible = true;
            } else {
                self.hide();
            }
        }
    }

    /// Swap in a new resolved configuration, keeping visibility where allowed.
    pub fn reconfigure(&mut self, config: ResolvedSearch, controlled: Option<bool>) {
        if config != self.config {
            self.placement = None;
        }
        self.config = config;
        self.sync(controlled);
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.active
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.config.active && self.visible
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &ResolvedSearch {
        &self.config
    }

    #[must_use]
    pub fn placement(&self) -> Option<SearchPlacement> {
        self.placement
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Toolbar button.
    pub fn toggle(&mut self) -> SearchToggle {
        if !self.config.active {
            return SearchToggle::Ignored;
        }
        match self.controlled {
            None if self.visible => {
                self.hide();
                SearchToggle::Hidden
            }
            None => {
                self.visible = true;
                SearchToggle::Shown
            }
            Some(true) => SearchToggle::CloseRequested,
            Some(false) => SearchToggle::Ignored,
        }
    }

    /// The engine closed the bar (Escape or its close button). Only
    /// uncontrolled state changes here; the host is always told.
    pub fn engine_closed(&mut self) {
        if self.controlled.is_none() {
            self.hide();
        }
    }

    /// Initial placement inside the container, right-aligned with the
    /// configured offsets.
    pub fn place_initial(
        &mut self,
        container: Size,
        bar: Size,
        root_font_size: f64,
    ) -> Option<SearchPlacement> {
        if !self.is_visible() {
            return None;
        }
        let root = if root_font_size > 0.0 {
            root_font_size
        } else {
            DEFAULT_ROOT_FONT_SIZE
        };
        let max_left = (container.width - bar.width).max(0.0);
        let max_top = (container.height - bar.height).max(0.0);
        let offset_x = resolve_offset(
            self.config.offset_x.as_ref(),
            container.width,
            root,
            SEARCH_DEFAULT_OFFSET_X,
        );
        let offset_y = resolve_offset(
            self.config.offset_y.as_ref(),
            container.height,
            root,
            SEARCH_DEFAULT_OFFSET_Y,
        );
        let placement = SearchPlacement {
            left: clamp(max_left - offset_x, 0.0, max_left),
            top: clamp(offset_y, 0.0, max_top),
            mode: PositionMode::Absolute,
            animate: true,
        };
        self.placement = Some(placement);
        Some(placement)
    }

    /// Pointer down. `on_handle` is whether the target is inside the drag
    /// handle; `wrapper` is the bar's current viewport rect. Returns whether
    /// a drag started.
    pub fn pointer_down(
        &mut self,
        on_handle: bool,
        pointer: Point,
        wrapper: Rect,
        viewport: Size,
    ) -> bool {
        if !on_handle || !self.is_visible() || self.drag.is_some() {
            return false;
        }
        self.drag = Some(Drag {
            start: pointer,
            origin: Point::new(wrapper.x, wrapper.y),
            max_left: (viewport.width - wrapper.width).max(0.0),
            max_top: (viewport.height - wrapper.height).max(0.0),
        });
        true
    }

    /// Pointer move. Returns the new placement while dragging.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<SearchPlacement> {
        let drag = self.drag?;
        let placement = SearchPlacement {
            left: clamp(drag.origin.x + (pointer.x - drag.start.x), 0.0, drag.max_left),
            top: clamp(drag.origin.y + (pointer.y - drag.start.y), 0.0, drag.max_top),
            mode: PositionMode::Fixed,
            animate: false,
        };
        self.placement = Some(placement);
        Some(placement)
    }

    /// Pointer up, pointer cancel or window blur.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    fn hide(&mut self) {
        self.visible = false;
        self.drag = None;
        self.placement = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::{SearchAnimation, SearchOffset};

    fn active() -> ResolvedSearch {
        ResolvedSearch {
            active: true,
            animation: SearchAnimation::SlideLeft,
            offset_x: None,
            offset_y: None,
        }
    }

    #[test]
    fn test_uncontrolled_toggle_flips() {
        let mut bar = SearchBar::new(active(), None);
        assert!(!bar.is_visible());
        assert_eq!(bar.toggle(), SearchToggle::Shown);
        assert!(bar.is_visible());
        assert_eq!(bar.toggle(), SearchToggle::Hidden);
        assert!(!bar.is_visible());
    }

    #[test]
    fn test_controlled_open_requests_close() {
        let mut bar = SearchBar::new(active(), Some(true));
        assert!(bar.is_visible());
        assert_eq!(bar.toggle(), SearchToggle::CloseRequested);
        assert!(bar.is_visible());
        bar.sync(Some(false));
        assert!(!bar.is_visible());
        assert_eq!(bar.toggle(), SearchToggle::Ignored);
    }

    #[test]
    fn test_disabled_search_never_shows() {
        let mut config = active();
        config.active = false;
        let mut bar = SearchBar::new(config, Some(true));
        assert!(!bar.is_visible());
        assert_eq!(bar.toggle(), SearchToggle::Ignored);
    }

    #[test]
    fn test_initial_placement_default_offsets() {
        let mut bar = SearchBar::new(active(), Some(true));
        let p = bar
            .place_initial(Size::new(800.0, 600.0), Size::new(300.0, 40.0), 16.0)
            .unwrap();
        assert_eq!(p.left, 800.0 - 300.0 - 20.0);
        assert_eq!(p.top, 0.0);
        assert_eq!(p.mode, PositionMode::Absolute);
    }

    #[test]
    fn test_initial_placement_units() {
        let mut config = active();
        config.offset_x = Some(SearchOffset::from("10%"));
        config.offset_y = Some(SearchOffset::from("2rem"));
        let mut bar = SearchBar::new(config, Some(true));
        let p = bar
            .place_initial(Size::new(1000.0, 600.0), Size::new(300.0, 40.0), 10.0)
            .unwrap();
        assert_eq!(p.left, 700.0 - 100.0);
        assert_eq!(p.top, 20.0);
    }

    #[test]
    fn test_unparsable_offset_falls_back() {
        let mut config = active();
        config.offset_x = Some(SearchOffset::from("wide"));
        let mut bar = SearchBar::new(config, Some(true));
        let p = bar
            .place_initial(Size::new(800.0, 600.0), Size::new(300.0, 40.0), 16.0)
            .unwrap();
        assert_eq!(p.left, 480.0);
    }

    #[test]
    fn test_drag_cycle() {
        let mut bar = SearchBar::new(active(), Some(true));
        let wrapper = Rect::new(500.0, 10.0, 300.0, 40.0);
        let viewport = Size::new(1024.0, 768.0);

        assert!(!bar.pointer_down(false, Point::new(510.0, 20.0), wrapper, viewport));
        assert!(bar.pointer_down(true, Point::new(510.0, 20.0), wrapper, viewport));
        // second down while dragging is ignored
        assert!(!bar.pointer_down(true, Point::new(0.0, 0.0), wrapper, viewport));

        let p = bar.pointer_move(Point::new(560.0, 120.0)).unwrap();
        assert_eq!((p.left, p.top), (550.0, 110.0));
        assert_eq!(p.mode, PositionMode::Fixed);

        let p = bar.pointer_move(Point::new(5000.0, -500.0)).unwrap();
        assert_eq!((p.left, p.top), (1024.0 - 300.0, 0.0));

        assert!(bar.end_drag());
        assert!(bar.pointer_move(Point::new(0.0, 0.0)).is_none());
        assert!(!bar.end_drag());
    }
}
