//! Context-menu placement against the viewport.

use crate::types::{Point, Rect, Size};

pub const MENU_WIDTH: f64 = 200.0;
pub const COLUMN_MENU_HEIGHT: f64 = 180.0;
pub const ROW_MENU_HEIGHT: f64 = 200.0;
/// Minimum distance kept from every viewport edge.
pub const MENU_MARGIN: f64 = 10.0;
/// Extra room kept below the row menu.
pub const ROW_MENU_BOTTOM_SAFETY: f64 = 20.0;

/// Column menu: opens below the header cell, flips above it when it would
/// run off the bottom, and slides left when it would run off the right.
#[must_use]
pub fn place_column_menu(anchor: Rect, viewport: Size) -> Point {
    let mut x = anchor.x;
    let mut y = anchor.bottom();

    if x + MENU_WIDTH > viewport.width {
        x = viewport.width - MENU_WIDTH - MENU_MARGIN;
    }
    if y + COLUMN_MENU_HEIGHT > viewport.height {
        y = anchor.y - COLUMN_MENU_HEIGHT;
    }

    Point::new(x.max(MENU_MARGIN), y.max(MENU_MARGIN))
}

/// Row menu: opens to the right of the row marker, aligned with its top.
#[must_use]
pub fn place_row_menu(anchor: Rect, viewport: Size) -> Point {
    let mut x = anchor.right();
    let mut y = anchor.y;

    if x + MENU_WIDTH > viewport.width {
        x = viewport.width - MENU_WIDTH - MENU_MARGIN;
    }
    if y + ROW_MENU_HEIGHT > viewport.height - ROW_MENU_BOTTOM_SAFETY {
        y = anchor.bottom() - ROW_MENU_HEIGHT;
        if y < MENU_MARGIN {
            y = MENU_MARGIN.max(viewport.height - ROW_MENU_HEIGHT - ROW_MENU_BOTTOM_SAFETY);
        }
    }

    Point::new(x.max(MENU_MARGIN), y.max(MENU_MARGIN))
}
