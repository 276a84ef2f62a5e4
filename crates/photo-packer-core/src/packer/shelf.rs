use super::PagePacker;
use crate::model::Rect;

/// Cursor-based shelf store: a strict left-to-right, top-to-bottom sweep.
///
/// A shelf's height is the tallest footprint placed on it. Horizontal
/// overflow closes the shelf and opens the next one below; the sweep never
/// revisits closed shelves. Packing tightness comes from the height-first
/// input sort, not from the store.
pub struct ShelfPacker {
    area: Rect,
    cursor_x: f64,
    cursor_y: f64,
    shelf_height: f64,
}

impl ShelfPacker {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            cursor_x: area.x,
            cursor_y: area.y,
            shelf_height: 0.0,
        }
    }
}

impl PagePacker for ShelfPacker {
    fn try_place(&mut self, rw: f64, rh: f64) -> Option<(f64, f64)> {
        if self.cursor_x + rw > self.area.right() {
            self.cursor_y += self.shelf_height;
            self.cursor_x = self.area.x;
            self.shelf_height = 0.0;
        }
        if self.cursor_x + rw > self.area.right() || self.cursor_y + rh > self.area.bottom() {
            return None;
        }
        let at = (self.cursor_x, self.cursor_y);
        self.cursor_x += rw;
        self.shelf_height = self.shelf_height.max(rh);
        Some(at)
    }

    fn reset(&mut self) {
        self.cursor_x = self.area.x;
        self.cursor_y = self.area.y;
        self.shelf_height = 0.0;
    }
}
