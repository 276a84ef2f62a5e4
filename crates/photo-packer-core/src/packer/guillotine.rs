use super::PagePacker;
use crate::model::Rect;

/// Free-rect store with guillotine splits.
///
/// The store is kept area-descending, so the first-fit scan lands in the
/// largest free rect that can host the footprint. Splits cut the host only:
/// the right strip hugs the used height, the bottom strip spans the host
/// width.
pub struct GuillotinePacker {
    area: Rect,
    free: Vec<Rect>,
}

impl GuillotinePacker {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            free: vec![area],
        }
    }

    pub fn free_list_len(&self) -> usize {
        self.free.len()
    }

    fn split(&mut self, host: Rect, rw: f64, rh: f64) {
        if host.w > rw {
            self.free.push(Rect::new(host.x + rw, host.y, host.w - rw, rh));
        }
        if host.h > rh {
            self.free.push(Rect::new(host.x, host.y + rh, host.w, host.h - rh));
        }
    }
}

impl PagePacker for GuillotinePacker {
    fn try_place(&mut self, rw: f64, rh: f64) -> Option<(f64, f64)> {
        let idx = self.free.iter().position(|fr| fr.w >= rw && fr.h >= rh)?;
        let host = self.free.remove(idx);
        self.split(host, rw, rh);
        // Stable, so equal-area rects keep their insertion order.
        self.free.sort_by(|a, b| b.area().total_cmp(&a.area()));
        Some((host.x, host.y))
    }

    fn reset(&mut self) {
        self.free.clear();
        self.free.push(self.area);
    }
}
