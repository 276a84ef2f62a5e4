use super::PagePacker;
use crate::model::Rect;

/// Free-rect store with best-short-side-fit selection.
///
/// This is the host-only split variant: placing a footprint splits the
/// chosen free rect into a full-height right strip and a full-width bottom
/// strip, then prunes contained rects. Free rects overlap freely; the prune
/// keeps only rects not contained in another.
pub struct MaxRectsPacker {
    area: Rect,
    free: Vec<Rect>,
}

impl MaxRectsPacker {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            free: vec![area],
        }
    }

    pub fn free_list_len(&self) -> usize {
        self.free.len()
    }

    /// Index of the free rect minimizing short-side leftover, then long-side
    /// leftover. Lower index wins remaining ties.
    fn find_best(&self, rw: f64, rh: f64) -> Option<usize> {
        let mut best = None;
        let mut best_short = f64::INFINITY;
        let mut best_long = f64::INFINITY;
        for (i, fr) in self.free.iter().enumerate() {
            if fr.w >= rw && fr.h >= rh {
                let leftover_w = fr.w - rw;
                let leftover_h = fr.h - rh;
                let short = leftover_w.min(leftover_h);
                let long = leftover_w.max(leftover_h);
                if short < best_short || (short == best_short && long < best_long) {
                    best = Some(i);
                    best_short = short;
                    best_long = long;
                }
            }
        }
        best
    }

    fn split(&mut self, host: Rect, rw: f64, rh: f64) {
        let right = Rect::new(host.x + rw, host.y, host.w - rw, host.h);
        let bottom = Rect::new(host.x, host.y + rh, host.w, host.h - rh);
        for child in [right, bottom] {
            if child.w > 0.0 && child.h > 0.0 && !self.free.iter().any(|fr| fr.contains(&child)) {
                self.free.push(child);
            }
        }
        self.prune();
    }

    /// Drops every free rect contained in another. Equal duplicates count as
    /// containing each other, so exactly one of them survives.
    fn prune(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let a = self.free[i];
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

impl PagePacker for MaxRectsPacker {
    fn try_place(&mut self, rw: f64, rh: f64) -> Option<(f64, f64)> {
        let idx = self.find_best(rw, rh)?;
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
