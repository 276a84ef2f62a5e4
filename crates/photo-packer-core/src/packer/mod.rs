pub mod guillotine;
pub mod maxrects;
pub mod shelf;

/// A packer reserves padded footprints on a single page.
///
/// `try_place` takes the footprint (effective dimensions plus the spacing
/// pad) and hands back the top-left corner of the reserved slot, or `None`
/// when the current page cannot host it. `reset` returns the store to a
/// pristine printable area for the next page.
pub trait PagePacker {
    fn try_place(&mut self, rw: f64, rh: f64) -> Option<(f64, f64)>;
    fn reset(&mut self);
}
