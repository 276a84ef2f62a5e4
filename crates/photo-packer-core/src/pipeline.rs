use crate::config::{Algorithm, PageConfig};
use crate::error::{PackError, Result};
use crate::model::{PhotoInput, Placement};
use crate::packer::{
    guillotine::GuillotinePacker, maxrects::MaxRectsPacker, shelf::ShelfPacker, PagePacker,
};

/// Packs `inputs` onto pages described by `config` and returns one placement
/// per photo that fit.
///
/// Notes:
/// - Sorting is stable for deterministic results: priority first, then
///   effective area (Guillotine, MaxRects) or effective height (Shelf).
/// - Photos that do not fit are omitted from the output, never an error;
///   compare input and output lengths to detect drops.
/// - A pure function over its arguments: no I/O, no logging, no state
///   outliving the call.
pub fn pack<K, P>(
    mut inputs: Vec<PhotoInput<K, P>>,
    config: &PageConfig,
    algorithm: Algorithm,
) -> Result<Vec<Placement<K, P>>> {
    config.validate()?;
    for input in &inputs {
        let (w, h) = (input.size.width, input.size.height);
        if !(w > 0.0) || !(h > 0.0) {
            return Err(PackError::geometry(format!(
                "photo '{}' has non-positive dimensions {w}x{h}",
                input.size.name
            )));
        }
    }
    let printable = config.printable_area()?;

    sort_inputs(&mut inputs, algorithm);

    let mut packer: Box<dyn PagePacker> = match algorithm {
        Algorithm::Guillotine => Box::new(GuillotinePacker::new(printable)),
        Algorithm::Shelf => Box::new(ShelfPacker::new(printable)),
        Algorithm::MaxRects => Box::new(MaxRectsPacker::new(printable)),
    };

    let mut placements = Vec::with_capacity(inputs.len());
    let mut page_index = 0usize;
    for input in inputs {
        let (effective_width, effective_height) = input.effective_dims();
        let rw = effective_width + config.spacing;
        let rh = effective_height + config.spacing;
        let slot = match packer.try_place(rw, rh) {
            Some(at) => Some(at),
            // Retry once on a fresh page. The fit pre-check against the
            // pristine printable area guarantees the retry succeeds, so a
            // page is only ever opened together with a placement on it.
            None if config.multi_page && rw <= printable.w && rh <= printable.h => {
                packer.reset();
                page_index += 1;
                packer.try_place(rw, rh)
            }
            None => None,
        };
        let Some((x, y)) = slot else { continue };
        placements.push(Placement {
            id: input.id,
            payload: input.payload,
            size: input.size,
            rotation: input.rotation,
            x,
            y,
            effective_width,
            effective_height,
            page_index,
        });
    }
    Ok(placements)
}

fn sort_inputs<K, P>(inputs: &mut [PhotoInput<K, P>], algorithm: Algorithm) {
    match algorithm {
        // Shelves pack tightly when heights shrink monotonically.
        Algorithm::Shelf => inputs.sort_by(|a, b| {
            b.priority.cmp(&a.priority).then_with(|| {
                let (_, ah) = a.effective_dims();
                let (_, bh) = b.effective_dims();
                bh.total_cmp(&ah)
            })
        }),
        Algorithm::Guillotine | Algorithm::MaxRects => inputs.sort_by(|a, b| {
            b.priority.cmp(&a.priority).then_with(|| {
                let (aw, ah) = a.effective_dims();
                let (bw, bh) = b.effective_dims();
                (bw * bh).total_cmp(&(aw * ah))
            })
        }),
    }
}

/// Flattens authored `(photo, quantity)` pairs into one input per copy.
///
/// `copy_id` derives each copy's id from the authored id and the copy index;
/// keeping the derived ids unique is the caller's responsibility.
pub fn expand_quantities<K, P, F>(
    authored: impl IntoIterator<Item = (PhotoInput<K, P>, usize)>,
    mut copy_id: F,
) -> Vec<PhotoInput<K, P>>
where
    K: Clone,
    P: Clone,
    F: FnMut(&K, usize) -> K,
{
    let mut out = Vec::new();
    for (photo, quantity) in authored {
        for copy in 0..quantity {
            out.push(PhotoInput {
                id: copy_id(&photo.id, copy),
                size: photo.size.clone(),
                rotation: photo.rotation,
                priority: photo.priority,
                payload: photo.payload.clone(),
            });
        }
    }
    out
}
