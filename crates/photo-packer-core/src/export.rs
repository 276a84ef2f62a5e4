use crate::config::PageConfig;
use crate::model::Placement;
use serde::Serialize;
use serde_json::{json, Value};

/// Groups placements by page, preserving placement order within each page.
/// Page indices are consecutive from zero, so the outer Vec lines up with
/// them.
pub fn placements_by_page<K, P>(placements: &[Placement<K, P>]) -> Vec<Vec<&Placement<K, P>>> {
    let mut pages: Vec<Vec<&Placement<K, P>>> = Vec::new();
    for placement in placements {
        if placement.page_index >= pages.len() {
            pages.resize_with(placement.page_index + 1, Vec::new);
        }
        pages[placement.page_index].push(placement);
    }
    pages
}

/// Serializes a layout as a JSON object `{ pages, meta }` (array-of-pages
/// style). Document emitters consume one page entry at a time; coordinates
/// stay in the page unit of `config`.
pub fn to_json_array<K: Serialize, P: Serialize>(
    placements: &[Placement<K, P>],
    config: &PageConfig,
) -> Value {
    let pages_val: Vec<Value> = placements_by_page(placements)
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let photos: Vec<Value> = page
                .iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "name": p.size.name,
                        "x": p.x,
                        "y": p.y,
                        "width": p.effective_width,
                        "height": p.effective_height,
                        "rotation": p.rotation.degrees(),
                        "payload": p.payload,
                    })
                })
                .collect();
            json!({
                "index": index,
                "width": config.page_width,
                "height": config.page_height,
                "photos": photos,
            })
        })
        .collect();
    json!({
        "pages": pages_val,
        "meta": {
            "page_width": config.page_width,
            "page_height": config.page_height,
            "margins": [
                config.margin_top,
                config.margin_right,
                config.margin_bottom,
                config.margin_left,
            ],
            "spacing": config.spacing,
            "multi_page": config.multi_page,
        }
    })
}
