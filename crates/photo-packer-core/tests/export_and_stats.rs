use photo_packer_core::prelude::*;

fn photo(id: &str, w: f64, h: f64) -> PhotoInput {
    PhotoInput {
        id: id.to_string(),
        size: PhotoSize::new(format!("{w}x{h}"), w, h),
        rotation: Rotation::R0,
        priority: 0,
        payload: (),
    }
}

#[test]
fn stats_summarize_the_layout() {
    let config = PageConfig::builder().page_size(6.0, 4.0).margin(0.0).build();
    let photos = vec![
        photo("a", 2.0, 2.0),
        photo("b", 2.0, 2.0),
        photo("c", 2.0, 2.0),
    ];
    let placements = pack(photos, &config, Algorithm::Shelf).unwrap();
    let stats = LayoutStats::compute(&placements, &config);
    assert_eq!(stats.num_pages, 1);
    assert_eq!(stats.num_placed, 3);
    assert_eq!(stats.num_rotated, 0);
    assert_eq!(stats.used_area, 12.0);
    assert_eq!(stats.total_page_area, 24.0);
    assert_eq!(stats.occupancy, 0.5);
    assert!(stats.summary().contains("Pages: 1"));
}

#[test]
fn stats_on_an_empty_layout_are_all_zero() {
    let config = PageConfig::default();
    let stats = LayoutStats::compute::<String, ()>(&[], &config);
    assert_eq!(stats.num_pages, 0);
    assert_eq!(stats.occupancy, 0.0);
}

#[test]
fn json_export_groups_placements_by_page() {
    let config = PageConfig::builder().page_size(4.0, 6.0).margin(0.0).build();
    let photos = vec![photo("a", 4.0, 4.0), photo("b", 4.0, 4.0)];
    let placements = pack(photos, &config, Algorithm::MaxRects).unwrap();

    let value = to_json_array(&placements, &config);
    let pages = value["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["index"], 0);
    assert_eq!(pages[1]["index"], 1);
    assert_eq!(pages[0]["photos"].as_array().unwrap().len(), 1);
    assert_eq!(pages[0]["photos"][0]["id"], "a");
    assert_eq!(pages[0]["photos"][0]["x"], 0.0);
    assert_eq!(pages[0]["photos"][0]["rotation"], 0);
    assert_eq!(value["meta"]["page_width"], 4.0);
    assert_eq!(value["meta"]["multi_page"], true);
}

#[test]
fn placements_by_page_preserves_order() {
    let config = PageConfig::builder().page_size(4.0, 4.0).margin(0.0).build();
    let photos: Vec<PhotoInput> = (0..5).map(|i| photo(&format!("p{i}"), 2.0, 2.0)).collect();
    let placements = pack(photos, &config, Algorithm::Guillotine).unwrap();

    let pages = placements_by_page(&placements);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 4);
    assert_eq!(pages[1].len(), 1);
    let page0_ids: Vec<&str> = pages[0].iter().map(|p| p.id.as_str()).collect();
    assert_eq!(page0_ids, ["p0", "p1", "p2", "p3"]);
}

#[test]
fn rotation_serializes_as_degrees() {
    assert_eq!(serde_json::to_string(&Rotation::R90).unwrap(), "90");
    assert_eq!(serde_json::from_str::<Rotation>("270").unwrap(), Rotation::R270);
    assert!(serde_json::from_str::<Rotation>("45").is_err());
}

#[test]
fn page_config_fills_defaults_from_partial_json() {
    let config: PageConfig =
        serde_json::from_str(r#"{"page_width":4.0,"page_height":6.0}"#).unwrap();
    assert_eq!(config.margin_top, 0.0);
    assert_eq!(config.spacing, 0.0);
    assert!(config.multi_page);
    assert!(config.validate().is_ok());
}
