use photo_packer_core::packer::{
    guillotine::GuillotinePacker, maxrects::MaxRectsPacker, PagePacker,
};
use photo_packer_core::prelude::*;

const ALL: [Algorithm; 3] = [Algorithm::Guillotine, Algorithm::Shelf, Algorithm::MaxRects];

fn photo(id: &str, w: f64, h: f64) -> PhotoInput {
    PhotoInput {
        id: id.to_string(),
        size: PhotoSize::new(format!("{w}x{h}"), w, h),
        rotation: Rotation::R0,
        priority: 0,
        payload: (),
    }
}

fn page(w: f64, h: f64, margin: f64, spacing: f64) -> PageConfig {
    PageConfig::builder()
        .page_size(w, h)
        .margin(margin)
        .spacing(spacing)
        .build()
}

#[test]
fn exact_fit_fills_the_page() {
    let config = page(4.0, 6.0, 0.0, 0.0);
    for algorithm in ALL {
        let placements = pack(vec![photo("a", 4.0, 6.0)], &config, algorithm).unwrap();
        assert_eq!(placements.len(), 1, "{algorithm:?}");
        assert_eq!((placements[0].x, placements[0].y), (0.0, 0.0));
    }
}

#[test]
fn exact_fit_leaves_no_free_rects() {
    let mut g = GuillotinePacker::new(Rect::new(0.0, 0.0, 4.0, 6.0));
    assert_eq!(g.try_place(4.0, 6.0), Some((0.0, 0.0)));
    assert_eq!(g.free_list_len(), 0);

    let mut m = MaxRectsPacker::new(Rect::new(0.0, 0.0, 4.0, 6.0));
    assert_eq!(m.try_place(4.0, 6.0), Some((0.0, 0.0)));
    assert_eq!(m.free_list_len(), 0);
}

#[test]
fn oversized_photo_is_dropped() {
    for algorithm in ALL {
        for multi_page in [false, true] {
            let config = PageConfig {
                multi_page,
                ..page(4.0, 6.0, 0.0, 0.0)
            };
            let placements = pack(vec![photo("big", 5.0, 6.0)], &config, algorithm).unwrap();
            assert!(placements.is_empty(), "{algorithm:?}");
        }
    }
}

#[test]
fn spacing_as_wide_as_the_page_blocks_everything() {
    let config = page(4.0, 4.0, 0.0, 4.0);
    for algorithm in ALL {
        let placements = pack(vec![photo("a", 1.0, 1.0)], &config, algorithm).unwrap();
        assert!(placements.is_empty(), "{algorithm:?}");
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let config = PageConfig::default();
    for algorithm in ALL {
        let placements = pack(Vec::<PhotoInput>::new(), &config, algorithm).unwrap();
        assert!(placements.is_empty());
    }
}

#[test]
fn zero_page_dimensions_are_rejected() {
    let config = PageConfig {
        page_width: 0.0,
        ..PageConfig::default()
    };
    let result = pack(vec![photo("a", 1.0, 1.0)], &config, Algorithm::Guillotine);
    assert!(matches!(result, Err(PackError::InvalidGeometry(_))));
}

#[test]
fn margins_consuming_the_page_are_rejected() {
    // 2.0 on each side consumes the whole 4.0 width.
    let config = page(4.0, 6.0, 2.0, 0.0);
    assert!(matches!(
        config.validate(),
        Err(PackError::InvalidGeometry(_))
    ));
    let result = pack(vec![photo("a", 1.0, 1.0)], &config, Algorithm::Shelf);
    assert!(matches!(result, Err(PackError::InvalidGeometry(_))));
}

#[test]
fn negative_spacing_is_rejected() {
    let config = PageConfig {
        spacing: -0.5,
        ..PageConfig::default()
    };
    let result = pack(vec![photo("a", 1.0, 1.0)], &config, Algorithm::MaxRects);
    assert!(matches!(result, Err(PackError::InvalidGeometry(_))));
}

#[test]
fn negative_margin_is_rejected() {
    let config = PageConfig {
        margin_top: -1.0,
        ..PageConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(PackError::InvalidGeometry(_))
    ));
}

#[test]
fn non_positive_photo_dimensions_are_rejected() {
    let config = PageConfig::default();
    let result = pack(vec![photo("a", 0.0, 2.0)], &config, Algorithm::Shelf);
    assert!(matches!(result, Err(PackError::InvalidGeometry(_))));
}

#[test]
fn unknown_algorithm_name_is_rejected() {
    match "skyline".parse::<Algorithm>() {
        Err(PackError::UnknownAlgorithm(name)) => assert_eq!(name, "skyline"),
        other => panic!("expected UnknownAlgorithm, got {other:?}"),
    }
    assert_eq!("maxrects".parse::<Algorithm>().unwrap(), Algorithm::MaxRects);
    assert_eq!(
        "Guillotine".parse::<Algorithm>().unwrap(),
        Algorithm::Guillotine
    );
}

#[test]
fn off_cardinal_rotations_are_rejected() {
    assert!(Rotation::from_degrees(45).is_err());
    assert!(Rotation::from_degrees(360).is_err());
    assert_eq!(Rotation::from_degrees(270).unwrap(), Rotation::R270);
}
