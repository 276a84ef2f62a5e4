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
fn quantities_expand_into_distinct_copies() {
    let authored = vec![(photo("a", 2.0, 3.0), 3), (photo("b", 1.0, 1.0), 1)];
    let inputs = expand_quantities(authored, |id, copy| format!("{id}#{copy}"));
    let ids: Vec<&str> = inputs.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["a#0", "a#1", "a#2", "b#0"]);
    assert!(inputs[..3].iter().all(|i| i.size == inputs[0].size));
}

#[test]
fn zero_quantity_drops_the_entry() {
    let inputs = expand_quantities(vec![(photo("a", 2.0, 3.0), 0)], |id, copy| {
        format!("{id}#{copy}")
    });
    assert!(inputs.is_empty());
}

#[test]
fn copies_carry_rotation_priority_and_payload() {
    let authored = PhotoInput {
        id: "a".to_string(),
        size: PhotoSize::new("4x6", 4.0, 6.0),
        rotation: Rotation::R90,
        priority: 3,
        payload: "img/a.jpg".to_string(),
    };
    let inputs = expand_quantities(vec![(authored, 2)], |id, copy| format!("{id}#{copy}"));
    assert_eq!(inputs.len(), 2);
    for input in &inputs {
        assert_eq!(input.rotation, Rotation::R90);
        assert_eq!(input.priority, 3);
        assert_eq!(input.payload, "img/a.jpg");
    }
}

#[test]
fn expanded_copies_pack_like_hand_written_inputs() {
    let config = PageConfig::builder().page_size(8.0, 8.0).margin(0.0).build();
    let expanded = expand_quantities(vec![(photo("a", 2.0, 2.0), 4)], |id, copy| {
        format!("{id}#{copy}")
    });
    let by_hand: Vec<PhotoInput> = (0..4).map(|i| photo(&format!("a#{i}"), 2.0, 2.0)).collect();

    for algorithm in [Algorithm::Guillotine, Algorithm::Shelf, Algorithm::MaxRects] {
        let from_expanded = pack(expanded.clone(), &config, algorithm).unwrap();
        let from_hand = pack(by_hand.clone(), &config, algorithm).unwrap();
        assert_eq!(from_expanded, from_hand, "{algorithm:?}");
    }
}
