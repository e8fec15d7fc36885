use autocrop::{center, readjust, Rect, TargetSize};

#[test]
fn center_grows_a_featured_box_to_the_target_size() {
    let rect = center(Rect::new(10, 10, 50, 50), TargetSize::new(60, 60).unwrap());
    assert_eq!(rect, Rect::new(0, 0, 60, 60));

    // Already within a 100x100 image, so readjustment is a no-op.
    assert_eq!(readjust(rect, 100, 100), rect);
}

#[test]
fn oversized_target_is_clamped_to_the_image_extent() {
    let rect = center(Rect::new(0, 0, 20, 20), TargetSize::new(60, 60).unwrap());
    assert_eq!(rect, Rect::new(-20, -20, 40, 40));

    // The 60x60 span cannot fit a 50x50 image; each axis ends clamped at
    // the bound rather than re-centered.
    assert_eq!(readjust(rect, 50, 50), Rect::new(0, 0, 50, 50));
}

#[test]
fn center_treats_shrinking_like_growing() {
    // The |span - target| / 2 shift ignores direction: asking for a smaller
    // output still expands the box.
    let rect = center(Rect::new(10, 10, 50, 50), TargetSize::new(20, 20).unwrap());
    assert_eq!(rect, Rect::new(0, 0, 60, 60));
}

#[test]
fn center_span_matches_target_for_even_differences() {
    let boxes = [
        Rect::new(0, 0, 10, 10),
        Rect::new(25, 40, 61, 58),
        Rect::new(-5, 3, 9, 31),
    ];
    for rect in boxes {
        for extra in [0, 2, 10, 36] {
            let width = (rect.span_x() + extra) as u32;
            let height = (rect.span_y() + extra) as u32;
            let size = TargetSize::new(width, height).unwrap();
            let centered = center(rect, size);
            assert_eq!(centered.span_x(), width as i32);
            assert_eq!(centered.span_y(), height as i32);
        }
    }
}

#[test]
fn readjust_translates_without_resizing() {
    let rect = readjust(Rect::new(80, -10, 120, 20), 100, 100);
    assert_eq!(rect, Rect::new(60, 0, 100, 30));
}

#[test]
fn readjust_output_is_always_within_bounds() {
    let (width, height) = (100u32, 80u32);
    for x1 in (-150..150).step_by(17) {
        for y1 in (-150..150).step_by(19) {
            for span_x in [0, 1, 30, 99, 100, 180] {
                for span_y in [0, 1, 30, 79, 80, 180] {
                    let rect = Rect::new(x1, y1, x1 + span_x, y1 + span_y);
                    let adjusted = readjust(rect, width, height);

                    assert!(0 <= adjusted.x1 && adjusted.x1 <= adjusted.x2);
                    assert!(adjusted.x2 <= width as i32);
                    assert!(0 <= adjusted.y1 && adjusted.y1 <= adjusted.y2);
                    assert!(adjusted.y2 <= height as i32);

                    if span_x <= width as i32 {
                        assert_eq!(adjusted.span_x(), span_x, "x span changed for {rect:?}");
                    }
                    if span_y <= height as i32 {
                        assert_eq!(adjusted.span_y(), span_y, "y span changed for {rect:?}");
                    }
                }
            }
        }
    }
}
