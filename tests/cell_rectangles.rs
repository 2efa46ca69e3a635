use rand::{Rng, SeedableRng, rngs::SmallRng};

use hog::{HogCellRectangles, HogDescriptor, Rect};

#[test]
fn error_diffusion_widths() {
    let rects = HogCellRectangles::new(1, 3, Rect::from_size(10, 4));
    let widths = rects.iter().map(|r| r.width).collect::<Vec<_>>();
    assert_eq!(widths, vec![3, 3, 4]);
    let xs = rects.iter().map(|r| r.x).collect::<Vec<_>>();
    assert_eq!(xs, vec![0, 3, 6]);
    assert!(rects.iter().all(|r| r.height == 4));
}

#[test]
fn origin_is_offset() {
    let rects = HogCellRectangles::new(2, 2, Rect::new(5, 7, 4, 6));
    assert_eq!(*rects.rect(0, 0), Rect::new(5, 7, 2, 3));
    assert_eq!(*rects.rect(1, 1), Rect::new(7, 10, 2, 3));
    assert_eq!(rects.image_width(), 4);
    assert_eq!(rects.image_height(), 6);
}

#[test]
fn empty_grid() {
    let rects = HogCellRectangles::new(0, 4, Rect::from_size(10, 10));
    assert_eq!(rects.num_cells(), 0);
    assert_eq!(rects.iter().count(), 0);
}

#[test]
fn zero_area_image_gives_degenerate_cells() {
    let desc = HogDescriptor::new(2, 3, 4);
    let rects = HogCellRectangles::for_image_size(&desc, 0, 0);
    assert_eq!(rects.num_cells(), 6);
    assert!(rects.iter().all(|r| r.is_empty()));
}

#[test]
#[should_panic]
fn out_of_range_rect_panics() {
    let rects = HogCellRectangles::new(2, 2, Rect::from_size(4, 4));
    rects.rect(0, 2);
}

#[test]
fn random_grids_tile_the_image() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..300 {
        let image_rect = Rect::new(rng.gen_range(0..20), rng.gen_range(0..20), rng.gen_range(0..120), rng.gen_range(0..120));
        let num_rows = rng.gen_range(1..12);
        let num_cols = rng.gen_range(1..12);
        let rects = HogCellRectangles::new(num_rows, num_cols, image_rect);
        assert_eq!(rects.num_cells(), num_rows*num_cols);

        let floor_w = image_rect.width / num_cols;
        let floor_h = image_rect.height / num_rows;

        for r in 0..num_rows {
            let mut x = image_rect.x;
            for c in 0..num_cols {
                let cell = rects.rect(r, c);
                assert_eq!(cell.x, x, "gap before ({},{}) in {:?}", r, c, image_rect);
                assert!(cell.width + 1 >= floor_w && cell.width <= floor_w + 2);
                x += cell.width;
            }
            assert_eq!(x, image_rect.right());
        }

        for c in 0..num_cols {
            let mut y = image_rect.y;
            for r in 0..num_rows {
                let cell = rects.rect(r, c);
                assert_eq!(cell.y, y);
                assert!(cell.height + 1 >= floor_h && cell.height <= floor_h + 2);
                y += cell.height;
            }
            assert_eq!(y, image_rect.bottom());
        }

        let covered = rects.iter().map(|r| r.area()).sum::<usize>();
        assert_eq!(covered, image_rect.area());
    }
}
