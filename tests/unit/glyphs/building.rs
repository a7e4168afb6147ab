use super::*;
use image::{Rgba, RgbaImage};

const BODY: Rgba<u8> = Rgba([13, 45, 58, 60]);
const WIN: Rgba<u8> = Rgba([244, 162, 97, 35]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn card_grid(pitch: i32) -> WindowGrid {
    WindowGrid {
        window_w: 8,
        window_h: 12,
        pitch_x: pitch,
        pitch_y: pitch,
        top_inset: 15,
        side_inset: 8,
        base_clearance: 0,
        align: ColumnAlign::FromInset { wall_margin: 5 },
    }
}

#[test]
fn windows_never_cross_the_base_line() {
    let base_y = 385;
    for width in (10..=120).step_by(7) {
        for height in (20..=200).step_by(9) {
            let b = Building::new(40, width, height, true);
            let mut grids: Vec<WindowGrid> = [12, 18, 25, 31].map(card_grid).to_vec();
            grids.extend(WindowGrid::proportional(&b));
            for grid in grids {
                for cell in grid.cells(&b, base_y) {
                    assert!(
                        cell.y1 < base_y - grid.base_clearance,
                        "{width}x{height} pitch {} produced {cell:?}",
                        grid.pitch_y
                    );
                    assert!(cell.y0 >= base_y - height, "window above the body top");
                }
            }
        }
    }
}

#[test]
fn row_count_stops_before_base_line() {
    // Body spans 275..=385; rows start at 290 and step 25. 365 ends at 377 < 385, 390 is out.
    let b = Building::new(20, 55, 110, false);
    let rows: Vec<i32> = card_grid(25)
        .cells(&b, 385)
        .into_iter()
        .map(|c| c.y0)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(rows, vec![290, 315, 340, 365]);

    let tight = Building::new(20, 55, 100, false);
    let last = card_grid(25)
        .cells(&tight, 385)
        .iter()
        .map(|c| c.y1)
        .max()
        .unwrap();
    // Rows at 300, 325, 350; 375 would end at 387, past the base line at 385.
    assert_eq!(last, 362);
}

#[test]
fn inset_columns_fit_inside_walls() {
    let b = Building::new(20, 55, 100, false);
    let cells = card_grid(18).cells(&b, 385);
    let xs: std::collections::BTreeSet<i32> = cells.iter().map(|c| c.x0).collect();
    assert_eq!(xs.into_iter().collect::<Vec<_>>(), vec![28, 46]);
    for c in &cells {
        assert!(c.x1 < b.x + b.width - 5);
    }
}

#[test]
fn inset_columns_keep_a_window_that_clears_the_wall_margin() {
    // 40px wide: 93 and 111 both start inside the right inset, and 111 ends at 119 < 120.
    let b = Building::new(85, 40, 130, false);
    let xs: std::collections::BTreeSet<i32> =
        card_grid(18).cells(&b, 385).iter().map(|c| c.x0).collect();
    assert_eq!(xs.into_iter().collect::<Vec<_>>(), vec![93, 111]);
}

#[test]
fn bottom_row_is_kept_when_it_ends_above_the_base_line() {
    // 370..=382 sits fully above 385.
    let b = Building::new(20, 80, 130, true);
    let grid = WindowGrid {
        pitch_x: 18,
        ..card_grid(25)
    };
    let cells = grid.cells(&b, 385);
    let rows: std::collections::BTreeSet<i32> = cells.iter().map(|c| c.y0).collect();
    let cols: std::collections::BTreeSet<i32> = cells.iter().map(|c| c.x0).collect();
    assert_eq!(rows.into_iter().collect::<Vec<_>>(), vec![270, 295, 320, 345, 370]);
    assert_eq!(cols.into_iter().collect::<Vec<_>>(), vec![28, 46, 64, 82]);
}

#[test]
fn extreme_extents_do_not_overflow() {
    let grid = card_grid(25);
    let tall = Building::new(i32::MAX - 10, i32::MAX, i32::MAX, true);
    assert!(grid.cells(&tall, i32::MIN + 5).is_empty());
    let wide = Building::new(i32::MIN, 200, 40, false);
    let cells = grid.cells(&wide, i32::MAX);
    assert_eq!(cells.len(), 8);
    assert!(cells.iter().all(|c| c.x0 <= c.x1 && c.y0 <= c.y1));
}

#[test]
fn offscreen_body_clips_without_overflow() {
    let mut img = RgbaImage::new(16, 16);
    let style = BuildingStyle {
        body: BODY,
        roof: RoofStyle {
            rise: RoofRise::Fixed(0),
            overhang: 0,
        },
        windows: Windows::None,
    };
    building(&mut img, &Building::new(i32::MAX - 10, 40, 20, false), 10, &style);
    building(&mut img, &Building::new(4, 8, i32::MAX, false), 10, &style);
    assert_eq!(*img.get_pixel(3, 5), CLEAR);
    assert_eq!(*img.get_pixel(4, 0), BODY);
    assert_eq!(*img.get_pixel(12, 10), BODY);
    assert_eq!(*img.get_pixel(12, 11), CLEAR);
}

#[test]
fn proportional_grid_is_centered_and_skips_narrow_buildings() {
    assert!(WindowGrid::proportional(&Building::new(0, 20, 100, true)).is_none());
    let b = Building::new(100, 60, 120, true);
    let grid = WindowGrid::proportional(&b).unwrap();
    assert_eq!((grid.window_w, grid.window_h), (10, 15));
    let cells = grid.cells(&b, 300);
    let left = cells.iter().map(|c| c.x0).min().unwrap();
    let right = cells.iter().map(|c| c.x1).max().unwrap();
    // cols = (60 - 10) / 16 = 3 -> block 48 wide, start 100 + 6.
    assert_eq!(left, 106);
    assert_eq!(right, 106 + 2 * 16 + 10);
}

#[test]
fn building_draws_body_roof_and_windows() {
    let mut img = RgbaImage::new(200, 200);
    let b = Building::new(20, 55, 100, true);
    let style = BuildingStyle {
        body: BODY,
        roof: RoofStyle {
            rise: RoofRise::Fixed(15),
            overhang: 2,
        },
        windows: Windows::Grid(card_grid(25), WIN),
    };
    building(&mut img, &b, 185, &style);
    assert_eq!(*img.get_pixel(21, 184), BODY);
    // Roof apex above the body top.
    assert_eq!(*img.get_pixel(47, 85 - 15), BODY);
    assert_eq!(*img.get_pixel(47, 85 - 16), CLEAR);
    // Eave overhang at the body top.
    assert_eq!(*img.get_pixel(18, 85), BODY);
    // First window.
    assert_eq!(*img.get_pixel(28, 100), WIN);
}

#[test]
fn flat_building_has_no_roof() {
    let mut img = RgbaImage::new(200, 200);
    let b = Building::new(20, 55, 100, false);
    let style = BuildingStyle {
        body: BODY,
        roof: RoofStyle {
            rise: RoofRise::Fraction(6),
            overhang: 3,
        },
        windows: Windows::None,
    };
    building(&mut img, &b, 185, &style);
    assert_eq!(*img.get_pixel(47, 84), CLEAR);
    assert_eq!(*img.get_pixel(47, 85), BODY);
    assert_eq!(window_tint(crate::paint::palette::ACCENT), ACCENT);
}
