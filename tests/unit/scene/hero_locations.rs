use super::*;
use crate::scene::plan::BatchPlan;
use rand::SeedableRng;
use rand::rngs::StdRng;

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn scene() -> HeroLocationsScene {
    BatchPlan::bristol().hero_locations
}

fn blank() -> RgbaImage {
    RgbaImage::from_pixel(1920, 600, CLEAR)
}

#[test]
fn cable_sag_follows_a_half_sine() {
    let bridge = scene().bridge;
    assert_eq!(bridge.sag_at(0), 0);
    assert_eq!(bridge.sag_at(95), 28);
    assert_eq!(bridge.sag_at(190), 40);
    assert_eq!(bridge.sag_at(380), 0);
}

#[test]
fn bridge_has_towers_deck_and_cable() {
    let scene = scene();
    let mut overlay = blank();
    let base_y = 600 - scene.skyline.base_inset;
    scene.bridge.draw(&mut overlay, base_y);

    let color: Rgba<u8> = scene.bridge.color.into();
    // Towers span [base-220, base-80].
    assert_eq!(*overlay.get_pixel(760, (base_y - 150) as u32), color);
    assert_eq!(*overlay.get_pixel(1160, (base_y - 150) as u32), color);
    assert_eq!(*overlay.get_pixel(760, (base_y - 70) as u32), CLEAR);
    // Deck between the towers.
    assert_eq!(*overlay.get_pixel(900, (base_y - 95) as u32), color);
    // Cable segment at x = 959 dips 39px below the anchor.
    assert_eq!(*overlay.get_pixel(960, (base_y - 220 + 39) as u32), color);
    // Hanger at offset 30 hangs from the cable down to the deck.
    assert_eq!(*overlay.get_pixel(800, (base_y - 130) as u32), color);
    assert_eq!(*overlay.get_pixel(801, (base_y - 150) as u32), CLEAR);
}

#[test]
fn skyline_draws_one_width_per_lot() {
    let scene = scene();
    let mut overlay = blank();
    let mut a = StdRng::seed_from_u64(7);
    scene.skyline.draw(&mut overlay, &mut a);

    let mut b = StdRng::seed_from_u64(7);
    for _ in 0..scene.skyline.lots.len() {
        let _: i32 = b.random_range(40..=65);
    }
    assert_eq!(a.next_u64(), b.next_u64());
}

#[test]
fn only_tall_skyline_buildings_get_roofs() {
    let scene = scene();
    let mut overlay = blank();
    scene.skyline.draw(&mut overlay, &mut StdRng::seed_from_u64(42));
    let color: Rgba<u8> = scene.skyline.color.into();

    // Lot (110, 90) has a flat top at y = 490; its neighbours are no taller there.
    assert_eq!(*overlay.get_pixel(130, 495), color);
    assert_eq!(*overlay.get_pixel(130, 485), CLEAR);
    // Lot (350, 170) has a 20px roof above y = 410.
    assert_eq!(*overlay.get_pixel(371, 405), color);
}

#[test]
fn inverted_width_range_is_rejected() {
    let mut scene = scene();
    scene.skyline.width = (65, 40);
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("skyline width"));
}

#[test]
fn bridge_without_span_is_rejected() {
    let mut scene = scene();
    scene.bridge.towers = [750, 760];
    assert!(scene.validate().is_err());
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let mut s = scene();
    s.skyline.lots[0].height = i32::MAX;
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("skyline lot height"));

    let mut s = scene();
    s.bridge.towers = [i32::MIN, i32::MAX];
    assert!(s.validate().is_err());

    let mut s = scene();
    s.bridge.sag = f64::NAN;
    assert!(s.validate().unwrap_err().to_string().contains("sag"));
}
