//! Chained operations and concurrent use.

use crate::fixtures::{checker, gradient, init_tracing, noise};
use pixops_core::{Color, PixelBuffer, ScaleFactor};
use pixops_ops::rotate::rotate;
use pixops_ops::{
    apply_color, apply_mask, fill_mask, flip_x, flip_y, scale, CubicRotator, Modifiable,
    OpsError, Renderable, Rotator,
};

#[test]
fn test_trait_chain_matches_free_functions() {
    init_tracing();
    let src = noise(10, 6, 77);
    let mask = checker(10, 6, 3, Color::opaque(0, 200, 0));
    let tint = Color::new(40, 40, 200, 90);
    let factor = ScaleFactor::new(1.5, 0.5).unwrap();

    let expected = {
        let a = flip_x(&src);
        let b = apply_color(&a, tint).unwrap();
        let c = fill_mask(&b, &mask).unwrap();
        let d = apply_mask(&c, &mask).unwrap();
        let e = flip_y(&d);
        scale(&e, factor).unwrap()
    };

    let mut layer = src.copy();
    layer.flip_x();
    layer.apply_color(tint).unwrap();
    layer.fill_mask(&mask).unwrap();
    layer.apply_mask(&mask).unwrap();
    layer.flip_y();
    layer.scale(factor).unwrap();

    tracing::debug!(dims = ?Renderable::dimensions(&layer), "chain finished");
    assert_eq!(layer, expected);
    assert_eq!(layer.dimensions(), (15, 3));
    // Source untouched by the chain.
    assert_eq!(src, noise(10, 6, 77));
}

#[test]
fn test_four_quarter_turns_round_trip() {
    let src = gradient(5, 3);
    let mut buf = src.clone();
    for _ in 0..4 {
        buf.rotate(90.0).unwrap();
    }
    assert_eq!(buf, src);
}

#[test]
fn test_flip_both_equals_half_turn() {
    let src = noise(6, 4, 8);
    assert_eq!(flip_y(&flip_x(&src)), rotate(&src, 180.0).unwrap());
}

#[test]
fn test_rotator_background_in_chain() {
    let mut buf = PixelBuffer::filled(8, 8, Color::WHITE);
    let rotator = CubicRotator::new().with_background(Color::TRANSPARENT);
    buf.rotate_with(&rotator, 45.0).unwrap();
    // Background is transparent so fill_mask paints only the uncovered corners.
    let (w, h) = buf.dimensions();
    let red = PixelBuffer::filled(w, h, Color::opaque(255, 0, 0));
    buf.fill_mask(&red).unwrap();
    assert_eq!(buf.pixel(0, 0), Color::opaque(255, 0, 0));
    assert_eq!(buf.pixel(w / 2, h / 2), Color::WHITE);
}

#[test]
fn test_errors_surface_through_chain() {
    let mut buf = gradient(4, 4);
    let err = buf.apply_mask(&gradient(5, 4)).unwrap_err();
    assert!(matches!(err, OpsError::DimensionMismatch { .. }));
    let err = pixops_ops::scale_by(&buf, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, OpsError::InvalidParameter(_)));
    assert_eq!(buf, gradient(4, 4));
}

#[test]
fn test_concurrent_calls_match_sequential() {
    init_tracing();
    let inputs: Vec<PixelBuffer> = (1..=6).map(|i| noise(17, 11, i * 31)).collect();
    let mask = noise(17, 11, 5);
    let run = |b: &PixelBuffer| {
        let t = apply_color(b, Color::new(9, 9, 9, 200)).unwrap();
        let m = apply_mask(&t, &mask).unwrap();
        let r = CubicRotator::default().rotate(&m, 30.0).unwrap();
        scale(&r, ScaleFactor::uniform(0.75).unwrap()).unwrap()
    };

    let sequential: Vec<PixelBuffer> = inputs.iter().map(run).collect();
    let concurrent: Vec<PixelBuffer> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs.iter().map(|b| s.spawn(move || run(b))).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });
    assert_eq!(sequential, concurrent);
}
