//! Cross-operation properties checked over generated buffers.

use crate::fixtures::{checker, gradient, init_tracing, noise};
use pixops_core::{Color, PixelBuffer};
use pixops_ops::{apply_color, apply_mask, fill_mask, flip_x, flip_y, scale_by};

#[test]
fn test_double_flip_is_identity() {
    init_tracing();
    for (w, h, seed) in [(1, 1, 3), (2, 2, 5), (7, 3, 11), (16, 9, 13)] {
        let src = noise(w, h, seed);
        assert_eq!(flip_x(&flip_x(&src)), src, "flip_x {w}x{h}");
        assert_eq!(flip_y(&flip_y(&src)), src, "flip_y {w}x{h}");
    }
}

#[test]
fn test_flip_exact_permutation() {
    let a = Color::opaque(255, 0, 0);
    let b = Color::opaque(0, 255, 0);
    let c = Color::opaque(0, 0, 255);
    let d = Color::new(255, 255, 0, 128);
    let src = PixelBuffer::from_pixels(2, 2, &[a, b, c, d]).unwrap();

    let fx = flip_x(&src);
    assert_eq!(fx, PixelBuffer::from_pixels(2, 2, &[b, a, d, c]).unwrap());
    let fy = flip_y(&src);
    assert_eq!(fy, PixelBuffer::from_pixels(2, 2, &[c, d, a, b]).unwrap());
}

#[test]
fn test_scale_dimension_law() {
    init_tracing();
    let ratios = [0.1, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0];
    for (w, h) in [(1, 1), (3, 5), (8, 8), (13, 7)] {
        let src = gradient(w, h);
        for rx in ratios {
            for ry in ratios {
                let dst = scale_by(&src, rx, ry).unwrap();
                let expect = (
                    (w as f64 * rx).floor() as u32,
                    (h as f64 * ry).floor() as u32,
                );
                assert_eq!(dst.dimensions(), expect, "{w}x{h} by ({rx}, {ry})");
            }
        }
    }
}

#[test]
fn test_scale_concrete_half() {
    let src = gradient(4, 4);
    let dst = scale_by(&src, 0.5, 0.5).unwrap();
    assert_eq!(dst.dimensions(), (2, 2));
    assert_eq!(dst.pixel(0, 0), src.pixel(0, 0));
    assert_eq!(dst.pixel(1, 1), src.pixel(2, 2));
}

#[test]
fn test_apply_color_alpha_pass_through() {
    let src = noise(12, 10, 42);
    for tint in [
        Color::new(0, 0, 255, 255),
        Color::new(10, 200, 30, 1),
        Color::new(255, 255, 255, 128),
    ] {
        let dst = apply_color(&src, tint).unwrap();
        for ((_, _, s), (_, _, d)) in src.pixels().zip(dst.pixels()) {
            assert_eq!(s.a, d.a);
        }
    }
}

#[test]
fn test_apply_color_concrete() {
    let src = PixelBuffer::filled(2, 2, Color::new(255, 0, 0, 255));
    let dst = apply_color(&src, Color::new(0, 0, 255, 255)).unwrap();
    assert!(dst.pixels().all(|(_, _, c)| c == Color::new(127, 0, 127, 255)));
}

#[test]
fn test_fill_mask_opacity_preservation() {
    let base = checker(9, 7, 2, Color::new(90, 80, 70, 60));
    let mask = noise(9, 7, 7);
    let dst = fill_mask(&base, &mask).unwrap();
    for (x, y, px) in base.pixels() {
        if px.a > 0 {
            assert_eq!(dst.pixel(x, y), px, "({x}, {y})");
        } else {
            assert_eq!(dst.pixel(x, y), mask.pixel(x, y), "({x}, {y})");
        }
    }
}

#[test]
fn test_apply_mask_full_transparency() {
    let base = checker(6, 6, 1, Color::WHITE);
    let mask = checker(6, 6, 1, Color::opaque(1, 2, 3));
    let dst = apply_mask(&base, &mask).unwrap();
    for (x, y, px) in base.pixels() {
        if px.a == 0 {
            assert_eq!(dst.pixel(x, y), Color::TRANSPARENT);
        } else {
            // (255*1 + 255*255) / 510 = 128
            assert_eq!(dst.pixel(x, y), Color::new(128, 128, 129, 255));
        }
    }
}

#[test]
fn test_apply_mask_is_symmetric_for_equal_sizes() {
    let a = noise(5, 5, 99);
    let b = noise(5, 5, 1234);
    assert_eq!(apply_mask(&a, &b).unwrap(), apply_mask(&b, &a).unwrap());
}

#[test]
fn test_apply_mask_alpha_is_stronger_input() {
    let base = noise(8, 4, 5);
    let mask = noise(8, 4, 6);
    let dst = apply_mask(&base, &mask).unwrap();
    for (x, y, px) in dst.pixels() {
        assert_eq!(px.a, base.pixel(x, y).a.max(mask.pixel(x, y).a));
    }
}
