// Host-side tests for the decorative shape transforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}
mod shapes {
    include!("../src/shapes.rs");
}

use shapes::*;
use viewport::ViewportClass;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn shapes_rest_at_top_of_page() {
    let d = decor_transforms(0.0);
    assert_eq!(d.triangle, ShapeTransform::default());
    assert_eq!(d.hexagon, ShapeTransform::default());
    assert!(approx(d.lines.translate_y, -100.0));
    assert!(approx(d.lines.rotation_deg, 0.0));
}

#[test]
fn shapes_at_full_progress() {
    let d = decor_transforms(1.0);
    assert!(approx(d.triangle.rotation_deg, 180.0));
    assert!(approx(d.triangle.scale, 2.0));
    assert!(approx(d.hexagon.rotation_deg, -120.0));
    assert!(approx(d.hexagon.scale, 1.5));
    assert!(approx(d.lines.translate_y, 100.0));
    assert!(approx(d.lines.rotation_deg, 5.0));
    assert!(approx(d.lines.scale, 1.0));
}

#[test]
fn shapes_halfway() {
    let d = decor_transforms(0.5);
    assert!(approx(d.triangle.rotation_deg, 90.0));
    assert!(approx(d.triangle.scale, 1.5));
    assert!(approx(d.hexagon.rotation_deg, -60.0));
    assert!(approx(d.hexagon.scale, 1.25));
    assert!(approx(d.lines.translate_y, 0.0));
    assert!(approx(d.lines.rotation_deg, 2.5));
}

#[test]
fn triangle_and_hexagon_never_translate() {
    for step in 0..=20 {
        let d = decor_transforms(step as f64 / 20.0);
        assert_eq!(d.triangle.translate_y, 0.0);
        assert_eq!(d.hexagon.translate_y, 0.0);
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(decor_transforms(-1.0), decor_transforms(0.0));
    assert_eq!(decor_transforms(4.0), decor_transforms(1.0));
    assert_eq!(decor_transforms(f64::INFINITY), decor_transforms(0.0));
}

#[test]
fn css_transform_string() {
    let t = ShapeTransform {
        translate_y: -100.0,
        rotation_deg: 2.5,
        scale: 1.0,
    };
    assert_eq!(t.css(), "translateY(-100px) rotate(2.5deg) scale(1)");
    assert_eq!(
        decor_transforms(1.0).triangle.css(),
        "translateY(0px) rotate(180deg) scale(2)"
    );
}

#[test]
fn compact_shapes_are_smaller() {
    let c = ShapeSizing::for_class(ViewportClass::Compact);
    let r = ShapeSizing::for_class(ViewportClass::Regular);
    assert!(c.triangle_half_base < r.triangle_half_base);
    assert!(c.triangle_height < r.triangle_height);
    assert!(c.hexagon_size < r.hexagon_size);
    assert!(c.hexagon_border < r.hexagon_border);
    assert_eq!(c.hexagon_size, 40.0);
    assert_eq!(r.triangle_height, 80.0);
}

#[test]
fn one_failing_shape_does_not_skip_the_rest() {
    let decor = decor_transforms(0.5);
    let mut applied = Vec::new();
    let failures = decor.apply_each(|kind, t| {
        if kind == ShapeKind::Triangle {
            return Err("style unavailable");
        }
        applied.push((kind, *t));
        Ok(())
    });
    assert_eq!(failures, vec![(ShapeKind::Triangle, "style unavailable")]);
    assert_eq!(
        applied,
        vec![
            (ShapeKind::Hexagon, decor.hexagon),
            (ShapeKind::Lines, decor.lines)
        ]
    );
}

#[test]
fn every_shape_is_visited_in_order() {
    let decor = decor_transforms(1.0);
    let mut kinds = Vec::new();
    let failures: Vec<(ShapeKind, ())> = decor.apply_each(|kind, _| {
        kinds.push(kind.name());
        Ok(())
    });
    assert!(failures.is_empty());
    assert_eq!(kinds, vec!["triangle", "hexagon", "lines"]);
}
