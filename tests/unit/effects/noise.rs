use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn cfg(noise: f64) -> DrawConfig {
    DrawConfig {
        noise,
        ..DrawConfig::default()
    }
}

fn painted(layer: &Canvas) -> usize {
    layer.pixels().filter(|(_, _, px)| !px.is_transparent()).count()
}

#[test]
fn counts_follow_noise() {
    assert_eq!(RandomLines::from_config(&cfg(0.5)).count, 50);
    assert_eq!(RandomCircles::from_config(&cfg(0.5)).count, 5);
    assert_eq!(ConcentricCircles::from_config(&cfg(0.5)).count, 10);

    assert_eq!(RandomLines::from_config(&cfg(0.26)).count, 26);
    assert_eq!(RandomCircles::from_config(&cfg(0.26)).count, 3);
    assert_eq!(ConcentricCircles::from_config(&cfg(0.26)).count, 5);

    assert_eq!(RandomLines::from_config(&cfg(7.0)).count, 100);
    assert_eq!(RandomLines::from_config(&cfg(-1.0)).count, 0);
}

#[test]
fn default_colors_are_translucent_grays() {
    let lines = RandomLines::from_config(&cfg(0.5));
    assert_eq!(lines.color, DEFAULT_COLOR1);

    let rings = ConcentricCircles::from_config(&cfg(0.5));
    assert_eq!((rings.color1, rings.color2), (DEFAULT_COLOR1, DEFAULT_COLOR2));
    assert_eq!(rings.thickness, 10);

    for _ in 0..20 {
        let c = RandomCircles::from_config(&cfg(0.5)).color;
        assert!(c.a < 128);
        assert_eq!((c.r, c.g, c.b), (c.a, c.a, c.a));
    }
}

#[test]
fn configured_colors_win() {
    let red = Rgba8Premul::opaque(255, 0, 0);
    let blue = Rgba8Premul::new(0, 0, 100, 100);
    let c = DrawConfig {
        color1: Some(red),
        color2: Some(blue),
        ..DrawConfig::default()
    };
    assert_eq!(RandomLines::from_config(&c).color, red);
    assert_eq!(RandomCircles::from_config(&c).color, red);
    let rings = ConcentricCircles::from_config(&c);
    assert_eq!((rings.color1, rings.color2), (red, blue));
}

#[test]
fn zero_noise_leaves_canvas_unchanged() {
    let base = Canvas::filled(Bounds::from_size(40, 30), Rgba8Premul::opaque(9, 80, 7));
    let mut rng = StdRng::seed_from_u64(3);
    let fuzzers: [Box<dyn Fuzzer>; 3] = [
        Box::new(RandomLines::from_config(&cfg(0.0))),
        Box::new(RandomCircles::from_config(&cfg(0.0))),
        Box::new(ConcentricCircles::from_config(&cfg(0.0))),
    ];
    for f in &fuzzers {
        let mut img = base.clone();
        f.apply(&mut img, &mut rng);
        assert_eq!(img, base, "{} changed the canvas", f.name());
    }
}

#[test]
fn lines_paint_only_their_color_and_repeat_per_seed() {
    let lines = RandomLines {
        color: Rgba8Premul::opaque(255, 0, 0),
        count: 12,
    };
    let bounds = Bounds::new(-10, 5, 50, 45);

    let a = lines.overlay(bounds, &mut StdRng::seed_from_u64(11));
    let b = lines.overlay(bounds, &mut StdRng::seed_from_u64(11));
    assert_eq!(a, b);
    assert_eq!(a.bounds(), bounds);
    assert!(painted(&a) > 0);
    assert!(
        a.pixels()
            .all(|(_, _, px)| px.is_transparent() || px == lines.color)
    );
}

#[test]
fn circles_paint_solid_disks() {
    let circles = RandomCircles {
        color: Rgba8Premul::new(50, 50, 50, 50),
        count: 4,
    };
    let layer = circles.overlay(Bounds::from_size(64, 48), &mut StdRng::seed_from_u64(5));
    assert!(
        layer
            .pixels()
            .all(|(_, _, px)| px.is_transparent() || px == circles.color)
    );
}

#[test]
fn ring_stack_alternates_every_thickness() {
    let rings = ConcentricCircles {
        color1: Rgba8Premul::opaque(255, 0, 0),
        color2: Rgba8Premul::opaque(0, 0, 255),
        thickness: 3,
        count: 1,
    };
    let mut layer = Canvas::new(31, 31);
    rings.draw_stack(&mut layer, 15, 15, 7);

    assert_eq!(layer.get(22, 15), Some(rings.color1));
    assert_eq!(layer.get(20, 15), Some(rings.color1));
    assert_eq!(layer.get(19, 15), Some(rings.color2));
    assert_eq!(layer.get(17, 15), Some(rings.color2));
    assert_eq!(layer.get(16, 15), Some(rings.color1));
    assert_eq!(layer.get(15, 15), Some(rings.color1));
    assert_eq!(layer.get(23, 15), Some(Rgba8Premul::transparent()));
}

#[test]
fn empty_bounds_yield_empty_overlays() {
    let mut rng = StdRng::seed_from_u64(0);
    let fuzzers: [Box<dyn Fuzzer>; 3] = [
        Box::new(RandomLines::from_config(&cfg(1.0))),
        Box::new(RandomCircles::from_config(&cfg(1.0))),
        Box::new(ConcentricCircles::from_config(&cfg(1.0))),
    ];
    for f in &fuzzers {
        for bounds in [Bounds::from_size(0, 10), Bounds::from_size(10, 0)] {
            let layer = f.overlay(bounds, &mut rng);
            assert_eq!(layer.bounds(), bounds);
            assert!(layer.as_bytes().is_empty());
        }
    }
}

#[test]
fn single_row_canvas_is_fine() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut img = Canvas::new(30, 1);
    RandomCircles::from_config(&cfg(1.0)).apply(&mut img, &mut rng);
    ConcentricCircles::from_config(&cfg(1.0)).apply(&mut img, &mut rng);
    RandomLines::from_config(&cfg(1.0)).apply(&mut img, &mut rng);
    assert_eq!(img.bounds(), Bounds::from_size(30, 1));
}
