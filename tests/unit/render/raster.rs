use super::*;
use crate::foundation::core::Bounds;

const INK: Rgba8Premul = Rgba8Premul::opaque(0, 0, 0);

fn inked(canvas: &Canvas) -> Vec<(i32, i32)> {
    canvas
        .pixels()
        .filter(|(_, _, px)| !px.is_transparent())
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn line_covers_every_octant_with_connected_path() {
    let endpoints = [
        (0, 0, 20, 5),
        (0, 0, 5, 20),
        (20, 5, 0, 0),
        (5, 20, 0, 0),
        (0, 20, 20, 0),
        (20, 0, 0, 20),
        (3, 3, 3, 17),
        (2, 9, 19, 9),
        (7, 7, 7, 7),
        (0, 0, 20, 20),
    ];
    for (x0, y0, x1, y1) in endpoints {
        let mut c = Canvas::new(21, 21);
        draw_line(&mut c, x0, y0, x1, y1, INK);
        let px = inked(&c);

        let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        assert_eq!(px.len(), expected, "count for {x0},{y0}->{x1},{y1}");
        assert!(px.contains(&(x0, y0)));
        assert!(px.contains(&(x1, y1)));

        for &(x, y) in &px {
            let has_neighbor = px
                .iter()
                .any(|&(nx, ny)| (nx, ny) != (x, y) && (nx - x).abs() <= 1 && (ny - y).abs() <= 1);
            assert!(px.len() == 1 || has_neighbor, "isolated pixel at {x},{y}");
        }
    }
}

#[test]
fn line_is_clipped_not_panicking() {
    let mut c = Canvas::new(10, 10);
    draw_line(&mut c, -50, -50, 60, 60, INK);
    let px = inked(&c);
    assert_eq!(px.len(), 10);
    assert!(px.iter().all(|&(x, y)| x == y));
}

#[test]
fn circle_points_lie_within_one_pixel_of_radius() {
    for r in 0..40 {
        let mut c = Canvas::with_bounds(Bounds::new(-50, -50, 50, 50));
        draw_circle(&mut c, 0, 0, r, INK);
        let px = inked(&c);
        assert!(!px.is_empty());
        for (x, y) in px {
            let d = f64::from(x * x + y * y).sqrt();
            assert!((d - f64::from(r)).abs() <= 1.0, "r={r} point ({x},{y}) d={d}");
        }
    }
}

#[test]
fn circle_is_eightfold_symmetric() {
    let mut c = Canvas::with_bounds(Bounds::new(-20, -20, 20, 20));
    draw_circle(&mut c, 0, 0, 13, INK);
    for (x, y) in inked(&c) {
        for (sx, sy) in [(-x, y), (x, -y), (y, x), (-y, -x)] {
            assert!(!c.get(sx, sy).unwrap().is_transparent());
        }
    }
}

#[test]
fn circle_radius_zero_is_center_and_negative_is_nothing() {
    let mut c = Canvas::new(5, 5);
    draw_circle(&mut c, 2, 2, -3, INK);
    assert!(inked(&c).is_empty());
    draw_circle(&mut c, 2, 2, 0, INK);
    assert_eq!(inked(&c), vec![(2, 2)]);
}

#[test]
fn fill_disk_covers_center_and_rim() {
    let mut c = Canvas::new(21, 21);
    fill_disk(&mut c, 10, 10, 6, INK);
    assert!(!c.get(10, 10).unwrap().is_transparent());
    assert!(!c.get(16, 10).unwrap().is_transparent());
    assert!(!c.get(10, 4).unwrap().is_transparent());
    assert!(c.get(0, 0).unwrap().is_transparent());
}
