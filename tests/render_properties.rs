//! Geometric and color properties every variant must satisfy

use gradientkit::rendering::color_at;
use gradientkit::{render_image, Color, Geometry, Heatmap};
use image::RgbImage;

const BLACK: (u8, u8, u8) = (0, 0, 0);
const ORANGE: (u8, u8, u8) = (250, 140, 20);

fn two_stop() -> Heatmap {
    Heatmap::from_pairs(&[(0.0, BLACK), (1.0, ORANGE)]).unwrap()
}

fn pixel(image: &RgbImage, x: u32, y: u32) -> [u8; 3] {
    image.get_pixel(x, y).0
}

fn color_distance(a: [u8; 3], b: Color) -> u32 {
    a.iter()
        .zip(b.channels())
        .map(|(&x, y)| (i32::from(x) - i32::from(y)).unsigned_abs())
        .sum()
}

fn all_variants() -> Vec<Geometry> {
    vec![
        Geometry::Linear { angle: 30.0 },
        Geometry::Radial,
        Geometry::Elliptical { major_axis: 300.0, minor_axis: 25.0 },
        Geometry::CenterPoint { center_x: 12.0, center_y: 8.0, angle: 0.0 },
    ]
}

#[test]
fn extremes_map_to_edge_stop_colors() {
    let heatmap = two_stop();
    let (width, height) = (41, 25);

    for geometry in all_variants() {
        let field = geometry.distance_field(width, height).unwrap();
        let image = render_image(width, height, &heatmap, &geometry).unwrap();

        let values = field.values();
        let argmin = (0..values.len()).min_by(|&a, &b| values[a].total_cmp(&values[b])).unwrap();
        let argmax = (0..values.len()).max_by(|&a, &b| values[a].total_cmp(&values[b])).unwrap();
        let at = |i: usize| pixel(&image, i as u32 % width, i as u32 / width);

        assert_eq!(values[argmin], 0.0, "{} minimum", geometry.name());
        assert_eq!(at(argmin), [0, 0, 0], "{} at minimum distance", geometry.name());

        // no pixel is closer to the end color than the farthest one
        let orange = Color::from(ORANGE);
        let best = image.pixels().map(|p| color_distance(p.0, orange)).min().unwrap();
        assert_eq!(color_distance(at(argmax), orange), best, "{} at maximum distance", geometry.name());

        if values[argmax] >= 1.0 {
            assert_eq!(at(argmax), [250, 140, 20], "{} reaches the last stop", geometry.name());
        }
    }
}

#[test]
fn radial_and_sweep_reach_last_stop() {
    let heatmap = two_stop();

    let radial = render_image(41, 25, &heatmap, &Geometry::Radial).unwrap();
    assert_eq!(pixel(&radial, 0, 0), [250, 140, 20]);
    assert_eq!(pixel(&radial, 40, 24), [250, 140, 20]);
    assert_eq!(pixel(&radial, 20, 12), [0, 0, 0]);

    let sweep = Geometry::CenterPoint { center_x: 10.0, center_y: 10.0, angle: 0.0 };
    let image = render_image(21, 21, &heatmap, &sweep).unwrap();
    assert_eq!(pixel(&image, 20, 10), [0, 0, 0]);
    assert_eq!(pixel(&image, 0, 10), [250, 140, 20]);
}

#[test]
fn linear_zero_degrees_varies_only_with_x() {
    let image = render_image(64, 32, &Heatmap::red_green_blue(), &Geometry::Linear { angle: 0.0 }).unwrap();
    for x in 0..64 {
        let top = pixel(&image, x, 0);
        for y in 1..32 {
            assert_eq!(pixel(&image, x, y), top, "column {} row {}", x, y);
        }
    }
    assert_ne!(pixel(&image, 0, 0), pixel(&image, 63, 0));
}

#[test]
fn linear_ninety_degrees_varies_only_with_y() {
    let image = render_image(32, 64, &Heatmap::red_green_blue(), &Geometry::Linear { angle: 90.0 }).unwrap();
    for y in 0..64 {
        let left = pixel(&image, 0, y);
        for x in 1..32 {
            assert_eq!(pixel(&image, x, y), left, "row {} column {}", y, x);
        }
    }
    assert_ne!(pixel(&image, 0, 0), pixel(&image, 0, 63));
}

#[test]
fn radial_is_symmetric_under_half_turn() {
    let heatmap = Heatmap::red_green_blue();
    for (width, height) in [(40, 30), (41, 25), (7, 64)] {
        let image = render_image(width, height, &heatmap, &Geometry::Radial).unwrap();
        for y in 0..height {
            for x in 0..width {
                assert_eq!(
                    pixel(&image, x, y),
                    pixel(&image, width - 1 - x, height - 1 - y),
                    "{}x{} at ({}, {})",
                    width,
                    height,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn center_point_is_periodic_in_angle() {
    let heatmap = Heatmap::red_green_blue();
    let render = |angle: f64| {
        let geometry = Geometry::CenterPoint { center_x: 50.0, center_y: 160.0, angle };
        render_image(120, 200, &heatmap, &geometry).unwrap()
    };

    let base = render(45.0);
    assert_eq!(base, render(405.0));
    assert_eq!(base, render(-315.0));
    assert_eq!(base, render(45.0 + 720.0));
}

#[test]
fn center_point_sweep_wraps_around_full_circle() {
    let geometry = Geometry::CenterPoint { center_x: 0.0, center_y: 0.0, angle: 90.0 };
    let field = geometry.distance_field(11, 11).unwrap();

    // straight down (+y) is the rotation direction
    assert!(field.get(0, 10).unwrap().abs() < 1e-12);
    // the sweep is symmetric on either side of the rotation ray
    let a = Geometry::CenterPoint { center_x: 5.0, center_y: 5.0, angle: 90.0 }
        .distance_field(11, 11)
        .unwrap();
    for y in 0..11 {
        for x in 0..5 {
            let left = a.get(x, y).unwrap();
            let right = a.get(10 - x, y).unwrap();
            assert!((left - right).abs() < 1e-12);
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let heatmap = Heatmap::red_green_blue();
    for geometry in all_variants() {
        let a = render_image(50, 30, &heatmap, &geometry).unwrap();
        let b = render_image(50, 30, &heatmap, &geometry).unwrap();
        assert_eq!(a.as_raw(), b.as_raw(), "{}", geometry.name());
    }
}

#[test]
fn stop_positions_round_trip_through_field() {
    // span = ceil(10 * 1.2) = 12, so pixel x = 3 * k sits exactly at k / 4
    let heatmap = Heatmap::from_pairs(&[
        (0.0, (10, 20, 30)),
        (0.25, (200, 0, 17)),
        (0.5, (3, 99, 240)),
        (0.75, (77, 77, 77)),
    ])
    .unwrap();
    let image = render_image(10, 2, &heatmap, &Geometry::Linear { angle: 0.0 }).unwrap();

    for (k, stop) in heatmap.stops().iter().enumerate() {
        let x = 3 * k as u32;
        assert_eq!(pixel(&image, x, 1), stop.color.channels(), "stop {} at x={}", k, x);
        assert_eq!(color_at(&heatmap, stop.position), stop.color);
    }
}

#[test]
fn linear_twenty_degrees_runs_red_green_blue() {
    let image = render_image(500, 250, &Heatmap::red_green_blue(), &Geometry::Linear { angle: 20.0 }).unwrap();
    assert_eq!(image.dimensions(), (500, 250));

    let left = pixel(&image, 0, 0);
    let middle = pixel(&image, 260, 0);
    let right = pixel(&image, 499, 0);

    assert_eq!(left, [255, 0, 0]);
    assert!(middle[1] > 200 && middle[0] < 30 && middle[2] < 30, "middle = {:?}", middle);
    assert!(right[2] > right[1] && right[0] == 0, "right = {:?}", right);

    // red fades and blue grows monotonically along the top row
    for x in 1..500 {
        let (prev, cur) = (pixel(&image, x - 1, 0), pixel(&image, x, 0));
        assert!(cur[0] <= prev[0], "red rose at x={}", x);
        assert!(cur[2] >= prev[2], "blue fell at x={}", x);
    }

    assert_eq!(pixel(&image, 499, 249), [0, 0, 255]);
}
