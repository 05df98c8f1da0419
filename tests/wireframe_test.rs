//! End-to-end tests: shapes through the edges buffer into a pixel sink.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use wireframe_raster::config::RenderConfig;
use wireframe_raster::prelude::*;

fn pixel_set(log: &PixelLog) -> HashSet<(i32, i32)> {
    log.coords().into_iter().collect()
}

#[test]
fn box_outline_reaches_every_front_corner() {
    let mut edges = PointBuffer::new(0);
    add_box(&mut edges, Point3::new(100.0, 300.0, 0.0), 200.0, 150.0, 50.0);

    let mut screen = Screen::new(500, 500).unwrap();
    screen.clear(Rgba::WHITE);
    draw_lines(&mut screen, &edges, Rgba::BLACK).unwrap();

    for (x, y) in [(100, 300), (300, 300), (100, 150), (300, 150)] {
        assert_eq!(screen.get(x, y), Some(Rgba::BLACK), "corner ({x}, {y})");
    }
    // Interior of the front face stays clear.
    assert_eq!(screen.get(200, 225), Some(Rgba::WHITE));
}

#[test]
fn box_edges_rasterize_to_known_pixel_count() {
    // Flat box (d = 0): front and back faces coincide, z edges collapse to points.
    let mut edges = PointBuffer::new(0);
    add_box(&mut edges, Point3::new(10.0, 20.0, 0.0), 5.0, 3.0, 0.0);

    let mut log = PixelLog::new();
    draw_lines(&mut log, &edges, Rgba::BLACK).unwrap();

    let pixels = pixel_set(&log);
    // Rectangle outline of 6 x 4 pixels.
    assert_eq!(pixels.len(), 2 * 6 + 2 * 2);
    assert!(pixels.contains(&(10, 20)));
    assert!(pixels.contains(&(15, 17)));
}

#[test]
fn sphere_marks_are_drawn_as_short_diagonals() {
    let mut edges = PointBuffer::new(0);
    add_sphere(&mut edges, Point3::new(250.0, 250.0, 0.0), 100.0, 10);
    assert_eq!(edges.len(), 200);

    let mut log = PixelLog::new();
    draw_lines(&mut log, &edges, Rgba::BLACK).unwrap();

    // Each mark spans at most two pixels per axis.
    for edge in edges.edges() {
        let dx = (edge.end.x as i32 - edge.start.x as i32).abs();
        let dy = (edge.end.y as i32 - edge.start.y as i32).abs();
        assert!(dx <= 2 && dy <= 2);
    }
    assert!(log.len() >= 100 && log.len() <= 300);
}

#[test]
fn torus_points_stay_within_outer_radius() {
    let points = generate_torus(Point3::new(250.0, 250.0, 0.0), 20.0, 100.0, 12);
    assert_eq!(points.len(), 144);
    for p in points.points() {
        assert_eq!(p.w(), 1.0);
        assert!((p.x - 250.0).abs() <= 120.0 + 1e-9);
        assert!((p.y - 250.0).abs() <= 20.0 + 1e-9);
    }
}

#[test]
fn circle_outline_is_closed_on_screen() {
    let mut edges = PointBuffer::new(0);
    add_circle(&mut edges, Point3::new(250.0, 250.0, 0.0), 100.0, 64);

    let mut log = PixelLog::new();
    draw_lines(&mut log, &edges, Rgba::BLACK).unwrap();

    let pixels = pixel_set(&log);
    assert!(pixels.contains(&(350, 250)));
    assert!(pixels.contains(&(250, 350)));
    assert!(pixels.contains(&(150, 250)));
}

#[test]
fn bezier_line_rasterizes_to_straight_segment() {
    let mut edges = PointBuffer::new(0);
    let geometry = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(20.0, 0.0, 0.0),
        Point3::new(30.0, 0.0, 0.0),
    ];
    add_curve(&mut edges, geometry, 3, CurveKind::Bezier);

    let mut log = PixelLog::new();
    draw_lines(&mut log, &edges, Rgba::BLACK).unwrap();

    let expected: HashSet<(i32, i32)> = (0..=30).map(|x| (x, 0)).collect();
    assert_eq!(pixel_set(&log), expected);
}

#[test]
fn odd_buffer_drops_trailing_point() {
    let mut buffer = PointBuffer::new(0);
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (0.0, 5.0), (0.0, 7.0), (40.0, 40.0)] {
        buffer.append((x, y, 0.0));
    }

    let mut log = PixelLog::new();
    draw_lines(&mut log, &buffer, Rgba::BLACK).unwrap();

    assert_eq!(log.len(), 3 + 3);
    assert!(!pixel_set(&log).contains(&(40, 40)));
}

#[test]
fn single_point_buffer_is_rejected() {
    let mut buffer = PointBuffer::new(1);
    buffer.append((1.0, 1.0, 1.0));

    let mut log = PixelLog::new();
    let err = draw_lines(&mut log, &buffer, Rgba::BLACK).unwrap_err();

    assert!(matches!(err, Error::NotEnoughPoints { len: 1 }));
    assert!(log.is_empty());
}

#[test]
fn configured_scene_renders_to_configured_screen() {
    let config = RenderConfig::parse(
        r#"
screen:
  width: 200
  height: 100
line_color: { r: 255, g: 0, b: 0 }
shapes:
  circle_step: 32
"#,
    )
    .unwrap();

    let mut screen = Screen::from_config(&config.screen).unwrap();
    let mut scene = Scene::from_config(&config.shapes)
        .add_circle(Point3::new(100.0, 50.0, 0.0), 30.0)
        .add_edge(Point3::new(0.0, 99.0, 0.0), Point3::new(199.0, 99.0, 0.0));

    scene.render(&mut screen, config.line_color).unwrap();

    assert_eq!(screen.get(0, 99), Some(Rgba::RED));
    assert_eq!(screen.get(199, 99), Some(Rgba::RED));
    assert_eq!(screen.get(0, 0), Some(Rgba::WHITE));
    assert_eq!(screen.get(130, 50), Some(Rgba::RED));
    assert_eq!(screen.get(100, 50), Some(Rgba::WHITE));
    assert!(scene.is_empty());
}

#[test]
fn identical_scenes_plot_identically() {
    let build = || {
        Scene::new()
            .add_box(Point3::new(20.0, 80.0, 10.0), 40.0, 30.0, 20.0)
            .add_torus(Point3::new(60.0, 60.0, 0.0), 5.0, 20.0)
            .add_curve(
                [
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(30.0, 90.0, 0.0),
                    Point3::new(60.0, -40.0, 0.0),
                    Point3::new(90.0, 20.0, 0.0),
                ],
                CurveKind::Bezier,
            )
    };

    let mut a = PixelLog::new();
    let mut b = PixelLog::new();
    build().render(&mut a, Rgba::BLACK).unwrap();
    build().render(&mut b, Rgba::BLACK).unwrap();
    assert_eq!(a, b);
    assert!(!a.is_empty());
}
