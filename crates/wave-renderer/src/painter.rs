//! Per-scenario painters
//!
//! Each painter reads a scenario and produces the shapes for one frame. They
//! never touch simulation state.

use crate::color::{palette, Color};
use crate::shapes::{Canvas, Shape};
use glam::{Affine2, DVec2, Vec2};
use wave_physics::{lerp, map, OrbitState};
use wave_simulation::{
    refraction, tension, water, Demo, OrbitScenario, RefractionScenario, TensionScenario,
    WaterScenario,
};

/// Fraction of the tension scene reserved for the arrow on the left
const TENSION_WAVE_FRACTION: f32 = 0.8;
const TENSION_KNOB_RADIUS: f32 = 10.0;
const TENSION_ARROW_WIDTH: f32 = 2.0;

/// Relative heights in the water scene, measured from the bottom
const WATER_LEVEL: f64 = 0.7;
const SHALLOWEST_BED: f64 = 0.6;
const DEEPEST_BED: f64 = 0.1;

/// World units visible across the orbit scene
const ORBIT_WORLD_EXTENT: f32 = 10.0;
const ORBIT_AXIS_HALF_LENGTH: f32 = 5.0;
const ORBIT_AXIS_WIDTH: f32 = 0.03;
const ORBIT_PATH_WIDTH: f32 = 0.05;
const ORBIT_PATH_DASH: f32 = 0.1;
const ORBIT_ARROW_WIDTH: f32 = 0.03;
const ORBIT_ARROW_HEAD: f32 = 0.2;

/// Paint whichever demo is active into a canvas of the given size
pub fn paint(demo: &Demo, size: Vec2) -> Canvas {
    match demo {
        Demo::Refraction(scenario) => paint_refraction(scenario, size),
        Demo::Tension(scenario) => paint_tension(scenario, size),
        Demo::Water(scenario) => paint_water(scenario, size),
        Demo::Orbit(scenario) => paint_orbit(scenario, size),
    }
}

/// Height of a string sample: displacement ±1 spans the canvas
fn string_height(y: f64, height: f32) -> f32 {
    (y as f32 + 1.0) * height * 0.5
}

fn density_fraction(density: f64) -> f64 {
    map(density, refraction::MIN_DENSITY, refraction::MAX_DENSITY, 0.0, 1.0)
}

/// Sand-colored particles whose size grows with the local density
pub fn paint_refraction(scenario: &RefractionScenario, size: Vec2) -> Canvas {
    let mut canvas = Canvas::new(size, palette::BLACK);

    let field = scenario.field();
    let media = scenario.media();
    let count = field.point_count();
    let point_radius = size.x / count as f32 * 0.5;

    for (i, &y) in field.positions().iter().enumerate() {
        let x = (i as f32 + 0.5) * point_radius * 2.0;
        let density = media.density_at(i as f64 / count as f64);
        let radius = 2.0 * lerp(1.0, 4.0, density_fraction(density)) as f32 * point_radius;
        canvas.circle(Vec2::new(x, string_height(y, size.y)), radius, palette::SAND);
    }

    canvas
}

/// Uniform string on the right, tension arrow pulling at its left end
pub fn paint_tension(scenario: &TensionScenario, size: Vec2) -> Canvas {
    let mut canvas = Canvas::new(size, palette::BLACK);

    let field = scenario.field();
    let medium = scenario.medium();
    let wave_width = size.x * TENSION_WAVE_FRACTION;
    let arrow_space = size.x - wave_width;
    let point_radius = wave_width / field.point_count() as f32 * 0.5;

    let radius =
        lerp(1.0, 4.0, density_fraction(medium.density.value)) as f32 * point_radius * 2.0;
    for (i, &y) in field.positions().iter().enumerate() {
        let x = arrow_space + (i as f32 + 0.5) * point_radius * 2.0;
        canvas.circle(Vec2::new(x, string_height(y, size.y)), radius, palette::SAND);
    }

    let t = map(
        medium.tension.value,
        tension::MIN_TENSION,
        tension::MAX_TENSION,
        0.0,
        1.0,
    );
    let arrow_length = arrow_space * lerp(0.5, 1.0, t) as f32;
    let y = string_height(field.positions()[0], size.y);
    let knob = Vec2::new(arrow_space, y);

    canvas.circle(knob, TENSION_KNOB_RADIUS, palette::WHITE);
    canvas.arrow(
        knob,
        Vec2::new(arrow_space - arrow_length, y),
        TENSION_ARROW_WIDTH,
        arrow_length * 0.1,
        palette::WHITE,
    );

    canvas
}

/// Water surface over a flat seabed whose height follows the depth slider
pub fn paint_water(scenario: &WaterScenario, size: Vec2) -> Canvas {
    let mut canvas = Canvas::new(size, palette::WHITE);

    let field = scenario.field();
    let count = field.point_count() as f32;
    let level = size.y * WATER_LEVEL as f32;
    let max_amplitude = size.y * (WATER_LEVEL - SHALLOWEST_BED) as f32;

    let surface = field.positions().iter().enumerate().map(|(i, &y)| {
        Vec2::new(
            (i as f32 + 0.5) / count * size.x,
            level + (y as f32 + 1.0) * max_amplitude,
        )
    });

    // Stretch the first and last samples out to the canvas edges
    let positions = field.positions();
    let left = level + (positions[0] as f32 + 1.0) * max_amplitude;
    let right = level + (positions[positions.len() - 1] as f32 + 1.0) * max_amplitude;
    let points = std::iter::once(Vec2::new(0.0, left))
        .chain(surface)
        .chain(std::iter::once(Vec2::new(size.x, right)))
        .collect();

    canvas.push(Shape::Area {
        points,
        baseline: 0.0,
        color: palette::WATER,
    });

    let bed_height = map(
        scenario.basin().depth.value,
        water::MAX_DEPTH,
        water::MIN_DEPTH,
        DEEPEST_BED,
        SHALLOWEST_BED,
    ) as f32
        * size.y;
    canvas.rect(Vec2::ZERO, Vec2::new(size.x, bed_height), palette::SEABED);

    canvas
}

/// Axes, the dashed trajectory, the initial state and the faded playback
pub fn paint_orbit(scenario: &OrbitScenario, size: Vec2) -> Canvas {
    let mut canvas = Canvas::new(size, palette::BLACK);

    let scale = size.y / ORBIT_WORLD_EXTENT;
    let world = Affine2::from_scale_angle_translation(Vec2::splat(scale), 0.0, size * 0.5);
    let to_canvas = |p: DVec2| world.transform_point2(p.as_vec2());

    let axis = ORBIT_AXIS_HALF_LENGTH;
    canvas.line(
        to_canvas(DVec2::new(-axis as f64, 0.0)),
        to_canvas(DVec2::new(axis as f64, 0.0)),
        ORBIT_AXIS_WIDTH * scale,
        palette::axis(),
    );
    canvas.line(
        to_canvas(DVec2::new(0.0, -axis as f64)),
        to_canvas(DVec2::new(0.0, axis as f64)),
        ORBIT_AXIS_WIDTH * scale,
        palette::axis(),
    );

    let trajectory = scenario.trajectory();
    if let Some(initial) = trajectory.initial() {
        paint_particle(&mut canvas, initial, 1.0, scale, &to_canvas);
    }

    canvas.push(Shape::Polyline {
        points: trajectory
            .states()
            .iter()
            .map(|state| to_canvas(state.position))
            .collect(),
        width: ORBIT_PATH_WIDTH * scale,
        dash: Some(ORBIT_PATH_DASH * scale),
        color: palette::trajectory(),
    });

    if !scenario.is_held() {
        if let Some(state) = scenario.current() {
            paint_particle(
                &mut canvas,
                state,
                scenario.playback_alpha(),
                scale,
                &to_canvas,
            );
        }
    }

    canvas
}

fn paint_particle(
    canvas: &mut Canvas,
    state: &OrbitState,
    alpha: f32,
    scale: f32,
    to_canvas: &impl Fn(DVec2) -> Vec2,
) {
    let faded = |color: Color| color.with_alpha(alpha);
    let center = to_canvas(state.position);

    let radius = 0.1 + 0.2 * (state.mass / 5.0);
    canvas.circle(center, radius as f32 * scale, faded(palette::WHITE));

    if state.force != 0.0 {
        let length = state.force / 5.0;
        let tip = state.position - length * state.radial_direction();
        canvas.arrow(
            center,
            to_canvas(tip),
            ORBIT_ARROW_WIDTH * scale,
            ORBIT_ARROW_HEAD * scale,
            faded(palette::RED),
        );
    }

    canvas.arrow(
        center,
        to_canvas(state.position + state.velocity),
        ORBIT_ARROW_WIDTH * scale,
        ORBIT_ARROW_HEAD * scale,
        faded(palette::CYAN),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wave_simulation::{Scenario, ScenarioKind};

    const SIZE: Vec2 = Vec2::new(800.0, 400.0);

    fn circles(canvas: &Canvas) -> Vec<(Vec2, f32)> {
        canvas
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_refraction_particles_at_rest() {
        let scenario = RefractionScenario::new();
        let canvas = paint_refraction(&scenario, SIZE);

        let circles = circles(&canvas);
        assert_eq!(circles.len(), refraction::REFRACTION_POINT_COUNT);

        let point_radius = SIZE.x / refraction::REFRACTION_POINT_COUNT as f32 * 0.5;
        let (center, radius) = circles[0];
        assert_relative_eq!(center.x, point_radius);
        assert_relative_eq!(center.y, SIZE.y * 0.5);
        assert_relative_eq!(radius, 2.0 * point_radius);
    }

    #[test]
    fn test_refraction_denser_medium_draws_larger() {
        let mut scenario = RefractionScenario::new();
        scenario.set_parameter("density_right", 1.0).unwrap();
        let canvas = paint_refraction(&scenario, SIZE);

        let circles = circles(&canvas);
        let left = circles[0].1;
        let right = circles[circles.len() - 1].1;
        assert_relative_eq!(right, 4.0 * left);
    }

    #[test]
    fn test_tension_arrow_length_follows_tension() {
        let arrow_length = |t: f64| {
            let mut scenario = TensionScenario::new();
            scenario.set_parameter("tension", t).unwrap();
            let canvas = paint_tension(&scenario, SIZE);
            canvas
                .shapes
                .iter()
                .find_map(|shape| match shape {
                    Shape::Arrow { from, to, .. } => Some(from.distance(*to)),
                    _ => None,
                })
                .unwrap()
        };

        let arrow_space = SIZE.x * (1.0 - TENSION_WAVE_FRACTION);
        assert_relative_eq!(arrow_length(0.0), arrow_space * 0.5, epsilon = 1e-3);
        assert_relative_eq!(arrow_length(1.0), arrow_space, epsilon = 1e-3);
    }

    #[test]
    fn test_tension_string_starts_after_arrow_space() {
        let scenario = TensionScenario::new();
        let canvas = paint_tension(&scenario, SIZE);
        let circles = circles(&canvas);

        // String particles plus the knob
        assert_eq!(circles.len(), tension::TENSION_POINT_COUNT + 1);
        let arrow_space = SIZE.x * (1.0 - TENSION_WAVE_FRACTION);
        assert!(circles[0].0.x > arrow_space);
    }

    #[test]
    fn test_water_surface_and_seabed() {
        let mut scenario = WaterScenario::new();
        let canvas = paint_water(&scenario, SIZE);

        let Shape::Area { points, .. } = &canvas.shapes[0] else {
            panic!("expected the water area first");
        };
        assert_eq!(points.len(), water::WATER_POINT_COUNT + 2);
        assert_relative_eq!(points[1].y, SIZE.y * 0.8, epsilon = 1e-3);

        // Shallowest bed at minimum depth
        let Shape::Rect { max, .. } = &canvas.shapes[1] else {
            panic!("expected the seabed");
        };
        assert_relative_eq!(max.y, SIZE.y * 0.6, epsilon = 1e-3);

        scenario.set_parameter("depth", 1.0).unwrap();
        let canvas = paint_water(&scenario, SIZE);
        let Shape::Rect { max, .. } = &canvas.shapes[1] else {
            panic!("expected the seabed");
        };
        assert_relative_eq!(max.y, SIZE.y * 0.1, epsilon = 1e-3);
    }

    #[test]
    fn test_orbit_initial_particle_is_opaque() {
        let scenario = OrbitScenario::new();
        let canvas = paint_orbit(&scenario, Vec2::splat(500.0));

        let Some(Shape::Circle { center, color, .. }) = canvas
            .shapes
            .iter()
            .find(|shape| matches!(shape, Shape::Circle { .. }))
        else {
            panic!("expected the initial particle");
        };
        // (-1, 0) in world units, 50 px per unit around the center
        assert_relative_eq!(center.x, 200.0, epsilon = 1e-3);
        assert_relative_eq!(center.y, 250.0, epsilon = 1e-3);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_orbit_held_hides_playback() {
        let mut scenario = OrbitScenario::new();
        let playing = circles(&paint_orbit(&scenario, Vec2::splat(500.0))).len();

        scenario.set_held(true);
        let held = circles(&paint_orbit(&scenario, Vec2::splat(500.0))).len();

        assert_eq!(playing, 2);
        assert_eq!(held, 1);
    }

    #[test]
    fn test_force_arrow_only_with_force() {
        let arrows = |scenario: &OrbitScenario| {
            paint_orbit(scenario, Vec2::splat(500.0))
                .shapes
                .iter()
                .filter(|shape| matches!(shape, Shape::Arrow { .. }))
                .count()
        };

        let mut scenario = OrbitScenario::new();
        assert_eq!(arrows(&scenario), 2);

        scenario.set_parameter("force", 0.2).unwrap();
        assert_eq!(arrows(&scenario), 4);
    }

    #[test]
    fn test_paint_dispatches_on_kind() {
        for kind in ScenarioKind::ALL {
            let demo = Demo::new(kind);
            let canvas = paint(&demo, SIZE);
            assert!(!canvas.is_empty());
            assert_eq!(canvas.size, SIZE);
        }
    }
}
