use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::configuration::config::DisplayColor;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::neighbour::nearest_neighbour;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};

/// Component tagging each circle with its slot in the body order:
/// 0 is the star, 1 + i is planet i.
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging each floating name label with its body slot.
#[derive(Component)]
struct NameLabel(pub usize);

/// Marker for the top-left tally report text.
#[derive(Component)]
struct TallyText;

const WINDOW_SIZE: f32 = 800.0;
const LABEL_OFFSET: f32 = 12.0; // gap between a body's rim and its label
const LABEL_FONT_SIZE: f32 = 14.0;
const REPORT_FONT_SIZE: f32 = 16.0;

/// Run the viewer until the window is closed.
///
/// Each frame runs, strictly in order: physics step, transform sync,
/// trail gizmos, neighbour highlight, tally text. Closing the window
/// finishes the frame in flight and exits the process.
pub fn run(scenario: Scenario) {
    println!(
        "run: starting Bevy 2D viewer with {} planets",
        scenario.system.planets.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mostest Closest Neighbour".into(),
                resolution: (WINDOW_SIZE, WINDOW_SIZE).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_trails_system,
                draw_neighbour_line_system,
                update_tally_text_system,
            )
                .chain(),
        )
        .run();
}

/// Startup system: spawn the camera, one circle and one name label per
/// body, and the tally report text.
fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    log::info!(
        "scenario: {} planets orbiting {}, dt = {} s, reference = {}",
        scenario.system.planets.len(),
        scenario.system.star.name,
        scenario.parameters.dt,
        scenario.system.planets[scenario.reference].body.name,
    );

    // 2D camera on a black background; world origin is screen center.
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    let scale = scenario.parameters.scale();
    let bodies = std::iter::once(&scenario.system.star)
        .chain(scenario.system.planets.iter().map(|p| &p.body));

    for (slot, body) in bodies.enumerate() {
        let px = to_screen(body.x, scale);
        let color = body_color(body.color);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(px.x, px.y, 0.0),
                ..Default::default()
            },
            BodyIndex(slot),
        ));

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    body.name.clone(),
                    TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                transform: label_transform(px, body.radius as f32),
                ..Default::default()
            },
            NameLabel(slot),
        ));
    }

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: REPORT_FONT_SIZE,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(5.0),
            ..Default::default()
        }),
        TallyText,
    ));
}

/// Per-frame tick: advance physics one fixed step, then poll and tally
/// the reference planet's nearest neighbour.
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        reference,
        tally,
        nearest,
    } = &mut *scenario;

    euler_integrator(system, parameters);

    *nearest = nearest_neighbour(*reference, &system.planets);
    if let Some(i) = *nearest {
        tally.record(i);
    }
}

/// Move each circle and name label to its body's current screen position.
fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut circles: Query<(&BodyIndex, &mut Transform), Without<NameLabel>>,
    mut labels: Query<(&NameLabel, &mut Transform), Without<BodyIndex>>,
) {
    let scale = scenario.parameters.scale();

    for (BodyIndex(slot), mut transform) in &mut circles {
        if let Some(body) = body_at(&scenario.system, *slot) {
            let px = to_screen(body.x, scale);
            transform.translation = Vec3::new(px.x, px.y, 0.0);
        }
    }

    for (NameLabel(slot), mut transform) in &mut labels {
        if let Some(body) = body_at(&scenario.system, *slot) {
            *transform = label_transform(to_screen(body.x, scale), body.radius as f32);
        }
    }
}

/// Draw each planet's orbit trail as a polyline in the planet's color.
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = scenario.parameters.scale();

    for planet in &scenario.system.planets {
        if !planet.trail.is_drawable() {
            continue;
        }
        gizmos.linestrip_2d(
            planet.trail.points().map(|p| to_screen(*p, scale)),
            body_color(planet.body.color),
        );
    }
}

/// Highlight line from the reference planet to this tick's nearest
/// neighbour. Skipped when no neighbour exists.
fn draw_neighbour_line_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let Some(nearest) = scenario.nearest else {
        return;
    };

    let scale = scenario.parameters.scale();
    let planets = &scenario.system.planets;

    if let (Some(reference), Some(neighbour)) =
        (planets.get(scenario.reference), planets.get(nearest))
    {
        gizmos.line_2d(
            to_screen(reference.body.x, scale),
            to_screen(neighbour.body.x, scale),
            Color::WHITE,
        );
    }
}

/// Rewrite the top-left report: one percentage line per non-reference
/// planet, in planet order.
fn update_tally_text_system(
    scenario: Res<Scenario>,
    mut query: Query<&mut Text, With<TallyText>>,
) {
    let mut report = String::new();
    for (i, planet) in scenario.system.planets.iter().enumerate() {
        if i == scenario.reference {
            continue;
        }
        report.push_str(&scenario.tally.report_line(i, &planet.body.name));
        report.push('\n');
    }

    for mut text in &mut query {
        if let Some(section) = text.sections.first_mut() {
            section.value.clone_from(&report);
        }
    }
}

fn body_at(system: &System, slot: usize) -> Option<&Body> {
    if slot == 0 {
        Some(&system.star)
    } else {
        system.planets.get(slot - 1).map(|p| &p.body)
    }
}

/// World meters to screen pixels. The camera sits at the origin, so no
/// window-center offset is needed. World y is negated: the display uses
/// a y-down convention, so positive world y is below the center line.
#[inline]
pub fn to_screen(x: NVec2, scale: f64) -> Vec2 {
    Vec2::new((x.x * scale) as f32, (-x.y * scale) as f32)
}

fn label_transform(px: Vec2, radius: f32) -> Transform {
    // Just below the body, above the trail lines.
    Transform::from_xyz(px.x, px.y - radius - LABEL_OFFSET, 1.0)
}

fn body_color(color: DisplayColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::srgb_u8(r, g, b)
}
