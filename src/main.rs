//! Aberred Camera demo entry point.
//!
//! Runs a headless simulation of wandering entities and prints what the
//! reactive viewport does each tick:
//!
//! - `follow` mode binds the viewport to the first entity, clamped to the
//!   configured bounds
//! - `fit` mode frames every entity with the configured margin
//!
//! # Main Loop
//!
//! 1. Load camera settings from the INI file (defaults on failure)
//! 2. Spawn entities with position, velocity, collider and the tracked
//!    capabilities the viewport binds to
//! 3. Bind the viewport and insert it as a resource
//! 4. Each tick: advance time, move entities, publish their tracked
//!    capabilities, sync the camera resource, report
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --mode fit --entities 4 --ticks 60
//! RUST_LOG=debug cargo run -- --mode follow --json
//! ```

use aberredcamera::components::boxcollider::BoxCollider;
use aberredcamera::components::mapposition::MapPosition;
use aberredcamera::components::rigidbody::RigidBody;
use aberredcamera::components::tracked::{TrackedBounds, TrackedPosition};
use aberredcamera::resources::camera2d::{Camera2D, Camera2DRes};
use aberredcamera::resources::viewport::ViewportRes;
use aberredcamera::resources::viewportconfig::ViewportConfig;
use aberredcamera::resources::worldtime::WorldTime;
use aberredcamera::systems::camera::sync_camera_from_viewport;
use aberredcamera::systems::movement::movement;
use aberredcamera::systems::time::update_world_time;
use aberredcamera::systems::tracking::{publish_tracked_bounds, publish_tracked_positions};
use aberredcamera::viewport::Rect;
use bevy_ecs::prelude::*;
use clap::{Parser, ValueEnum};
use glam::Vec2;
use log::{error, info, warn};
use serde::Serialize;
use std::path::PathBuf;

const ENTITY_SIZE: f32 = 32.0;
const MAX_SPEED: f32 = 240.0;
const SPAWN_AREA: f32 = 2000.0;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Follow the first entity.
    Follow,
    /// Frame every entity.
    Fit,
}

/// Aberred Camera 2D
#[derive(Parser)]
#[command(version, about = "Headless demo of the reactive follow/fit viewport.")]
struct Cli {
    /// Camera INI file. Defaults are used when missing or invalid.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Follow)]
    mode: Mode,

    /// Number of wandering entities.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    entities: u32,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 120)]
    ticks: u32,

    /// Seconds per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seed for entity placement and velocities.
    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON object per tick instead of log lines.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TickReport {
    frame: u64,
    camera: Camera2D,
    visible_area: Rect,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewportConfig::with_path(path),
        None => ViewportConfig::new(),
    };
    if cli.config.is_some() {
        if let Err(e) = config.load_from_file() {
            warn!("Config file not found or invalid, using defaults: {}", e);
            config = ViewportConfig::with_path(config.config_path.clone());
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Camera2DRes::default());

    let entities: Vec<Entity> = (0..cli.entities)
        .map(|_| spawn_wanderer(&mut world, &mut rng))
        .collect();

    let mut viewport = config.build_viewport();
    match cli.mode {
        Mode::Follow => {
            if let Err(e) = viewport.bind_to_entity(
                &world,
                entities[0],
                config.follow_dist_x,
                config.follow_dist_y,
            ) {
                error!("Cannot follow entity: {e}");
                std::process::exit(1);
            }
        }
        Mode::Fit => {
            viewport.bind_to_fit(&world, config.fit_margin_x, config.fit_margin_y, &entities);
        }
    }
    info!("Viewport {}x{} is {}", viewport.width(), viewport.height(), viewport.mode());
    world.insert_resource(ViewportRes(viewport));
    world.insert_resource(config);

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            movement,
            publish_tracked_positions,
            publish_tracked_bounds,
            sync_camera_from_viewport,
        )
            .chain(),
    );

    for _ in 0..cli.ticks {
        update_world_time(&mut world, cli.dt);
        schedule.run(&mut world);
        report(&world, cli.json);
    }

    world.resource_mut::<ViewportRes>().0.unbind();
}

fn spawn_wanderer(world: &mut World, rng: &mut fastrand::Rng) -> Entity {
    let position = MapPosition::new(rng.f32() * SPAWN_AREA, rng.f32() * SPAWN_AREA);
    let velocity = Vec2::new(rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0) * MAX_SPEED;
    let collider = BoxCollider::new(ENTITY_SIZE, ENTITY_SIZE)
        .with_offset(Vec2::splat(-ENTITY_SIZE / 2.0));

    world
        .spawn((
            position,
            RigidBody::with_velocity(velocity),
            collider,
            TrackedPosition::from_map_position(&position),
            TrackedBounds::from_collider(&collider, &position),
        ))
        .id()
}

fn report(world: &World, json: bool) {
    let frame = world.resource::<WorldTime>().frame_count;
    let camera = world.resource::<Camera2DRes>().0;
    let visible_area = world.resource::<ViewportRes>().0.visible_area();

    if json {
        let line = TickReport {
            frame,
            camera,
            visible_area,
        };
        match serde_json::to_string(&line) {
            Ok(s) => println!("{s}"),
            Err(e) => error!("Failed to serialize tick {frame}: {e}"),
        }
    } else {
        info!(
            "tick {:>4}: origin=({:.1}, {:.1}) zoom={:.3} visible=({:.1}, {:.1})-({:.1}, {:.1})",
            frame,
            camera.target.x,
            camera.target.y,
            camera.zoom,
            visible_area.min.x,
            visible_area.min.y,
            visible_area.max.x,
            visible_area.max.y
        );
    }
}
