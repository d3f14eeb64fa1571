//! Viewport integration tests: follow and fit bindings against a bevy_ecs world.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test viewport_integration
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;

use aberredcamera::components::tracked::{TrackedBounds, TrackedPosition};
use aberredcamera::reactive::Observable;
use aberredcamera::viewport::{
    Capability, Rect, ViewTransform, Viewport, ViewportError, ViewportMode,
};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn spawn_at(world: &mut World, x: f32, y: f32) -> Entity {
    world.spawn(TrackedPosition::new(x, y)).id()
}

fn spawn_box(world: &mut World, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Entity {
    world
        .spawn(TrackedBounds::new(Rect::new(min_x, min_y, max_x, max_y)))
        .id()
}

fn position(world: &World, e: Entity) -> TrackedPosition {
    world.get::<TrackedPosition>(e).cloned().unwrap()
}

fn bounds_of(world: &World, e: Entity) -> TrackedBounds {
    world.get::<TrackedBounds>(e).cloned().unwrap()
}

fn assert_visible_area_matches(vp: &Viewport) {
    let area = vp.visible_area();
    assert_eq!(area.min, Vec2::new(vp.x(), vp.y()));
    assert_eq!(area.max, Vec2::new(vp.x() + vp.width(), vp.y() + vp.height()));
}

// =============================================================================
// Follow
// =============================================================================

#[test]
fn follow_inside_bounds_is_unclamped() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 1000.0, 500.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_bounds(0.0, 0.0, 2000.0, 1200.0);

    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();

    assert_eq!(vp.origin(), Vec2::new(600.0, 200.0));
    assert_visible_area_matches(&vp);
}

#[test]
fn follow_near_low_edge_clamps_to_min() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 50.0, 50.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_bounds(0.0, 0.0, 2000.0, 1200.0);

    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();

    assert_eq!(vp.origin(), Vec2::new(0.0, 0.0));
}

#[test]
fn follow_without_bounds_tracks_exactly() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 0.0, 0.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();

    let pos = position(&world, player);
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let p = Vec2::new(rng.f32() * 2.0e5 - 1.0e5, rng.f32() * 2.0e5 - 1.0e5);
        pos.set(p);
        assert_eq!(vp.origin(), p - Vec2::new(400.0, 300.0));
        assert_visible_area_matches(&vp);
    }
}

#[test]
fn follow_with_bounds_always_stays_inside() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 0.0, 0.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_bounds(0.0, 0.0, 2000.0, 1200.0);
    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();

    let pos = position(&world, player);
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..500 {
        pos.set(Vec2::new(
            rng.f32() * 1.0e6 - 5.0e5,
            rng.f32() * 1.0e6 - 5.0e5,
        ));
        assert!(vp.x() >= 0.0 && vp.x() <= 2000.0 - 800.0, "x = {}", vp.x());
        assert!(vp.y() >= 0.0 && vp.y() <= 1200.0 - 600.0, "y = {}", vp.y());
    }
}

#[test]
fn follow_stops_at_edge_and_resumes_inward() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 1000.0, 500.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_bounds(0.0, 0.0, 2000.0, 1200.0);
    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();
    let pos = position(&world, player);

    pos.set_x(1800.0);
    assert_eq!(vp.x(), 1200.0);
    pos.set_x(1950.0);
    assert_eq!(vp.x(), 1200.0);
    pos.set_x(1500.0);
    assert_eq!(vp.x(), 1100.0);
}

#[test]
fn follow_degenerate_bounds_uses_first_matching_branch() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 0.0, 0.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_bounds(0.0, 0.0, 500.0, 400.0);
    vp.bind_to_entity(&world, player, 0.0, 0.0).unwrap();
    let pos = position(&world, player);

    pos.set(Vec2::new(-10.0, -10.0));
    assert_eq!(vp.origin(), Vec2::new(0.0, 0.0));
    pos.set(Vec2::new(10.0, 10.0));
    assert_eq!(vp.origin(), Vec2::new(-300.0, -200.0));
}

#[test]
fn follow_keeps_zoom() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 10.0, 10.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(2.5).unwrap();

    vp.bind_to_entity(&world, player, 0.0, 0.0).unwrap();
    assert_eq!(vp.zoom(), 2.5);
}

#[test]
fn follow_missing_position_capability_errors() {
    let mut world = World::new();
    let boxed = spawn_box(&mut world, 0.0, 0.0, 1.0, 1.0);
    let mut vp = Viewport::new(800.0, 600.0);

    let err = vp.bind_to_entity(&world, boxed, 0.0, 0.0).unwrap_err();
    assert_eq!(
        err,
        ViewportError::MissingCapability {
            entity: boxed,
            capability: Capability::Position,
        }
    );
    assert_eq!(vp.mode(), ViewportMode::Free);
    assert_eq!(vp.origin(), Vec2::ZERO);
}

#[test]
fn follow_despawned_entity_errors() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 0.0, 0.0);
    world.despawn(player);
    let mut vp = Viewport::new(800.0, 600.0);

    assert!(vp.bind_to_entity(&world, player, 0.0, 0.0).is_err());
}

// =============================================================================
// Fit
// =============================================================================

#[test]
fn fit_two_boxes_with_margin() {
    let mut world = World::new();
    let a = spawn_box(&mut world, 0.0, 0.0, 100.0, 100.0);
    let b = spawn_box(&mut world, 300.0, 200.0, 400.0, 300.0);
    let mut vp = Viewport::new(800.0, 600.0);

    let framed = vp.bind_to_fit(&world, 10.0, 10.0, &[a, b]);

    assert_eq!(framed, 2);
    assert_eq!(vp.origin(), Vec2::new(-10.0, -10.0));
    assert!(approx_eq(vp.zoom(), 1.875));
    assert_eq!(vp.mode(), ViewportMode::BoundToFit { entities: 2 });
}

#[test]
fn fit_matches_min_max_fold_for_random_boxes() {
    let mut world = World::new();
    let mut rng = fastrand::Rng::with_seed(3);
    let mut rects = Vec::new();
    let mut entities = Vec::new();
    for _ in 0..8 {
        let min = Vec2::new(rng.f32() * 1000.0, rng.f32() * 1000.0);
        let max = min + Vec2::new(rng.f32() * 200.0 + 1.0, rng.f32() * 200.0 + 1.0);
        rects.push(Rect { min, max });
        entities.push(spawn_box(&mut world, min.x, min.y, max.x, max.y));
    }
    let mut vp = Viewport::new(640.0, 360.0);
    vp.bind_to_fit(&world, 16.0, 8.0, &entities);

    let min_x = rects.iter().map(|r| r.min.x).fold(f32::INFINITY, f32::min) - 16.0;
    let min_y = rects.iter().map(|r| r.min.y).fold(f32::INFINITY, f32::min) - 8.0;
    let max_x = rects.iter().map(|r| r.max.x).fold(f32::NEG_INFINITY, f32::max) + 16.0;
    let max_y = rects.iter().map(|r| r.max.y).fold(f32::NEG_INFINITY, f32::max) + 8.0;
    let zoom = (640.0 / (max_x - min_x)).min(360.0 / (max_y - min_y));

    assert!(approx_eq(vp.x(), min_x));
    assert!(approx_eq(vp.y(), min_y));
    assert!(approx_eq(vp.zoom(), zoom));
}

#[test]
fn fit_reframes_when_a_box_moves() {
    let mut world = World::new();
    let a = spawn_box(&mut world, 0.0, 0.0, 100.0, 100.0);
    let b = spawn_box(&mut world, 300.0, 200.0, 400.0, 300.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_fit(&world, 10.0, 10.0, &[a, b]);

    bounds_of(&world, b).set(Rect::new(1500.0, 200.0, 1590.0, 300.0));

    // Aggregate box (-10,-10)-(1600,310): 1610 x 320.
    assert_eq!(vp.origin(), Vec2::new(-10.0, -10.0));
    assert!(approx_eq(vp.zoom(), 800.0 / 1610.0));

    bounds_of(&world, a).set(Rect::new(-200.0, -100.0, -100.0, 0.0));
    assert_eq!(vp.origin(), Vec2::new(-210.0, -110.0));
}

#[test]
fn fit_excludes_entities_without_bounding_box() {
    let mut world = World::new();
    let a = spawn_box(&mut world, 0.0, 0.0, 100.0, 100.0);
    let far = spawn_at(&mut world, -9999.0, -9999.0);
    let mut vp = Viewport::new(800.0, 600.0);

    assert_eq!(vp.bind_to_fit(&world, 0.0, 0.0, &[far, a]), 1);
    assert_eq!(vp.origin(), Vec2::ZERO);
}

#[test]
fn fit_with_no_qualifying_entities_is_degenerate() {
    let mut world = World::new();
    let only_position = spawn_at(&mut world, 0.0, 0.0);
    let mut vp = Viewport::new(800.0, 600.0);

    assert_eq!(vp.bind_to_fit(&world, 10.0, 10.0, &[only_position]), 0);
    assert_eq!(vp.origin(), Vec2::splat(f32::MAX));
    assert_eq!(vp.zoom(), 0.0);
}

#[test]
fn fit_ignores_bounds() {
    let mut world = World::new();
    let a = spawn_box(&mut world, -500.0, -500.0, -400.0, -400.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_bounds(0.0, 0.0, 2000.0, 1200.0);

    vp.bind_to_fit(&world, 0.0, 0.0, &[a]);
    assert_eq!(vp.origin(), Vec2::new(-500.0, -500.0));
}

// =============================================================================
// Unbind / rebind
// =============================================================================

#[test]
fn unbind_freezes_follow() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 1000.0, 500.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();

    vp.unbind();
    position(&world, player).set(Vec2::new(0.0, 0.0));
    vp.set_bounds(1000.0, 1000.0, 3000.0, 3000.0);

    assert_eq!(vp.origin(), Vec2::new(600.0, 200.0));
    assert_eq!(vp.mode(), ViewportMode::Free);
}

#[test]
fn unbind_freezes_fit() {
    let mut world = World::new();
    let a = spawn_box(&mut world, 0.0, 0.0, 100.0, 100.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_fit(&world, 0.0, 0.0, &[a]);
    let (origin, zoom) = (vp.origin(), vp.zoom());

    vp.unbind();
    vp.unbind();
    bounds_of(&world, a).set(Rect::new(50.0, 50.0, 5000.0, 5000.0));

    assert_eq!(vp.origin(), origin);
    assert_eq!(vp.zoom(), zoom);
}

#[test]
fn free_after_unbind_accepts_setters() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 0.0, 0.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_entity(&world, player, 0.0, 0.0).unwrap();
    assert!(vp.set_origin(Vec2::ONE).is_err());

    vp.unbind();
    vp.set_origin(Vec2::new(3.0, 4.0)).unwrap();
    assert_eq!(vp.origin(), Vec2::new(3.0, 4.0));
}

#[test]
fn switching_follow_target_releases_previous() {
    let mut world = World::new();
    let first = spawn_at(&mut world, 100.0, 100.0);
    let second = spawn_at(&mut world, 500.0, 500.0);
    let mut vp = Viewport::new(800.0, 600.0);

    vp.bind_to_entity(&world, first, 0.0, 0.0).unwrap();
    vp.bind_to_entity(&world, second, 0.0, 0.0).unwrap();
    position(&world, first).set(Vec2::new(-1.0, -1.0));

    assert_eq!(vp.origin(), Vec2::new(500.0, 500.0));
    assert_eq!(vp.mode(), ViewportMode::BoundToEntity(second));
    assert_eq!(position(&world, first).observable().subscriber_count(), 0);
}

// =============================================================================
// Publication ordering
// =============================================================================

fn record_transforms(vp: &Viewport) -> (Observable<Vec<ViewTransform>>, impl Drop) {
    let seen = Observable::new(Vec::new());
    let sink = seen.clone();
    let sub = vp.transform().subscribe(move |t| sink.update(|v| v.push(*t)));
    (seen, sub)
}

#[test]
fn follow_diagonal_move_publishes_one_consistent_origin() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 1000.0, 500.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_entity(&world, player, 400.0, 300.0).unwrap();
    let (seen, _sub) = record_transforms(&vp);

    position(&world, player).set(Vec2::new(1100.0, 600.0));
    position(&world, player).set(Vec2::new(1200.0, 700.0));

    let origins: Vec<Vec2> = seen.get().iter().map(|t| t.origin).collect();
    assert_eq!(origins, vec![Vec2::new(700.0, 300.0), Vec2::new(800.0, 400.0)]);
}

#[test]
fn follow_random_moves_never_publish_torn_origins() {
    let mut world = World::new();
    let player = spawn_at(&mut world, 0.0, 0.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_entity(&world, player, 0.0, 0.0).unwrap();
    let (seen, _sub) = record_transforms(&vp);

    let pos = position(&world, player);
    let mut rng = fastrand::Rng::with_seed(21);
    let mut targets = Vec::new();
    for _ in 0..100 {
        let p = Vec2::new(rng.f32() * 1000.0 + 1.0, rng.f32() * 1000.0 + 1.0);
        pos.set(p);
        targets.push(p);
    }

    let origins: Vec<Vec2> = seen.get().iter().map(|t| t.origin).collect();
    assert_eq!(origins, targets);
}

#[test]
fn fit_box_jump_publishes_one_frame() {
    let mut world = World::new();
    let a = spawn_box(&mut world, 0.0, 0.0, 100.0, 100.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_fit(&world, 0.0, 0.0, &[a]);
    let (seen, _sub) = record_transforms(&vp);

    bounds_of(&world, a).set(Rect::new(1000.0, 1000.0, 1100.0, 1100.0));

    let seen = seen.get();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].origin, Vec2::new(1000.0, 1000.0));
    assert!(approx_eq(seen[0].zoom, 6.0));
}

#[test]
fn fit_moving_several_boxes_never_publishes_negative_zoom() {
    let mut world = World::new();
    let a = spawn_box(&mut world, 0.0, 0.0, 100.0, 100.0);
    let b = spawn_box(&mut world, 300.0, 200.0, 400.0, 300.0);
    let mut vp = Viewport::new(800.0, 600.0);
    vp.bind_to_fit(&world, 10.0, 10.0, &[a, b]);
    let (seen, _sub) = record_transforms(&vp);

    bounds_of(&world, a).set(Rect::new(5000.0, 5000.0, 5100.0, 5100.0));
    bounds_of(&world, b).set(Rect::new(5300.0, 5200.0, 5400.0, 5300.0));

    let seen = seen.get();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|t| t.zoom > 0.0));
    assert_eq!(seen[1].origin, Vec2::new(4990.0, 4990.0));
    assert!(approx_eq(seen[1].zoom, 1.875));
}
