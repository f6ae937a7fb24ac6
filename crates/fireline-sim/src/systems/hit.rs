//! Hit resolution — single ray cast plus capability dispatch.
//!
//! One ray is cast per shot against all collider entities; the nearest
//! intersection wins. The struck entity's capabilities are resolved once
//! into a `CapabilitySet`, then every applicable effect is applied
//! independently (order is not significant).

use glam::DVec3;
use hecs::{Entity, World};

use fireline_core::components::{Collider, Damageable, ExplosiveCharge, RigidBody, TrainingDummy};
use fireline_core::constants::{PART_CHAIN_MAX_DEPTH, RAY_EPSILON};
use fireline_core::events::AudioEvent;
use fireline_core::types::{Position, Velocity};

/// Ownership link from a part entity (collider) to its parent entity.
/// Dummy damage routes up this chain to the nearest `TrainingDummy`.
#[derive(Debug, Clone, Copy)]
pub struct PartOf {
    pub parent: Entity,
}

/// Capabilities exposed by a struck entity, resolved once per hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilitySet {
    /// Takes direct shot damage.
    pub damageable: bool,
    /// Takes an impulse opposite the surface normal.
    pub physical: bool,
    /// Detonates when struck.
    pub explosive: bool,
    /// Parent-scoped damageable found via the ownership chain, if any.
    pub dummy: Option<Entity>,
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Position,
    /// Outward surface normal at the hit point.
    pub normal: DVec3,
    pub distance: f64,
    pub capabilities: CapabilitySet,
}

/// Cast a single ray and resolve the nearest collider hit within
/// `max_range`. Returns `None` on a miss (no further dispatch occurs).
pub fn resolve(world: &World, origin: Position, direction: DVec3, max_range: f64) -> Option<RayHit> {
    let dir = direction.normalize_or_zero();
    if dir == DVec3::ZERO {
        return None;
    }
    let ray_origin = origin.to_dvec3();

    let mut nearest: Option<(Entity, f64, DVec3)> = None;
    {
        let mut query = world.query::<(&Position, &Collider)>();
        for (entity, (pos, collider)) in query.iter() {
            let center = pos.to_dvec3();
            if let Some(t) = ray_sphere(ray_origin, dir, center, collider.radius) {
                if t <= max_range && nearest.map_or(true, |(_, best, _)| t < best) {
                    nearest = Some((entity, t, center));
                }
            }
        }
    }

    let (entity, distance, center) = nearest?;
    let point = ray_origin + dir * distance;
    let normal = (point - center).normalize_or_zero();
    // Degenerate when the ray starts inside the sphere; face the shooter.
    let normal = if normal == DVec3::ZERO { -dir } else { normal };

    Some(RayHit {
        entity,
        point: Position::from_dvec3(point),
        normal,
        distance,
        capabilities: resolve_capabilities(world, entity),
    })
}

/// Apply every applicable effect of one resolved shot.
pub fn apply_shot(
    world: &mut World,
    hit: &RayHit,
    damage: f64,
    impact_force: f64,
    audio_events: &mut Vec<AudioEvent>,
) {
    if hit.capabilities.damageable {
        if let Ok(mut target) = world.get::<&mut Damageable>(hit.entity) {
            target.hit_points -= damage;
        }
    }

    if hit.capabilities.physical {
        apply_impulse(world, hit.entity, -hit.normal * impact_force);
    }

    if hit.capabilities.explosive {
        detonate(world, hit.entity, audio_events);
    }

    if let Some(dummy) = hit.capabilities.dummy {
        if let Ok(mut target) = world.get::<&mut TrainingDummy>(dummy) {
            target.damage_taken += damage;
            target.hits += 1;
        }
    }
}

/// Resolve the capability set a struck entity exposes.
fn resolve_capabilities(world: &World, entity: Entity) -> CapabilitySet {
    CapabilitySet {
        damageable: world.get::<&Damageable>(entity).is_ok(),
        physical: world.get::<&RigidBody>(entity).is_ok(),
        explosive: world
            .get::<&ExplosiveCharge>(entity)
            .map(|charge| !charge.detonated)
            .unwrap_or(false),
        dummy: find_dummy_parent(world, entity),
    }
}

/// Walk the ownership chain (bounded depth, self included) to the nearest
/// entity carrying a `TrainingDummy`.
pub fn find_dummy_parent(world: &World, entity: Entity) -> Option<Entity> {
    let mut current = entity;
    for _ in 0..PART_CHAIN_MAX_DEPTH {
        if world.get::<&TrainingDummy>(current).is_ok() {
            return Some(current);
        }
        match world.get::<&PartOf>(current) {
            Ok(part) => current = part.parent,
            Err(_) => return None,
        }
    }
    None
}

/// Impulse response: velocity change = impulse / mass. No-op for entities
/// without a velocity.
fn apply_impulse(world: &mut World, entity: Entity, impulse: DVec3) {
    let mass = match world.get::<&RigidBody>(entity) {
        Ok(body) => body.mass.max(f64::EPSILON),
        Err(_) => return,
    };
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        let dv = impulse / mass;
        vel.x += dv.x;
        vel.y += dv.y;
        vel.z += dv.z;
    }
}

/// Detonate an explosive charge: mark it spent and apply blast damage to
/// every damageable inside the blast radius.
fn detonate(world: &mut World, charge: Entity, audio_events: &mut Vec<AudioEvent>) {
    let (center, blast_radius, blast_damage) = {
        let Ok(mut state) = world.get::<&mut ExplosiveCharge>(charge) else {
            return;
        };
        if state.detonated {
            return;
        }
        state.detonated = true;

        let center = match world.get::<&Position>(charge) {
            Ok(pos) => *pos,
            Err(_) => Position::default(),
        };
        (center, state.blast_radius, state.blast_damage)
    };

    for (entity, (pos, target)) in world.query_mut::<(&Position, &mut Damageable)>() {
        if entity == charge {
            continue;
        }
        if center.range_to(pos) <= blast_radius {
            target.hit_points -= blast_damage;
        }
    }

    audio_events.push(AudioEvent::Detonation { position: center });
}

/// Nearest intersection parameter of a ray (unit direction) and a sphere.
fn ray_sphere(origin: DVec3, dir: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let to_center = center - origin;
    let along = to_center.dot(dir);
    let perp_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if perp_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - perp_sq).sqrt();
    let near = along - half_chord;
    let far = along + half_chord;
    if near >= RAY_EPSILON {
        Some(near)
    } else if far >= RAY_EPSILON {
        // Ray starts inside the sphere.
        Some(far)
    } else {
        None
    }
}
