//! Remove spent entities: destroyed damageables, detonated charges, and
//! parts whose parent is gone.

use hecs::{Entity, World};

use fireline_core::components::{Damageable, ExplosiveCharge};

use crate::systems::hit::PartOf;
use crate::weapon::RangeScore;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, score: &mut RangeScore) {
    despawn_buffer.clear();

    for (entity, target) in world.query_mut::<&Damageable>() {
        if target.hit_points <= 0.0 {
            despawn_buffer.push(entity);
            score.targets_destroyed += 1;
        }
    }
    for (entity, charge) in world.query_mut::<&ExplosiveCharge>() {
        if charge.detonated {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Orphan sweep runs after primary despawns so parts follow their
    // parent out in the same tick.
    let mut orphans: Vec<Entity> = Vec::new();
    {
        let mut query = world.query::<&PartOf>();
        for (entity, part) in query.iter() {
            if !world.contains(part.parent) {
                orphans.push(entity);
            }
        }
    }
    for entity in orphans {
        let _ = world.despawn(entity);
    }
}
