//! Target spawning helpers and the default practice range layout.

use hecs::{Entity, World};

use fireline_core::components::{Collider, Damageable, ExplosiveCharge, RigidBody, TrainingDummy};
use fireline_core::types::{Position, Velocity};

use crate::systems::hit::PartOf;

/// Static target plate: takes damage, despawns at zero hit points.
pub fn spawn_plate(world: &mut World, position: Position, hit_points: f64) -> Entity {
    world.spawn((position, Collider { radius: 0.5 }, Damageable { hit_points }))
}

/// Loose crate: pushed around by shot impulses, takes no damage.
pub fn spawn_crate(world: &mut World, position: Position, mass: f64) -> Entity {
    world.spawn((
        position,
        Velocity::default(),
        Collider { radius: 0.6 },
        RigidBody { mass },
    ))
}

/// Placed grenade: detonates when shot, damaging nearby damageables.
pub fn spawn_grenade(world: &mut World, position: Position, blast_radius: f64, blast_damage: f64) -> Entity {
    world.spawn((
        position,
        Collider { radius: 0.2 },
        ExplosiveCharge {
            blast_radius,
            blast_damage,
            detonated: false,
        },
    ))
}

/// Training dummy: an uncollidable root accumulating damage, with torso
/// and head part colliders linked back to it.
pub fn spawn_dummy(world: &mut World, position: Position) -> Entity {
    let root = world.spawn((position, TrainingDummy::default()));
    let torso = world.spawn((
        Position::new(position.x, position.y + 1.1, position.z),
        Collider { radius: 0.35 },
        PartOf { parent: root },
    ));
    world.spawn((
        Position::new(position.x, position.y + 1.7, position.z),
        Collider { radius: 0.15 },
        PartOf { parent: torso },
    ));
    root
}

/// Default practice range: a row of plates, a crate, a grenade beside the
/// far plate, and one dummy.
pub fn setup_range(world: &mut World) {
    spawn_plate(world, Position::new(20.0, 1.0, -4.0), 50.0);
    spawn_plate(world, Position::new(25.0, 1.0, 0.0), 50.0);
    spawn_plate(world, Position::new(30.0, 1.0, 4.0), 50.0);
    spawn_crate(world, Position::new(15.0, 0.5, 2.0), 12.0);
    spawn_grenade(world, Position::new(31.0, 0.2, 4.5), 5.0, 80.0);
    spawn_dummy(world, Position::new(22.0, 0.0, 6.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_layout_spawns_all_target_kinds() {
        let mut world = World::new();
        setup_range(&mut world);

        assert_eq!(world.query::<&Damageable>().iter().count(), 3);
        assert_eq!(world.query::<&RigidBody>().iter().count(), 1);
        assert_eq!(world.query::<&ExplosiveCharge>().iter().count(), 1);
        assert_eq!(world.query::<&TrainingDummy>().iter().count(), 1);
        assert_eq!(world.query::<&PartOf>().iter().count(), 2);
    }

    #[test]
    fn test_dummy_parts_chain_to_root() {
        let mut world = World::new();
        let root = spawn_dummy(&mut world, Position::default());

        let mut resolved = 0;
        {
            let mut query = world.query::<&PartOf>();
            for (entity, _) in query.iter() {
                assert_eq!(
                    crate::systems::hit::find_dummy_parent(&world, entity),
                    Some(root)
                );
                resolved += 1;
            }
        }
        assert_eq!(resolved, 2);
    }
}
