//! Integrate entity positions from their velocities.

use hecs::World;

use fireline_core::constants::DT;
use fireline_core::types::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;
    }
}
