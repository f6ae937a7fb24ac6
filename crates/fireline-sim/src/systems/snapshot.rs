//! Build the per-tick snapshot sent to the frontend.

use std::collections::BTreeMap;
use std::mem;

use hecs::World;

use fireline_core::components::{Damageable, TrainingDummy};
use fireline_core::state::{ScoreView, SimSnapshot, TargetView, WeaponView};
use fireline_core::types::{Position, SimTime};

use crate::systems::EventSinks;
use crate::weapon::{RangeScore, WeaponState};

pub fn build(
    world: &World,
    weapons: &BTreeMap<u32, WeaponState>,
    time: SimTime,
    score: &RangeScore,
    sinks: &mut EventSinks,
) -> SimSnapshot {
    let weapon_views = weapons
        .values()
        .map(|weapon| WeaponView {
            weapon_id: weapon.id,
            mode: weapon.mode,
            active: weapon.active,
            in_clip: weapon.ammo.in_clip,
            reserve: weapon.ammo.reserve,
            clip_size: weapon.ammo.clip_size,
        })
        .collect();

    let mut targets: Vec<TargetView> = Vec::new();
    {
        let mut query = world.query::<(&Position, Option<&Damageable>, Option<&TrainingDummy>)>();
        for (entity, (pos, damageable, dummy)) in query.iter() {
            targets.push(TargetView {
                id: entity.id(),
                position: *pos,
                hit_points: damageable.map(|d| d.hit_points),
                dummy_damage: dummy.map(|d| d.damage_taken),
            });
        }
    }
    // hecs iteration order is archetype-dependent; sort for stable output.
    targets.sort_by_key(|t| t.id);

    SimSnapshot {
        time,
        weapons: weapon_views,
        targets,
        score: ScoreView {
            shots_fired: score.shots_fired,
            shots_hit: score.shots_hit,
            targets_destroyed: score.targets_destroyed,
        },
        audio_events: mem::take(&mut sinks.audio),
        animation_events: mem::take(&mut sinks.animation),
        effect_requests: mem::take(&mut sinks.effects),
        hud_updates: mem::take(&mut sinks.hud),
        alerts: mem::take(&mut sinks.alerts),
    }
}
