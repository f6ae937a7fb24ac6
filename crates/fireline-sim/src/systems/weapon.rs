//! Weapon controller — one interleaved state machine per weapon.
//!
//! Tick order per weapon: advance any timed mode (cooling or the two
//! reload phases) against its deadline; otherwise service auto-reload,
//! manual reload, then the fire gate. At most one shot leaves per weapon
//! per tick, and firing always enters cooling.

use std::collections::BTreeMap;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fireline_core::constants::{ANIMATION_TAIL_SECS, EFFECT_LIFETIME_SECS};
use fireline_core::enums::{AlertLevel, WeaponMode};
use fireline_core::events::{Alert, AnimationEvent, AudioEvent, EffectRequest, HudUpdate};
use fireline_core::types::SimTime;

use crate::systems::hit;
use crate::systems::EventSinks;
use crate::weapon::{RangeScore, WeaponState};

pub fn run(
    world: &mut World,
    weapons: &mut BTreeMap<u32, WeaponState>,
    time: &SimTime,
    rng: &mut ChaCha8Rng,
    score: &mut RangeScore,
    sinks: &mut EventSinks,
) {
    for weapon in weapons.values_mut() {
        if !weapon.active {
            continue;
        }
        tick_weapon(world, weapon, time, rng, score, sinks);
    }
}

fn tick_weapon(
    world: &mut World,
    weapon: &mut WeaponState,
    time: &SimTime,
    rng: &mut ChaCha8Rng,
    score: &mut RangeScore,
    sinks: &mut EventSinks,
) {
    let in_mode = time.secs_since(weapon.mode_started_tick);

    match weapon.mode {
        WeaponMode::Cooling => {
            if in_mode >= weapon.config.cooldown_secs + ANIMATION_TAIL_SECS {
                weapon.mode = WeaponMode::Ready;
                weapon.mode_started_tick = time.tick;
            }
            return;
        }
        WeaponMode::ReloadStroke => {
            let stroke = (weapon.config.reload_secs - ANIMATION_TAIL_SECS).max(0.0);
            if in_mode >= stroke {
                if !weapon.config.reload_end_sound.is_empty() {
                    sinks.audio.push(AudioEvent::ReloadEnd {
                        weapon_id: weapon.id,
                        sound: weapon.config.reload_end_sound.clone(),
                    });
                }
                sinks.animation.push(AnimationEvent::ReloadingChanged {
                    weapon_id: weapon.id,
                    reloading: false,
                });
                weapon.mode = WeaponMode::ReloadSettle;
                weapon.mode_started_tick = time.tick;
            }
            return;
        }
        WeaponMode::ReloadSettle => {
            if in_mode >= ANIMATION_TAIL_SECS {
                weapon.ammo.refill();
                sinks.hud.push(HudUpdate {
                    weapon_id: weapon.id,
                    in_clip: weapon.ammo.in_clip,
                    reserve: weapon.ammo.reserve,
                });
                weapon.mode = WeaponMode::Ready;
                weapon.mode_started_tick = time.tick;
            }
            return;
        }
        WeaponMode::Ready => {}
    }

    // Dry clip with rounds behind it reloads without being asked.
    if weapon.ammo.needs_reload() {
        start_reload(weapon, time, sinks);
        return;
    }

    if weapon.reload_requested && !weapon.ammo.is_full() {
        if weapon.ammo.reserve == 0 {
            sinks.alerts.push(Alert {
                level: AlertLevel::Info,
                message: format!("weapon {}: reload rejected, reserve empty", weapon.id),
                tick: time.tick,
            });
        } else {
            start_reload(weapon, time, sinks);
            return;
        }
    }

    if fire_gate(weapon, time.elapsed_secs) {
        if weapon.config.automatic {
            weapon.next_fire_at_secs = time.elapsed_secs + 1.0 / weapon.config.fire_rate;
        }
        if weapon.ammo.try_consume_round() {
            fire_shot(world, weapon, rng, score, sinks);
            start_cooldown(weapon, time, sinks);
        }
    }
}

/// Whether the trigger state honors a shot this tick. Automatic weapons
/// fire while held, rate-limited; manual weapons fire on the press edge
/// only.
fn fire_gate(weapon: &WeaponState, now_secs: f64) -> bool {
    if weapon.config.automatic {
        weapon.trigger_held && now_secs >= weapon.next_fire_at_secs
    } else {
        weapon.trigger_edge
    }
}

fn fire_shot(
    world: &mut World,
    weapon: &mut WeaponState,
    rng: &mut ChaCha8Rng,
    score: &mut RangeScore,
    sinks: &mut EventSinks,
) {
    score.shots_fired += 1;

    if !weapon.config.muzzle_flash_effect.is_empty() {
        sinks.effects.push(EffectRequest {
            effect: weapon.config.muzzle_flash_effect.clone(),
            position: weapon.aim_origin,
            normal: weapon.aim_direction,
            lifetime_secs: EFFECT_LIFETIME_SECS,
        });
    }
    if !weapon.config.gunshot_sound.is_empty() {
        sinks.audio.push(AudioEvent::Gunshot {
            weapon_id: weapon.id,
            sound: weapon.config.gunshot_sound.clone(),
        });
    }

    if let Some(ray_hit) = hit::resolve(
        world,
        weapon.aim_origin,
        weapon.aim_direction,
        weapon.config.range,
    ) {
        score.shots_hit += 1;
        hit::apply_shot(
            world,
            &ray_hit,
            weapon.config.damage,
            weapon.config.impact_force,
            &mut sinks.audio,
        );

        // Impact effects spawn on any surface hit, capabilities or not.
        if !weapon.config.impact_effects.is_empty() {
            let pick = rng.gen_range(0..weapon.config.impact_effects.len());
            sinks.effects.push(EffectRequest {
                effect: weapon.config.impact_effects[pick].clone(),
                position: ray_hit.point,
                normal: ray_hit.normal,
                lifetime_secs: EFFECT_LIFETIME_SECS,
            });
        }
    }

    sinks.hud.push(HudUpdate {
        weapon_id: weapon.id,
        in_clip: weapon.ammo.in_clip,
        reserve: weapon.ammo.reserve,
    });
}

fn start_cooldown(weapon: &mut WeaponState, time: &SimTime, sinks: &mut EventSinks) {
    weapon.mode = WeaponMode::Cooling;
    weapon.mode_started_tick = time.tick;
    if !weapon.config.cooldown_sound.is_empty() {
        sinks.audio.push(AudioEvent::CooldownStart {
            weapon_id: weapon.id,
            sound: weapon.config.cooldown_sound.clone(),
        });
    }
    sinks.animation.push(AnimationEvent::CoolingTriggered {
        weapon_id: weapon.id,
    });
}

fn start_reload(weapon: &mut WeaponState, time: &SimTime, sinks: &mut EventSinks) {
    weapon.mode = WeaponMode::ReloadStroke;
    weapon.mode_started_tick = time.tick;
    if !weapon.config.reload_sound.is_empty() {
        sinks.audio.push(AudioEvent::ReloadStart {
            weapon_id: weapon.id,
            sound: weapon.config.reload_sound.clone(),
        });
    }
    sinks.animation.push(AnimationEvent::ReloadingChanged {
        weapon_id: weapon.id,
        reloading: true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use fireline_core::config::WeaponConfig;

    fn weapon_with(config: WeaponConfig) -> WeaponState {
        WeaponState::new(0, config)
    }

    #[test]
    fn test_manual_gate_requires_edge() {
        let mut weapon = weapon_with(WeaponConfig::default());
        weapon.trigger_held = true;
        assert!(!fire_gate(&weapon, 0.0), "held without a press edge");
        weapon.trigger_edge = true;
        assert!(fire_gate(&weapon, 0.0));
    }

    #[test]
    fn test_automatic_gate_rate_limited() {
        let mut weapon = weapon_with(WeaponConfig {
            automatic: true,
            fire_rate: 10.0,
            ..WeaponConfig::default()
        });
        weapon.trigger_held = true;
        assert!(fire_gate(&weapon, 0.0));
        weapon.next_fire_at_secs = 0.1;
        assert!(!fire_gate(&weapon, 0.05));
        assert!(fire_gate(&weapon, 0.1));
    }

    #[test]
    fn test_automatic_gate_ignores_edge() {
        let mut weapon = weapon_with(WeaponConfig {
            automatic: true,
            ..WeaponConfig::default()
        });
        weapon.trigger_edge = true;
        assert!(!fire_gate(&weapon, 0.0), "automatic needs a held trigger");
    }
}
