#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::ammo::AmmoLedger;
    use crate::commands::PlayerCommand;
    use crate::config::WeaponConfig;
    use crate::enums::*;
    use crate::events::{Alert, AnimationEvent, AudioEvent, EffectRequest, HudUpdate};
    use crate::state::SimSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    // ---- Ammo ledger ----

    #[test]
    fn test_ammo_initial_fill() {
        let ammo = AmmoLedger::new(10, 3);
        assert_eq!(ammo.in_clip, 10);
        assert_eq!(ammo.reserve, 30);
        assert!(ammo.is_full());
        assert!(!ammo.needs_reload());
    }

    #[test]
    fn test_ammo_coupled_depletion() {
        let mut ammo = AmmoLedger::new(10, 3);
        assert!(ammo.try_consume_round());
        assert_eq!(ammo.in_clip, 9);
        assert_eq!(ammo.reserve, 29, "clip and reserve deplete in lockstep");
    }

    #[test]
    fn test_ammo_empty_clip_rejects_consume() {
        let mut ammo = AmmoLedger::new(2, 1);
        assert!(ammo.try_consume_round());
        assert!(ammo.try_consume_round());
        assert_eq!(ammo.in_clip, 0);
        assert!(!ammo.try_consume_round(), "empty clip must refuse");
        assert_eq!(ammo.in_clip, 0);
        assert_eq!(ammo.reserve, 0, "no change on refused consume");
    }

    #[test]
    fn test_ammo_reserve_saturates_at_zero() {
        // Zero multiplier: a full clip but no reserve behind it.
        let mut ammo = AmmoLedger::new(5, 0);
        for _ in 0..5 {
            assert!(ammo.try_consume_round());
        }
        assert_eq!(ammo.in_clip, 0);
        assert_eq!(ammo.reserve, 0);
        assert!(
            !ammo.needs_reload(),
            "empty reserve means no reload is useful"
        );
    }

    #[test]
    fn test_ammo_refill_caps_at_clip_size() {
        let mut ammo = AmmoLedger::new(10, 3);
        ammo.try_consume_round();
        assert_eq!(ammo.refill(), 10, "plenty of reserve refills to capacity");
        assert_eq!(ammo.reserve, 29, "refill does not charge the reserve");
    }

    #[test]
    fn test_ammo_refill_with_short_reserve() {
        let mut ammo = AmmoLedger::new(10, 1);
        for _ in 0..10 {
            ammo.try_consume_round();
        }
        // 10 rounds fired: clip 0, reserve 0.
        assert_eq!(ammo.refill(), 0, "zero reserve refills to zero");

        let mut ammo = AmmoLedger::new(10, 2);
        for _ in 0..10 {
            ammo.try_consume_round();
        }
        assert!(ammo.needs_reload());
        assert_eq!(ammo.refill(), 10);
        assert_eq!(ammo.reserve, 10);
    }

    // ---- Enums ----

    #[test]
    fn test_weapon_mode_serde() {
        let variants = vec![
            WeaponMode::Ready,
            WeaponMode::Cooling,
            WeaponMode::ReloadStroke,
            WeaponMode::ReloadSettle,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_mode_is_reloading() {
        assert!(WeaponMode::ReloadStroke.is_reloading());
        assert!(WeaponMode::ReloadSettle.is_reloading());
        assert!(!WeaponMode::Ready.is_reloading());
        assert!(!WeaponMode::Cooling.is_reloading());
    }

    // ---- Commands ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetTriggerHeld {
                weapon_id: 0,
                held: true,
            },
            PlayerCommand::RequestReload { weapon_id: 1 },
            PlayerCommand::SetAim {
                weapon_id: 0,
                origin: Position::new(0.0, 1.5, 0.0),
                direction: DVec3::X,
            },
            PlayerCommand::SetWeaponActive {
                weapon_id: 2,
                active: false,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    // ---- Events ----

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::Gunshot {
                weapon_id: 0,
                sound: "gunshot".to_string(),
            },
            AudioEvent::ReloadStart {
                weapon_id: 0,
                sound: "mag_out".to_string(),
            },
            AudioEvent::ReloadEnd {
                weapon_id: 0,
                sound: "mag_in".to_string(),
            },
            AudioEvent::CooldownStart {
                weapon_id: 1,
                sound: "vent".to_string(),
            },
            AudioEvent::Detonation {
                position: Position::new(5.0, 0.0, 0.0),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AudioEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_animation_event_serde() {
        let events = vec![
            AnimationEvent::ReloadingChanged {
                weapon_id: 0,
                reloading: true,
            },
            AnimationEvent::CoolingTriggered { weapon_id: 0 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AnimationEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_effect_request_serde() {
        let req = EffectRequest {
            effect: "impact_concrete".to_string(),
            position: Position::new(10.0, 0.0, 1.0),
            normal: DVec3::NEG_X,
            lifetime_secs: 5.0,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: EffectRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.effect, back.effect);
        assert_eq!(req.lifetime_secs, back.lifetime_secs);
    }

    #[test]
    fn test_hud_update_serde() {
        let hud = HudUpdate {
            weapon_id: 0,
            in_clip: 9,
            reserve: 29,
        };
        let json = serde_json::to_string(&hud).unwrap();
        let back: HudUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(hud.in_clip, back.in_clip);
        assert_eq!(hud.reserve, back.reserve);
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Info,
            message: "reload rejected: no reserve".to_string(),
            tick: 42,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.tick, back.tick);
    }

    // ---- Snapshot ----

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Config ----

    #[test]
    fn test_weapon_config_defaults() {
        let config = WeaponConfig::default();
        assert_eq!(config.damage, 10.0);
        assert_eq!(config.range, 100.0);
        assert_eq!(config.impact_force, 30.0);
        assert!(!config.automatic);
        assert_eq!(config.fire_rate, 15.0);
        assert_eq!(config.clip_size, 10);
        assert_eq!(config.reserve_multiplier, 3);
        assert_eq!(config.reload_secs, 1.0);
        assert_eq!(config.cooldown_secs, 0.25);
        assert!(config.impact_effects.is_empty());
    }

    // ---- Types ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_dvec3_round_trip() {
        let p = Position::new(1.0, -2.0, 3.5);
        let back = Position::from_dvec3(p.to_dvec3());
        assert_eq!(p, back);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0, 0.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_secs_since() {
        let time = SimTime {
            tick: 90,
            elapsed_secs: 1.5,
        };
        assert!((time.secs_since(30) - 1.0).abs() < 1e-10);
        assert_eq!(time.secs_since(200), 0.0, "future start ticks clamp to 0");
    }
}
