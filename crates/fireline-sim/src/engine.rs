//! Simulation engine — the core of the range.
//!
//! `SimulationEngine` owns the hecs ECS world of targets and the weapon
//! state machines, processes player commands, runs all systems, and
//! produces `SimSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fireline_core::commands::PlayerCommand;
use fireline_core::config::WeaponConfig;
use fireline_core::events::{AnimationEvent, HudUpdate};
use fireline_core::state::SimSnapshot;
use fireline_core::types::SimTime;

use crate::systems::{self, EventSinks};
use crate::weapon::{RangeScore, WeaponState};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Populate the default practice range layout on startup.
    pub spawn_range: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_range: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    // BTreeMap keeps weapon iteration order deterministic.
    weapons: BTreeMap<u32, WeaponState>,
    next_weapon_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    sinks: EventSinks,
    score: RangeScore,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        if config.spawn_range {
            world_setup::setup_range(&mut world);
        }
        Self {
            world,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            weapons: BTreeMap::new(),
            next_weapon_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            sinks: EventSinks::default(),
            score: RangeScore::default(),
        }
    }

    /// Register a weapon and return its id. The weapon arrives active,
    /// fully loaded, and announces its counters to the HUD.
    pub fn add_weapon(&mut self, config: WeaponConfig) -> u32 {
        let id = self.next_weapon_id;
        self.next_weapon_id += 1;
        let weapon = WeaponState::new(id, config);
        self.sinks.hud.push(HudUpdate {
            weapon_id: id,
            in_clip: weapon.ammo.in_clip,
            reserve: weapon.ammo.reserve,
        });
        self.weapons.insert(id, weapon);
        id
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        // Edge-style inputs are visible for exactly one tick.
        for weapon in self.weapons.values_mut() {
            weapon.trigger_edge = false;
            weapon.reload_requested = false;
        }

        systems::snapshot::build(
            &self.world,
            &self.weapons,
            self.time,
            &self.score,
            &mut self.sinks,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for spawning test targets).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a registered weapon's state.
    pub fn weapon(&self, id: u32) -> Option<&WeaponState> {
        self.weapons.get(&id)
    }

    /// Get the running range score.
    pub fn score(&self) -> &RangeScore {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetTriggerHeld { weapon_id, held } => {
                if let Some(weapon) = self.weapons.get_mut(&weapon_id) {
                    if held && !weapon.trigger_held {
                        weapon.trigger_edge = true;
                    }
                    weapon.trigger_held = held;
                }
            }
            PlayerCommand::RequestReload { weapon_id } => {
                if let Some(weapon) = self.weapons.get_mut(&weapon_id) {
                    weapon.reload_requested = true;
                }
            }
            PlayerCommand::SetAim {
                weapon_id,
                origin,
                direction,
            } => {
                if let Some(weapon) = self.weapons.get_mut(&weapon_id) {
                    let dir = direction.normalize_or_zero();
                    if dir != glam::DVec3::ZERO {
                        weapon.aim_origin = origin;
                        weapon.aim_direction = dir;
                    }
                }
            }
            PlayerCommand::SetWeaponActive { weapon_id, active } => {
                let now_tick = self.time.tick;
                if let Some(weapon) = self.weapons.get_mut(&weapon_id) {
                    if active && !weapon.active {
                        // Reactivation discards any in-flight reload or
                        // cooldown; the ledger keeps whatever it had.
                        weapon.reset(now_tick);
                        self.sinks.animation.push(AnimationEvent::ReloadingChanged {
                            weapon_id,
                            reloading: false,
                        });
                        self.sinks.hud.push(HudUpdate {
                            weapon_id,
                            in_clip: weapon.ammo.in_clip,
                            reserve: weapon.ammo.reserve,
                        });
                    } else if !active && weapon.active {
                        weapon.trigger_held = false;
                        weapon.trigger_edge = false;
                        weapon.reload_requested = false;
                    }
                    weapon.active = active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Weapon controllers (fire gate, cooldown, reload phases)
        systems::weapon::run(
            &mut self.world,
            &mut self.weapons,
            &self.time,
            &mut self.rng,
            &mut self.score,
            &mut self.sinks,
        );
        // 2. Movement integration
        systems::movement::run(&mut self.world);
        // 3. Cleanup (destroyed targets, spent charges, orphaned parts)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.score);
    }
}
