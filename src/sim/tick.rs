//! Per-tick simulation step
//!
//! Core game loop that advances the session once per external tick.

use glam::DVec2;

use super::collision::{find_player_collision, prune_projectiles, resolve_projectile_hits};
use super::snapshot::RenderSnapshot;
use super::state::{GameEvent, GamePhase, GameState};

/// Damage dealt by one bullet
const BULLET_DAMAGE: i32 = 1;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer position in playfield coordinates (`None` keeps the last one)
    pub pointer: Option<DVec2>,
    /// Fire (edge-triggered)
    pub shoot: bool,
    /// Restart after game over (edge-triggered)
    pub restart: bool,
}

/// Advance the session by one tick at time `now` (nanoseconds) and return
/// what the renderer should draw.
///
/// While the game is over nothing moves; only a restart edge does anything,
/// and that tick performs the reset alone.
pub fn tick(state: &mut GameState, input: &TickInput, now: i64) -> RenderSnapshot {
    state.events.clear();

    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                apply_pointer(state, input);
                state.restart(now);
            }
        }
        GamePhase::Running => {
            apply_pointer(state, input);
            if input.shoot {
                state.shoot();
            }
            step(state, now);
        }
    }

    RenderSnapshot::capture(state)
}

fn apply_pointer(state: &mut GameState, input: &TickInput) {
    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }
}

/// The fixed update order of a running tick
fn step(state: &mut GameState, now: i64) {
    state.time_ticks += 1;
    let config = state.config;
    let bounds = config.bounds();

    // 1. Walker seeks the pointer
    state
        .walker
        .steer_toward(state.pointer, config.walker_max_speed, config.walker_max_force);
    state.walker.integrate();

    // 2. Keep the walker on the field
    state.walker.check_boundaries(&bounds);

    // 3. Bullets fly, strays leave
    for projectile in &mut state.projectiles {
        projectile.integrate();
    }
    prune_projectiles(&mut state.projectiles, &bounds);

    // 4. Spawn check
    if let Some(enemy) = state
        .spawner
        .try_spawn(now, &mut state.rng, &bounds, &mut state.ids)
    {
        log::debug!("Enemy {} spawned at {:?}", enemy.id, enemy.pos);
        state.events.push(GameEvent::EnemySpawned {
            enemy_id: enemy.id,
            pos: enemy.pos,
        });
        state.enemies.push(enemy);
    }

    // 5. Enemies home on the walker's current position
    let target = state.walker.pos;
    for enemy in &mut state.enemies {
        enemy.update_velocity_toward(target, config.enemy_speed);
        enemy.move_step();
    }

    // 6. Bullets vs enemies
    let report = resolve_projectile_hits(&mut state.enemies, &mut state.projectiles, BULLET_DAMAGE);
    for hit in &report.hits {
        state.events.push(GameEvent::EnemyHit {
            enemy_id: hit.enemy_id,
            health: hit.health,
        });
        if hit.killed {
            log::debug!("Enemy {} destroyed", hit.enemy_id);
            state.events.push(GameEvent::EnemyKilled {
                enemy_id: hit.enemy_id,
            });
        }
    }
    state.score += report.kills();

    // 7. Enemies vs walker
    if let Some(enemy_id) = find_player_collision(&state.walker, &state.enemies).map(|e| e.id) {
        state.trigger_game_over(enemy_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Enemy;
    use crate::sim::vector::VectorExt;

    const INTERVAL: i64 = 3_000_000_000;
    const FRAME: i64 = 16_666_667;

    /// Session whose spawn timer was just reset, so ticks before `INTERVAL` never spawn
    fn quiet_state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 0);
        state.spawner.reset(0);
        state
    }

    fn add_enemy(state: &mut GameState, x: f64, y: f64) -> u32 {
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, DVec2::new(x, y), 3, 15.0));
        id
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut state = GameState::new(GameConfig::default(), 5 * INTERVAL);
        let snap = tick(&mut state, &TickInput::default(), 5 * INTERVAL);
        assert_eq!(state.enemies.len(), 1);
        assert!(matches!(snap.events[0], GameEvent::EnemySpawned { .. }));

        tick(&mut state, &TickInput::default(), 5 * INTERVAL + FRAME);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_spawn_at_exact_interval() {
        let mut state = quiet_state();
        tick(&mut state, &TickInput::default(), INTERVAL - 1);
        assert!(state.enemies.is_empty());
        tick(&mut state, &TickInput::default(), INTERVAL);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_walker_seeks_pointer() {
        let mut state = quiet_state();
        let start = state.walker.pos;
        let input = TickInput {
            pointer: Some(DVec2::new(800.0, 300.0)),
            ..Default::default()
        };
        for i in 0..10 {
            tick(&mut state, &input, i * FRAME);
        }
        assert!(state.walker.pos.x > start.x);
        assert!((state.walker.pos.y - start.y).abs() < 1e-9);
        assert!(state.walker.vel.magnitude() <= state.config.walker_max_speed + 1e-9);
    }

    #[test]
    fn test_shoot_while_stationary_is_noop() {
        let mut state = quiet_state();
        // Pointer on the walker: no desire to move, velocity stays zero
        let input = TickInput {
            pointer: Some(state.walker.pos),
            shoot: true,
            ..Default::default()
        };
        let snap = tick(&mut state, &input, FRAME);
        assert!(state.projectiles.is_empty());
        assert!(snap.events.is_empty());
    }

    #[test]
    fn test_shot_travels_along_heading() {
        let mut state = quiet_state();
        state.walker.vel = DVec2::new(0.0, -2.0);
        let origin = state.walker.pos;
        let input = TickInput {
            pointer: Some(DVec2::new(origin.x, 0.0)),
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME);
        assert_eq!(state.projectiles.len(), 1);
        // Fired from the pre-tick position, then integrated once
        assert!((state.projectiles[0].pos - (origin + DVec2::new(0.0, -8.0))).length() < 1e-9);
    }

    #[test]
    fn test_projectile_removed_exactly_past_margin() {
        let mut state = quiet_state();
        state.pointer = state.walker.pos;
        let id = state.next_entity_id();
        // Lands exactly on x = -radius after one tick, then past it after two
        state.projectiles.push(crate::sim::Projectile::new(
            id,
            DVec2::new(3.0, 300.0),
            DVec2::new(-8.0, 0.0),
            5.0,
        ));
        tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].pos.x, -5.0);
        tick(&mut state, &TickInput::default(), 2 * FRAME);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_aims_at_walker() {
        let mut state = quiet_state();
        state.pointer = state.walker.pos;
        add_enemy(&mut state, 50.0, 80.0);
        tick(&mut state, &TickInput::default(), FRAME);

        let enemy = &state.enemies[0];
        let to_walker = (state.walker.pos - (enemy.pos - enemy.vel)).normalize();
        assert!((enemy.vel.normalize() - to_walker).length() < 1e-9);
        assert!((enemy.vel.magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kill_scores_once() {
        let mut state = quiet_state();
        state.pointer = state.walker.pos;
        let enemy_id = add_enemy(&mut state, 100.0, 100.0);

        for n in 1..=3 {
            let pos = state.enemies[0].pos;
            let id = state.next_entity_id();
            state
                .projectiles
                .push(crate::sim::Projectile::new(id, pos, DVec2::ZERO, 5.0));
            let snap = tick(&mut state, &TickInput::default(), n * FRAME);
            if n < 3 {
                assert_eq!(state.enemies[0].health, 3 - n as i32);
                assert_eq!(state.score, 0);
            } else {
                assert!(state.enemies.is_empty());
                assert_eq!(state.score, 1);
                assert!(snap.events.contains(&GameEvent::EnemyKilled { enemy_id }));
            }
        }
    }

    #[test]
    fn test_contact_ends_game_and_freezes() {
        let mut state = quiet_state();
        state.walker.pos = DVec2::new(100.0, 100.0);
        state.pointer = state.walker.pos;
        let enemy_id = add_enemy(&mut state, 110.0, 100.0);

        let snap = tick(&mut state, &TickInput::default(), FRAME);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(snap.events.contains(&GameEvent::GameOver { score: 0, enemy_id }));
        assert!(snap.overlay.is_some());

        let walker = state.walker.clone();
        let enemies = state.enemies.clone();
        let ticks = state.time_ticks;
        let busy = TickInput {
            pointer: Some(DVec2::new(700.0, 500.0)),
            shoot: true,
            restart: false,
        };
        for i in 2..50 {
            tick(&mut state, &busy, i * INTERVAL);
        }
        assert_eq!(state.walker, walker);
        assert_eq!(state.enemies, enemies);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = quiet_state();
        state.walker.pos = DVec2::new(100.0, 100.0);
        state.pointer = state.walker.pos;
        state.score = 7;
        add_enemy(&mut state, 110.0, 100.0);
        tick(&mut state, &TickInput::default(), FRAME);
        assert!(state.is_game_over());
        assert_eq!(state.best_score, 7);

        let restart_at = 10 * INTERVAL;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let snap = tick(&mut state, &restart, restart_at);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 7);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.walker.pos, state.bounds().center());
        assert_eq!(state.walker.vel, DVec2::ZERO);
        assert_eq!(snap.events, vec![GameEvent::Restarted]);

        // The spawn timer restarted: nothing until a full interval has passed
        tick(&mut state, &TickInput::default(), restart_at + INTERVAL - 1);
        assert!(state.enemies.is_empty());
        tick(&mut state, &TickInput::default(), restart_at + INTERVAL);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = quiet_state();
        state.score = 2;
        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME);
        assert_eq!(state.score, 2);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig {
            seed: 99_999,
            ..Default::default()
        };
        let mut state1 = GameState::new(config, 0);
        let mut state2 = GameState::new(config, 0);

        let inputs = [
            TickInput {
                pointer: Some(DVec2::new(10.0, 20.0)),
                ..Default::default()
            },
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for round in 0..40 {
            for (i, input) in inputs.iter().enumerate() {
                let now = (round * 3 + i as i64) * INTERVAL / 2;
                let a = tick(&mut state1, input, now);
                let b = tick(&mut state2, input, now);
                assert_eq!(a, b);
            }
        }
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.walker, state2.walker);
    }
}
