use bevy::prelude::*;

use crate::spell::SpellType;

/// The fixed play area in px; everything simulates inside it.
pub const PLAY_AREA: Vec2 = Vec2::new(800.0, 600.0);
/// The point enemies advance toward (the wizards' side of the field).
pub const ATTRACTION_POINT: Vec2 = Vec2::new(200.0, 300.0);

/// Square enemy footprint in px.
pub const ENEMY_SIZE: f32 = 16.0;
pub const ENEMY_HEALTH: f32 = 100.0;
pub const COMBAT_ENEMY_SPEED: f32 = 60.0;
pub const SURVIVAL_ENEMY_SPEED: f32 = 120.0;

pub const COMBAT_SPAWN_INTERVAL: f32 = 5.0;
pub const COMBAT_ENEMY_CAP: usize = 5;
pub const SURVIVAL_SPAWN_INTERVAL: f32 = 2.0;
pub const SURVIVAL_DURATION: f32 = 30.0;

/// Box new enemies spawn in, on the far side of the field.
pub const SPAWN_X_MIN: f32 = 500.0;
pub const SPAWN_X_MAX: f32 = 700.0;
pub const SPAWN_Y_MIN: f32 = 100.0;
pub const SPAWN_Y_MAX: f32 = 500.0;

/// Minimum power for the puzzle's target spell to count.
pub const PUZZLE_POWER_THRESHOLD: f32 = 60.0;
pub const GAP_POSITION: Vec2 = Vec2::new(400.0, 300.0);
pub const GAP_SIZE: Vec2 = Vec2::new(150.0, 50.0);

/// Speed at which barriers shove intersecting enemies away, in px/s.
pub const BARRIER_PUSH_SPEED: f32 = 160.0;
/// Distance from the target at which teleported casters are ringed.
pub const TELEPORT_RING_RADIUS: f32 = 90.0;
/// Placement attempts before a caster's teleport is skipped.
pub const TELEPORT_MAX_ATTEMPTS: usize = 8;
/// How long a slow sticks around after its field stops refreshing it.
pub const SLOW_LINGER: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    Puzzle,
    Combat,
    Survival,
}

/// Static definition of one level.
#[derive(Clone, Copy, Debug)]
pub struct LevelSpec {
    pub name: &'static str,
    pub kind: LevelKind,
    pub objective: &'static str,
    pub target_spell: Option<SpellType>,
}

/// The session's level roster.
pub const LEVELS: &[LevelSpec] = &[
    LevelSpec {
        name: "Bridge the Gap",
        kind: LevelKind::Puzzle,
        objective: "Cast MUD to create a bridge across the gap",
        target_spell: Some(SpellType::Mud),
    },
    LevelSpec {
        name: "Flame On",
        kind: LevelKind::Combat,
        objective: "Cast LAVA to defeat all enemies",
        target_spell: None,
    },
    LevelSpec {
        name: "Foggy Escape",
        kind: LevelKind::Survival,
        objective: "Survive for 30 seconds! Use STEAM to slow down enemies",
        target_spell: None,
    },
];

/// Mutable state of the level being played.
#[derive(Resource, Debug, Clone)]
pub struct LevelState {
    pub index: usize,
    pub name: &'static str,
    pub kind: LevelKind,
    pub objective: &'static str,
    pub target_spell: Option<SpellType>,
    pub completed: bool,
    /// Remaining seconds in a survival level; unused otherwise.
    pub survival_timer: f32,
    /// Seconds until the next enemy spawn in combat/survival levels.
    pub spawn_timer: f32,
}

impl LevelState {
    /// Builds the state for the level at `index`, wrapping around the roster.
    pub fn for_index(index: usize) -> Self {
        let index = index % LEVELS.len();
        let spec = &LEVELS[index];
        let (survival_timer, spawn_timer) = match spec.kind {
            LevelKind::Puzzle => (0.0, 0.0),
            LevelKind::Combat => (0.0, COMBAT_SPAWN_INTERVAL),
            LevelKind::Survival => (SURVIVAL_DURATION, SURVIVAL_SPAWN_INTERVAL),
        };
        Self {
            index,
            name: spec.name,
            kind: spec.kind,
            objective: spec.objective,
            target_spell: spec.target_spell,
            completed: false,
            survival_timer,
            spawn_timer,
        }
    }
}

impl Default for LevelState {
    fn default() -> Self {
        Self::for_index(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_three_levels() {
        assert_eq!(LEVELS.len(), 3);
        assert_eq!(LEVELS[0].kind, LevelKind::Puzzle);
        assert_eq!(LEVELS[1].kind, LevelKind::Combat);
        assert_eq!(LEVELS[2].kind, LevelKind::Survival);
    }

    #[test]
    fn puzzle_level_targets_mud() {
        assert_eq!(LEVELS[0].target_spell, Some(SpellType::Mud));
    }

    #[test]
    fn for_index_wraps_around_the_roster() {
        let state = LevelState::for_index(LEVELS.len());
        assert_eq!(state.index, 0);
        assert_eq!(state.name, "Bridge the Gap");
    }

    #[test]
    fn survival_state_starts_with_its_countdown() {
        let state = LevelState::for_index(2);
        assert_eq!(state.survival_timer, SURVIVAL_DURATION);
        assert_eq!(state.spawn_timer, SURVIVAL_SPAWN_INTERVAL);
        assert!(!state.completed);
    }

    #[test]
    fn combat_state_starts_with_its_spawn_timer() {
        let state = LevelState::for_index(1);
        assert_eq!(state.spawn_timer, COMBAT_SPAWN_INTERVAL);
    }
}
