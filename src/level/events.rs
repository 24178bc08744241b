use bevy::prelude::*;

/// An entity took damage this frame. Applied to `Health` after the effect
/// pass so every damage source reads a consistent pre-tick snapshot.
#[derive(Message, Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
}

impl DamageEvent {
    pub fn new(target: Entity, amount: f32) -> Self {
        Self { target, amount }
    }
}

/// The current level's objective was met.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCompleted {
    pub index: usize,
}

/// An enemy's health ran out and it was removed.
#[derive(Message, Debug, Clone, Copy)]
pub struct EnemyDefeated {
    pub position: Vec2,
}

/// A spawner added a new enemy.
#[derive(Message, Debug, Clone, Copy)]
pub struct EnemySpawned {
    pub position: Vec2,
}
