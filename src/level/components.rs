use bevy::prelude::*;

use crate::caster::components::CasterId;

/// Health for entities that can be damaged. Health may go negative; the
/// death-check system removes anything at or below zero.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Health as a fraction of max, clamped to [0, 1] for display.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }
}

/// An enemy advancing toward the attraction point.
/// `speed` is the current speed (zeroed while stunned); status effects
/// modify movement through [`Slowed`]/[`Stunned`] rather than this field.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub speed: f32,
}

/// An axis-aligned blocking rectangle. Carried by permanent walls, the
/// puzzle gap and spell barriers; everything with this component blocks
/// placement checks.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wall {
    pub size: Vec2,
}

/// The puzzle level's hazard; bridged (despawned) on completion.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Gap;

/// Decorative bridge left where the gap used to be.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Bridge;

/// A spell-created wall that repels intersecting enemies.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Barrier;

/// A barrier that tracks its owning caster (survival-mode Monsoon).
#[derive(Component, Debug, Clone, Copy)]
pub struct BarrierFollow {
    pub owner: CasterId,
}

/// Countdown for transient entities; the expiry system despawns them.
#[derive(Component, Debug, Clone)]
pub struct Temporary {
    pub timer: Timer,
}

impl Temporary {
    pub fn new(seconds: f32) -> Self {
        Self { timer: Timer::from_seconds(seconds, TimerMode::Once) }
    }
}

/// Transient visual marker left at a spell's target position.
#[derive(Component, Debug, Clone, Copy)]
pub struct EffectMarker {
    pub radius: f32,
}

/// A drifting emitter that pulls and damages nearby enemies every frame.
#[derive(Component, Debug, Clone)]
pub struct Tornado {
    pub radius: f32,
    /// Pull speed in px/s at the center, falling to zero at the radius edge.
    pub pull: f32,
    pub dps: f32,
    pub drift: f32,
    pub lifetime: Timer,
}

impl Tornado {
    pub fn new(radius: f32, pull: f32, dps: f32, drift: f32, lifetime: f32) -> Self {
        Self {
            radius,
            pull,
            dps,
            drift,
            lifetime: Timer::from_seconds(lifetime, TimerMode::Once),
        }
    }
}

/// Speed reduction applied by a slow field; refreshed while the field is
/// active and dropped shortly after it ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct Slowed {
    pub reduction: f32,
    pub remaining: f32,
}

/// A stunned enemy. Speed is zeroed on application and the snapshot
/// restored when the stun runs out.
#[derive(Component, Debug, Clone, Copy)]
pub struct Stunned {
    pub remaining: f32,
    pub prev_speed: f32,
}
