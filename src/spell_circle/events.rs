use bevy::prelude::*;

use crate::caster::components::CasterId;
use crate::element::Element;
use crate::spell::SpellType;

/// A caster finished a cast; the charged element enters the spell circle.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ElementContributed {
    pub element: Element,
    pub charge: f32,
    pub caster: Option<CasterId>,
}

/// The shared targeting position changed (mouse click in the session layer).
#[derive(Message, Debug, Clone, Copy)]
pub struct SetTarget {
    pub position: Vec2,
}

/// The circle resolved a combination into an unlocked spell; it is now active.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SpellResolved {
    pub spell: SpellType,
    pub power: f32,
    pub target: Vec2,
}

/// The circle matched a combination whose spell is still locked.
/// Observable for UI/audio feedback; the contributions were discarded.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SpellLocked {
    pub spell: SpellType,
}
