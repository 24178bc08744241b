use bevy::prelude::*;

use crate::caster::components::CasterId;
use crate::element::Element;

/// Movement axis directions a player can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Unit vector for this direction (y up).
    pub fn vector(&self) -> Vec2 {
        match self {
            MoveDirection::Up => Vec2::Y,
            MoveDirection::Down => Vec2::NEG_Y,
            MoveDirection::Left => Vec2::NEG_X,
            MoveDirection::Right => Vec2::X,
        }
    }

    /// True for directions along the horizontal axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, MoveDirection::Left | MoveDirection::Right)
    }
}

/// A player began holding their cast key. `element` of `None` means the
/// caster's primary element.
#[derive(Message, Debug, Clone, Copy)]
pub struct StartCast {
    pub caster: CasterId,
    pub element: Option<Element>,
}

/// A player released their cast key; the accumulated charge is contributed
/// to the spell circle.
#[derive(Message, Debug, Clone, Copy)]
pub struct StopCast {
    pub caster: CasterId,
}

/// A movement key was pressed (`engaged`) or released (`!engaged`).
#[derive(Message, Debug, Clone, Copy)]
pub struct MoveInput {
    pub caster: CasterId,
    pub direction: MoveDirection,
    pub engaged: bool,
}

/// A player began holding their attune key.
#[derive(Message, Debug, Clone, Copy)]
pub struct StartAttunement {
    pub caster: CasterId,
}

/// A player released their attune key; links are severed.
#[derive(Message, Debug, Clone, Copy)]
pub struct StopAttunement {
    pub caster: CasterId,
}
