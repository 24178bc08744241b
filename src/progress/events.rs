use bevy::prelude::*;

use crate::spell::SpellType;

/// New spells became available after a level completion.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct SpellsUnlocked {
    pub spells: Vec<SpellType>,
}
