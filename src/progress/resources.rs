use bevy::prelude::*;
use std::collections::HashSet;

use crate::spell::SpellType;

/// Spells every session starts with.
pub const STARTING_SPELLS: &[SpellType] = &[SpellType::Steam, SpellType::Lava, SpellType::Mud];

/// Unlock tiers: completing `threshold` distinct levels unlocks the batch.
pub const UNLOCK_TIERS: &[(usize, &[SpellType])] = &[
    (1, &[SpellType::Firestorm, SpellType::Blizzard, SpellType::Sandstorm]),
    (
        2,
        &[
            SpellType::Inferno,
            SpellType::Tsunami,
            SpellType::Earthquake,
            SpellType::Cyclone,
            SpellType::Meteor,
            SpellType::Hailstorm,
        ],
    ),
    (
        3,
        &[
            SpellType::Storm,
            SpellType::Tempest,
            SpellType::Vortex,
            SpellType::Monsoon,
            SpellType::Cataclysm,
        ],
    ),
];

/// Tracks completed levels and the unlocked spell set across a session.
#[derive(Resource, Debug, Clone)]
pub struct GameProgress {
    completed: HashSet<usize>,
    unlocked: HashSet<SpellType>,
    pending: Vec<SpellType>,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            completed: HashSet::new(),
            unlocked: STARTING_SPELLS.iter().copied().collect(),
            pending: Vec::new(),
        }
    }
}

impl GameProgress {
    /// Records a level completion and returns the spells it unlocked.
    /// Completing the same level twice is a no-op.
    pub fn complete_level(&mut self, index: usize) -> Vec<SpellType> {
        if !self.completed.insert(index) {
            return Vec::new();
        }

        let mut newly = Vec::new();
        for (threshold, batch) in UNLOCK_TIERS {
            if self.completed.len() >= *threshold {
                for spell in *batch {
                    if self.unlocked.insert(*spell) {
                        newly.push(*spell);
                    }
                }
            }
        }
        self.pending.extend(newly.iter().copied());
        newly
    }

    pub fn is_unlocked(&self, spell: SpellType) -> bool {
        self.unlocked.contains(&spell)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_level_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Returns and clears the queue of unlock notifications.
    pub fn drain_new_unlocks(&mut self) -> Vec<SpellType> {
        std::mem::take(&mut self.pending)
    }
}
