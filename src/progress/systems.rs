use bevy::prelude::*;

use crate::level::events::LevelCompleted;
use crate::progress::events::SpellsUnlocked;
use crate::progress::resources::GameProgress;

/// Records completed levels and announces any unlocks they trigger.
pub fn record_level_completions(
    mut completions: MessageReader<LevelCompleted>,
    mut progress: ResMut<GameProgress>,
    mut unlocked: MessageWriter<SpellsUnlocked>,
) {
    for completion in completions.read() {
        progress.complete_level(completion.index);
        let spells = progress.drain_new_unlocks();
        if !spells.is_empty() {
            info!(
                "unlocked: {}",
                spells.iter().map(|s| s.name()).collect::<Vec<_>>().join(", ")
            );
            unlocked.write(SpellsUnlocked { spells });
        }
    }
}
