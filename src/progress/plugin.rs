use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::level::systems::check_level_completion;
use crate::progress::events::SpellsUnlocked;
use crate::progress::resources::GameProgress;
use crate::progress::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<GameProgress>()
        .add_message::<SpellsUnlocked>()
        .add_systems(
            Update,
            record_level_completions
                .in_set(GameSet::Cleanup)
                // Completion is announced and recorded in the same frame,
                // before the state switch swallows the message.
                .after(check_level_completion)
                .run_if(in_state(GameState::Playing)),
        );
}
