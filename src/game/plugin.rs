use bevy::prelude::*;

use crate::game::events::MenuMoved;
use crate::game::resources::*;
use crate::game::sets::GameSet;
use crate::game::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<CurrentLevel>()
        .init_resource::<MenuSelection>()
        .init_resource::<ElementSelection>()
        .init_resource::<SessionArgs>()
        .add_message::<MenuMoved>()
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Casting,
                GameSet::Circle,
                GameSet::Effects,
                GameSet::Simulation,
                GameSet::Cleanup,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera)
        .add_systems(Update, menu_input.run_if(in_state(GameState::MainMenu)))
        .add_systems(
            Update,
            transition_input.run_if(in_state(GameState::LevelTransition)),
        )
        .add_systems(
            Update,
            complete_input.run_if(in_state(GameState::LevelComplete)),
        )
        .add_systems(
            Update,
            (caster_input, mouse_target, escape_to_menu)
                .in_set(GameSet::Input)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            watch_level_completed
                .after(GameSet::Cleanup)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnEnter(GameState::Playing), spawn_casters)
        .add_systems(OnExit(GameState::Playing), cleanup_casters);
}
