use bevy::prelude::*;

use crate::states::GameState;
use crate::ui::components::UnlockToast;
use crate::ui::systems::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<UnlockToast>()
        .add_systems(Startup, setup_toast)
        // Unlock notifications must survive the switch to the complete screen.
        .add_systems(Update, update_unlock_toast)
        .add_systems(OnEnter(GameState::MainMenu), setup_menu)
        .add_systems(OnExit(GameState::MainMenu), cleanup_menu)
        .add_systems(Update, update_menu.run_if(in_state(GameState::MainMenu)))
        .add_systems(OnEnter(GameState::LevelTransition), setup_transition)
        .add_systems(OnExit(GameState::LevelTransition), cleanup_transition)
        .add_systems(OnEnter(GameState::LevelComplete), setup_complete)
        .add_systems(OnExit(GameState::LevelComplete), cleanup_complete)
        // The HUD shows the level header, so the level state must be fresh.
        .add_systems(
            OnEnter(GameState::Playing),
            setup_hud.after(crate::level::systems::setup_level),
        )
        .add_systems(OnExit(GameState::Playing), cleanup_hud)
        .add_systems(
            Update,
            (
                update_status_text,
                update_active_spell_text,
                update_charge_readouts,
                update_caster_colors,
            )
                .run_if(in_state(GameState::Playing)),
        );
}
