use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::level::effects::*;
use crate::level::events::*;
use crate::level::resources::LevelState;
use crate::level::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelState>()
        .add_message::<DamageEvent>()
        .add_message::<LevelCompleted>()
        .add_message::<EnemyDefeated>()
        .add_message::<EnemySpawned>()
        .add_systems(OnEnter(GameState::Playing), setup_level)
        .add_systems(OnExit(GameState::Playing), cleanup_level)
        .add_systems(
            Update,
            (apply_active_fields, apply_resolved_spells)
                .chain()
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            (
                enemy_movement,
                spawn_enemies,
                barrier_follow,
                barrier_repel,
                update_tornadoes,
                tick_status_effects,
                tick_temporaries,
            )
                .chain()
                .in_set(GameSet::Simulation)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            (apply_damage, check_enemy_death, check_level_completion)
                .chain()
                .in_set(GameSet::Cleanup)
                .run_if(in_state(GameState::Playing)),
        );
}
