use bevy::prelude::*;

use crate::caster::events::*;
use crate::caster::systems::*;
use crate::game::sets::GameSet;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<StartCast>()
        .add_message::<StopCast>()
        .add_message::<MoveInput>()
        .add_message::<StartAttunement>()
        .add_message::<StopAttunement>()
        .add_systems(
            Update,
            (
                handle_cast_input,
                handle_move_input,
                handle_attunement_input,
                link_attuned_casters,
                tick_charge,
                apply_velocity,
                clamp_casters_to_bounds,
            )
                .chain()
                .in_set(GameSet::Casting)
                .run_if(in_state(GameState::Playing)),
        );
}
