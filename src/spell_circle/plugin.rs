use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::spell_circle::events::*;
use crate::spell_circle::resources::SpellCircle;
use crate::spell_circle::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<SpellCircle>()
        .add_message::<ElementContributed>()
        .add_message::<SetTarget>()
        .add_message::<SpellResolved>()
        .add_message::<SpellLocked>()
        .add_systems(
            Update,
            (ingest_contributions, track_target, update_spell_circle)
                .chain()
                .in_set(GameSet::Circle)
                .run_if(in_state(GameState::Playing)),
        );
}
