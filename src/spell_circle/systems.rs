use bevy::prelude::*;

use crate::progress::resources::GameProgress;
use crate::spell_circle::events::*;
use crate::spell_circle::resources::{CircleOutcome, SpellCircle};

/// Feeds finished casts into the circle.
pub fn ingest_contributions(
    mut contributions: MessageReader<ElementContributed>,
    mut circle: ResMut<SpellCircle>,
) {
    for contribution in contributions.read() {
        circle.add_contribution(contribution.element, contribution.charge);
    }
}

/// Tracks the shared targeting position.
pub fn track_target(mut targets: MessageReader<SetTarget>, mut circle: ResMut<SpellCircle>) {
    for target in targets.read() {
        circle.set_target(target.position);
    }
}

/// Advances the circle once per frame and surfaces its outcome as messages.
pub fn update_spell_circle(
    time: Res<Time>,
    mut circle: ResMut<SpellCircle>,
    progress: Res<GameProgress>,
    mut resolved: MessageWriter<SpellResolved>,
    mut locked: MessageWriter<SpellLocked>,
) {
    match circle.tick(time.delta_secs(), |spell| progress.is_unlocked(spell)) {
        CircleOutcome::Resolved { spell, power, target } => {
            info!("spell resolved: {} at power {:.0}", spell.name(), power);
            resolved.write(SpellResolved { spell, power, target });
        }
        CircleOutcome::Locked { spell } => {
            info!("spell {} is not unlocked yet", spell.name());
            locked.write(SpellLocked { spell });
        }
        CircleOutcome::None | CircleOutcome::Fizzled | CircleOutcome::Expired => {}
    }
}
