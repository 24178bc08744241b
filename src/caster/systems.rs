use bevy::prelude::*;

use crate::caster::components::*;
use crate::caster::events::*;
use crate::level::resources::PLAY_AREA;
use crate::spell_circle::events::ElementContributed;

/// Applies start/stop cast messages to the matching caster's charge state.
/// Releasing a cast contributes the charged element to the spell circle.
pub fn handle_cast_input(
    mut starts: MessageReader<StartCast>,
    mut stops: MessageReader<StopCast>,
    mut query: Query<(&Caster, &mut ChargeState)>,
    mut contributions: MessageWriter<ElementContributed>,
) {
    for start in starts.read() {
        for (caster, mut state) in query.iter_mut() {
            if caster.id == start.caster {
                state.start(start.element.unwrap_or(caster.element));
            }
        }
    }

    for stop in stops.read() {
        for (caster, mut state) in query.iter_mut() {
            if caster.id == stop.caster {
                if let Some((element, charge)) = state.stop() {
                    contributions.write(ElementContributed {
                        element,
                        charge,
                        caster: Some(caster.id),
                    });
                }
            }
        }
    }
}

/// Applies movement messages, setting one velocity axis at a time so two held
/// keys give diagonal movement.
pub fn handle_move_input(
    mut moves: MessageReader<MoveInput>,
    mut query: Query<(&Caster, &mut Velocity)>,
) {
    for input in moves.read() {
        for (caster, mut velocity) in query.iter_mut() {
            if caster.id != input.caster {
                continue;
            }
            let axis = input.direction.vector();
            if input.engaged {
                if input.direction.is_horizontal() {
                    velocity.0.x = axis.x * caster.speed;
                } else {
                    velocity.0.y = axis.y * caster.speed;
                }
            } else if input.direction.is_horizontal() {
                // Only cancel the axis if it still points the released way,
                // so releasing Left never cancels a held Right.
                if velocity.0.x * axis.x > 0.0 {
                    velocity.0.x = 0.0;
                }
            } else if velocity.0.y * axis.y > 0.0 {
                velocity.0.y = 0.0;
            }
        }
    }
}

/// Applies attunement start/stop messages.
pub fn handle_attunement_input(
    mut starts: MessageReader<StartAttunement>,
    mut stops: MessageReader<StopAttunement>,
    mut query: Query<(&Caster, &mut Attunement)>,
) {
    for start in starts.read() {
        for (caster, mut attunement) in query.iter_mut() {
            if caster.id == start.caster {
                attunement.start();
            }
        }
    }

    for stop in stops.read() {
        for (caster, mut attunement) in query.iter_mut() {
            if caster.id == stop.caster {
                attunement.stop();
            }
        }
    }
}

/// Links every pair of currently-attuning casters by id. `attune_with`
/// rejects duplicates, so running this every frame is idempotent.
pub fn link_attuned_casters(mut query: Query<(&Caster, &mut Attunement)>) {
    let active: Vec<CasterId> = query
        .iter()
        .filter(|(_, attunement)| attunement.is_attuned())
        .map(|(caster, _)| caster.id)
        .collect();
    if active.len() < 2 {
        return;
    }

    for (caster, mut attunement) in query.iter_mut() {
        if !attunement.is_attuned() {
            continue;
        }
        for other in &active {
            if *other != caster.id {
                attunement.attune_with(*other);
            }
        }
    }
}

/// Advances every casting wizard's charge.
pub fn tick_charge(time: Res<Time>, mut query: Query<(&Caster, &mut ChargeState)>) {
    for (caster, mut state) in query.iter_mut() {
        state.tick(time.delta_secs(), caster.element);
    }
}

/// Integrates velocity into position. Runs regardless of casting state.
pub fn apply_velocity(time: Res<Time>, mut query: Query<(&mut Transform, &Velocity), With<Caster>>) {
    for (mut transform, velocity) in query.iter_mut() {
        transform.translation += (velocity.0 * time.delta_secs()).extend(0.0);
    }
}

/// Keeps every caster's footprint inside the play area.
pub fn clamp_casters_to_bounds(mut query: Query<&mut Transform, With<Caster>>) {
    for mut transform in query.iter_mut() {
        let clamped = clamp_to_bounds(transform.translation.truncate(), PLAY_AREA);
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }
}
