use bevy::prelude::*;

use crate::caster::components::{Caster, CASTER_SIZE};
use crate::level::components::*;
use crate::level::events::DamageEvent;
use crate::level::resources::*;
use crate::level::systems::{find_safe_position, is_position_blocked};
use crate::spell::{power_scale, SpellEffect, EFFECT_MARKER_LIFETIME};
use crate::spell_circle::events::SpellResolved;
use crate::spell_circle::resources::SpellCircle;

/// Linear falloff from 1 at the center to 0 at the radius edge and beyond.
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        1.0 - distance / radius
    }
}

/// Applies the active spell's continuous field (damage/slow/hybrid) to
/// enemies around the target, scaled by power and distance.
pub fn apply_active_fields(
    mut commands: Commands,
    time: Res<Time>,
    circle: Res<SpellCircle>,
    level: Res<LevelState>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    mut damage: MessageWriter<DamageEvent>,
) {
    if level.completed || level.kind == LevelKind::Puzzle {
        return;
    }
    let Some(active) = circle.active() else {
        return;
    };

    let (radius, dps, slow) = match active.spell.effect() {
        SpellEffect::Damage { radius, dps } => (radius, dps, 0.0),
        SpellEffect::Slow { radius, slow } => (radius, 0.0, slow),
        SpellEffect::Hybrid { radius, dps, slow } => (radius, dps, slow),
        _ => return,
    };

    let scale = power_scale(active.power);
    let dt = time.delta_secs();

    for (entity, transform) in enemies.iter() {
        let distance = transform.translation.truncate().distance(active.target);
        let strength = falloff(distance, radius);
        if strength <= 0.0 {
            continue;
        }
        if dps > 0.0 {
            damage.write(DamageEvent::new(entity, dps * scale * strength * dt));
        }
        if slow > 0.0 {
            commands.entity(entity).try_insert(Slowed {
                reduction: slow * scale * strength,
                remaining: SLOW_LINGER,
            });
        }
    }
}

/// Applies the one-shot consequences of a freshly resolved spell: flat
/// ultimates, teleports, barriers and tornado spawns, plus the visual marker
/// every resolution leaves at its target.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn apply_resolved_spells(
    mut commands: Commands,
    mut resolved: MessageReader<SpellResolved>,
    level: Res<LevelState>,
    mut enemies: Query<(Entity, &Transform, &Health, &mut Enemy, Option<&Stunned>)>,
    mut casters: Query<(&Caster, &mut Transform), (Without<Enemy>, Without<Wall>)>,
    walls: Query<(&Wall, &Transform), Without<Caster>>,
    mut damage: MessageWriter<DamageEvent>,
) {
    for message in resolved.read() {
        // Every resolution leaves a transient marker at the target.
        let marker_radius = message.spell.marker_radius();
        commands.spawn((
            Sprite::from_color(
                Color::srgba(1.0, 1.0, 1.0, 0.25),
                Vec2::splat(marker_radius * 2.0),
            ),
            Transform::from_translation(message.target.extend(0.8)),
            EffectMarker { radius: marker_radius },
            Temporary::new(EFFECT_MARKER_LIFETIME),
        ));

        // Gameplay consequences only apply mid-level outside puzzles.
        if level.completed || level.kind == LevelKind::Puzzle {
            continue;
        }

        let scale = power_scale(message.power);

        match message.spell.effect() {
            SpellEffect::Damage { .. } | SpellEffect::Slow { .. } | SpellEffect::Hybrid { .. } => {
                // Continuous fields are handled per-frame while active.
            }
            SpellEffect::FlatDamage { damage: base, stun } => {
                // One damage tick over the full pre-tick enemy snapshot;
                // removal happens in the death pass afterwards.
                let amount = base * scale;
                for (entity, _, health, mut enemy, stunned) in enemies.iter_mut() {
                    damage.write(DamageEvent::new(entity, amount));
                    if let Some(duration) = stun {
                        let survives = health.current > amount;
                        if survives && stunned.is_none() {
                            commands.entity(entity).try_insert(Stunned {
                                remaining: duration,
                                prev_speed: enemy.speed,
                            });
                            enemy.speed = 0.0;
                        }
                    }
                }
            }
            SpellEffect::Teleport { radius, damage: base } => {
                let wall_rects: Vec<(Vec2, Vec2)> = walls
                    .iter()
                    .map(|(wall, transform)| (transform.translation.truncate(), wall.size))
                    .collect();
                let footprint = Vec2::splat(CASTER_SIZE);
                let mut rng = rand::thread_rng();
                let count = casters.iter().count().max(1);

                for (slot, (_, mut transform)) in casters.iter_mut().enumerate() {
                    let destination = match level.kind {
                        // Combat rings the casters around the target point.
                        LevelKind::Combat => {
                            let base_angle = slot as f32 * std::f32::consts::TAU / count as f32;
                            (0..TELEPORT_MAX_ATTEMPTS)
                                .map(|attempt| {
                                    let angle = base_angle + attempt as f32 * 0.8;
                                    message.target
                                        + Vec2::new(angle.cos(), angle.sin()) * TELEPORT_RING_RADIUS
                                })
                                .find(|candidate| {
                                    !is_position_blocked(*candidate, footprint, &wall_rects)
                                })
                        }
                        // Survival scatters them to validated random spots.
                        _ => find_safe_position(
                            &mut rng,
                            footprint,
                            &wall_rects,
                            TELEPORT_MAX_ATTEMPTS,
                        ),
                    };

                    // No safe square found: this caster stays put.
                    if let Some(destination) = destination {
                        transform.translation.x = destination.x;
                        transform.translation.y = destination.y;
                    }
                }

                for (entity, transform, _, _, _) in enemies.iter() {
                    let distance = transform.translation.truncate().distance(message.target);
                    let strength = falloff(distance, radius);
                    if strength > 0.0 {
                        damage.write(DamageEvent::new(entity, base * scale * strength));
                    }
                }
            }
            SpellEffect::Barrier { size, lifetime } => {
                let scaled_size = size * scale;
                let scaled_lifetime = lifetime * scale;
                let sprite = Sprite::from_color(Color::srgb(0.35, 0.3, 0.5), scaled_size);

                if level.kind == LevelKind::Combat {
                    commands.spawn((
                        sprite,
                        Transform::from_translation(message.target.extend(0.3)),
                        Barrier,
                        Wall { size: scaled_size },
                        Temporary::new(scaled_lifetime),
                    ));
                } else {
                    // Survival: one barrier shadowing each wizard.
                    for (caster, transform) in casters.iter() {
                        commands.spawn((
                            sprite.clone(),
                            Transform::from_translation(Vec3::new(
                                transform.translation.x,
                                transform.translation.y - 28.0,
                                0.3,
                            )),
                            Barrier,
                            BarrierFollow { owner: caster.id },
                            Wall { size: scaled_size },
                            Temporary::new(scaled_lifetime),
                        ));
                    }
                }
            }
            SpellEffect::Tornado { radius, pull, dps, lifetime, drift } => {
                commands.spawn((
                    Sprite::from_color(Color::srgba(0.7, 0.7, 0.75, 0.6), Vec2::splat(48.0)),
                    Transform::from_translation(message.target.extend(0.6)),
                    Tornado::new(radius, pull * scale, dps * scale, drift, lifetime),
                ));
            }
        }
    }
}
