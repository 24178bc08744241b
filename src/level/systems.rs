use bevy::prelude::*;
use rand::Rng;

use crate::caster::components::Caster;
use crate::game::resources::CurrentLevel;
use crate::level::components::*;
use crate::level::events::*;
use crate::level::resources::*;
use crate::spell::SLOW_FLOOR;
use crate::spell_circle::resources::SpellCircle;

/// Axis-aligned overlap test between two centered rectangles.
pub fn aabb_intersects(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    let half_a = size_a / 2.0;
    let half_b = size_b / 2.0;
    (center_a.x - center_b.x).abs() < half_a.x + half_b.x
        && (center_a.y - center_b.y).abs() < half_a.y + half_b.y
}

/// True when a rectangle of `size` centered at `pos` overlaps any wall or
/// leaves the play area.
pub fn is_position_blocked(pos: Vec2, size: Vec2, walls: &[(Vec2, Vec2)]) -> bool {
    let half = size / 2.0;
    if pos.x - half.x < 0.0
        || pos.x + half.x > PLAY_AREA.x
        || pos.y - half.y < 0.0
        || pos.y + half.y > PLAY_AREA.y
    {
        return true;
    }
    walls
        .iter()
        .any(|(wall_pos, wall_size)| aabb_intersects(pos, size, *wall_pos, *wall_size))
}

/// Searches for an unblocked random position inside the play area.
pub fn find_safe_position(
    rng: &mut impl Rng,
    size: Vec2,
    walls: &[(Vec2, Vec2)],
    attempts: usize,
) -> Option<Vec2> {
    let half = size / 2.0;
    for _ in 0..attempts {
        let candidate = Vec2::new(
            rng.gen_range(half.x..PLAY_AREA.x - half.x),
            rng.gen_range(half.y..PLAY_AREA.y - half.y),
        );
        if !is_position_blocked(candidate, size, walls) {
            return Some(candidate);
        }
    }
    None
}

fn spawn_enemy(commands: &mut Commands, position: Vec2, speed: f32) {
    commands.spawn((
        Sprite::from_color(Color::srgb(0.9, 0.15, 0.15), Vec2::splat(ENEMY_SIZE)),
        Transform::from_translation(position.extend(0.5)),
        Enemy { speed },
        Health::new(ENEMY_HEALTH),
    ));
}

/// Builds the level state for the current roster index and spawns its
/// starting entities.
pub fn setup_level(mut commands: Commands, current: Res<CurrentLevel>) {
    let state = LevelState::for_index(current.0);

    match state.kind {
        LevelKind::Puzzle => {
            commands.spawn((
                Sprite::from_color(Color::srgb(0.1, 0.1, 0.2), GAP_SIZE),
                Transform::from_translation(GAP_POSITION.extend(0.2)),
                Gap,
                Wall { size: GAP_SIZE },
            ));
        }
        LevelKind::Combat => {
            for i in 0..3 {
                spawn_enemy(
                    &mut commands,
                    Vec2::new(600.0, 150.0 + i as f32 * 120.0),
                    COMBAT_ENEMY_SPEED,
                );
            }
        }
        LevelKind::Survival => {
            for i in 0..2 {
                spawn_enemy(
                    &mut commands,
                    Vec2::new(600.0, 200.0 + i as f32 * 200.0),
                    SURVIVAL_ENEMY_SPEED,
                );
            }
        }
    }

    info!("level {} started: {}", state.index + 1, state.name);
    commands.insert_resource(state);
}

/// Removes every level entity when play stops.
#[allow(clippy::type_complexity)]
pub fn cleanup_level(
    mut commands: Commands,
    query: Query<
        Entity,
        Or<(
            With<Enemy>,
            With<Wall>,
            With<Bridge>,
            With<EffectMarker>,
            With<Tornado>,
        )>,
    >,
) {
    for entity in query.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}

/// Advances every mobile enemy one step toward the attraction point.
pub fn enemy_movement(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &Enemy, Option<&Slowed>), Without<Stunned>>,
) {
    for (mut transform, enemy, slowed) in query.iter_mut() {
        let position = transform.translation.truncate();
        let to_target = ATTRACTION_POINT - position;
        // Zero-distance guard: an enemy standing on the point stays put.
        let direction = to_target.normalize_or_zero();

        let speed = match slowed {
            Some(slowed) => (enemy.speed - slowed.reduction).max(SLOW_FLOOR),
            None => enemy.speed,
        };

        let step = direction * speed * time.delta_secs();
        transform.translation += step.extend(0.0);
    }
}

/// Spawns enemies on the level's countdown: capped for combat, relentless
/// for survival.
pub fn spawn_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut level: ResMut<LevelState>,
    enemies: Query<(), With<Enemy>>,
    mut spawned: MessageWriter<EnemySpawned>,
) {
    if level.completed {
        return;
    }

    let (interval, speed, cap) = match level.kind {
        LevelKind::Puzzle => return,
        LevelKind::Combat => (COMBAT_SPAWN_INTERVAL, COMBAT_ENEMY_SPEED, Some(COMBAT_ENEMY_CAP)),
        LevelKind::Survival => (SURVIVAL_SPAWN_INTERVAL, SURVIVAL_ENEMY_SPEED, None),
    };

    level.spawn_timer -= time.delta_secs();
    if level.spawn_timer > 0.0 {
        return;
    }
    level.spawn_timer = interval;

    if let Some(cap) = cap {
        if enemies.iter().count() >= cap {
            return;
        }
    }

    let mut rng = rand::thread_rng();
    let position = Vec2::new(
        rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX),
        rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX),
    );
    spawn_enemy(&mut commands, position, speed);
    spawned.write(EnemySpawned { position });
}

/// Checks the level-type-specific objective and reports completion once.
pub fn check_level_completion(
    mut commands: Commands,
    time: Res<Time>,
    mut level: ResMut<LevelState>,
    circle: Res<SpellCircle>,
    enemies: Query<(), With<Enemy>>,
    gaps: Query<Entity, With<Gap>>,
    mut completed: MessageWriter<LevelCompleted>,
) {
    if level.completed {
        return;
    }

    let done = match level.kind {
        LevelKind::Puzzle => circle.active().is_some_and(|active| {
            level.target_spell == Some(active.spell) && active.power >= PUZZLE_POWER_THRESHOLD
        }),
        LevelKind::Combat => enemies.iter().count() == 0,
        LevelKind::Survival => {
            level.survival_timer -= time.delta_secs();
            level.survival_timer <= 0.0
        }
    };

    if !done {
        return;
    }

    level.completed = true;
    info!("level {} completed: {}", level.index + 1, level.name);

    // The puzzle's gap is bridged on completion.
    for gap in gaps.iter() {
        commands.entity(gap).despawn();
        commands.spawn((
            Sprite::from_color(Color::srgb(0.5, 0.35, 0.2), GAP_SIZE),
            Transform::from_translation(GAP_POSITION.extend(0.2)),
            Bridge,
        ));
    }

    completed.write(LevelCompleted { index: level.index });
}

/// Counts down transient entities and removes the expired.
pub fn tick_temporaries(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Temporary)>,
) {
    for (entity, mut temporary) in query.iter_mut() {
        temporary.timer.tick(time.delta());
        if temporary.timer.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

/// Keeps follower barriers on their owning caster.
#[allow(clippy::type_complexity)]
pub fn barrier_follow(
    mut barriers: Query<(&BarrierFollow, &mut Transform), Without<Caster>>,
    casters: Query<(&Caster, &Transform), Without<BarrierFollow>>,
) {
    for (follow, mut transform) in barriers.iter_mut() {
        for (caster, caster_transform) in casters.iter() {
            if caster.id == follow.owner {
                transform.translation.x = caster_transform.translation.x;
                transform.translation.y = caster_transform.translation.y - 28.0;
            }
        }
    }
}

/// Shoves any enemy whose box overlaps a barrier away from its center.
#[allow(clippy::type_complexity)]
pub fn barrier_repel(
    time: Res<Time>,
    barriers: Query<(&Wall, &Transform), With<Barrier>>,
    mut enemies: Query<&mut Transform, (With<Enemy>, Without<Barrier>)>,
) {
    for (wall, barrier_transform) in barriers.iter() {
        let barrier_pos = barrier_transform.translation.truncate();
        for mut enemy_transform in enemies.iter_mut() {
            let enemy_pos = enemy_transform.translation.truncate();
            if !aabb_intersects(enemy_pos, Vec2::splat(ENEMY_SIZE), barrier_pos, wall.size) {
                continue;
            }
            // Zero-distance guard: an enemy dead-centered on the barrier
            // stays until it drifts off-center.
            let push = (enemy_pos - barrier_pos).normalize_or_zero();
            let step = push * BARRIER_PUSH_SPEED * time.delta_secs();
            enemy_transform.translation += step.extend(0.0);
        }
    }
}

/// Runs every live tornado: pull and damage nearby enemies, drift, expire.
#[allow(clippy::type_complexity)]
pub fn update_tornadoes(
    mut commands: Commands,
    time: Res<Time>,
    mut tornadoes: Query<(Entity, &mut Tornado, &mut Transform), Without<Enemy>>,
    mut enemies: Query<(Entity, &mut Transform), With<Enemy>>,
    mut damage: MessageWriter<DamageEvent>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();

    for (entity, mut tornado, mut transform) in tornadoes.iter_mut() {
        tornado.lifetime.tick(time.delta());
        if tornado.lifetime.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        let center = transform.translation.truncate();
        for (enemy, mut enemy_transform) in enemies.iter_mut() {
            let enemy_pos = enemy_transform.translation.truncate();
            let offset = center - enemy_pos;
            let distance = offset.length();
            if distance >= tornado.radius {
                continue;
            }
            let strength = 1.0 - distance / tornado.radius;
            let pull = offset.normalize_or_zero() * tornado.pull * strength * dt;
            enemy_transform.translation += pull.extend(0.0);
            damage.write(DamageEvent::new(enemy, tornado.dps * dt));
        }

        // Random walk, kept inside the play area.
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let drift = Vec2::new(angle.cos(), angle.sin()) * tornado.drift * dt;
        let next = (center + drift).clamp(Vec2::ZERO, PLAY_AREA);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

/// Counts down slows and stuns; expired stuns restore the snapshot speed.
pub fn tick_status_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut slowed: Query<(Entity, &mut Slowed)>,
    mut stunned: Query<(Entity, &mut Stunned, &mut Enemy)>,
) {
    let dt = time.delta_secs();

    for (entity, mut slow) in slowed.iter_mut() {
        slow.remaining -= dt;
        if slow.remaining <= 0.0 {
            commands.entity(entity).remove::<Slowed>();
        }
    }

    for (entity, mut stun, mut enemy) in stunned.iter_mut() {
        stun.remaining -= dt;
        if stun.remaining <= 0.0 {
            enemy.speed = stun.prev_speed;
            commands.entity(entity).remove::<Stunned>();
        }
    }
}

/// Applies the frame's damage messages to health.
pub fn apply_damage(mut messages: MessageReader<DamageEvent>, mut query: Query<&mut Health>) {
    for message in messages.read() {
        if let Ok(mut health) = query.get_mut(message.target) {
            health.take_damage(message.amount);
        }
    }
}

/// Removes enemies whose health ran out, after the damage pass.
pub fn check_enemy_death(
    mut commands: Commands,
    query: Query<(Entity, &Health, &Transform), With<Enemy>>,
    mut defeated: MessageWriter<EnemyDefeated>,
) {
    for (entity, health, transform) in query.iter() {
        if health.is_dead() {
            defeated.write(EnemyDefeated {
                position: transform.translation.truncate(),
            });
            commands.entity(entity).try_despawn();
        }
    }
}
