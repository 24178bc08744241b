use bevy::prelude::*;

use crate::caster::components::*;
use crate::caster::events::*;
use crate::game::events::MenuMoved;
use crate::game::resources::*;
use crate::level::resources::{LevelState, LEVELS};
use crate::level::events::LevelCompleted;
use crate::spell_circle::events::SetTarget;
use crate::spell_circle::resources::SpellCircle;
use crate::states::GameState;

/// Per-seat key bindings. The core only ever sees the abstract messages
/// these map to.
struct PlayerKeys {
    up: KeyCode,
    down: KeyCode,
    left: KeyCode,
    right: KeyCode,
    cycle: KeyCode,
    cast: KeyCode,
    attune: KeyCode,
}

const PLAYER_KEYS: [PlayerKeys; 3] = [
    // P1, the Fire wizard
    PlayerKeys {
        up: KeyCode::KeyW,
        down: KeyCode::KeyS,
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        cycle: KeyCode::KeyQ,
        cast: KeyCode::KeyE,
        attune: KeyCode::KeyR,
    },
    // P2, the Water wizard
    PlayerKeys {
        up: KeyCode::KeyT,
        down: KeyCode::KeyG,
        left: KeyCode::KeyF,
        right: KeyCode::KeyH,
        cycle: KeyCode::KeyY,
        cast: KeyCode::KeyU,
        attune: KeyCode::KeyI,
    },
    // P3, the Earth wizard
    PlayerKeys {
        up: KeyCode::ArrowUp,
        down: KeyCode::ArrowDown,
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        cycle: KeyCode::Comma,
        cast: KeyCode::Period,
        attune: KeyCode::Slash,
    },
];

/// Spawns the shared 2D camera over the play area.
pub fn setup_camera(mut commands: Commands, camera_query: Query<Entity, With<Camera>>) {
    if camera_query.is_empty() {
        commands.spawn((Camera2d, Transform::from_xyz(400.0, 300.0, 0.0)));
    }
}

/// Main-menu navigation: arrows select, Enter confirms.
#[allow(clippy::too_many_arguments)]
pub fn menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    args: Res<SessionArgs>,
    mut selection: ResMut<MenuSelection>,
    mut current: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
    mut moved: MessageWriter<MenuMoved>,
) {
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        selection.0 = (selection.0 + MENU_OPTION_COUNT - 1) % MENU_OPTION_COUNT;
        moved.write(MenuMoved);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        selection.0 = (selection.0 + 1) % MENU_OPTION_COUNT;
        moved.write(MenuMoved);
    }
    if keyboard.just_pressed(KeyCode::Enter) {
        match selection.0 {
            0 => {
                // Starting over begins at the session's chosen level.
                current.0 = args.start_level;
                next_state.set(GameState::LevelTransition);
                moved.write(MenuMoved);
            }
            _ => {
                app_exit.write(AppExit::Success);
            }
        }
    }
}

/// Space advances the level-transition screen into play.
pub fn transition_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut moved: MessageWriter<MenuMoved>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        next_state.set(GameState::Playing);
        moved.write(MenuMoved);
    }
}

/// Space on the complete screen queues the next level (wrapping) and returns
/// to the transition screen.
pub fn complete_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<LevelState>,
    mut current: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
    mut moved: MessageWriter<MenuMoved>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        current.0 = (level.index + 1) % LEVELS.len();
        next_state.set(GameState::LevelTransition);
        moved.write(MenuMoved);
    }
}

/// Escape abandons play and returns to the menu.
pub fn escape_to_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<MenuSelection>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        selection.0 = 0;
        next_state.set(GameState::MainMenu);
    }
}

/// Maps each player's keys to the abstract caster messages.
#[allow(clippy::too_many_arguments)]
pub fn caster_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<ElementSelection>,
    mut starts: MessageWriter<StartCast>,
    mut stops: MessageWriter<StopCast>,
    mut moves: MessageWriter<MoveInput>,
    mut attune_starts: MessageWriter<StartAttunement>,
    mut attune_stops: MessageWriter<StopAttunement>,
) {
    for (seat, keys) in PLAYER_KEYS.iter().enumerate() {
        let caster = CasterId(seat as u8);

        let directions = [
            (keys.up, MoveDirection::Up),
            (keys.down, MoveDirection::Down),
            (keys.left, MoveDirection::Left),
            (keys.right, MoveDirection::Right),
        ];
        for (key, direction) in directions {
            if keyboard.just_pressed(key) {
                moves.write(MoveInput { caster, direction, engaged: true });
            }
            if keyboard.just_released(key) {
                moves.write(MoveInput { caster, direction, engaged: false });
            }
        }

        if keyboard.just_pressed(keys.cycle) {
            selection.advance(seat);
            info!(
                "P{} dialed in {}",
                seat + 1,
                selection.selected(seat).name()
            );
        }

        if keyboard.just_pressed(keys.cast) {
            let selected = selection.selected(seat);
            let element = (selected != PLAYER_ELEMENTS[seat]).then_some(selected);
            starts.write(StartCast { caster, element });
        }
        if keyboard.just_released(keys.cast) {
            stops.write(StopCast { caster });
        }

        if keyboard.just_pressed(keys.attune) {
            attune_starts.write(StartAttunement { caster });
        }
        if keyboard.just_released(keys.attune) {
            attune_stops.write(StopAttunement { caster });
        }
    }
}

/// A left click retargets the spell circle at the cursor.
pub fn mouse_target(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut targets: MessageWriter<SetTarget>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };
    targets.write(SetTarget { position: ray.origin.truncate() });
}

/// Spawns the three wizards and resets the per-level casting state.
pub fn spawn_casters(mut commands: Commands, mut selection: ResMut<ElementSelection>) {
    selection.reset();
    commands.insert_resource(SpellCircle::default());

    for (seat, element) in PLAYER_ELEMENTS.iter().enumerate() {
        commands.spawn((
            Sprite::from_color(element.color(), Vec2::splat(CASTER_SIZE)),
            Transform::from_translation(Vec3::new(150.0 + seat as f32 * 100.0, 450.0, 1.0)),
            Caster::new(CasterId(seat as u8), *element),
            ChargeState::default(),
            Velocity::default(),
            Attunement::default(),
        ));
    }
}

pub fn cleanup_casters(mut commands: Commands, query: Query<Entity, With<Caster>>) {
    for entity in query.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}

/// Moves the session to the complete screen once the level reports done.
pub fn watch_level_completed(
    mut completions: MessageReader<LevelCompleted>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if completions.read().next().is_some() {
        next_state.set(GameState::LevelComplete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::systems::handle_cast_input;
    use crate::element::Element;
    use crate::spell_circle::events::ElementContributed;

    fn input_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ElementSelection>();
        app.init_resource::<Time>();
        app.add_message::<StartCast>();
        app.add_message::<StopCast>();
        app.add_message::<MoveInput>();
        app.add_message::<StartAttunement>();
        app.add_message::<StopAttunement>();
        app.add_message::<ElementContributed>();
        app.add_systems(Update, (caster_input, handle_cast_input).chain());
        app
    }

    fn spawn_seat_zero(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Caster::new(CasterId(0), Element::Fire),
                ChargeState::default(),
                Velocity::default(),
                Attunement::default(),
                Transform::default(),
            ))
            .id()
    }

    #[test]
    fn pressing_the_cast_key_starts_the_primary_cast() {
        let mut app = input_app();
        let entity = spawn_seat_zero(&mut app);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyE);
        app.update();

        let state = app.world().get::<ChargeState>(entity).unwrap();
        assert!(state.casting);
        assert_eq!(state.charging, Some(Element::Fire));
    }

    #[test]
    fn cycling_then_casting_charges_air() {
        let mut app = input_app();
        let entity = spawn_seat_zero(&mut app);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyQ);
        app.update();
        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.clear_just_pressed(KeyCode::KeyQ);
            keyboard.press(KeyCode::KeyE);
        }
        app.update();

        let state = app.world().get::<ChargeState>(entity).unwrap();
        assert_eq!(state.charging, Some(Element::Air));
    }

    #[test]
    fn movement_keys_emit_engagement_messages() {
        let mut app = input_app();
        let entity = spawn_seat_zero(&mut app);
        app.add_systems(Update, crate::caster::systems::handle_move_input);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.update();
        app.update();

        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert_eq!(velocity.0.x, CASTER_SPEED);
    }
}
