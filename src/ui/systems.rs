use bevy::prelude::*;

use crate::caster::components::{Attunement, Caster, ChargeState};
use crate::game::resources::{CurrentLevel, MenuSelection};
use crate::level::components::Enemy;
use crate::level::resources::{LevelState, LEVELS};
use crate::progress::events::SpellsUnlocked;
use crate::spell_circle::resources::SpellCircle;
use crate::ui::components::*;

const SELECTED_COLOR: Color = Color::srgb(1.0, 0.9, 0.3);
const UNSELECTED_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);

pub fn setup_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.1)),
            MenuScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Wizards Casting Spells"),
                TextFont { font_size: 60.0, ..default() },
                TextColor(Color::WHITE),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    margin: UiRect::top(Val::Px(50.0)),
                    ..default()
                })
                .with_children(|menu| {
                    menu.spawn((
                        Text::new("Start Game"),
                        TextFont { font_size: 32.0, ..default() },
                        TextColor(SELECTED_COLOR),
                        MenuOptionText(0),
                    ));
                    menu.spawn((
                        Text::new("Exit"),
                        TextFont { font_size: 32.0, ..default() },
                        TextColor(UNSELECTED_COLOR),
                        MenuOptionText(1),
                    ));
                });
        });
}

pub fn cleanup_menu(mut commands: Commands, query: Query<Entity, With<MenuScreen>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Repaints the menu entries to follow the selection.
pub fn update_menu(
    selection: Res<MenuSelection>,
    mut options: Query<(&MenuOptionText, &mut TextColor)>,
) {
    for (option, mut color) in options.iter_mut() {
        color.0 = if option.0 == selection.0 {
            SELECTED_COLOR
        } else {
            UNSELECTED_COLOR
        };
    }
}

pub fn setup_transition(mut commands: Commands, current: Res<CurrentLevel>) {
    let index = current.0 % LEVELS.len();
    let spec = &LEVELS[index];

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.1)),
            TransitionScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Level {} of {}", index + 1, LEVELS.len())),
                TextFont { font_size: 44.0, ..default() },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(spec.name),
                TextFont { font_size: 32.0, ..default() },
                TextColor(SELECTED_COLOR),
            ));
            parent.spawn((
                Text::new(spec.objective),
                TextFont { font_size: 22.0, ..default() },
                TextColor(UNSELECTED_COLOR),
            ));
            parent.spawn((
                Text::new("Press SPACE to begin"),
                TextFont { font_size: 22.0, ..default() },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn cleanup_transition(mut commands: Commands, query: Query<Entity, With<TransitionScreen>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub fn setup_complete(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            CompleteScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Level Complete!"),
                TextFont { font_size: 60.0, ..default() },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("Press SPACE for next level"),
                TextFont { font_size: 24.0, ..default() },
                TextColor(UNSELECTED_COLOR),
            ));
        });
}

pub fn cleanup_complete(mut commands: Commands, query: Query<Entity, With<CompleteScreen>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub fn setup_hud(mut commands: Commands, level: Res<LevelState>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                top: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Level: {}", level.name)),
                TextFont { font_size: 22.0, ..default() },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(format!("Objective: {}", level.objective)),
                TextFont { font_size: 18.0, ..default() },
                TextColor(UNSELECTED_COLOR),
            ));
            parent.spawn((
                Text::new(""),
                TextFont { font_size: 18.0, ..default() },
                TextColor(Color::WHITE),
                StatusText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont { font_size: 18.0, ..default() },
                TextColor(SELECTED_COLOR),
                ActiveSpellText,
            ));
            for seat in 0..3 {
                parent.spawn((
                    Text::new(""),
                    TextFont { font_size: 16.0, ..default() },
                    TextColor(UNSELECTED_COLOR),
                    ChargeReadout(seat),
                ));
            }
        });

}

/// The unlock toast outlives the HUD: notifications fire on the completion
/// frame and must stay readable through the complete/transition screens.
pub fn setup_toast(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(80.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont { font_size: 28.0, ..default() },
                TextColor(SELECTED_COLOR),
                ToastText,
            ));
        });
}

pub fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Survival timer or enemy count, depending on the level type.
pub fn update_status_text(
    level: Res<LevelState>,
    enemies: Query<(), With<Enemy>>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    for mut text in query.iter_mut() {
        let line = match level.kind {
            crate::level::resources::LevelKind::Puzzle => String::new(),
            crate::level::resources::LevelKind::Combat => {
                format!("Enemies: {}", enemies.iter().count())
            }
            crate::level::resources::LevelKind::Survival => {
                format!("Time: {}s", level.survival_timer.ceil().max(0.0) as i32)
            }
        };
        *text = Text::new(line);
    }
}

/// Shows the circle contents while charging, or the active spell.
pub fn update_active_spell_text(
    circle: Res<SpellCircle>,
    mut query: Query<&mut Text, With<ActiveSpellText>>,
) {
    for mut text in query.iter_mut() {
        let line = if let Some(active) = circle.active() {
            format!("{}! (power {:.0})", active.spell.name(), active.power)
        } else if !circle.is_empty() {
            let elements: Vec<&str> = circle.entries().iter().map(|c| c.element.name()).collect();
            format!("Circle: {}", elements.join(" + "))
        } else {
            String::new()
        };
        *text = Text::new(line);
    }
}

/// One line per wizard: charge percentage, overcharge warning, attunement.
pub fn update_charge_readouts(
    casters: Query<(&Caster, &ChargeState, &Attunement)>,
    mut readouts: Query<(&ChargeReadout, &mut Text)>,
) {
    for (readout, mut text) in readouts.iter_mut() {
        for (caster, state, attunement) in casters.iter() {
            if caster.id.0 as usize != readout.0 {
                continue;
            }
            let mut line = format!("P{} {}", readout.0 + 1, caster.element.name());
            if state.casting {
                if state.overcharged {
                    line.push_str(": OVERCHARGED");
                } else {
                    line.push_str(&format!(": {:.0}%", state.charge));
                }
                if let Some(element) = state.charging {
                    if element != caster.element {
                        line.push_str(&format!(" ({})", element.name()));
                    }
                }
            }
            if attunement.is_attuned() {
                line.push_str(" ~attuned");
            }
            *text = Text::new(line);
        }
    }
}

/// Brightens a wizard's sprite while a cast is being held.
pub fn update_caster_colors(mut casters: Query<(&Caster, &ChargeState, &mut Sprite)>) {
    for (caster, state, mut sprite) in casters.iter_mut() {
        let base = caster.element.color().to_srgba();
        sprite.color = if state.casting {
            Color::srgb(
                (base.red + 0.4).min(1.0),
                (base.green + 0.4).min(1.0),
                (base.blue + 0.4).min(1.0),
            )
        } else {
            caster.element.color()
        };
    }
}

/// Collects unlock announcements and shows them for a few seconds.
pub fn update_unlock_toast(
    time: Res<Time>,
    mut unlocks: MessageReader<SpellsUnlocked>,
    mut toast: ResMut<UnlockToast>,
    mut texts: Query<&mut Text, With<ToastText>>,
) {
    for message in unlocks.read() {
        let names: Vec<&str> = message.spells.iter().map(|s| s.name()).collect();
        toast.text = format!("New spells unlocked: {}", names.join(", "));
        toast.remaining = UNLOCK_TOAST_DURATION;
    }

    if toast.remaining > 0.0 {
        toast.remaining -= time.delta_secs();
    }
    let visible = toast.remaining > 0.0;

    for mut text in texts.iter_mut() {
        *text = Text::new(if visible { toast.text.clone() } else { String::new() });
    }
}
