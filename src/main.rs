use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use clap::Parser;
use wizard_circle::game::resources::{CurrentLevel, SessionArgs};
use wizard_circle::states::GameState;
use wizard_circle::{
    audio_plugin, caster_plugin, game_plugin, level_plugin, progress_plugin, spell_circle_plugin,
    ui_plugin,
};

/// Local three-player co-op spellcasting.
#[derive(Parser, Debug)]
#[command(name = "wizard-circle")]
struct Args {
    /// Roster index of the level to start from
    #[arg(long, default_value_t = 0)]
    level: usize,
    /// Disable music and sound effects
    #[arg(long)]
    mute: bool,
}

fn main() {
    let args = Args::parse();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wizards Casting Spells".into(),
                resolution: (800, 600).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(AudioPlugin)
        .init_state::<GameState>()
        .insert_resource(SessionArgs {
            start_level: args.level,
            muted: args.mute,
        })
        .insert_resource(CurrentLevel(args.level))
        .add_plugins((
            game_plugin,
            caster_plugin,
            spell_circle_plugin,
            level_plugin,
            progress_plugin,
            ui_plugin,
            audio_plugin,
        ))
        .run();
}
