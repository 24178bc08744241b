use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::systems::*;
use crate::game::resources::SessionArgs;
use crate::states::GameState;

/// Looped background music.
#[derive(Resource)]
pub struct MusicChannel;

/// One-shot gameplay and menu effects.
#[derive(Resource)]
pub struct SfxChannel;

fn sound_on(args: Res<SessionArgs>) -> bool {
    !args.muted
}

pub fn plugin(app: &mut App) {
    app.add_audio_channel::<MusicChannel>()
        .add_audio_channel::<SfxChannel>()
        .add_systems(
            OnEnter(GameState::MainMenu),
            start_background_music.run_if(sound_on),
        )
        .add_systems(
            OnEnter(GameState::LevelComplete),
            play_complete_sound.run_if(sound_on),
        )
        .add_systems(Update, play_menu_sounds.run_if(sound_on))
        .add_systems(
            Update,
            play_gameplay_sounds
                .run_if(in_state(GameState::Playing))
                .run_if(sound_on),
        );
}
