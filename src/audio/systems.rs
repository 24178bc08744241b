use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::plugin::{MusicChannel, SfxChannel};
use crate::game::events::MenuMoved;
use crate::level::events::EnemyDefeated;
use crate::progress::events::SpellsUnlocked;
use crate::spell_circle::events::{ElementContributed, SpellLocked, SpellResolved};

pub fn start_background_music(
    music: Res<AudioChannel<MusicChannel>>,
    asset_server: Res<AssetServer>,
) {
    music.stop();
    music
        .play(asset_server.load("sounds/music/circle_theme.ogg"))
        .looped()
        .with_volume(0.3);
}

pub fn play_menu_sounds(
    mut moved: MessageReader<MenuMoved>,
    sfx: Res<AudioChannel<SfxChannel>>,
    asset_server: Res<AssetServer>,
) {
    for _ in moved.read() {
        sfx.play(asset_server.load("sounds/menu.wav")).with_volume(0.5);
    }
}

pub fn play_complete_sound(sfx: Res<AudioChannel<SfxChannel>>, asset_server: Res<AssetServer>) {
    sfx.play(asset_server.load("sounds/complete.wav")).with_volume(0.7);
}

/// One-shot feedback for the casting loop: contribution, resolution,
/// locked attempts, unlocks and defeated enemies.
#[allow(clippy::too_many_arguments)]
pub fn play_gameplay_sounds(
    mut contributions: MessageReader<ElementContributed>,
    mut resolved: MessageReader<SpellResolved>,
    mut locked: MessageReader<SpellLocked>,
    mut unlocked: MessageReader<SpellsUnlocked>,
    mut defeated: MessageReader<EnemyDefeated>,
    sfx: Res<AudioChannel<SfxChannel>>,
    asset_server: Res<AssetServer>,
) {
    for _ in contributions.read() {
        sfx.play(asset_server.load("sounds/cast.wav")).with_volume(0.5);
    }
    for _ in resolved.read() {
        sfx.play(asset_server.load("sounds/spell.wav")).with_volume(0.7);
    }
    for _ in locked.read() {
        sfx.play(asset_server.load("sounds/locked.wav")).with_volume(0.5);
    }
    for _ in unlocked.read() {
        sfx.play(asset_server.load("sounds/unlock.wav")).with_volume(0.7);
    }
    for _ in defeated.read() {
        sfx.play(asset_server.load("sounds/hit.wav")).with_volume(0.4);
    }
}
