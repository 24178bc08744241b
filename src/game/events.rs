use bevy::prelude::*;

/// The menu cursor moved or a screen advanced; the audio layer plays a blip.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct MenuMoved;
