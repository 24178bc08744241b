pub mod audio;
pub mod caster;
pub mod element;
pub mod game;
pub mod level;
pub mod prelude;
pub mod progress;
pub mod spell;
pub mod spell_circle;
pub mod states;
pub mod ui;

pub use audio::plugin::plugin as audio_plugin;
pub use caster::plugin::plugin as caster_plugin;
pub use game::plugin::plugin as game_plugin;
pub use level::plugin::plugin as level_plugin;
pub use progress::plugin::plugin as progress_plugin;
pub use spell_circle::plugin::plugin as spell_circle_plugin;
pub use ui::plugin::plugin as ui_plugin;
