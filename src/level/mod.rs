pub mod components;
pub mod effects;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::*;
pub use events::*;
pub use resources::*;
