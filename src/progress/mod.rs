pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use events::*;
pub use resources::*;
