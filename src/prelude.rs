pub use bevy::prelude::*;
pub use crate::states::*;

// Re-export the core vocabulary
pub use crate::element::Element;
pub use crate::spell::{SpellEffect, SpellType};

// Re-export components and resources
pub use crate::caster::components::*;
pub use crate::level::components::*;
pub use crate::level::resources::*;
pub use crate::progress::resources::*;
pub use crate::spell_circle::resources::*;
