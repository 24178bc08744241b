use bevy::prelude::*;

/// System sets giving the per-frame pipeline its deterministic order:
/// input actions, caster updates, circle resolution, spell effects,
/// entity simulation, then damage application and completion checks.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard/mouse mapping to abstract action messages.
    Input,
    /// Caster charge, movement and attunement updates.
    Casting,
    /// Spell circle ingestion and resolution.
    Circle,
    /// Applying resolved and active spell effects.
    Effects,
    /// Enemy AI, spawning, barriers, tornadoes, timers.
    Simulation,
    /// Damage application, removals, completion, progress.
    Cleanup,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;

    #[test]
    fn test_game_set_can_be_used_in_app() {
        let mut app = App::new();
        app.configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Casting,
                GameSet::Circle,
                GameSet::Effects,
                GameSet::Simulation,
                GameSet::Cleanup,
            )
                .chain(),
        );
        app.update();
    }

    #[test]
    fn test_game_set_variants_are_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GameSet::Input);
        set.insert(GameSet::Casting);
        set.insert(GameSet::Circle);
        set.insert(GameSet::Effects);
        set.insert(GameSet::Simulation);
        set.insert(GameSet::Cleanup);
        assert_eq!(set.len(), 6);
    }
}
