use bevy::prelude::*;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    MainMenu,
    LevelTransition,
    Playing,
    LevelComplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_default_is_main_menu() {
        assert_eq!(GameState::default(), GameState::MainMenu);
    }

    #[test]
    fn game_state_all_states_are_distinct() {
        let states = [
            GameState::MainMenu,
            GameState::LevelTransition,
            GameState::Playing,
            GameState::LevelComplete,
        ];
        for (i, s1) in states.iter().enumerate() {
            for (j, s2) in states.iter().enumerate() {
                if i != j {
                    assert_ne!(s1, s2, "States at indices {} and {} should be distinct", i, j);
                }
            }
        }
    }
}
