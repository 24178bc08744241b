use bevy::prelude::*;

use crate::element::Element;

/// Session options parsed from the command line in `main`.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionArgs {
    pub start_level: usize,
    pub muted: bool,
}

/// Roster index of the level to play next.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CurrentLevel(pub usize);

/// Highlighted main-menu entry (0 = start, 1 = exit).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MenuSelection(pub usize);

pub const MENU_OPTION_COUNT: usize = 2;

/// Primary elements of the three players, in seat order.
pub const PLAYER_ELEMENTS: [Element; 3] = [Element::Fire, Element::Water, Element::Earth];

/// Which element each player has dialed in for their next cast.
/// Cycling order per player: primary, Air, then the two tertiaries.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ElementSelection {
    indices: [usize; 3],
}

impl ElementSelection {
    /// The cast-element cycle for the player in `seat`.
    pub fn cycle(seat: usize) -> [Element; 4] {
        let primary = PLAYER_ELEMENTS[seat];
        let mut cycle = [primary, Element::Air, primary, primary];
        let mut slot = 2;
        for element in PLAYER_ELEMENTS {
            if element != primary {
                cycle[slot] = element;
                slot += 1;
            }
        }
        cycle
    }

    pub fn selected(&self, seat: usize) -> Element {
        Self::cycle(seat)[self.indices[seat]]
    }

    pub fn advance(&mut self, seat: usize) {
        self.indices[seat] = (self.indices[seat] + 1) % 4;
    }

    pub fn reset(&mut self) {
        self.indices = [0; 3];
    }
}
