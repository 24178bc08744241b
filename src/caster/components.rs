use bevy::prelude::*;
use std::collections::HashSet;

use crate::element::Element;

/// Stable identifier for a caster, assigned at spawn. All cross-caster
/// references (attunement links, follower barriers) go through this id,
/// never through entity identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CasterId(pub u8);

/// Base charge-time budget in seconds for a caster's primary element.
pub const BASE_CHARGE_TIME: f32 = 1.5;
/// Charge returned by a cast held past its budget.
pub const OVERCHARGE_PENALTY: f32 = 50.0;
/// Caster movement speed in px/s.
pub const CASTER_SPEED: f32 = 200.0;
/// Square collision footprint of a caster, in px.
pub const CASTER_SIZE: f32 = 24.0;

/// A wizard under one player's control.
#[derive(Component, Debug, Clone)]
pub struct Caster {
    pub id: CasterId,
    /// The caster's own element; fixed for the session.
    pub element: Element,
    pub speed: f32,
}

impl Caster {
    pub fn new(id: CasterId, element: Element) -> Self {
        Self { id, element, speed: CASTER_SPEED }
    }
}

/// Current movement velocity in px/s, integrated into the transform every frame.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// The charge/cast state machine for one caster.
///
/// While casting, `charge` rises from 0 toward 100 over the element's
/// charge-time budget and never decreases; holding past the budget sets the
/// sticky `overcharged` flag, and stopping an overcharged cast yields the
/// fixed [`OVERCHARGE_PENALTY`] instead of the computed charge.
#[derive(Component, Debug, Clone, Default)]
pub struct ChargeState {
    pub casting: bool,
    pub elapsed: f32,
    pub charge: f32,
    pub overcharged: bool,
    /// The element currently being charged; may differ from the caster's
    /// primary (Air or a tertiary element).
    pub charging: Option<Element>,
}

impl ChargeState {
    /// Begins a cast of `element`, resetting all charge progress.
    pub fn start(&mut self, element: Element) {
        self.casting = true;
        self.elapsed = 0.0;
        self.charge = 0.0;
        self.overcharged = false;
        self.charging = Some(element);
    }

    /// Ends the cast and returns the charge to contribute, or `None` if no
    /// cast was in progress. Overcharged casts are penalized.
    pub fn stop(&mut self) -> Option<(Element, f32)> {
        if !self.casting {
            return None;
        }
        let element = self.charging.take()?;
        let charge = if self.overcharged { OVERCHARGE_PENALTY } else { self.charge };
        self.casting = false;
        Some((element, charge))
    }

    /// Advances the charge by `dt` seconds. `primary` is the caster's own
    /// element and determines the charge-time budget of the charged element.
    pub fn tick(&mut self, dt: f32, primary: Element) {
        if !self.casting {
            return;
        }
        let Some(charging) = self.charging else {
            return;
        };
        self.elapsed += dt;
        let budget = BASE_CHARGE_TIME * charging.charge_multiplier(primary);
        self.charge = (self.elapsed / budget * 100.0).min(100.0);
        if self.elapsed > budget {
            self.overcharged = true;
        }
    }
}

/// Attunement state: an opt-in link to other casters, tracked by id.
#[derive(Component, Debug, Clone, Default)]
pub struct Attunement {
    pub active: bool,
    pub linked: HashSet<CasterId>,
}

impl Attunement {
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stops attuning and severs all links.
    pub fn stop(&mut self) {
        self.active = false;
        self.linked.clear();
    }

    /// Links with `other`; returns false when not attuning or already linked.
    pub fn attune_with(&mut self, other: CasterId) -> bool {
        if !self.active || self.linked.contains(&other) {
            return false;
        }
        self.linked.insert(other);
        true
    }

    pub fn is_attuned(&self) -> bool {
        self.active
    }
}

/// Clamps a caster-sized square footprint centered at `pos` into
/// `[0, bounds.x] x [0, bounds.y]`.
pub fn clamp_to_bounds(pos: Vec2, bounds: Vec2) -> Vec2 {
    let half = CASTER_SIZE / 2.0;
    Vec2::new(
        pos.x.clamp(half, bounds.x - half),
        pos.y.clamp(half, bounds.y - half),
    )
}
