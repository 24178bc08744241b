use bevy::prelude::*;

use crate::element::Element;
use crate::spell::combos::{self, Contribution};
use crate::spell::SpellType;

/// Seconds the circle waits for further contributions before resolving.
pub const ACTIVATION_WINDOW: f32 = 2.0;
/// Seconds a resolved spell stays active.
pub const EFFECT_DURATION: f32 = 3.0;
/// Charge multiplier when the same element is contributed again (resonance).
pub const RESONANCE_BONUS: f32 = 1.5;
/// Maximum stored charge per element.
pub const MAX_CHARGE: f32 = 100.0;
/// Targeting position used until the players pick one.
pub const DEFAULT_TARGET: Vec2 = Vec2::new(400.0, 300.0);

/// A spell the circle has resolved and is currently sustaining.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSpell {
    pub spell: SpellType,
    pub power: f32,
    pub target: Vec2,
    pub remaining: f32,
}

/// What one update of the circle produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleOutcome {
    /// Nothing to report.
    None,
    /// A combination matched an unlocked spell; it is now active.
    Resolved { spell: SpellType, power: f32, target: Vec2 },
    /// A combination matched a spell that is still locked.
    Locked { spell: SpellType },
    /// The window closed with no matching combination.
    Fizzled,
    /// The active spell's duration ran out.
    Expired,
}

/// The shared aggregation buffer for simultaneous casts.
///
/// Holds at most one entry per element; repeated contributions of the same
/// element stack resonance (count) and boost the stored charge. Every
/// contribution re-opens the activation window. All entries are discarded
/// whenever resolution is attempted, match or not.
#[derive(Resource, Debug, Clone)]
pub struct SpellCircle {
    entries: Vec<Contribution>,
    activation_timer: f32,
    target: Vec2,
    active: Option<ActiveSpell>,
}

impl Default for SpellCircle {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            activation_timer: 0.0,
            target: DEFAULT_TARGET,
            active: None,
        }
    }
}

impl SpellCircle {
    /// Adds one elemental contribution. A repeat of an element already in the
    /// circle overwrites its charge with the resonance-boosted value (capped
    /// at [`MAX_CHARGE`]) and bumps its count.
    pub fn add_contribution(&mut self, element: Element, charge: f32) {
        match self.entries.iter_mut().find(|c| c.element == element) {
            Some(entry) => {
                entry.charge = (charge * RESONANCE_BONUS).min(MAX_CHARGE);
                entry.count += 1;
            }
            None => self.entries.push(Contribution::new(element, charge.min(MAX_CHARGE))),
        }
        self.activation_timer = ACTIVATION_WINDOW;
    }

    pub fn set_target(&mut self, position: Vec2) {
        self.target = position;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn contains(&self, element: Element) -> bool {
        self.entries.iter().any(|c| c.element == element)
    }

    pub fn charge_of(&self, element: Element) -> Option<f32> {
        self.entries.iter().find(|c| c.element == element).map(|c| c.charge)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Contribution] {
        &self.entries
    }

    pub fn active(&self) -> Option<&ActiveSpell> {
        self.active.as_ref()
    }

    /// Seconds left in the activation window; 0 when the circle is empty.
    pub fn window_remaining(&self) -> f32 {
        if self.entries.is_empty() {
            0.0
        } else {
            self.activation_timer
        }
    }

    /// Advances the circle by `dt`. Resolution is attempted once the window
    /// runs out or three distinct elements are present, whichever comes
    /// first; `is_unlocked` decides whether a match may activate.
    pub fn tick(&mut self, dt: f32, is_unlocked: impl Fn(SpellType) -> bool) -> CircleOutcome {
        if let Some(active) = self.active.as_mut() {
            active.remaining -= dt;
            if active.remaining <= 0.0 {
                self.active = None;
                return CircleOutcome::Expired;
            }
        }

        if self.entries.is_empty() {
            return CircleOutcome::None;
        }

        self.activation_timer -= dt;
        if self.activation_timer > 0.0 && self.entries.len() < 3 {
            return CircleOutcome::None;
        }

        let resolution = combos::resolve(&self.entries);
        self.entries.clear();

        match resolution {
            Some(res) if is_unlocked(res.spell) => {
                let target = self.target;
                self.active = Some(ActiveSpell {
                    spell: res.spell,
                    power: res.power,
                    target,
                    remaining: EFFECT_DURATION,
                });
                CircleOutcome::Resolved { spell: res.spell, power: res.power, target }
            }
            Some(res) => CircleOutcome::Locked { spell: res.spell },
            None => CircleOutcome::Fizzled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f32 = 1.0 / 60.0;

    fn tick_for(circle: &mut SpellCircle, seconds: f32) -> Vec<CircleOutcome> {
        let steps = (seconds / TICK).ceil() as usize;
        (0..steps)
            .map(|_| circle.tick(TICK, |_| true))
            .filter(|o| *o != CircleOutcome::None)
            .collect()
    }

    mod contribution_tests {
        use super::*;

        #[test]
        fn contributions_hold_one_entry_per_element() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 60.0);
            circle.add_contribution(Element::Fire, 60.0);
            assert_eq!(circle.entries().len(), 1);
            assert_eq!(circle.entries()[0].count, 2);
        }

        #[test]
        fn resonance_boosts_the_stored_charge() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 50.0);
            assert_eq!(circle.charge_of(Element::Fire), Some(50.0));
            circle.add_contribution(Element::Fire, 60.0);
            assert_eq!(circle.charge_of(Element::Fire), Some(90.0));
        }

        #[test]
        fn resonance_strictly_increases_until_the_cap() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Earth, 55.0);
            let first = circle.charge_of(Element::Earth).unwrap();
            circle.add_contribution(Element::Earth, 80.0);
            let second = circle.charge_of(Element::Earth).unwrap();
            assert!(second > first);
            assert_eq!(second, MAX_CHARGE);
        }

        #[test]
        fn every_contribution_reopens_the_window() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 100.0);
            circle.tick(1.5, |_| true);
            assert!(circle.window_remaining() < ACTIVATION_WINDOW);
            circle.add_contribution(Element::Water, 100.0);
            assert_eq!(circle.window_remaining(), ACTIVATION_WINDOW);
        }
    }

    mod resolution_tests {
        use super::*;

        #[test]
        fn lone_element_fizzles_when_the_window_closes() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 100.0);

            let outcomes = tick_for(&mut circle, ACTIVATION_WINDOW + 0.1);
            assert_eq!(outcomes, vec![CircleOutcome::Fizzled]);
            assert!(circle.is_empty());
            assert!(circle.active().is_none());
        }

        #[test]
        fn a_pair_resolves_when_the_window_closes() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 80.0);
            circle.add_contribution(Element::Water, 60.0);

            let outcomes = tick_for(&mut circle, ACTIVATION_WINDOW + 0.1);
            assert_eq!(outcomes.len(), 1);
            match outcomes[0] {
                CircleOutcome::Resolved { spell, power, .. } => {
                    assert_eq!(spell, SpellType::Steam);
                    assert!((power - 70.0).abs() < 1e-3);
                }
                other => panic!("expected resolution, got {:?}", other),
            }
            assert!(circle.is_empty());
            assert!(circle.active().is_some());
        }

        #[test]
        fn three_distinct_elements_resolve_immediately() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 80.0);
            circle.add_contribution(Element::Water, 80.0);
            circle.add_contribution(Element::Earth, 80.0);

            // One tick, far inside the window.
            let outcome = circle.tick(TICK, |_| true);
            match outcome {
                CircleOutcome::Resolved { spell, power, .. } => {
                    assert_eq!(spell, SpellType::Storm);
                    assert!((power - 144.0).abs() < 1e-3);
                }
                other => panic!("expected immediate resolution, got {:?}", other),
            }
        }

        #[test]
        fn locked_spell_reports_and_clears_without_activating() {
            let mut circle = SpellCircle::default();
            circle.add_contribution(Element::Fire, 80.0);
            circle.add_contribution(Element::Water, 80.0);
            circle.add_contribution(Element::Earth, 80.0);

            let outcome = circle.tick(TICK, |_| false);
            assert_eq!(outcome, CircleOutcome::Locked { spell: SpellType::Storm });
            assert!(circle.is_empty());
            assert!(circle.active().is_none());
        }

        #[test]
        fn resolution_uses_the_latest_target() {
            let mut circle = SpellCircle::default();
            circle.set_target(Vec2::new(123.0, 456.0));
            circle.add_contribution(Element::Fire, 100.0);
            circle.add_contribution(Element::Earth, 100.0);

            let outcomes = tick_for(&mut circle, ACTIVATION_WINDOW + 0.1);
            match outcomes[0] {
                CircleOutcome::Resolved { target, .. } => {
                    assert_eq!(target, Vec2::new(123.0, 456.0));
                }
                other => panic!("expected resolution, got {:?}", other),
            }
        }

        #[test]
        fn target_defaults_to_level_center() {
            let circle = SpellCircle::default();
            assert_eq!(circle.target(), DEFAULT_TARGET);
        }
    }

    mod active_spell_tests {
        use super::*;

        fn resolve_steam(circle: &mut SpellCircle) {
            circle.add_contribution(Element::Fire, 100.0);
            circle.add_contribution(Element::Water, 100.0);
            tick_for(circle, ACTIVATION_WINDOW + 0.1);
            assert!(circle.active().is_some());
        }

        #[test]
        fn active_spell_expires_after_its_duration() {
            let mut circle = SpellCircle::default();
            resolve_steam(&mut circle);

            let outcomes = tick_for(&mut circle, EFFECT_DURATION + 0.1);
            assert_eq!(outcomes, vec![CircleOutcome::Expired]);
            assert!(circle.active().is_none());
        }

        #[test]
        fn new_contributions_can_resolve_while_a_spell_is_active() {
            let mut circle = SpellCircle::default();
            resolve_steam(&mut circle);
            assert_eq!(circle.active().unwrap().spell, SpellType::Steam);

            circle.add_contribution(Element::Fire, 100.0);
            circle.add_contribution(Element::Earth, 100.0);
            tick_for(&mut circle, ACTIVATION_WINDOW + 0.1);

            assert_eq!(circle.active().unwrap().spell, SpellType::Lava);
        }
    }
}
