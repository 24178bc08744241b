//! Combination rules: which multiset of elemental contributions resolves to
//! which spell, and at what power.
//!
//! Rules are ordered most-specific first. A doubled element always outranks
//! plain element-set matches, and the two exact higher-order patterns
//! (Fire x2 + Earth, Water x2 + Air) outrank the generic doubled-element rule.

use crate::element::Element;
use crate::spell::SpellType;

/// One element's presence in the spell circle: its stored charge and how many
/// times it has been contributed this window (resonance stacking).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contribution {
    pub element: Element,
    pub charge: f32,
    pub count: u32,
}

impl Contribution {
    pub fn new(element: Element, charge: f32) -> Self {
        Self { element, charge, count: 1 }
    }
}

/// A successful resolution: the spell and its final power
/// (mean contribution charge times the matched rule's multiplier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub spell: SpellType,
    pub power: f32,
}

/// Power multiplier for the exact higher-order pair patterns.
pub const HIGHER_PAIR_MULTIPLIER: f32 = 1.25;
/// Power multiplier for a doubled-element solo combo.
pub const SOLO_MULTIPLIER: f32 = 1.5;
/// Power multiplier for a plain two-element set.
pub const PAIR_MULTIPLIER: f32 = 1.0;
/// Power multiplier for a three-element set.
pub const TRIPLE_MULTIPLIER: f32 = 1.8;
/// Power multiplier for all four elements together.
pub const QUAD_MULTIPLIER: f32 = 2.0;

/// Exact higher-order patterns: (element, count) pairs that must match the
/// circle exactly. Checked before everything else.
const HIGHER_PAIR_RULES: &[(&[(Element, u32)], SpellType)] = &[
    (&[(Element::Fire, 2), (Element::Earth, 1)], SpellType::Meteor),
    (&[(Element::Water, 2), (Element::Air, 1)], SpellType::Hailstorm),
];

/// Plain two-element sets, sorted by element declaration order.
const PAIR_RULES: &[([Element; 2], SpellType)] = &[
    ([Element::Fire, Element::Water], SpellType::Steam),
    ([Element::Fire, Element::Earth], SpellType::Lava),
    ([Element::Water, Element::Earth], SpellType::Mud),
    ([Element::Fire, Element::Air], SpellType::Firestorm),
    ([Element::Water, Element::Air], SpellType::Blizzard),
    ([Element::Earth, Element::Air], SpellType::Sandstorm),
];

/// Three-element sets, sorted by element declaration order.
const TRIPLE_RULES: &[([Element; 3], SpellType)] = &[
    ([Element::Fire, Element::Water, Element::Earth], SpellType::Storm),
    ([Element::Fire, Element::Water, Element::Air], SpellType::Tempest),
    ([Element::Fire, Element::Earth, Element::Air], SpellType::Vortex),
    ([Element::Water, Element::Earth, Element::Air], SpellType::Monsoon),
];

fn solo_spell(element: Element) -> SpellType {
    match element {
        Element::Fire => SpellType::Inferno,
        Element::Water => SpellType::Tsunami,
        Element::Earth => SpellType::Earthquake,
        Element::Air => SpellType::Cyclone,
    }
}

fn count_of(entries: &[Contribution], element: Element) -> u32 {
    entries
        .iter()
        .find(|c| c.element == element)
        .map(|c| c.count)
        .unwrap_or(0)
}

/// Index into element declaration order, used for sorting sets and breaking
/// stacked-element ties deterministically.
fn element_rank(element: Element) -> usize {
    match element {
        Element::Fire => 0,
        Element::Water => 1,
        Element::Earth => 2,
        Element::Air => 3,
    }
}

/// Resolves the circle's contributions against the rule table.
/// Returns `None` when nothing matches; the caller clears the circle either way.
pub fn resolve(entries: &[Contribution]) -> Option<Resolution> {
    if entries.is_empty() {
        return None;
    }

    let mean = entries.iter().map(|c| c.charge).sum::<f32>() / entries.len() as f32;
    let at = |multiplier: f32, spell: SpellType| {
        Some(Resolution { spell, power: mean * multiplier })
    };

    // Exact higher-order patterns first: every listed (element, count) must
    // match and nothing else may be present.
    for (pattern, spell) in HIGHER_PAIR_RULES {
        let exact = pattern.len() == entries.len()
            && pattern.iter().all(|(e, n)| count_of(entries, *e) == *n);
        if exact {
            return at(HIGHER_PAIR_MULTIPLIER, *spell);
        }
    }

    // Any doubled element resolves to its solo combo, even with leftover
    // single contributions in the circle. Highest count wins; ties break in
    // element declaration order.
    if let Some(stacked) = entries
        .iter()
        .filter(|c| c.count >= 2)
        .max_by(|a, b| {
            a.count
                .cmp(&b.count)
                .then_with(|| element_rank(b.element).cmp(&element_rank(a.element)))
        })
    {
        return at(SOLO_MULTIPLIER, solo_spell(stacked.element));
    }

    // From here on every contribution is single; match on the element set.
    let mut set: Vec<Element> = entries.iter().map(|c| c.element).collect();
    set.sort_by_key(|e| element_rank(*e));

    match set.len() {
        2 => PAIR_RULES
            .iter()
            .find(|(pair, _)| pair[..] == set[..])
            .and_then(|(_, spell)| at(PAIR_MULTIPLIER, *spell)),
        3 => TRIPLE_RULES
            .iter()
            .find(|(triple, _)| triple[..] == set[..])
            .and_then(|(_, spell)| at(TRIPLE_MULTIPLIER, *spell)),
        4 => at(QUAD_MULTIPLIER, SpellType::Cataclysm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(element: Element, charge: f32) -> Contribution {
        Contribution::new(element, charge)
    }

    fn stacked(element: Element, charge: f32, count: u32) -> Contribution {
        Contribution { element, charge, count }
    }

    mod pair_tests {
        use super::*;

        #[test]
        fn fire_and_water_make_steam() {
            let res = resolve(&[entry(Element::Fire, 80.0), entry(Element::Water, 60.0)]).unwrap();
            assert_eq!(res.spell, SpellType::Steam);
            assert!((res.power - 70.0).abs() < 1e-4);
        }

        #[test]
        fn fire_and_earth_make_lava() {
            let res = resolve(&[entry(Element::Earth, 100.0), entry(Element::Fire, 50.0)]).unwrap();
            assert_eq!(res.spell, SpellType::Lava);
            assert!((res.power - 75.0).abs() < 1e-4);
        }

        #[test]
        fn water_and_earth_make_mud() {
            let res = resolve(&[entry(Element::Water, 40.0), entry(Element::Earth, 40.0)]).unwrap();
            assert_eq!(res.spell, SpellType::Mud);
            assert!((res.power - 40.0).abs() < 1e-4);
        }

        #[test]
        fn pair_power_is_the_mean_of_the_two_charges() {
            let res = resolve(&[entry(Element::Fire, 90.0), entry(Element::Water, 30.0)]).unwrap();
            assert!((res.power - 60.0).abs() < 1e-4);
        }

        #[test]
        fn air_pairs_resolve() {
            let cases = [
                (Element::Fire, SpellType::Firestorm),
                (Element::Water, SpellType::Blizzard),
                (Element::Earth, SpellType::Sandstorm),
            ];
            for (other, expected) in cases {
                let res = resolve(&[entry(Element::Air, 50.0), entry(other, 50.0)]).unwrap();
                assert_eq!(res.spell, expected);
            }
        }
    }

    mod triple_and_quad_tests {
        use super::*;

        #[test]
        fn three_physical_elements_make_storm() {
            let res = resolve(&[
                entry(Element::Fire, 80.0),
                entry(Element::Water, 80.0),
                entry(Element::Earth, 80.0),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Storm);
            assert!((res.power - 80.0 * 1.8).abs() < 1e-3);
        }

        #[test]
        fn air_triples_resolve_to_air_spells() {
            let cases = [
                ([Element::Air, Element::Fire, Element::Water], SpellType::Tempest),
                ([Element::Air, Element::Fire, Element::Earth], SpellType::Vortex),
                ([Element::Air, Element::Water, Element::Earth], SpellType::Monsoon),
            ];
            for (elements, expected) in cases {
                let entries: Vec<_> = elements.iter().map(|e| entry(*e, 60.0)).collect();
                assert_eq!(resolve(&entries).unwrap().spell, expected);
            }
        }

        #[test]
        fn all_four_elements_make_cataclysm_at_double_mean() {
            let res = resolve(&[
                entry(Element::Fire, 100.0),
                entry(Element::Water, 100.0),
                entry(Element::Earth, 100.0),
                entry(Element::Air, 100.0),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Cataclysm);
            assert!((res.power - 200.0).abs() < 1e-3);
        }
    }

    mod stacked_tests {
        use super::*;

        #[test]
        fn doubled_element_alone_is_a_solo_combo() {
            let res = resolve(&[stacked(Element::Fire, 100.0, 2)]).unwrap();
            assert_eq!(res.spell, SpellType::Inferno);
            assert!((res.power - 150.0).abs() < 1e-3);
        }

        #[test]
        fn each_element_has_its_own_solo_combo() {
            let cases = [
                (Element::Fire, SpellType::Inferno),
                (Element::Water, SpellType::Tsunami),
                (Element::Earth, SpellType::Earthquake),
                (Element::Air, SpellType::Cyclone),
            ];
            for (element, expected) in cases {
                let res = resolve(&[stacked(element, 80.0, 2)]).unwrap();
                assert_eq!(res.spell, expected);
            }
        }

        #[test]
        fn doubled_element_beats_a_leftover_pair_match() {
            // Water x2 plus a single Fire would otherwise read as Steam.
            let res = resolve(&[
                stacked(Element::Water, 100.0, 2),
                entry(Element::Fire, 40.0),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Tsunami);
        }

        #[test]
        fn higher_count_wins_between_two_stacked_elements() {
            let res = resolve(&[
                stacked(Element::Water, 100.0, 2),
                stacked(Element::Earth, 100.0, 3),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Earthquake);
        }

        #[test]
        fn stacked_tie_breaks_in_element_order() {
            let res = resolve(&[
                stacked(Element::Earth, 100.0, 2),
                stacked(Element::Water, 100.0, 2),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Tsunami);
        }
    }

    mod higher_pair_tests {
        use super::*;

        #[test]
        fn doubled_fire_with_earth_is_meteor_not_inferno() {
            let res = resolve(&[
                stacked(Element::Fire, 100.0, 2),
                entry(Element::Earth, 60.0),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Meteor);
            assert!((res.power - 80.0 * 1.25).abs() < 1e-3);
        }

        #[test]
        fn doubled_water_with_air_is_hailstorm() {
            let res = resolve(&[
                entry(Element::Air, 40.0),
                stacked(Element::Water, 80.0, 2),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Hailstorm);
        }

        #[test]
        fn higher_pair_needs_the_exact_counts() {
            // Fire x3 + Earth is not Meteor; the generic solo rule takes it.
            let res = resolve(&[
                stacked(Element::Fire, 100.0, 3),
                entry(Element::Earth, 60.0),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Inferno);
        }

        #[test]
        fn higher_pair_needs_exactly_two_elements() {
            // An extra Water breaks the Meteor pattern; Fire is still doubled.
            let res = resolve(&[
                stacked(Element::Fire, 100.0, 2),
                entry(Element::Earth, 60.0),
                entry(Element::Water, 60.0),
            ])
            .unwrap();
            assert_eq!(res.spell, SpellType::Inferno);
        }
    }

    mod failure_tests {
        use super::*;

        #[test]
        fn empty_circle_does_not_resolve() {
            assert_eq!(resolve(&[]), None);
        }

        #[test]
        fn single_element_does_not_resolve() {
            assert_eq!(resolve(&[entry(Element::Fire, 100.0)]), None);
            assert_eq!(resolve(&[entry(Element::Air, 100.0)]), None);
        }
    }
}
