pub mod combos;

use bevy::prelude::*;

/// All 17 composite spells producible by the spell circle.
/// Which multiset of elemental contributions produces which spell is
/// defined by the rule table in [`combos`]; the gameplay numbers for each
/// spell live here, in one place per spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpellType {
    // Two-element spells (6)
    Steam,
    Lava,
    Mud,
    Firestorm,
    Blizzard,
    Sandstorm,

    // Higher-order pair spells (2) - need a doubled contribution
    Meteor,
    Hailstorm,

    // Solo resonance combos (4) - one element contributed twice
    Inferno,
    Tsunami,
    Earthquake,
    Cyclone,

    // Three-element spells (4)
    Storm,
    Tempest,
    Vortex,
    Monsoon,

    // All four elements (1)
    Cataclysm,
}

/// Speed below which a slowed enemy never drops.
pub const SLOW_FLOOR: f32 = 10.0;

/// Lifetime of the transient marker spawned at a spell's target position.
pub const EFFECT_MARKER_LIFETIME: f32 = 0.6;

/// Converts a spell's power (0-200) into the effect scale factor:
/// power 0 halves an effect, power 100 amplifies it 1.5x.
pub fn power_scale(power: f32) -> f32 {
    0.5 + power / 100.0
}

/// Gameplay effect family and numbers for one spell.
/// `dps`/`damage` values are at the target point before power scaling;
/// continuous effects fall off linearly to zero at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpellEffect {
    /// Continuous area damage around the target while the spell is active.
    Damage { radius: f32, dps: f32 },
    /// Continuous speed reduction (px/s) around the target, floored at [`SLOW_FLOOR`].
    Slow { radius: f32, slow: f32 },
    /// Damage and slow combined, same falloff for both.
    Hybrid { radius: f32, dps: f32, slow: f32 },
    /// One flat damage tick to every enemy on resolution, no falloff;
    /// optionally stuns every survivor for `stun` seconds.
    FlatDamage { damage: f32, stun: Option<f32> },
    /// Repositions the casters to safe positions and deals one falloff
    /// damage tick around the target.
    Teleport { radius: f32, damage: f32 },
    /// Inserts a temporary repelling wall (target-centered in combat,
    /// following each caster in survival).
    Barrier { size: Vec2, lifetime: f32 },
    /// Spawns a drifting emitter that pulls and damages nearby enemies.
    Tornado { radius: f32, pull: f32, dps: f32, lifetime: f32, drift: f32 },
}

impl SpellType {
    /// Returns the display name for this spell.
    pub fn name(&self) -> &'static str {
        match self {
            SpellType::Steam => "Steam",
            SpellType::Lava => "Lava",
            SpellType::Mud => "Mud",
            SpellType::Firestorm => "Firestorm",
            SpellType::Blizzard => "Blizzard",
            SpellType::Sandstorm => "Sandstorm",
            SpellType::Meteor => "Meteor",
            SpellType::Hailstorm => "Hailstorm",
            SpellType::Inferno => "Inferno",
            SpellType::Tsunami => "Tsunami",
            SpellType::Earthquake => "Earthquake",
            SpellType::Cyclone => "Cyclone",
            SpellType::Storm => "Storm",
            SpellType::Tempest => "Tempest",
            SpellType::Vortex => "Vortex",
            SpellType::Monsoon => "Monsoon",
            SpellType::Cataclysm => "Cataclysm",
        }
    }

    /// The effect configuration for this spell. Single source of truth for
    /// radii, damage rates, slow amounts and durations.
    pub fn effect(&self) -> SpellEffect {
        match self {
            SpellType::Steam => SpellEffect::Slow { radius: 140.0, slow: 80.0 },
            SpellType::Lava => SpellEffect::Damage { radius: 120.0, dps: 40.0 },
            SpellType::Mud => SpellEffect::Hybrid { radius: 120.0, dps: 25.0, slow: 60.0 },
            SpellType::Firestorm => SpellEffect::Damage { radius: 160.0, dps: 50.0 },
            SpellType::Blizzard => SpellEffect::Hybrid { radius: 150.0, dps: 30.0, slow: 90.0 },
            SpellType::Sandstorm => SpellEffect::Slow { radius: 200.0, slow: 70.0 },
            SpellType::Meteor => SpellEffect::Damage { radius: 180.0, dps: 75.0 },
            SpellType::Hailstorm => SpellEffect::Hybrid { radius: 170.0, dps: 45.0, slow: 100.0 },
            SpellType::Inferno
            | SpellType::Tsunami
            | SpellType::Earthquake
            | SpellType::Cyclone => SpellEffect::FlatDamage { damage: 45.0, stun: None },
            SpellType::Storm => SpellEffect::Damage { radius: 220.0, dps: 65.0 },
            SpellType::Tempest => SpellEffect::Teleport { radius: 130.0, damage: 25.0 },
            SpellType::Vortex => SpellEffect::Tornado {
                radius: 150.0,
                pull: 90.0,
                dps: 15.0,
                lifetime: 6.0,
                drift: 30.0,
            },
            SpellType::Monsoon => SpellEffect::Barrier {
                size: Vec2::new(80.0, 24.0),
                lifetime: 5.0,
            },
            SpellType::Cataclysm => SpellEffect::FlatDamage { damage: 70.0, stun: Some(2.5) },
        }
    }

    /// Radius to use for the transient visual marker at the target.
    pub fn marker_radius(&self) -> f32 {
        match self.effect() {
            SpellEffect::Damage { radius, .. }
            | SpellEffect::Slow { radius, .. }
            | SpellEffect::Hybrid { radius, .. }
            | SpellEffect::Teleport { radius, .. }
            | SpellEffect::Tornado { radius, .. } => radius,
            SpellEffect::FlatDamage { .. } => 260.0,
            SpellEffect::Barrier { size, .. } => size.x,
        }
    }

    /// Returns all spell variants for iteration.
    pub fn all() -> &'static [SpellType] {
        &[
            SpellType::Steam,
            SpellType::Lava,
            SpellType::Mud,
            SpellType::Firestorm,
            SpellType::Blizzard,
            SpellType::Sandstorm,
            SpellType::Meteor,
            SpellType::Hailstorm,
            SpellType::Inferno,
            SpellType::Tsunami,
            SpellType::Earthquake,
            SpellType::Cyclone,
            SpellType::Storm,
            SpellType::Tempest,
            SpellType::Vortex,
            SpellType::Monsoon,
            SpellType::Cataclysm,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_17_variants() {
        assert_eq!(SpellType::all().len(), 17);
    }

    #[test]
    fn test_all_spells_have_nonempty_names() {
        for spell in SpellType::all() {
            assert!(!spell.name().is_empty(), "{:?} should have a name", spell);
        }
    }

    #[test]
    fn test_spell_names_are_unique() {
        use std::collections::HashSet;
        let names: HashSet<_> = SpellType::all().iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), SpellType::all().len());
    }

    #[test]
    fn test_power_scale_endpoints() {
        assert_eq!(power_scale(0.0), 0.5);
        assert_eq!(power_scale(100.0), 1.5);
        assert_eq!(power_scale(200.0), 2.5);
    }

    #[test]
    fn test_solo_combos_are_flat_damage() {
        for spell in [
            SpellType::Inferno,
            SpellType::Tsunami,
            SpellType::Earthquake,
            SpellType::Cyclone,
        ] {
            assert!(
                matches!(spell.effect(), SpellEffect::FlatDamage { stun: None, .. }),
                "{:?} should be a flat-damage ultimate",
                spell
            );
        }
    }

    #[test]
    fn test_cataclysm_stuns() {
        match SpellType::Cataclysm.effect() {
            SpellEffect::FlatDamage { stun, .. } => assert_eq!(stun, Some(2.5)),
            other => panic!("Cataclysm should be flat damage, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_radius_is_positive() {
        for spell in SpellType::all() {
            assert!(spell.marker_radius() > 0.0, "{:?} marker radius", spell);
        }
    }
}
