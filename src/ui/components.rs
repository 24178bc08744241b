use bevy::prelude::*;

/// Root node of the main-menu screen.
#[derive(Component)]
pub struct MenuScreen;

/// A selectable menu entry; the index matches `MenuSelection`.
#[derive(Component)]
pub struct MenuOptionText(pub usize);

/// Root node of the level-transition screen.
#[derive(Component)]
pub struct TransitionScreen;

/// Root node of the level-complete screen.
#[derive(Component)]
pub struct CompleteScreen;

/// Root node of the in-game HUD.
#[derive(Component)]
pub struct HudRoot;

/// HUD line showing the survival timer or enemy count.
#[derive(Component)]
pub struct StatusText;

/// HUD line showing the circle contents or the active spell.
#[derive(Component)]
pub struct ActiveSpellText;

/// HUD line showing one caster's charge; the index is the seat.
#[derive(Component)]
pub struct ChargeReadout(pub usize);

/// Center-screen unlock notification text.
#[derive(Component)]
pub struct ToastText;

/// Seconds an unlock notification stays up.
pub const UNLOCK_TOAST_DURATION: f32 = 3.0;

/// The unlock notification currently on screen, if any.
#[derive(Resource, Debug, Clone, Default)]
pub struct UnlockToast {
    pub text: String,
    pub remaining: f32,
}
