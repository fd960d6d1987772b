//! Static descriptors for the available game modes.

use crushsim_types::{GameMode, ModeDescriptor};

/// Display metadata for a single mode.
pub fn describe(mode: GameMode) -> ModeDescriptor {
    let (name, description, icon) = match mode {
        GameMode::Interactive => (
            "Interactive Mode",
            "Tap to crush objects at your own pace",
            "👆",
        ),
        GameMode::Auto => (
            "Auto Mode",
            "Watch objects crush automatically in a relaxing sequence",
            "🔄",
        ),
        GameMode::Mixed => (
            "Mixed Mode",
            "Combination of auto and interactive crushing",
            "🎭",
        ),
    };

    ModeDescriptor {
        id: mode,
        name: name.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
    }
}

/// Descriptors for every mode, in display order.
pub fn list_modes() -> Vec<ModeDescriptor> {
    GameMode::ALL.into_iter().map(describe).collect()
}
