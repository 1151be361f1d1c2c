//! Arena file rendering
//!
//! The arena file registers a custom map with the in-game map list.

/// Game types a ported map is offered for
pub const DEFAULT_GAMETYPES: &str = "dm war sd dom koth sab";

pub fn render_arena(map_name: &str) -> String {
    format!(
        "{{\n\tmap\t\t\"{name}\"\n\tlongname\t\"{long}\"\n\tgametype\t\"{types}\"\n}}\n",
        name = map_name,
        long = map_name.to_uppercase(),
        types = DEFAULT_GAMETYPES,
    )
}
