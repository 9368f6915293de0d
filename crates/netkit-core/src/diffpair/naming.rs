//! Pair name collision resolution

use std::collections::HashSet;

/// Maximum number of `*` markers appended before falling back
pub const MAX_MARKERS: usize = 5;

/// What to do once `MAX_MARKERS` markers still collide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Settle on `<name>*****` even if that is taken
    Marked,
    /// Count up `<name>-1`, `<name>-2`, ... until free
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    /// Whether `desired` was already taken
    pub collided: bool,
}

/// Pick a name for a new pair that does not clash with `taken`
///
/// Examples with `taken = {"CLK", "CLK*"}`:
/// - "USB" → "USB"
/// - "CLK" → "CLK**"
pub fn resolve_name(desired: &str, taken: &HashSet<String>, fallback: Fallback) -> ResolvedName {
    if !taken.contains(desired) {
        return ResolvedName {
            name: desired.to_string(),
            collided: false,
        };
    }

    let mut name = desired.to_string();
    for _ in 0..MAX_MARKERS {
        name.push('*');
        if !taken.contains(&name) {
            return ResolvedName {
                name,
                collided: true,
            };
        }
    }

    let name = match fallback {
        Fallback::Marked => format!("{desired}{}", "*".repeat(MAX_MARKERS)),
        Fallback::Numbered => (1..)
            .map(|n| format!("{desired}-{n}"))
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or_else(|| desired.to_string()),
    };

    log::debug!("Pair name {desired:?} exhausted markers, using {name:?}");

    ResolvedName {
        name,
        collided: true,
    }
}
