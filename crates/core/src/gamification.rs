//! XP-to-level conversion.
//!
//! Levels are derived from lifetime XP rather than stored independently, so
//! reversing a task completion (toggle back to todo) also reverses any level
//! gain. One level per [`XP_PER_LEVEL`] points, starting at level 1.

/// XP required per level.
pub const XP_PER_LEVEL: i32 = 250;

/// Level for a given XP total. XP never goes negative, but clamp anyway so a
/// bad row cannot produce a level below 1.
pub fn level_for_xp(xp: i32) -> i32 {
    1 + xp.max(0) / XP_PER_LEVEL
}
