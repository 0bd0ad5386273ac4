//! Global calculator constants.

/// Number of registers in the store (A, B, C, D).
pub const NUM_REGISTERS: usize = 4;

/// The exact token that ends a session.
///
/// Compared against the whole token and case-sensitively, unlike command
/// dispatch which only looks at the lowercased first character.
pub const QUIT_TOKEN: &str = "q";
