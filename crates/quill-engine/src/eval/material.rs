//! Base material values.

use quill_core::Role;

/// Base value of each piece kind in centipawns.
///
/// | Piece  | Value  |
/// |--------|--------|
/// | Pawn   | 100    |
/// | Knight | 320    |
/// | Bishop | 330    |
/// | Rook   | 500    |
/// | Queen  | 900    |
/// | King   | 200000 |
///
/// The king value only keeps the material sum meaningful; both kings are
/// always on the board so it cancels out. Mates are scored by the search.
#[inline]
pub const fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 200_000,
    }
}
