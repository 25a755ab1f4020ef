//! Piece-square tables (PST) for all six piece types.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Black reads the White table in reverse square order. Use [`pst_value`]
//! for lookups.

use quill_core::{Color, Role, Square};

use crate::eval::phase::Phase;

// ---------------------------------------------------------------------------
// Individual piece-square tables
// ---------------------------------------------------------------------------

/// Pawn PST. Rank 1 and rank 8 entries are 0 since pawns never sit there.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
    // Rank 1 (indices 0-7)
      0,   0,   0,   0,   0,   0,   0,   0,
    // Rank 2 (indices 8-15)
      5,  10,  10, -20, -20,  10,  10,   5,
    // Rank 3 (indices 16-23)
      5,  -5, -10,   0,   0, -10,  -5,   5,
    // Rank 4 (indices 24-31)
      0,   0,   0,  20,  20,   0,   0,   0,
    // Rank 5 (indices 32-39)
      5,   5,  10,  25,  25,  10,   5,   5,
    // Rank 6 (indices 40-47)
     10,  10,  20,  30,  30,  20,  10,  10,
    // Rank 7 (indices 48-55)
     50,  50,  50,  50,  50,  50,  50,  50,
    // Rank 8 (indices 56-63)
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    // Rank 1
    -50, -40, -30, -30, -30, -30, -40, -50,
    // Rank 2
    -40, -20,   0,   5,   5,   0, -20, -40,
    // Rank 3
    -30,   5,  10,  15,  15,  10,   5, -30,
    // Rank 4
    -30,   0,  15,  20,  20,  15,   0, -30,
    // Rank 5
    -30,   5,  15,  20,  20,  15,   5, -30,
    // Rank 6
    -30,   0,  10,  15,  15,  10,   0, -30,
    // Rank 7
    -40, -20,   0,   0,   0,   0, -20, -40,
    // Rank 8
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    // Rank 1
    -20, -10, -10, -10, -10, -10, -10, -20,
    // Rank 2
    -10,   5,   0,   0,   0,   0,   5, -10,
    // Rank 3
    -10,  10,  10,  10,  10,  10,  10, -10,
    // Rank 4
    -10,   0,  10,  10,  10,  10,   0, -10,
    // Rank 5
    -10,   5,   5,  10,  10,   5,   5, -10,
    // Rank 6
    -10,   0,   5,  10,  10,   5,   0, -10,
    // Rank 7
    -10,   0,   0,   0,   0,   0,   0, -10,
    // Rank 8
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
    // Rank 1
      0,   0,   0,   5,   5,   0,   0,   0,
    // Rank 2
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 3
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 4
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 5
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 6
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 7
      5,  10,  10,  10,  10,  10,  10,   5,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    // Rank 1
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    // Rank 2
    -10,   0,   5,   0,   0,   0,   0, -10,
    // Rank 3
    -10,   5,   5,   5,   5,   5,   0, -10,
    // Rank 4
      0,   0,   5,   5,   5,   5,   0,  -5,
    // Rank 5
     -5,   0,   5,   5,   5,   5,   0,  -5,
    // Rank 6
    -10,   0,   5,   5,   5,   5,   0, -10,
    // Rank 7
    -10,   0,   0,   0,   0,   0,   0, -10,
    // Rank 8
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// King PST for the middlegame: stay tucked behind the pawns.
#[rustfmt::skip]
const KING_MG_PST: [i32; 64] = [
    // Rank 1
     20,  30,  10,   0,   0,  10,  30,  20,
    // Rank 2
     20,  20,   0,   0,   0,   0,  20,  20,
    // Rank 3
    -10, -20, -20, -20, -20, -20, -20, -10,
    // Rank 4
    -20, -30, -30, -40, -40, -30, -30, -20,
    // Rank 5
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 6
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 7
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 8
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// King PST for the endgame: walk to the center.
#[rustfmt::skip]
const KING_EG_PST: [i32; 64] = [
    // Rank 1
    -50, -30, -30, -30, -30, -30, -30, -50,
    // Rank 2
    -30, -30,   0,   0,   0,   0, -30, -30,
    // Rank 3
    -30, -10,  20,  30,  30,  20, -10, -30,
    // Rank 4
    -30, -10,  30,  40,  40,  30, -10, -30,
    // Rank 5
    -30, -10,  30,  40,  40,  30, -10, -30,
    // Rank 6
    -30, -10,  20,  30,  30,  20, -10, -30,
    // Rank 7
    -30, -20, -10,   0,   0, -10, -20, -30,
    // Rank 8
    -50, -40, -30, -20, -20, -30, -40, -50,
];

// ---------------------------------------------------------------------------
// Lookup helper
// ---------------------------------------------------------------------------

#[inline]
fn table(role: Role, phase: Phase) -> &'static [i32; 64] {
    match role {
        Role::Pawn => &PAWN_PST,
        Role::Knight => &KNIGHT_PST,
        Role::Bishop => &BISHOP_PST,
        Role::Rook => &ROOK_PST,
        Role::Queen => &QUEEN_PST,
        Role::King => match phase {
            Phase::Middlegame => &KING_MG_PST,
            Phase::Endgame => &KING_EG_PST,
        },
    }
}

/// Look up the PST bonus for a piece of the given role and color on `sq`.
///
/// Black pieces use the White table at index `63 - sq`. `phase` only
/// matters for the king.
#[inline]
pub fn pst_value(role: Role, color: Color, sq: Square, phase: Phase) -> i32 {
    let index = match color {
        Color::White => sq.to_usize(),
        Color::Black => 63 - sq.to_usize(),
    };
    table(role, phase)[index]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use quill_core::{Color, Role, Square};

    use super::*;

    const ROLES: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    #[test]
    fn pawn_white_e4() {
        assert_eq!(
            pst_value(Role::Pawn, Color::White, Square::E4, Phase::Middlegame),
            20
        );
    }

    #[test]
    fn pawn_black_e5_mirrors_white_e4() {
        let white_e4 = pst_value(Role::Pawn, Color::White, Square::E4, Phase::Middlegame);
        let black_e5 = pst_value(Role::Pawn, Color::Black, Square::E5, Phase::Middlegame);
        assert_eq!(white_e4, black_e5);
    }

    #[test]
    fn king_table_depends_on_phase() {
        let mg = pst_value(Role::King, Color::White, Square::G1, Phase::Middlegame);
        let eg = pst_value(Role::King, Color::White, Square::G1, Phase::Endgame);
        assert_eq!(mg, 30);
        assert_eq!(eg, -30);
    }

    #[test]
    fn non_king_tables_ignore_phase() {
        for role in &ROLES[..5] {
            for sq in Square::ALL {
                assert_eq!(
                    pst_value(*role, Color::White, sq, Phase::Middlegame),
                    pst_value(*role, Color::White, sq, Phase::Endgame),
                );
            }
        }
    }

    #[test]
    fn queen_table_is_lopsided() {
        // c2 and b3 favor the queen side; their king-side twins do not.
        let white = |sq| pst_value(Role::Queen, Color::White, sq, Phase::Middlegame);
        assert_eq!(white(Square::C2), 5);
        assert_eq!(white(Square::F2), 0);
        assert_eq!(white(Square::B3), 5);
        assert_eq!(white(Square::G3), 0);

        // Reverse order sends Black's f7 to c2, not to f2.
        assert_eq!(pst_value(Role::Queen, Color::Black, Square::F7, Phase::Middlegame), 5);
        assert_eq!(pst_value(Role::Queen, Color::Black, Square::C7, Phase::Middlegame), 0);
    }

    /// Black's table read as the White table in reverse square order.
    #[test]
    fn black_table_is_reversed_white_table() {
        for phase in [Phase::Middlegame, Phase::Endgame] {
            for role in ROLES {
                for sq in Square::ALL {
                    let reversed = Square::new(63 - sq as u32);
                    assert_eq!(
                        pst_value(role, Color::Black, sq, phase),
                        pst_value(role, Color::White, reversed, phase),
                        "{role:?} on {sq}"
                    );
                }
            }
        }
    }
}
