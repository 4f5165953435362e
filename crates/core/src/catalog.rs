//! Catalog module - tetromino shapes and their rotation states
//!
//! Every kind owns a fixed, ordered list of 4x4 occupancy masks. O has a
//! single state; I, S and Z have two; T, J and L have four. Rotating a piece
//! simply walks this list, so there are no kick tables here.

use crate::types::PieceKind;

/// A 4x4 occupancy mask.
///
/// Each row is a nibble read left to right: `0b1000` is column 0 and
/// `0b0001` is column 3. Row 0 is the top of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask([u8; 4]);

impl Mask {
    pub const fn new(rows: [u8; 4]) -> Self {
        Self(rows)
    }

    /// Whether the mask cell at (`col`, `row`) is occupied.
    ///
    /// Coordinates outside the 4x4 box are never occupied.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        if col >= 4 || row >= 4 {
            return false;
        }
        (self.0[row] >> (3 - col)) & 1 == 1
    }

    /// Occupied (col, row) coordinates inside the box, in row-major order.
    pub fn cells(&self) -> [(u8, u8); 4] {
        let mut out = [(0u8, 0u8); 4];
        let mut n = 0usize;
        for row in 0..4 {
            for col in 0..4 {
                if self.is_set(col, row) && n < 4 {
                    out[n] = (col as u8, row as u8);
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 4, "catalog mask must hold exactly four cells");
        out
    }

    /// Number of occupied cells.
    pub fn count(&self) -> u32 {
        self.0.iter().map(|row| (row & 0x0F).count_ones()).sum()
    }
}

const I_STATES: [Mask; 2] = [
    Mask::new([0b0000, 0b1111, 0b0000, 0b0000]),
    Mask::new([0b0010, 0b0010, 0b0010, 0b0010]),
];

const O_STATES: [Mask; 1] = [Mask::new([0b0000, 0b0110, 0b0110, 0b0000])];

const T_STATES: [Mask; 4] = [
    Mask::new([0b0000, 0b0111, 0b0010, 0b0000]),
    Mask::new([0b0000, 0b0010, 0b0110, 0b0010]),
    Mask::new([0b0000, 0b0010, 0b0111, 0b0000]),
    Mask::new([0b0000, 0b0010, 0b0011, 0b0010]),
];

const S_STATES: [Mask; 2] = [
    Mask::new([0b0000, 0b0011, 0b0110, 0b0000]),
    Mask::new([0b0000, 0b0100, 0b0110, 0b0010]),
];

const Z_STATES: [Mask; 2] = [
    Mask::new([0b0000, 0b0110, 0b0011, 0b0000]),
    Mask::new([0b0000, 0b0010, 0b0110, 0b0100]),
];

const J_STATES: [Mask; 4] = [
    Mask::new([0b0000, 0b0111, 0b0100, 0b0000]),
    Mask::new([0b0000, 0b0110, 0b0010, 0b0010]),
    Mask::new([0b0000, 0b0010, 0b0111, 0b0000]),
    Mask::new([0b0000, 0b0010, 0b0010, 0b0110]),
];

const L_STATES: [Mask; 4] = [
    Mask::new([0b0000, 0b0111, 0b0001, 0b0000]),
    Mask::new([0b0000, 0b0010, 0b0010, 0b0110]),
    Mask::new([0b0000, 0b0100, 0b0111, 0b0000]),
    Mask::new([0b0000, 0b0110, 0b0100, 0b0100]),
];

/// Ordered rotation states for a piece kind
pub fn rotations(kind: PieceKind) -> &'static [Mask] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Display color (r, g, b) for a piece kind
pub fn color(kind: PieceKind) -> (u8, u8, u8) {
    match kind {
        PieceKind::I => (0, 240, 240),
        PieceKind::O => (240, 240, 0),
        PieceKind::T => (160, 0, 240),
        PieceKind::S => (0, 240, 0),
        PieceKind::Z => (240, 0, 0),
        PieceKind::J => (0, 0, 240),
        PieceKind::L => (240, 160, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_four_cells() {
        for kind in PieceKind::ALL {
            for (i, mask) in rotations(kind).iter().enumerate() {
                assert_eq!(mask.count(), 4, "{:?} state {} has wrong area", kind, i);
            }
        }
    }

    #[test]
    fn state_counts_match_shapes() {
        assert_eq!(rotations(PieceKind::O).len(), 1);
        assert_eq!(rotations(PieceKind::I).len(), 2);
        assert_eq!(rotations(PieceKind::S).len(), 2);
        assert_eq!(rotations(PieceKind::Z).len(), 2);
        assert_eq!(rotations(PieceKind::T).len(), 4);
        assert_eq!(rotations(PieceKind::J).len(), 4);
        assert_eq!(rotations(PieceKind::L).len(), 4);
    }

    #[test]
    fn states_of_a_kind_are_distinct() {
        for kind in PieceKind::ALL {
            let states = rotations(kind);
            for a in 0..states.len() {
                for b in (a + 1)..states.len() {
                    assert_ne!(states[a], states[b], "{:?} repeats a state", kind);
                }
            }
        }
    }

    #[test]
    fn mask_bits_read_left_to_right() {
        let mask = rotations(PieceKind::I)[0];
        assert_eq!(mask.cells(), [(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert!(!mask.is_set(0, 0));
        assert!(!mask.is_set(4, 1));
    }

    #[test]
    fn states_are_connected() {
        for kind in PieceKind::ALL {
            for mask in rotations(kind) {
                let cells = mask.cells();
                let mut seen = [false; 4];
                seen[0] = true;
                let mut changed = true;
                while changed {
                    changed = false;
                    for i in 0..4 {
                        if seen[i] {
                            continue;
                        }
                        let (cx, cy) = cells[i];
                        let touches = (0..4).any(|j| {
                            seen[j] && {
                                let (ox, oy) = cells[j];
                                (cx as i8 - ox as i8).abs() + (cy as i8 - oy as i8).abs() == 1
                            }
                        });
                        if touches {
                            seen[i] = true;
                            changed = true;
                        }
                    }
                }
                assert!(seen.iter().all(|s| *s), "{:?} mask is not connected", kind);
            }
        }
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(color(*a), color(*b));
            }
        }
    }
}
