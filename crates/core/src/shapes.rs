//! Shape catalog - the seven tetromino definitions
//!
//! Each definition is a spawn center plus four `(row, col)` block offsets
//! relative to that center. The center is also the rotation pivot.

use crate::types::ShapeKind;

/// A `(row, col)` offset relative to a piece's center
pub type Offset = (i8, i8);

/// The four block offsets of a piece
pub type Offsets = [Offset; 4];

/// Immutable catalog entry for one shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub center_row: i8,
    pub center_column: i8,
    pub offsets: Offsets,
}

/// Catalog indexed by shape id
pub const CATALOG: [ShapeDefinition; 7] = [
    // I
    ShapeDefinition {
        center_row: 2,
        center_column: 4,
        offsets: [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    },
    // T
    ShapeDefinition {
        center_row: 1,
        center_column: 4,
        offsets: [(-1, 0), (0, -1), (0, 0), (0, 1)],
    },
    // O
    ShapeDefinition {
        center_row: 1,
        center_column: 4,
        offsets: [(-1, 0), (-1, 1), (0, 0), (0, 1)],
    },
    // L
    ShapeDefinition {
        center_row: 0,
        center_column: 4,
        offsets: [(0, 0), (0, 1), (1, 0), (2, 0)],
    },
    // J
    ShapeDefinition {
        center_row: 0,
        center_column: 5,
        offsets: [(0, -1), (0, 0), (1, 0), (2, 0)],
    },
    // S
    ShapeDefinition {
        center_row: 1,
        center_column: 4,
        offsets: [(-1, 0), (-1, 1), (0, -1), (0, 0)],
    },
    // Z
    ShapeDefinition {
        center_row: 1,
        center_column: 5,
        offsets: [(-1, -1), (-1, 0), (0, 0), (0, 1)],
    },
];

/// Look up the catalog entry for a shape
#[inline]
pub fn definition(kind: ShapeKind) -> &'static ShapeDefinition {
    &CATALOG[kind.index()]
}

/// Rotate offsets 90 degrees about the pivot: `(dr, dc) -> (dc, -dr)`
pub fn rotate_offsets(offsets: &Offsets) -> Offsets {
    let mut out = *offsets;
    for (dst, &(dr, dc)) in out.iter_mut().zip(offsets.iter()) {
        *dst = (dc, -dr);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_shape_ids() {
        assert_eq!(definition(ShapeKind::I).center_row, 2);
        assert_eq!(definition(ShapeKind::J).center_column, 5);
        assert_eq!(definition(ShapeKind::Z).center_column, 5);
        assert_eq!(
            definition(ShapeKind::S).offsets,
            [(-1, 0), (-1, 1), (0, -1), (0, 0)]
        );
    }

    #[test]
    fn test_every_shape_has_distinct_blocks() {
        for def in CATALOG.iter() {
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(def.offsets[i], def.offsets[j]);
                }
            }
        }
    }

    #[test]
    fn test_rotate_single_step() {
        let t = definition(ShapeKind::T).offsets;
        assert_eq!(rotate_offsets(&t), [(0, 1), (-1, 0), (0, 0), (1, 0)]);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for def in CATALOG.iter() {
            let mut offsets = def.offsets;
            for _ in 0..4 {
                offsets = rotate_offsets(&offsets);
            }
            assert_eq!(offsets, def.offsets);
        }
    }
}
