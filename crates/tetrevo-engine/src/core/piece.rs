use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    L,
    J,
    T,
    S,
    Z,
}

/// Footprint of one piece orientation.
///
/// The piece occupies, for each of its columns `c`, the cells from
/// `bottom[c]` (inclusive) to `top[c]` (exclusive), measured upward from the
/// piece's landing row. `height` is the overall vertical extent, i.e. the
/// maximum `top` offset.
///
/// These tables are the fixed piece vocabulary; no rotation math is performed
/// anywhere, an orientation index is just a row of this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationGeometry {
    bottom: &'static [u8],
    top: &'static [u8],
    height: u8,
}

impl OrientationGeometry {
    /// Number of columns the piece spans in this orientation.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.bottom.len()
    }

    /// Per-column offset of the lowest occupied cell.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> &'static [u8] {
        self.bottom
    }

    /// Per-column offset one above the highest occupied cell.
    #[inline]
    #[must_use]
    pub fn top(&self) -> &'static [u8] {
        self.top
    }

    /// Overall vertical extent.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }
}

const fn orientation(
    bottom: &'static [u8],
    top: &'static [u8],
    height: u8,
) -> OrientationGeometry {
    OrientationGeometry {
        bottom,
        top,
        height,
    }
}

static O_GEOMETRY: [OrientationGeometry; 1] = [orientation(&[0, 0], &[2, 2], 2)];

static I_GEOMETRY: [OrientationGeometry; 2] = [
    orientation(&[0], &[4], 4),
    orientation(&[0, 0, 0, 0], &[1, 1, 1, 1], 1),
];

static L_GEOMETRY: [OrientationGeometry; 4] = [
    orientation(&[0, 0], &[3, 1], 3),
    orientation(&[0, 1, 1], &[2, 2, 2], 2),
    orientation(&[2, 0], &[3, 3], 3),
    orientation(&[0, 0, 0], &[1, 1, 2], 2),
];

static J_GEOMETRY: [OrientationGeometry; 4] = [
    orientation(&[0, 0], &[1, 3], 3),
    orientation(&[0, 0, 0], &[2, 1, 1], 2),
    orientation(&[0, 2], &[3, 3], 3),
    orientation(&[1, 1, 0], &[2, 2, 2], 2),
];

static T_GEOMETRY: [OrientationGeometry; 4] = [
    orientation(&[0, 1], &[3, 2], 3),
    orientation(&[1, 0, 1], &[2, 2, 2], 2),
    orientation(&[1, 0], &[2, 3], 3),
    orientation(&[0, 0, 0], &[1, 2, 1], 2),
];

static S_GEOMETRY: [OrientationGeometry; 2] = [
    orientation(&[0, 0, 1], &[1, 2, 2], 2),
    orientation(&[1, 0], &[3, 2], 3),
];

static Z_GEOMETRY: [OrientationGeometry; 2] = [
    orientation(&[1, 0, 0], &[2, 2, 1], 2),
    orientation(&[0, 1], &[2, 3], 3),
];

impl PieceKind {
    pub const COUNT: usize = 7;
    pub const ALL: [Self; Self::COUNT] = [
        Self::O,
        Self::I,
        Self::L,
        Self::J,
        Self::T,
        Self::S,
        Self::Z,
    ];

    /// Returns the geometry of every orientation of this piece.
    #[must_use]
    pub fn orientations(self) -> &'static [OrientationGeometry] {
        match self {
            Self::O => &O_GEOMETRY,
            Self::I => &I_GEOMETRY,
            Self::L => &L_GEOMETRY,
            Self::J => &J_GEOMETRY,
            Self::T => &T_GEOMETRY,
            Self::S => &S_GEOMETRY,
            Self::Z => &Z_GEOMETRY,
        }
    }
}

/// Uniformly random piece kind, one of the seven with equal probability.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_counts_match_piece_symmetry() {
        let counts: Vec<usize> = PieceKind::ALL
            .iter()
            .map(|kind| kind.orientations().len())
            .collect();
        assert_eq!(counts, [1, 2, 4, 4, 4, 2, 2]);
    }

    #[test]
    fn every_orientation_covers_exactly_four_cells() {
        for kind in PieceKind::ALL {
            for (i, geometry) in kind.orientations().iter().enumerate() {
                let cells: u8 = geometry
                    .bottom()
                    .iter()
                    .zip(geometry.top())
                    .map(|(b, t)| t - b)
                    .sum();
                assert_eq!(cells, 4, "{kind:?} orientation {i}");
            }
        }
    }

    #[test]
    fn offset_tables_are_consistent() {
        for kind in PieceKind::ALL {
            for (i, geometry) in kind.orientations().iter().enumerate() {
                assert_eq!(
                    geometry.bottom().len(),
                    geometry.top().len(),
                    "{kind:?} orientation {i}"
                );
                assert!((1..=4).contains(&geometry.width()), "{kind:?} orientation {i}");
                let max_top = *geometry.top().iter().max().unwrap();
                assert_eq!(geometry.height(), max_top, "{kind:?} orientation {i}");
                for (b, t) in geometry.bottom().iter().zip(geometry.top()) {
                    assert!(b < t, "{kind:?} orientation {i}: empty column in footprint");
                }
            }
        }
    }
}
