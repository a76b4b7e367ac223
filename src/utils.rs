use crate::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

/// The Moore neighborhood, relative to the observed cell.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, 0),
    pos!(1, 0),
    pos!(0, -1),
    pos!(0, 1),
    pos!(1, 1),
    pos!(1, -1),
    pos!(-1, 1),
    pos!(-1, -1),
];

impl Pos {
    /// `None` when a component leaves the `i32` range.
    pub fn checked_add(self, rhs: Pos) -> Option<Pos> {
        Some(pos!(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Neighbors that cannot be represented are skipped, they are off any grid.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        pos!(x, y)
    }
}

impl TryFrom<(i64, i64)> for Pos {
    type Error = Error;

    fn try_from((x, y): (i64, i64)) -> Result<Self, Self::Error> {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(pos!(x, y)),
            _ => Err(Error::MalformedCell { x, y }),
        }
    }
}

#[test]
fn test_neighbors() {
    let around: Vec<_> = pos!(0, 0).neighbors().collect();
    assert_eq!(around.len(), 8);
    assert!(!around.contains(&pos!(0, 0)));
    assert!(around.contains(&pos!(-1, -1)));
    assert!(around.contains(&pos!(1, 1)));
}

#[test]
fn test_neighbors_at_the_i32_edge() {
    assert_eq!(pos!(i32::MAX, 0).neighbors().count(), 5);
    assert_eq!(pos!(i32::MIN, i32::MIN).neighbors().count(), 3);
    assert_eq!(pos!(1, 2).checked_add(pos!(-1, 1)), Some(pos!(0, 3)));
    assert_eq!(pos!(i32::MAX, 0).checked_add(pos!(1, 0)), None);
}

#[test]
fn test_wide_pair_conversion() {
    assert_eq!(Pos::try_from((3i64, -2i64)).unwrap(), pos!(3, -2));
    assert!(matches!(
        Pos::try_from((i64::MAX, 0i64)),
        Err(Error::MalformedCell { .. })
    ));
}
