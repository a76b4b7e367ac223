use crate::{Error, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Alive,
    #[default]
    Dead,
}

impl Status {
    pub fn is_alive(self) -> bool {
        self == Status::Alive
    }
}

impl From<bool> for Status {
    fn from(alive: bool) -> Self {
        if alive {
            Status::Alive
        } else {
            Status::Dead
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        match status {
            Status::Alive => 1,
            Status::Dead => 0,
        }
    }
}

impl TryFrom<i64> for Status {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Status::Alive),
            0 => Ok(Status::Dead),
            other => Err(Error::InvalidStatus(other)),
        }
    }
}

/// A bounded grid of cells spanning `[0, width) x [0, height)`. Neither side
/// exceeds `i32::MAX`.
///
/// Implementors are values: `put_status` leaves the receiver untouched, only
/// `set_status` writes in place and is meant for building a fresh world.
pub trait World: Clone + Send + 'static {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Anything outside the bounds reads as dead.
    fn get_status(&self, pos: Pos) -> Status;

    /// Writes outside the bounds are ignored.
    fn set_status(&mut self, pos: Pos, status: Status);

    /// Alive cells, in row-major order.
    fn actives(&self) -> Vec<Pos>;

    /// Number of alive cells within the bounds.
    fn population(&self) -> usize;

    fn in_bounds(&self, Pos { x, y }: Pos) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width() as i64 && (y as i64) < self.height() as i64
    }

    fn put_status(&self, pos: Pos, status: Status) -> Self {
        let mut next = self.clone();
        next.set_status(pos, status);
        next
    }
}

pub use environment::{Environment, MAX_SIDE};
mod environment;

#[test]
fn test_status_conversions() {
    assert_eq!(Status::try_from(1i64).unwrap(), Status::Alive);
    assert_eq!(Status::try_from(0i64).unwrap(), Status::Dead);
    assert_eq!(Status::try_from(2i64), Err(Error::InvalidStatus(2)));
    assert_eq!(Status::try_from(-1i64), Err(Error::InvalidStatus(-1)));
    assert_eq!(u8::from(Status::Alive), 1);
    assert_eq!(u8::from(Status::Dead), 0);
}
