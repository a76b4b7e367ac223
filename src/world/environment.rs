use std::{collections::HashSet, sync::Arc};

use log::debug;
use metrohash::MetroBuildHasher;

use crate::{Pos, Status, World};

type Cells = HashSet<Pos, MetroBuildHasher>;

/// Widest and tallest a grid can be, every coordinate has to fit a [`Pos`].
pub const MAX_SIDE: u32 = i32::MAX as u32;

/// Sparse grid: only alive cells are stored, absence means dead.
///
/// The cell set sits behind an [`Arc`] so clones share it until one of them
/// is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    width: u32,
    height: u32,
    cells: Arc<Cells>,
}

impl Environment {
    /// Seeds are taken as-is, out of bounds ones included. They can never be
    /// read back nor influence a neighbor count.
    ///
    /// Sides larger than [`MAX_SIDE`] are capped to it.
    pub fn new(height: u32, width: u32, actives: impl IntoIterator<Item = Pos>) -> Self {
        if width > MAX_SIDE || height > MAX_SIDE {
            debug!("capping a {width}x{height} grid to sides of at most {MAX_SIDE}");
        }
        let cells = actives.into_iter().collect();
        Self {
            width: width.min(MAX_SIDE),
            height: height.min(MAX_SIDE),
            cells: Arc::new(cells),
        }
    }

    pub fn empty(height: u32, width: u32) -> Self {
        Self::new(height, width, std::iter::empty())
    }

    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }
}

impl World for Environment {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_status(&self, pos: Pos) -> Status {
        Status::from(self.in_bounds(pos) && self.cells.contains(&pos))
    }

    fn set_status(&mut self, pos: Pos, status: Status) {
        if !self.in_bounds(pos) {
            debug!(
                "ignoring write of {status:?} to {pos:?} outside {}x{}",
                self.width, self.height
            );
            return;
        }
        let already = self.cells.contains(&pos);
        match (status, already) {
            (Status::Alive, false) => {
                Arc::make_mut(&mut self.cells).insert(pos);
            }
            (Status::Dead, true) => {
                Arc::make_mut(&mut self.cells).remove(&pos);
            }
            _ => (), // already in the requested state
        }
    }

    fn actives(&self) -> Vec<Pos> {
        let mut actives: Vec<_> = self
            .cells
            .iter()
            .copied()
            .filter(|&pos| self.in_bounds(pos))
            .collect();
        actives.sort_by_key(|pos| (pos.y, pos.x));
        actives
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&pos| self.in_bounds(pos)).count()
    }
}
