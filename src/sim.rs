use log::trace;

use crate::{
    traversal::{Step, Traverse},
    Pos, Status, World,
};

/// Alive cells among the eight surrounding positions. The grid does not wrap,
/// neighbors past an edge read as dead.
pub fn neighbor_count<W>(world: &W, pos: Pos) -> u8
where
    W: World,
{
    pos.neighbors()
        .filter(|&neighbor| world.get_status(neighbor).is_alive())
        .count() as u8
}

/// The status a cell takes in the next generation, or `None` when it keeps its
/// current one.
pub fn next_status(status: Status, neighbor_count: u8) -> Option<Status> {
    match (status, neighbor_count) {
        (Status::Alive, count) if count < 2 => Some(Status::Dead), // underpopulation
        (Status::Alive, count) if count > 3 => Some(Status::Dead), // overpopulation
        (Status::Dead, 3) => Some(Status::Alive),                  // birth
        _ => None,
    }
}

/// Computes the next generation.
///
/// Every count is taken on `seed`, writes go to a separate copy, so the order
/// in which cells are visited never matters.
pub fn tick<W>(seed: &W) -> W
where
    W: World,
{
    let next = seed
        .reduce(seed.clone(), |mut environment, (pos, status)| {
            if let Some(next) = next_status(status, neighbor_count(seed, pos)) {
                environment.set_status(pos, next);
            }
            Step::Continue(environment)
        })
        .into_acc();
    trace!("tick produced {} alive cells", next.population());
    next
}

/// Successive generations of a world, starting with the seed itself.
#[derive(Debug, Clone)]
pub struct Generations<W> {
    current: W,
}

impl<W> Generations<W>
where
    W: World,
{
    pub fn new(seed: W) -> Self {
        Self { current: seed }
    }
}

impl<W> Iterator for Generations<W>
where
    W: World,
{
    type Item = W;

    fn next(&mut self) -> Option<Self::Item> {
        let next = tick(&self.current);
        Some(std::mem::replace(&mut self.current, next))
    }
}
