//! Row-major walk over every coordinate of a [`World`].
//!
//! Index `i` maps to `(i % width, i / width)`, so grids do not have to be
//! square. Walks never touch the storage directly, they only go through
//! [`World::get_status`], hence dense and sparse worlds enumerate the same way.
//!
//! Two entry points are offered:
//! - [`Traverse::cells`] and [`Traverse::slice`] hand out a [`Traversal`], a
//!   regular iterator that plugs into `map`, `zip`, `take` and friends.
//! - [`Traverse::reduce`] folds with an explicit [`Step`] signal, letting the
//!   caller halt early or suspend and later [`Continuation::resume`].

use std::iter::FusedIterator;

use crate::{pos, Error, Pos, Result, Status, World};

/// What a reducing step wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
    Continue(A),
    Halt(A),
    Suspend(A),
}

/// How a reduction ended.
#[derive(Debug, Clone)]
pub enum Reduced<W, A> {
    /// Every coordinate was visited.
    Done(A),
    /// A step asked to stop, remaining coordinates were dropped.
    Halted(A),
    /// A step asked to pause, the continuation picks up at the next coordinate.
    Suspended(A, Continuation<W>),
}

impl<W, A> Reduced<W, A> {
    pub fn into_acc(self) -> A {
        match self {
            Reduced::Done(acc) | Reduced::Halted(acc) | Reduced::Suspended(acc, _) => acc,
        }
    }
}

/// A paused reduction. Resuming does not consume it: every call replays from
/// the same index against the same world.
#[derive(Debug, Clone)]
pub struct Continuation<W> {
    world: W,
    index: usize,
}

impl<W> Continuation<W>
where
    W: World,
{
    /// Index of the next coordinate to be visited.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn resume<A, F>(&self, acc: A, step: F) -> Reduced<W, A>
    where
        F: FnMut(A, (Pos, Status)) -> Step<A>,
    {
        reduce_from(&self.world, self.index, acc, step)
    }
}

/// Sides never exceed `i32::MAX`, so both components fit.
fn pos_at(width: u32, index: usize) -> Pos {
    let width = width as usize;
    pos!((index % width) as i32, (index / width) as i32)
}

fn reduce_from<W, A, F>(world: &W, start: usize, mut acc: A, mut step: F) -> Reduced<W, A>
where
    W: World,
    F: FnMut(A, (Pos, Status)) -> Step<A>,
{
    for index in start..world.count() {
        let pos = pos_at(world.width(), index);
        match step(acc, (pos, world.get_status(pos))) {
            Step::Continue(next) => acc = next,
            Step::Halt(acc) => return Reduced::Halted(acc),
            Step::Suspend(acc) => {
                let continuation = Continuation {
                    world: world.clone(),
                    index: index + 1,
                };
                return Reduced::Suspended(acc, continuation);
            }
        }
    }
    Reduced::Done(acc)
}

/// Sequence view available on every [`World`].
pub trait Traverse: World {
    fn cells(&self) -> Traversal<'_, Self> {
        Traversal {
            world: self,
            front: 0,
            back: self.count(),
        }
    }

    /// Number of coordinates, without walking them.
    fn count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    fn member(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
    }

    fn reduce<A, F>(&self, acc: A, step: F) -> Reduced<Self, A>
    where
        F: FnMut(A, (Pos, Status)) -> Step<A>,
    {
        reduce_from(self, 0, acc, step)
    }

    /// `length` consecutive coordinates starting at row-major index `start`.
    fn slice(&self, start: usize, length: usize) -> Result<Traversal<'_, Self>> {
        let count = self.count();
        match start.checked_add(length) {
            Some(end) if end <= count => Ok(Traversal {
                world: self,
                front: start,
                back: end,
            }),
            _ => Err(Error::SliceOutOfBounds {
                start,
                length,
                count,
            }),
        }
    }
}

impl<W> Traverse for W where W: World {}

/// Iterator over `(Pos, Status)` pairs of a contiguous index range.
#[derive(Debug, Clone)]
pub struct Traversal<'w, W> {
    world: &'w W,
    front: usize,
    back: usize,
}

impl<'w, W> Traversal<'w, W>
where
    W: World,
{
    fn at(&self, index: usize) -> (Pos, Status) {
        let pos = pos_at(self.world.width(), index);
        (pos, self.world.get_status(pos))
    }
}

impl<'w, W> Iterator for Traversal<'w, W>
where
    W: World,
{
    type Item = (Pos, Status);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'w, W> DoubleEndedIterator for Traversal<'w, W>
where
    W: World,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl<'w, W> ExactSizeIterator for Traversal<'w, W> where W: World {}

impl<'w, W> FusedIterator for Traversal<'w, W> where W: World {}
