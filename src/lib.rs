//! Conway's game of life on a bounded, sparse, persistent grid.
//!
//! ```
//! use lifegrid::{pos, tick, Environment, Status, World};
//!
//! let blinker = Environment::new(5, 5, [pos!(1, 2), pos!(2, 2), pos!(3, 2)]);
//! let next = tick(&blinker);
//! assert_eq!(next.get_status(pos!(2, 1)), Status::Alive);
//! assert_eq!(blinker.get_status(pos!(2, 1)), Status::Dead);
//! ```

pub use utils::{Pos, NEIGHBOR_OFFSETS};
mod utils;

pub use error::{Error, Result};
mod error;

pub use world::{Environment, Status, World, MAX_SIDE};
pub mod world;

pub use sim::{neighbor_count, next_status, tick, Generations};
mod sim;

pub use traversal::{Continuation, Reduced, Step, Traversal, Traverse};
pub mod traversal;

pub use view::{glyph, render, View};
mod view;

pub use pattern::{parse, Pattern};
pub mod pattern;
