//! Plain text patterns: one line per row, `#` for alive, anything else dead.
//! This is the format [`crate::render`] produces.

use std::str::FromStr;

use log::debug;

use crate::{pos, Environment, Error, Pos, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub actives: Vec<Pos>,
    pub width: u32,
    pub height: u32,
}

impl Pattern {
    /// Places the pattern at the origin of a `width`x`height` grid.
    pub fn into_environment(self, height: u32, width: u32) -> Result<Environment> {
        if self.width > width || self.height > height {
            return Err(Error::PatternOutOfBounds {
                width: self.width,
                height: self.height,
                max_width: width,
                max_height: height,
            });
        }
        Ok(Environment::new(height, width, self.actives))
    }
}

pub fn parse(str: &str) -> Pattern {
    let mut actives = vec![];
    let mut width = 0;
    let mut height = 0;
    for (y, line) in str.lines().enumerate() {
        let mut x = 0;
        for c in line.chars() {
            if c == '#' {
                actives.push(pos!(x, y as i32));
            }
            x += 1;
        }
        width = width.max(x as u32);
        height = y as u32 + 1;
    }
    debug!("parsed a {width}x{height} pattern with {} alive cells", actives.len());
    Pattern {
        actives,
        width,
        height,
    }
}

impl FromStr for Environment {
    type Err = Error;

    /// The grid is sized to the extent of the text.
    fn from_str(str: &str) -> Result<Self> {
        let pattern = parse(str);
        let (height, width) = (pattern.height, pattern.width);
        pattern.into_environment(height, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Status, World};

    #[test]
    fn test_parse() {
        let pattern = parse(".#.\n..#\n###\n");
        assert_eq!(pattern.width, 3);
        assert_eq!(pattern.height, 3);
        assert_eq!(
            pattern.actives,
            vec![pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
        );
    }

    #[test]
    fn test_ragged_rows_take_the_widest() {
        let pattern = parse("#\r\n...#\n");
        assert_eq!((pattern.width, pattern.height), (4, 2));
        assert_eq!(pattern.actives, vec![pos!(0, 0), pos!(3, 1)]);
    }

    #[test]
    fn test_into_environment_bounds() {
        let pattern = parse("####\n");
        assert!(matches!(
            pattern.clone().into_environment(5, 3),
            Err(Error::PatternOutOfBounds { width: 4, .. })
        ));
        let env = pattern.into_environment(5, 5).unwrap();
        assert_eq!(env.width(), 5);
        assert_eq!(env.get_status(pos!(3, 0)), Status::Alive);
    }

    #[test]
    fn test_reads_back_render() {
        let env = Environment::new(2, 4, [pos!(0, 0), pos!(3, 1)]);
        let text = render(&env);
        assert_eq!(text.parse::<Environment>().unwrap(), env);
    }
}
