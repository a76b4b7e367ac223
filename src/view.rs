use std::{
    fmt,
    io::{self, Write},
};

use crate::{traversal::Traverse, Environment, Status, World};

pub fn glyph(status: Status) -> char {
    match status {
        Status::Alive => '#',
        Status::Dead => '.',
    }
}

/// One line per row, top row first, rows separated by `\n`.
pub fn render<W>(world: &W) -> String
where
    W: World,
{
    let width = world.width() as usize;
    if width == 0 {
        return String::new();
    }
    let glyphs: Vec<char> = world.cells().map(|(_, status)| glyph(status)).collect();
    glyphs
        .chunks(width)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// 1-based terminal row, rows past what a terminal addresses stick to the last one.
fn terminal_row(index: usize, offset: u16) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX).saturating_add(offset)
}

/// Plays generations on a terminal, either redrawing in place or appending
/// plain frames.
pub struct View<O>
where
    O: Write,
{
    out: O,
    plain: bool,
}

impl<O> View<O>
where
    O: Write,
{
    pub fn new(out: O, plain: bool) -> Self {
        Self { out, plain }
    }

    pub fn display<W>(&mut self, generation: usize, world: &W) -> io::Result<()>
    where
        W: World,
    {
        let frame = render(world);
        if self.plain {
            writeln!(self.out, "generation {generation}")?;
            writeln!(self.out, "{frame}")?;
            writeln!(self.out)?;
        } else {
            let clear = termion::clear::All;
            write!(self.out, "{clear}")?;
            for (index, line) in frame.lines().enumerate() {
                let goto = termion::cursor::Goto(1, terminal_row(index, 1));
                write!(self.out, "{goto}{line}")?;
            }
            let goto = termion::cursor::Goto(1, terminal_row(world.height() as usize, 2));
            write!(self.out, "{goto}generation {generation}\r\n")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    #[test]
    fn test_render_rows() {
        let env = Environment::new(2, 3, [pos!(0, 0), pos!(2, 1)]);
        assert_eq!(render(&env), "#..\n..#");
        assert_eq!(env.to_string(), "#..\n..#");
    }

    #[test]
    fn test_render_tall_grid() {
        let env = Environment::new(3, 1, [pos!(0, 1)]);
        assert_eq!(render(&env), ".\n#\n.");
    }

    #[test]
    fn test_render_degenerate() {
        assert_eq!(render(&Environment::empty(4, 0)), "");
        assert_eq!(render(&Environment::empty(0, 4)), "");
    }

    #[test]
    fn test_plain_view() {
        let env = Environment::new(2, 2, [pos!(1, 0)]);
        let mut view = View::new(Vec::new(), true);
        view.display(7, &env).unwrap();
        let written = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(written, "generation 7\n.#\n..\n\n");
    }

    #[test]
    fn test_terminal_view_draws_every_row() {
        let env = Environment::new(2, 2, [pos!(1, 0)]);
        let mut view = View::new(Vec::new(), false);
        view.display(0, &env).unwrap();
        let written = String::from_utf8(view.into_inner()).unwrap();
        assert!(written.contains(".#"));
        assert!(written.contains(".."));
        assert!(written.contains("generation 0"));
    }

    #[test]
    fn test_terminal_rows_saturate() {
        assert_eq!(terminal_row(0, 1), 1);
        assert_eq!(terminal_row(70_000, 1), u16::MAX);
        assert_eq!(terminal_row(u16::MAX as usize - 1, 2), u16::MAX);

        let tall = Environment::new(70_000, 1, [pos!(0, 69_999)]);
        let mut view = View::new(Vec::new(), false);
        view.display(3, &tall).unwrap();
        let written = String::from_utf8(view.into_inner()).unwrap();
        assert!(written.contains("generation 3"));
    }
}
