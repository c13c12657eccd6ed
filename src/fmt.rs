use std::fmt;

use crate::{Configuration, Direction, Path, Tile, Vec2};

/// Prints the grid in the same format it is parsed from.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, tile) in self.cells() {
            write!(f, "{tile}")?;
            if pos.1 as usize == crate::SIZE - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tile::White => "W",
            Tile::Red => "R",
            Tile::Blue => "B",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{dir}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
