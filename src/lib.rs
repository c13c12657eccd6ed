use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index, IndexMut};

use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod progress;
pub mod solve;

pub use parse::{LoadError, ParseError};

/// Side length of the grid.
pub const SIZE: usize = 4;
pub const RED_COUNT: usize = 7;
pub const BLUE_COUNT: usize = 8;

/// Color of a single tile. The declaration order is the order used when
/// comparing configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    White = 0,
    Red,
    Blue,
}

impl Tile {
    /// How many tiles of this color a valid configuration holds.
    pub fn expected_count(self) -> usize {
        match self {
            Tile::White => 1,
            Tile::Red => RED_COUNT,
            Tile::Blue => BLUE_COUNT,
        }
    }
}

/// Direction the white tile travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Expansion order of the search. Changing it changes which of several
    /// equally short paths is reported.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Right => 'R',
            Direction::Down => 'D',
            Direction::Left => 'L',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        Some(match ch.to_ascii_uppercase() {
            'U' => Direction::Up,
            'R' => Direction::Right,
            'D' => Direction::Down,
            'L' => Direction::Left,
            _ => return None,
        })
    }
}

/// `(row, column)`, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2(pub u8, pub u8);

impl Vec2 {
    fn sibling(self, dir: Direction) -> Option<Vec2> {
        const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
        let x = self.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let y = self.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if SIZE <= x as usize || SIZE <= y as usize {
            return None;
        }
        Some(Vec2(x, y))
    }
}

/// Moves recorded on the way from the start configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Direction>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dir: Direction) {
        self.0.push(dir);
    }
}

impl Deref for Path {
    type Target = [Direction];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The 16 cells packed two bits each, first cell in the highest bits, so that
/// comparing two layouts numerically compares their grids row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layout(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("white tile at {white} cannot move {dir:?}")]
pub struct GoError {
    pub dir: Direction,
    pub white: Vec2,
}

/// One arrangement of the grid, together with the moves that produced it.
///
/// Equality, ordering and hashing only look at the cells: two configurations
/// reached by different paths are the same search state.
#[derive(Debug, Clone)]
pub struct Configuration {
    cells: [[Tile; SIZE]; SIZE],
    white: Vec2,
    path: Path,
}

impl Index<Vec2> for Configuration {
    type Output = Tile;
    fn index(&self, pos: Vec2) -> &Self::Output {
        &self.cells[pos.0 as usize][pos.1 as usize]
    }
}
impl IndexMut<Vec2> for Configuration {
    fn index_mut(&mut self, pos: Vec2) -> &mut Self::Output {
        &mut self.cells[pos.0 as usize][pos.1 as usize]
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}
impl Eq for Configuration {}

impl PartialOrd for Configuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Configuration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.layout().cmp(&other.layout())
    }
}

impl Hash for Configuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.layout().hash(state);
    }
}

impl Configuration {
    /// Callers guarantee `cells[white] == White`.
    fn from_cells(cells: [[Tile; SIZE]; SIZE], white: Vec2) -> Self {
        debug_assert_eq!(cells[white.0 as usize][white.1 as usize], Tile::White);
        Self {
            cells,
            white,
            path: Path::new(),
        }
    }

    pub fn white(&self) -> Vec2 {
        self.white
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cells(&self) -> impl Iterator<Item = (Vec2, Tile)> + '_ {
        self.cells.iter().zip(0..).flat_map(|(row, x)| {
            row.iter()
                .zip(0..)
                .map(move |(&tile, y)| (Vec2(x, y), tile))
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells().filter(|&(_, t)| t == tile).count()
    }

    pub fn layout(&self) -> Layout {
        Layout(
            self.cells()
                .fold(0, |acc, (_, tile)| (acc << 2) | tile as u32),
        )
    }

    pub fn can_move(&self, dir: Direction) -> bool {
        self.white.sibling(dir).is_some()
    }

    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    /// Swap the white tile with its neighbour in `dir`. The path is left
    /// untouched; see [`Configuration::record`].
    pub fn go(&mut self, dir: Direction) -> Result<(), GoError> {
        let white = self.white;
        let target = white.sibling(dir).ok_or(GoError { dir, white })?;
        self[white] = self[target];
        self[target] = Tile::White;
        self.white = target;
        Ok(())
    }

    pub fn record(&mut self, dir: Direction) {
        self.path.push(dir);
    }

    /// Perform and record every move of `path` in order. Stops at the first
    /// illegal move, leaving the moves before it applied.
    pub fn apply(&mut self, path: &Path) -> Result<(), GoError> {
        for &dir in path {
            self.go(dir)?;
            self.record(dir);
        }
        Ok(())
    }
}
