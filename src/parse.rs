use std::path::{Path as FsPath, PathBuf};
use std::str::FromStr;

use crate::{Configuration, Direction, Path, Tile, Vec2, SIZE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid tile {ch:?} at {pos}")]
    InvalidTile { ch: char, pos: Vec2 },
    #[error("row {row} has {width} tiles, expecting {}", SIZE)]
    WrongWidth { row: usize, width: usize },
    #[error("found {rows} rows, expecting {}", SIZE)]
    TooFewRows { rows: usize },
    #[error("more than {} rows", SIZE)]
    TooManyRows,
    #[error("no white tile")]
    MissingWhite,
    #[error("second white tile found at {pos}, previously at {previous}")]
    SecondWhite { pos: Vec2, previous: Vec2 },
    #[error("found {found} {tile:?} tiles, expecting {expected}")]
    TileCount {
        tile: Tile,
        expected: usize,
        found: usize,
    },
    #[error("invalid direction {ch:?}")]
    InvalidDirection { ch: char },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed configuration in {}", path.display())]
    Format { path: PathBuf, source: ParseError },
}

impl Tile {
    fn from_char(ch: char) -> Option<Self> {
        Some(match ch.to_ascii_uppercase() {
            'W' => Tile::White,
            'R' => Tile::Red,
            'B' => Tile::Blue,
            _ => return None,
        })
    }
}

impl FromStr for Configuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Tile::Red; SIZE]; SIZE];
        let mut white = None;

        let mut rows = 0;
        for (line, x) in s.trim().lines().map(str::trim).zip(0..) {
            if x >= SIZE {
                return Err(ParseError::TooManyRows);
            }
            let width = line.chars().count();
            if width != SIZE {
                return Err(ParseError::WrongWidth { row: x, width });
            }
            for (ch, y) in line.chars().zip(0..) {
                let pos = Vec2(x as u8, y as u8);
                let tile = Tile::from_char(ch).ok_or(ParseError::InvalidTile { ch, pos })?;
                if tile == Tile::White {
                    if let Some(previous) = white {
                        return Err(ParseError::SecondWhite { pos, previous });
                    }
                    white = Some(pos);
                }
                cells[x][y] = tile;
            }
            rows += 1;
        }
        if rows < SIZE {
            return Err(ParseError::TooFewRows { rows });
        }

        let white = white.ok_or(ParseError::MissingWhite)?;
        let config = Configuration::from_cells(cells, white);
        for tile in [Tile::Red, Tile::Blue] {
            let (expected, found) = (tile.expected_count(), config.count(tile));
            if expected != found {
                return Err(ParseError::TileCount {
                    tile,
                    expected,
                    found,
                });
            }
        }
        log::debug!("Parsed configuration with white at {white}");
        Ok(config)
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|ch| Direction::from_letter(ch).ok_or(ParseError::InvalidDirection { ch }))
            .collect()
    }
}

impl Configuration {
    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        content.parse().map_err(|source| LoadError::Format {
            path: path.to_owned(),
            source,
        })
    }
}
