// Per-turn tile grid built from the raw snapshot
//
// The grid is a flat vector indexed by y * width + x. It is built once per
// turn and never mutated afterwards.

use log::warn;
use std::fmt;

use crate::types::{Coord, SnakeInfo};

/// What currently occupies a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    Empty,
    Food,
    Head,
    Body,
}

/// Largest width or height accepted from a snapshot
pub const MAX_SIDE: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    pub state: TileState,
    /// Id of the snake covering this tile, borrowed from the snapshot
    pub owner: Option<&'a str>,
}

impl Tile<'_> {
    const EMPTY: Tile<'static> = Tile {
        state: TileState::Empty,
        owner: None,
    };
}

#[derive(Debug, Clone)]
pub struct Board<'a> {
    width: i32,
    height: i32,
    tiles: Vec<Tile<'a>>,
}

/// True when `width` x `height` is a board we are willing to allocate
pub fn valid_dimensions(width: i32, height: i32) -> bool {
    (1..=MAX_SIDE).contains(&width) && (1..=MAX_SIDE).contains(&height)
}

impl<'a> Board<'a> {
    /// Builds the grid: everything empty, then food, then each snake in
    /// snapshot order. Later writes win.
    ///
    /// Coordinates outside the declared dimensions are skipped. Callers check
    /// `valid_dimensions` first; anything else builds an empty board.
    pub fn build(width: i32, height: i32, food: &[Coord], snakes: &'a [SnakeInfo]) -> Self {
        let (width, height) = if valid_dimensions(width, height) { (width, height) } else { (0, 0) };
        let size = (width as usize) * (height as usize);
        let mut board = Board {
            width,
            height,
            tiles: vec![Tile::EMPTY; size],
        };

        for &coord in food {
            board.overlay(coord, TileState::Food, None);
        }

        for snake in snakes {
            for (i, &coord) in snake.coords.iter().enumerate() {
                let state = if i == 0 { TileState::Head } else { TileState::Body };
                board.overlay(coord, state, Some(snake.id.as_str()));
            }
        }

        board
    }

    fn overlay(&mut self, coord: Coord, state: TileState, owner: Option<&'a str>) {
        match self.index(coord) {
            Some(idx) => {
                self.tiles[idx] = Tile { state, owner };
            }
            None => warn!(
                "Ignoring {:?} at {}, outside the {}x{} board",
                state, coord, self.width, self.height
            ),
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    /// Tile at `coord`, or `None` when off the board
    pub fn tile(&self, coord: Coord) -> Option<&Tile<'a>> {
        self.index(coord).map(|idx| &self.tiles[idx])
    }

    pub fn state(&self, coord: Coord) -> Option<TileState> {
        self.tile(coord).map(|tile| tile.state)
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Coord; 4] {
        [
            Coord::new(0, 0),
            Coord::new(self.width - 1, 0),
            Coord::new(0, self.height - 1),
            Coord::new(self.width - 1, self.height - 1),
        ]
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = match self.state(Coord::new(x, y)) {
                    Some(TileState::Food) => '*',
                    Some(TileState::Head) => 'H',
                    Some(TileState::Body) => '#',
                    _ => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
