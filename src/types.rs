// Battlesnake API Types
// Coordinates travel as [x, y] pairs, y grows towards the bottom of the board

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl From<[i32; 2]> for Coord {
    fn from([x, y]: [i32; 2]) -> Self {
        Coord { x, y }
    }
}

impl From<Coord> for [i32; 2] {
    fn from(coord: Coord) -> Self {
        [coord.x, coord.y]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "north")]
    Up,
    #[serde(rename = "south")]
    Down,
    #[serde(rename = "west")]
    Left,
    #[serde(rename = "east")]
    Right,
}

impl Direction {
    /// Returns all possible directions, in tie-break order
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "north",
            Direction::Down => "south",
            Direction::Left => "west",
            Direction::Right => "east",
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Direction::Up => Coord { x: coord.x, y: coord.y - 1 },
            Direction::Down => Coord { x: coord.x, y: coord.y + 1 },
            Direction::Left => Coord { x: coord.x - 1, y: coord.y },
            Direction::Right => Coord { x: coord.x + 1, y: coord.y },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snake representation as sent by the game server
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SnakeInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Segments, head first
    pub coords: Vec<Coord>,
    #[serde(alias = "health_points")]
    pub health: i32,
}

impl SnakeInfo {
    pub fn head(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    pub fn length(&self) -> usize {
        self.coords.len()
    }
}

/// Complete turn snapshot received from the API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MoveRequest {
    #[serde(default)]
    pub game_id: Option<String>,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub turn: i32,
    #[serde(default)]
    pub food: Vec<Coord>,
    pub snakes: Vec<SnakeInfo>,
}
