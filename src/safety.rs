// Tile safety checks with one-step collision prediction against rival heads

use crate::board::{Board, TileState};
use crate::geometry::is_adjacent;
use crate::types::{Coord, Direction, SnakeInfo};

/// Moving onto empty tiles or food
pub const DEFAULT_ALLOWED: &[TileState] = &[TileState::Empty, TileState::Food];
pub const EMPTY_ONLY: &[TileState] = &[TileState::Empty];
pub const FOOD_ONLY: &[TileState] = &[TileState::Food];

/// What a safety check observed at a tile
///
/// Boundary and Collision never appear on the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contents {
    Empty,
    Food,
    Head,
    Body,
    Boundary,
    Collision,
}

impl From<TileState> for Contents {
    fn from(state: TileState) -> Self {
        match state {
            TileState::Empty => Contents::Empty,
            TileState::Food => Contents::Food,
            TileState::Head => Contents::Head,
            TileState::Body => Contents::Body,
        }
    }
}

/// Result of checking a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCheck {
    pub safe: bool,
    pub contents: Contents,
}

pub struct SafetyEvaluator<'a> {
    board: &'a Board<'a>,
    rivals: &'a [SnakeInfo],
}

impl<'a> SafetyEvaluator<'a> {
    pub fn new(board: &'a Board<'a>, rivals: &'a [SnakeInfo]) -> Self {
        SafetyEvaluator { board, rivals }
    }

    pub fn board(&self) -> &'a Board<'a> {
        self.board
    }

    /// Checks boundaries, then the tile state against `allowed`, then whether
    /// any rival head could step onto `pos` next turn
    pub fn check_tile(&self, pos: Coord, allowed: &[TileState]) -> TileCheck {
        let state = match self.board.state(pos) {
            Some(state) => state,
            None => {
                return TileCheck {
                    safe: false,
                    contents: Contents::Boundary,
                }
            }
        };

        let mut check = TileCheck {
            safe: allowed.contains(&state),
            contents: state.into(),
        };

        let contested = self
            .rivals
            .iter()
            .filter_map(SnakeInfo::head)
            .any(|head| is_adjacent(head, pos));
        if contested {
            check.safe = false;
            check.contents = Contents::Collision;
        }

        check
    }

    pub fn check_direction(&self, from: Coord, direction: Direction, allowed: &[TileState]) -> TileCheck {
        self.check_tile(direction.apply(&from), allowed)
    }

    /// Every direction whose target passes `check_tile`, in `Direction::all` order
    pub fn safe_directions(&self, from: Coord, allowed: &[TileState]) -> Vec<(Direction, Contents)> {
        Direction::all()
            .iter()
            .filter_map(|&direction| {
                let check = self.check_direction(from, direction, allowed);
                if check.safe {
                    Some((direction, check.contents))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(id: &str, coords: &[(i32, i32)]) -> SnakeInfo {
        SnakeInfo {
            id: id.to_string(),
            name: id.to_string(),
            coords: coords.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
            health: 100,
        }
    }

    #[test]
    fn test_boundary_is_unsafe() {
        let board = Board::build(3, 3, &[], &[]);
        let evaluator = SafetyEvaluator::new(&board, &[]);

        let check = evaluator.check_tile(Coord::new(-1, 0), DEFAULT_ALLOWED);
        assert_eq!(check, TileCheck { safe: false, contents: Contents::Boundary });
        assert!(!evaluator.check_tile(Coord::new(0, 3), DEFAULT_ALLOWED).safe);
    }

    #[test]
    fn test_boundary_beats_collision() {
        let rivals = vec![snake("r", &[(0, 0)])];
        let board = Board::build(3, 3, &[], &rivals);
        let evaluator = SafetyEvaluator::new(&board, &rivals);

        let check = evaluator.check_tile(Coord::new(-1, 0), DEFAULT_ALLOWED);
        assert_eq!(check.contents, Contents::Boundary);
    }

    #[test]
    fn test_disallowed_state_reports_contents() {
        let snakes = vec![snake("me", &[(1, 1), (1, 2)])];
        let board = Board::build(3, 3, &[Coord::new(2, 2)], &snakes);
        let evaluator = SafetyEvaluator::new(&board, &[]);

        let body = evaluator.check_tile(Coord::new(1, 2), DEFAULT_ALLOWED);
        assert_eq!(body, TileCheck { safe: false, contents: Contents::Body });

        let food = evaluator.check_tile(Coord::new(2, 2), EMPTY_ONLY);
        assert_eq!(food, TileCheck { safe: false, contents: Contents::Food });

        let food = evaluator.check_tile(Coord::new(2, 2), DEFAULT_ALLOWED);
        assert_eq!(food, TileCheck { safe: true, contents: Contents::Food });
    }

    #[test]
    fn test_tile_next_to_rival_head_is_contested() {
        let rivals = vec![snake("r", &[(3, 3), (3, 4)])];
        let board = Board::build(6, 6, &[Coord::new(2, 3)], &rivals);
        let evaluator = SafetyEvaluator::new(&board, &rivals);

        // food, empty, empty and the rival's own body all count as contested
        assert_eq!(board.state(Coord::new(3, 4)), Some(TileState::Body));
        for pos in [Coord::new(2, 3), Coord::new(4, 3), Coord::new(3, 2), Coord::new(3, 4)] {
            let check = evaluator.check_tile(pos, DEFAULT_ALLOWED);
            assert_eq!(check, TileCheck { safe: false, contents: Contents::Collision }, "at {}", pos);
        }

        // diagonal to the head is fine
        assert!(evaluator.check_tile(Coord::new(2, 2), DEFAULT_ALLOWED).safe);
    }

    #[test]
    fn test_dead_rival_is_ignored() {
        let rivals = vec![snake("r", &[])];
        let board = Board::build(3, 3, &[], &[]);
        let evaluator = SafetyEvaluator::new(&board, &rivals);
        assert_eq!(evaluator.safe_directions(Coord::new(1, 1), DEFAULT_ALLOWED).len(), 4);
    }

    #[test]
    fn test_safe_directions_never_leave_board() {
        let board = Board::build(2, 2, &[], &[]);
        let evaluator = SafetyEvaluator::new(&board, &[]);

        for x in 0..2 {
            for y in 0..2 {
                let from = Coord::new(x, y);
                let safe = evaluator.safe_directions(from, DEFAULT_ALLOWED);
                assert!(safe.len() <= 4);
                assert!(safe.iter().all(|(d, _)| board.contains(d.apply(&from))));
            }
        }

        let corner = evaluator.safe_directions(Coord::new(0, 0), DEFAULT_ALLOWED);
        assert_eq!(
            corner,
            vec![(Direction::Down, Contents::Empty), (Direction::Right, Contents::Empty)]
        );
    }

    #[test]
    fn test_rival_below_excludes_down() {
        let snakes = vec![snake("me", &[(2, 2), (2, 1)]), snake("r", &[(2, 3), (3, 3)])];
        let board = Board::build(5, 5, &[], &snakes);
        let evaluator = SafetyEvaluator::new(&board, &snakes[1..]);

        let directions: Vec<_> = evaluator
            .safe_directions(Coord::new(2, 2), DEFAULT_ALLOWED)
            .into_iter()
            .map(|(d, _)| d)
            .collect();
        assert!(!directions.contains(&Direction::Down));
        assert!(!directions.contains(&Direction::Up));
        assert_eq!(directions, vec![Direction::Left, Direction::Right]);
    }
}
