// Grid arithmetic shared by the safety checks and the strategies

use crate::types::Coord;

/// Calculates Manhattan distance between two coordinates
pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// True for orthogonal neighbours only; diagonals and the tile itself are not adjacent
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    manhattan_distance(a, b) == 1
}

/// Number of tiles in a hollow square loop with the given side length
///
/// 2 -> 4, 3 -> 8, 4 -> 12, ...
///
/// # Panics
/// If `side` is smaller than 2, since no loop exists.
pub fn square_loop_length(side: usize) -> usize {
    assert!(side >= 2, "a square loop needs a side of at least 2");
    2 * side + 2 * (side - 2)
}

/// Smallest square loop side that a snake of `length` can circle without
/// running into its own tail
///
/// 1 -> 2, 3 -> 2, 4 -> 3, 8 -> 4
pub fn safe_square_size(length: usize) -> usize {
    let mut side = 2;
    while square_loop_length(side) <= length {
        side += 1;
    }
    side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(Coord::new(0, 0), Coord::new(3, 4)), 7);
        assert_eq!(manhattan_distance(Coord::new(3, 4), Coord::new(0, 0)), 7);
        assert_eq!(manhattan_distance(Coord::new(2, 2), Coord::new(2, 2)), 0);
    }

    #[test]
    fn test_adjacency_is_orthogonal_only() {
        let centre = Coord::new(2, 2);
        assert!(is_adjacent(centre, Coord::new(2, 3)));
        assert!(is_adjacent(centre, Coord::new(1, 2)));
        assert!(!is_adjacent(centre, Coord::new(3, 3)));
        assert!(!is_adjacent(centre, centre));
    }

    #[test]
    fn test_square_loop_length() {
        assert_eq!(square_loop_length(2), 4);
        assert_eq!(square_loop_length(3), 8);
        assert_eq!(square_loop_length(4), 12);
    }

    #[test]
    #[should_panic]
    fn test_square_loop_rejects_degenerate_side() {
        square_loop_length(1);
    }

    #[test]
    fn test_safe_square_size() {
        assert_eq!(safe_square_size(1), 2);
        assert_eq!(safe_square_size(3), 2);
        assert_eq!(safe_square_size(4), 3);
        assert_eq!(safe_square_size(8), 4);
    }
}
