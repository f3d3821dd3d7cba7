// Food policies: hunt it, avoid it, or take it when it is next to us

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{random_direction, step_towards, TurnContext};
use crate::geometry::manhattan_distance;
use crate::safety::{Contents, FOOD_ONLY};
use crate::types::{Coord, Direction};

/// Food still on the board that no rival head can reach next turn, nearest first
fn safe_food(ctx: &TurnContext) -> Vec<Coord> {
    let mut food: Vec<Coord> = ctx
        .food
        .iter()
        .copied()
        .filter(|&pos| ctx.safety.check_tile(pos, FOOD_ONLY).safe)
        .collect();
    food.sort_by_key(|&pos| manhattan_distance(ctx.head, pos));
    food
}

pub fn food_hunting<R: Rng + ?Sized>(ctx: &TurnContext, safe: &[(Direction, Contents)], rng: &mut R) -> Direction {
    for target in safe_food(ctx) {
        debug!("Looking for moves to safe food {}", target);

        if let Some(direction) = step_towards(ctx.head, target, safe) {
            return direction;
        }
    }

    warn!("Can't move toward any food from {}", ctx.head);
    random_direction(safe, rng)
}

/// Random safe move that avoids eating, unless food is all there is
pub fn avoid_food<R: Rng + ?Sized>(safe: &[(Direction, Contents)], rng: &mut R) -> Direction {
    let mut shuffled = safe.to_vec();
    shuffled.shuffle(rng);

    shuffled
        .iter()
        .find(|&&(_, contents)| contents != Contents::Food)
        .map(|&(direction, _)| direction)
        .unwrap_or_else(|| random_direction(safe, rng))
}

pub fn prefer_food<R: Rng + ?Sized>(safe: &[(Direction, Contents)], rng: &mut R) -> Direction {
    safe.iter()
        .find(|&&(_, contents)| contents == Contents::Food)
        .map(|&(direction, _)| direction)
        .unwrap_or_else(|| random_direction(safe, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::safety::{SafetyEvaluator, DEFAULT_ALLOWED};
    use crate::types::SnakeInfo;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snake(id: &str, coords: &[(i32, i32)]) -> SnakeInfo {
        SnakeInfo {
            id: id.to_string(),
            name: id.to_string(),
            coords: coords.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
            health: 20,
        }
    }

    #[test]
    fn test_hunting_ignores_contested_food() {
        // the close food at (4,2) sits next to the rival head at (5,2)
        let snakes = vec![snake("me", &[(2, 2), (2, 3)]), snake("rival", &[(5, 2), (6, 2)])];
        let food = [Coord::new(4, 2), Coord::new(0, 2)];
        let board = Board::build(7, 7, &food, &snakes);
        let safety = SafetyEvaluator::new(&board, &snakes[1..]);
        let ctx = TurnContext {
            head: Coord::new(2, 2),
            safety: &safety,
            food: &food,
        };
        let safe = safety.safe_directions(ctx.head, DEFAULT_ALLOWED);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(food_hunting(&ctx, &safe, &mut rng), Direction::Left);
    }

    #[test]
    fn test_hunting_ignores_food_under_a_snake() {
        let snakes = vec![snake("me", &[(2, 2), (2, 1), (1, 1)])];
        let food = [Coord::new(1, 1), Coord::new(4, 2)];
        let board = Board::build(5, 5, &food, &snakes);
        let safety = SafetyEvaluator::new(&board, &[]);
        let ctx = TurnContext {
            head: Coord::new(2, 2),
            safety: &safety,
            food: &food,
        };
        let safe = safety.safe_directions(ctx.head, DEFAULT_ALLOWED);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(food_hunting(&ctx, &safe, &mut rng), Direction::Right);
    }

    #[test]
    fn test_hunting_without_food_moves_safely() {
        let board = Board::build(3, 3, &[], &[]);
        let safety = SafetyEvaluator::new(&board, &[]);
        let ctx = TurnContext {
            head: Coord::new(0, 0),
            safety: &safety,
            food: &[],
        };
        let safe = safety.safe_directions(ctx.head, DEFAULT_ALLOWED);
        let mut rng = StdRng::seed_from_u64(3);

        let direction = food_hunting(&ctx, &safe, &mut rng);
        assert!(direction == Direction::Down || direction == Direction::Right);
    }

    #[test]
    fn test_avoid_food_skips_food_whatever_the_shuffle() {
        let safe = [
            (Direction::Up, Contents::Food),
            (Direction::Down, Contents::Food),
            (Direction::Left, Contents::Empty),
            (Direction::Right, Contents::Food),
        ];
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(avoid_food(&safe, &mut rng), Direction::Left);
        }
    }

    #[test]
    fn test_avoid_food_eats_when_forced() {
        let safe = [(Direction::Up, Contents::Food), (Direction::Right, Contents::Food)];
        let mut rng = StdRng::seed_from_u64(11);
        let direction = avoid_food(&safe, &mut rng);
        assert!(direction == Direction::Up || direction == Direction::Right);
    }

    #[test]
    fn test_avoid_food_is_reproducible_with_a_seed() {
        let safe = [
            (Direction::Up, Contents::Empty),
            (Direction::Down, Contents::Empty),
            (Direction::Left, Contents::Empty),
        ];
        let first = avoid_food(&safe, &mut StdRng::seed_from_u64(99));
        let second = avoid_food(&safe, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_prefer_food_takes_adjacent_food() {
        let safe = [(Direction::Up, Contents::Empty), (Direction::Left, Contents::Food)];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(prefer_food(&safe, &mut rng), Direction::Left);
    }
}
