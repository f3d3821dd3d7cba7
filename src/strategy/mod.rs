// Strategy selection and the movement policies it chooses between
//
// Every policy shares one contract: given our head, the safety evaluator and
// the food on the board, produce a direction. When no direction is safe the
// policy is skipped entirely and the turn resolves to the dying fallback.

pub mod corner;
pub mod food;

use log::warn;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::StrategyConfig;
use crate::safety::{Contents, SafetyEvaluator, DEFAULT_ALLOWED};
use crate::types::{Coord, Direction};

/// Direction returned when nothing is safe
pub const FALLBACK_DIRECTION: Direction = Direction::Up;
pub const DYING_TAUNT: &str = "dying";

/// A single move decision, optionally with a taunt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub taunt: Option<String>,
}

impl Decision {
    pub fn new(direction: Direction) -> Self {
        Decision {
            direction,
            taunt: None,
        }
    }

    pub fn dying() -> Self {
        Decision {
            direction: FALLBACK_DIRECTION,
            taunt: Some(DYING_TAUNT.to_string()),
        }
    }

    pub fn is_dying(&self) -> bool {
        self.taunt.as_deref() == Some(DYING_TAUNT)
    }
}

/// Everything a policy may look at for the current turn
pub struct TurnContext<'a> {
    pub head: Coord,
    pub safety: &'a SafetyEvaluator<'a>,
    pub food: &'a [Coord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Head for the nearest safe corner and circle inside it
    FindCorner,
    /// Wander randomly, stepping on food only when forced to
    AvoidFood,
    /// Head for the nearest food no rival can reach first
    FoodHunting,
    /// Circle the corner we are already next to. Never selected automatically.
    StayInCorner,
    /// Take adjacent food when offered. Never selected automatically.
    PreferFood,
}

impl StrategyKind {
    /// Decision table over our health and length
    ///
    /// Healthy short snakes grow in a corner, healthy long snakes stay short,
    /// hungry snakes go for food.
    pub fn select(health: i32, length: usize, config: &StrategyConfig) -> Self {
        if health > config.health_threshold {
            if length < config.corner_length_threshold {
                StrategyKind::FindCorner
            } else {
                StrategyKind::AvoidFood
            }
        } else {
            StrategyKind::FoodHunting
        }
    }

    pub fn act<R: Rng + ?Sized>(self, ctx: &TurnContext, rng: &mut R) -> Decision {
        let safe = ctx.safety.safe_directions(ctx.head, DEFAULT_ALLOWED);
        if safe.is_empty() {
            warn!("No safe direction from {}, falling back to {}", ctx.head, FALLBACK_DIRECTION);
            return Decision::dying();
        }

        let direction = match self {
            StrategyKind::FindCorner => corner::find_corner(ctx, &safe, rng),
            StrategyKind::StayInCorner => corner::stay_in_corner(ctx, &safe, rng),
            StrategyKind::AvoidFood => food::avoid_food(&safe, rng),
            StrategyKind::FoodHunting => food::food_hunting(ctx, &safe, rng),
            StrategyKind::PreferFood => food::prefer_food(&safe, rng),
        };

        Decision::new(direction)
    }
}

/// Uniform pick among `safe`
fn random_direction<R: Rng + ?Sized>(safe: &[(Direction, Contents)], rng: &mut R) -> Direction {
    safe.choose(rng)
        .map(|&(direction, _)| direction)
        .unwrap_or(FALLBACK_DIRECTION)
}

/// First candidate that shrinks the x or y gap to `target`, single axis only
fn step_towards(from: Coord, target: Coord, candidates: &[(Direction, Contents)]) -> Option<Direction> {
    candidates
        .iter()
        .map(|&(direction, _)| direction)
        .find(|direction| match direction {
            Direction::Left => target.x < from.x,
            Direction::Right => target.x > from.x,
            Direction::Up => target.y < from.y,
            Direction::Down => target.y > from.y,
        })
}
