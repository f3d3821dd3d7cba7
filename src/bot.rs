// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// One decision per request: every turn rebuilds the board from the snapshot,
// picks a strategy from our health and length, and lets it choose a direction.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::board::{valid_dimensions, Board};
use crate::config::Config;
use crate::error::DecisionError;
use crate::geometry::safe_square_size;
use crate::safety::SafetyEvaluator;
use crate::strategy::{Decision, StrategyKind, TurnContext};
use crate::types::{MoveRequest, SnakeInfo};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    pub fn new(config: Config) -> Self {
        Bot { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns bot appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "color": self.config.snake.color,
            "head": self.config.snake.head_url,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game_id: Option<&str>) -> Value {
        info!("GAME START {}", game_id.unwrap_or("-"));

        json!({ "taunt": self.config.taunts.start })
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game_id: Option<&str>) -> Value {
        info!("GAME OVER {}", game_id.unwrap_or("-"));

        json!({ "taunt": self.config.taunts.end })
    }

    /// Computes the next move and wraps it for the API
    /// Corresponds to POST /move endpoint
    pub fn get_move(&self, request: &MoveRequest) -> Result<Value, DecisionError> {
        let decision = self.decide(request)?;

        info!(
            "Turn {}: Chose {} (taunt: {:?})",
            request.turn,
            decision.direction.as_str(),
            decision.taunt
        );

        Ok(json!({
            "move": decision.direction,
            "taunt": decision.taunt,
        }))
    }

    /// Picks a direction for our snake in `request`
    ///
    /// # Errors
    /// Fails when the board dimensions are non-positive or too large to
    /// allocate, when our configured id is missing from the snapshot, or when
    /// our snake has no head to move.
    pub fn decide(&self, request: &MoveRequest) -> Result<Decision, DecisionError> {
        if !valid_dimensions(request.width, request.height) {
            return Err(DecisionError::InvalidBoard {
                width: request.width,
                height: request.height,
            });
        }

        let id = &self.config.snake.id;
        let you = request
            .snakes
            .iter()
            .find(|snake| &snake.id == id)
            .ok_or_else(|| DecisionError::SnakeNotFound { id: id.clone() })?;
        let head = you
            .head()
            .ok_or_else(|| DecisionError::EmptySnake { id: id.clone() })?;

        // Dead snakes and anything stacked on our own head are not rivals
        let rivals: Vec<SnakeInfo> = request
            .snakes
            .iter()
            .filter(|snake| snake.id != you.id)
            .filter(|snake| matches!(snake.head(), Some(h) if h != head))
            .cloned()
            .collect();

        let board = Board::build(request.width, request.height, &request.food, &request.snakes);
        let safety = SafetyEvaluator::new(&board, &rivals);
        let ctx = TurnContext {
            head,
            safety: &safety,
            food: &request.food,
        };

        let strategy = StrategyKind::select(you.health, you.length(), &self.config.strategy);
        info!(
            "Turn {}: STRATEGY {:?} (health {}, length {}, {} rivals)",
            request.turn,
            strategy,
            you.health,
            you.length(),
            rivals.len()
        );
        if strategy == StrategyKind::FindCorner {
            debug!(
                "Corner loop for length {} needs a side of {}",
                you.length(),
                safe_square_size(you.length())
            );
        }
        debug!("Board at turn {}:\n{}", request.turn, board);

        let mut rng = self.rng_for_turn(request.turn);
        Ok(strategy.act(&ctx, &mut rng))
    }

    /// Seeded from `rng_seed + turn` when a seed is configured, so a game replays identically
    fn rng_for_turn(&self, turn: i32) -> StdRng {
        match self.config.strategy.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(turn as u64)),
            None => StdRng::from_os_rng(),
        }
    }
}
