// Corner policies: approach the nearest safe corner and circle inside it

use log::{debug, warn};
use rand::Rng;

use super::{random_direction, step_towards, TurnContext};
use crate::geometry::{is_adjacent, manhattan_distance};
use crate::safety::{Contents, EMPTY_ONLY};
use crate::types::{Coord, Direction};

/// Corners that are empty and out of every rival's reach, nearest first.
/// Ties keep the board's corner order.
fn safe_corners(ctx: &TurnContext) -> Vec<Coord> {
    let mut corners: Vec<Coord> = ctx
        .safety
        .board()
        .corners()
        .iter()
        .copied()
        .filter(|&corner| ctx.safety.check_tile(corner, EMPTY_ONLY).safe)
        .collect();
    corners.sort_by_key(|&corner| manhattan_distance(ctx.head, corner));
    corners.dedup();
    corners
}

/// Step that keeps us circling a corner we are next to.
///
/// Beside the corner along its wall row we turn inwards vertically; beside it
/// along its wall column we turn inwards horizontally.
fn hug_direction(head: Coord, corner: Coord, empty: &[(Direction, Contents)]) -> Option<Direction> {
    let inward_vertical = if corner.y == 0 { Direction::Down } else { Direction::Up };
    let inward_horizontal = if corner.x == 0 { Direction::Right } else { Direction::Left };
    let open = |direction: Direction| empty.iter().any(|&(d, _)| d == direction);

    if head.x != corner.x && open(inward_vertical) {
        return Some(inward_vertical);
    }
    if head.y != corner.y && open(inward_horizontal) {
        return Some(inward_horizontal);
    }
    None
}

pub fn find_corner<R: Rng + ?Sized>(ctx: &TurnContext, safe: &[(Direction, Contents)], rng: &mut R) -> Direction {
    let empty = ctx.safety.safe_directions(ctx.head, EMPTY_ONLY);

    for corner in safe_corners(ctx) {
        debug!("Looking for moves to safe corner {}", corner);

        if is_adjacent(ctx.head, corner) {
            if let Some(direction) = hug_direction(ctx.head, corner, &empty) {
                return direction;
            }
        }

        if let Some(direction) = step_towards(ctx.head, corner, &empty) {
            return direction;
        }
    }

    warn!("Can't move toward any corner from {}", ctx.head);
    random_direction(safe, rng)
}

pub fn stay_in_corner<R: Rng + ?Sized>(ctx: &TurnContext, safe: &[(Direction, Contents)], rng: &mut R) -> Direction {
    let empty = ctx.safety.safe_directions(ctx.head, EMPTY_ONLY);

    let hug = safe_corners(ctx)
        .into_iter()
        .filter(|&corner| is_adjacent(ctx.head, corner))
        .find_map(|corner| hug_direction(ctx.head, corner, &empty));

    hug.unwrap_or_else(|| {
        warn!("Can't stay in a corner from {}", ctx.head);
        random_direction(safe, rng)
    })
}
