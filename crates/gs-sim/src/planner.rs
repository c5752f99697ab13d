//! Path step → move direction.

use gs_core::{Cell, Direction};

use crate::{SimError, SimResult};

/// Direction for moving from `head` to `next`, never reversing `current`.
///
/// If the step would reverse the snake onto itself, `current` is kept.
/// `next` must be adjacent to `head`; anything else is a
/// [`SimError::NonAdjacentStep`].
pub fn plan_direction(current: Direction, head: Cell, next: Cell) -> SimResult<Direction> {
    let wanted = Direction::between(head, next)
        .ok_or(SimError::NonAdjacentStep { from: head, to: next })?;
    if wanted == current.opposite() {
        Ok(current)
    } else {
        Ok(wanted)
    }
}
