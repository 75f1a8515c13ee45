//! Projectile simulation.
//!
//! A projectile moves by its velocity each tick; the environment then
//! bends the velocity by gravity and wind. Positions are plotted on a
//! canvas with the y axis flipped so the ground is the bottom row.

use rt_core::Canvas;
use rt_math::{Color, Tuple4};
use tracing::trace;

/// A projectile: a point and a velocity vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Tuple4,
    pub velocity: Tuple4,
}

/// Constant forces applied every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Tuple4,
    pub wind: Tuple4,
}

/// Result of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    /// Ticks executed.
    pub ticks: usize,
    /// Positions that landed on the canvas.
    pub plotted: usize,
    /// `false` if the tick limit stopped the run first.
    pub landed: bool,
    /// State after the last tick.
    pub last: Projectile,
}

/// Advances the projectile by one step.
pub fn tick(env: &Environment, proj: Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

/// Canvas cell for a world position: x truncated, y flipped.
pub fn to_canvas(canvas: &Canvas, position: Tuple4) -> (i64, i64) {
    let x = position.x as i64;
    let y = i64::from(canvas.height()) - position.y as i64;
    (x, y)
}

/// Ticks until the projectile is at or below the ground, plotting every
/// new position. Off-canvas positions are skipped silently.
pub fn simulate(
    env: &Environment,
    start: Projectile,
    canvas: &mut Canvas,
    color: Color,
    max_ticks: usize,
) -> Flight {
    let mut proj = start;
    let mut ticks = 0;
    let mut plotted = 0;

    while proj.position.y > 0.0 && ticks < max_ticks {
        proj = tick(env, proj);
        ticks += 1;

        let (x, y) = to_canvas(canvas, proj.position);
        let hit = canvas.write_pixel(x, y, color);
        if hit {
            plotted += 1;
        }
        trace!(tick = ticks, x = proj.position.x, y = proj.position.y, hit, "tick");
    }

    Flight {
        ticks,
        plotted,
        landed: proj.position.y <= 0.0,
        last: proj,
    }
}
