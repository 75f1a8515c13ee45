//! Cannon command

use crate::sim::{simulate, Environment, Projectile};
use crate::CannonArgs;
use anyhow::{bail, Result};
use rt_math::Tuple4;
use tracing::{debug, info, warn};

pub fn run(args: CannonArgs, verbose: u8) -> Result<()> {
    let [sx, sy, sz] = args.start;
    let [dx, dy, dz] = args.direction;
    let [gx, gy, gz] = args.gravity;
    let [wx, wy, wz] = args.wind;

    let direction = Tuple4::vector(dx, dy, dz);
    if direction.magnitude() == 0.0 || !direction.is_finite() {
        bail!("Launch direction must be a finite non-zero vector, got {:?}", args.direction);
    }
    if !args.speed.is_finite() {
        bail!("Speed must be finite, got {}", args.speed);
    }

    let start = Projectile {
        position: Tuple4::point(sx, sy, sz),
        velocity: direction.normalize() * args.speed,
    };
    let env = Environment {
        gravity: Tuple4::vector(gx, gy, gz),
        wind: Tuple4::vector(wx, wy, wz),
    };
    debug!(?start, ?env, "launch");

    let mut canvas = super::new_canvas(args.width, args.height)?;
    let color = super::color_from(args.color);

    if verbose > 0 {
        println!(
            "Firing on {}x{} canvas, speed {}",
            args.width, args.height, args.speed
        );
    }

    let flight = simulate(&env, start, &mut canvas, color, args.max_ticks);
    debug!(position = ?flight.last.position, velocity = ?flight.last.velocity, "final state");
    if flight.landed {
        info!(ticks = flight.ticks, plotted = flight.plotted, "projectile landed");
    } else {
        warn!(ticks = flight.ticks, "tick limit reached before landing");
    }

    super::save_canvas(&args.output, &canvas)?;

    if flight.landed {
        println!("{} ticks to reach the ground", flight.ticks);
    } else {
        println!("Stopped after {} ticks without landing", flight.ticks);
    }
    if verbose > 0 {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
