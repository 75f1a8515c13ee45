//! Blank command

use crate::BlankArgs;
use anyhow::Result;
use tracing::info;

pub fn run(args: BlankArgs, verbose: u8) -> Result<()> {
    let mut canvas = super::new_canvas(args.width, args.height)?;
    let color = super::color_from(args.color);
    canvas.fill(color);

    if verbose > 0 {
        println!("Filling {}x{} with {:?}", args.width, args.height, args.color);
    }

    super::save_canvas(&args.output, &canvas)?;
    info!(path = %args.output.display(), "wrote blank canvas");

    Ok(())
}
