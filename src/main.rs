use clap::Parser;
use std::path::PathBuf;

use pillrot::{Outcome, RotationDemo};

#[derive(Parser)]
#[command(name = "pillrot")]
#[command(about = "Isolate the largest dark object in an image and show it rotated")]
struct Cli {
    /// Path to the image file
    #[arg(short, long, value_name = "IMAGE")]
    image: PathBuf,

    /// Print progress diagnostics (output is otherwise unchanged)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image);
    }

    let img = pillrot::load_image(&args.image)?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
        println!("Running pipeline...\n");
    }

    let isolation = match pillrot::isolate(img, args.verbose)? {
        Outcome::Isolated(isolation) => isolation,
        // Nothing to show, not an error
        Outcome::NoForeground => return Ok(()),
    };

    if args.verbose {
        let bbox = isolation.bbox;
        println!("\nIsolated object at ({}, {}) size {}x{}",
                bbox.x, bbox.y, bbox.width, bbox.height);
    }

    let demo = RotationDemo::new(isolation);
    show(demo)
}

#[cfg(feature = "gui")]
fn show(demo: RotationDemo) -> anyhow::Result<()> {
    pillrot::gui::run(demo)
}

#[cfg(not(feature = "gui"))]
fn show(demo: RotationDemo) -> anyhow::Result<()> {
    pillrot::display::run_console(demo.frames())
}
