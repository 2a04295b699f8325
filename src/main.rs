//! CLI entry point for the fractal tree gallery

use clap::Parser;
use fractree::io::cli::{Cli, GalleryApp};
use fractree::io::logging::init_logging;

// Allow print for the command's user-facing summary
#[allow(clippy::print_stdout)]
fn main() -> fractree::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app = GalleryApp::new(cli);
    let outcome = app.run()?;
    println!("{outcome}");
    Ok(())
}
