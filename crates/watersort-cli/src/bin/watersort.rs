//! Terminal water sort game.
//!
//! This is the main entry point for the terminal front end.

use std::io;

use clap::Parser as _;
use watersort_cli::{App, Args};
use watersort_game::Session;

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let options = args.session_options();
    log::info!(
        "starting watersort {}, level={}, seeded={}",
        env!("CARGO_PKG_VERSION"),
        options.starting_level,
        options.seed.is_some()
    );

    let mut app = App::new(Session::with_options(options), args.palette());
    println!("Sort the colors so every container holds one color. Type h for help.");
    app.run(io::stdin().lock(), io::stdout().lock())
}
