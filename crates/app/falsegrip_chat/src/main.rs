// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io;

use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod logging;
mod shell;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Some(Commands::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), falsegrip_core::version());
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            shell::run(stdin, stdout, usize::from(args.width))?;
        }
    }

    Ok(())
}
