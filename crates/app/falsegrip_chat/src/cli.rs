use clap::{Parser, Subcommand};

/// Terminal chat shell: each line read from stdin is sent as a message.
#[derive(Parser, Debug)]
#[command(name = "falsegrip_chat", about = "FalseGrip terminal chat shell")]
pub struct Cli {
    /// Screen width in columns.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u16).range(20..))]
    pub width: u16,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version and exit.
    Version,
}
