use clap::Parser;

/// Creates the user table in the bundled database and exits.
#[derive(Parser)]
#[command(name = "userstore")]
#[command(author, version, about = "Initialize the userstore database")]
pub struct Cli {}
