use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pl", about = concat!("[=] punchlist v", env!("CARGO_PKG_VERSION"), " - your todos, sorted"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from a specific file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the todo list and print it
    List(ListArgs),
    /// Fetch the todo list and print one todo in full
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Sort column: title or date (default: date)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Keep todos created on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Keep todos created on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Todo id
    pub id: u64,
}
