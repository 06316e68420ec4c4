//! Command-line surface for the `lazytodo` binary.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Personal todo list on the command line", long_about = None)]
pub struct Cli {
    /// Append a new todo with this content
    #[arg(long = "new", value_name = "TEXT")]
    pub new: Option<String>,

    /// Mark the todo at this 1-based position as done
    #[arg(long = "do", value_name = "POSITION")]
    pub mark_done: Option<usize>,

    /// List every todo, completed ones included
    #[arg(long)]
    pub all: bool,
}
