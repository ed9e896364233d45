#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate a single expression and print the result
    Eval { expr: String },

    /// Start the interactive prompt (the default)
    Repl,
}
