use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Interactive, in-memory employee record manager", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}
