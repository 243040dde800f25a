use clap::Parser;
use roster::api::RosterApi;
use roster::cli::controller::Controller;
use roster::cli::reader::StdinReader;
use roster::error::Result;
use roster::store::RecordStore;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let api = RosterApi::new(RecordStore::new());
    let mut controller = Controller::new(api, StdinReader::new());
    controller.run()
}
