use clap::Parser;
use puzzle_cards_lib::cli::Cli;
use puzzle_cards_lib::{logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}
