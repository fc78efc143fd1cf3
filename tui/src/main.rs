use clap::Parser;
use kubenav_tui::Cli;
use kubenav_tui::run_main;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run_main(Cli::parse())
}
