use clap::Parser;
use tick::cli::{Cli, resolve_data_dir};

fn main() {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    if let Err(e) = tick::tui::run(&data_dir, cli.dark) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
