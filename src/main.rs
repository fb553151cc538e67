mod cli;
mod render;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli::run(cli).await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
