mod app;
mod cli;

use app::App;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    App::new(cli::Cli::parse())?.run()
}
