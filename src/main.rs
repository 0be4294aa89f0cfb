use anyhow::Result;

mod cli;
mod config;
mod surface;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}
