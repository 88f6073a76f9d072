// Hunt server: config, UDP channel, filesystem treasures, console grid.

mod channel;
mod config;
mod render;
mod treasures;

use anyhow::Context;
use hunt_core::{Grid, Session};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    for arg in std::env::args().skip(1) {
        if arg == "--version" || arg == "-V" {
            println!("hunt-server {}", VERSION);
            return Ok(());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = config::load();
    tracing::info!(
        bind_port = cfg.bind_port,
        peer = %cfg.peer_addr,
        treasure_dir = %cfg.treasure_dir.display(),
        "hunt server starting"
    );

    let channel = channel::UdpChannel::bind(cfg.bind_port, &cfg.peer_addr)
        .context("failed to open the game channel")?;
    let loader = treasures::FsTreasureLoader::new(cfg.treasure_dir);

    let mut session = Session::new(Grid::new(), channel, loader);
    print!("{}", render::render(session.grid()));
    while session.step().context("session aborted")? {
        print!("{}", render::render(session.grid()));
    }
    println!("All treasures found! Ending game.");
    Ok(())
}
