use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use platformer_core::Replay;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the CSV trace.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p platformer_core --bin replay -- <replay.json>")?;
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read replay {}", path.display()))?;

    let replay = Replay::from_json(&raw).context("failed to parse replay")?;
    tracing::info!(frames = replay.inputs.len(), platforms = replay.level.platforms.len(), "replaying");

    println!("frame,x,y,vx,vy,grounded");
    for row in replay.run()? {
        println!(
            "{},{},{},{},{},{}",
            row.frame, row.x, row.y, row.vx, row.vy, row.grounded
        );
    }
    Ok(())
}
