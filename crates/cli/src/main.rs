use std::io;

use clap::Parser;

use warehouse_cli::{Args, Config, Session};

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let args = Args::parse();
    let config = Config::from(&args);
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), config);
    if let Some(name) = args.file {
        session = session.preload(name);
    }

    session.run()?;
    Ok(())
}
