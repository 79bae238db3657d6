mod args;

use std::io;

use anyhow::Context;
use clap::Parser;
use libris_app::{seed_library, Console};
use libris_kernel::settings::{LoadOptions, Settings};

use args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load_with(LoadOptions {
        config_dir: args.config_dir,
        environment: args.env,
    })
    .with_context(|| "failed to load Libris settings")?;

    if let Some(level) = args.log_level {
        settings.telemetry.log_level = level;
    }
    settings.library.members.extend(args.members);

    libris_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    tracing::info!(
        env = ?settings.environment,
        members = settings.library.members.len(),
        books = settings.library.books.len(),
        "libris bootstrap starting"
    );

    let library =
        seed_library(&settings.library).with_context(|| "failed to seed the library")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(library, stdin.lock(), stdout.lock());
    console.run().with_context(|| "console session failed")?;

    tracing::info!("libris session finished");
    Ok(())
}
