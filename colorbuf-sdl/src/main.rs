use {
    anyhow::Context,
    clap::Parser,
    colorbuf_sdl::{App, Cli},
    tracing_subscriber::EnvFilter,
};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut app = App::new(args.config()).context("couldn't set up the window")?;
    app.run().context("frame loop aborted")?;

    Ok(())
}
