use clap::Parser;
use color_eyre::eyre::Result;

use keynote::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    utils::{initialize_logging, initialize_panic_handler},
    App,
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(slides_dir) = args.slides_dir {
        config.keynote.slides_dir = slides_dir;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.keynote.debounce_ms = debounce_ms;
    }

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut app = App::new(config, tui);
    app.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
