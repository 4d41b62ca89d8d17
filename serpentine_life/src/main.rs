// main.rs - Run the panel headless, drawing it in the terminal

use clap::Parser;
use log::{error, info};

use serpentine_life::{AnsiStrip, Driver, PanelArgs};

#[derive(Parser, Debug)]
#[command(about = "Game of Life on a serpentine pixel panel, drawn in the terminal")]
struct Cli {
    #[command(flatten)]
    panel: PanelArgs,

    /// Stop after this many ticks instead of running until Ctrl-C
    #[arg(long)]
    generations: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> serpentine_life::Result<()> {
    let config = cli.panel.to_config()?;
    let strip = AnsiStrip::new(config.grid, std::io::stdout());
    let mut driver = Driver::new(&config, strip, cli.panel.rng())?;

    match cli.generations {
        Some(limit) => {
            for _ in 0..limit {
                driver.tick()?;
                tokio::time::sleep(config.step_delay).await;
            }
        }
        None => {
            let shutdown = async {
                // A failed signal hook just means we run until killed.
                if tokio::signal::ctrl_c().await.is_err() {
                    std::future::pending::<()>().await;
                }
            };
            driver.run(config.step_delay, shutdown).await?;
        }
    }

    info!(
        "stopped at generation {} after {} reseeds",
        driver.generation(),
        driver.reseeds()
    );
    Ok(())
}
