// main.rs - Desktop emulator for the serpentine pixel panel

use clap::Parser;
use eframe::egui;
use log::info;

use serpentine_life::{Driver, MemoryStrip, PanelArgs};

mod ui;

use ui::PanelApp;

#[derive(Parser, Debug)]
#[command(about = "Game of Life on an emulated serpentine pixel panel")]
struct Cli {
    #[command(flatten)]
    panel: PanelArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.panel.to_config()?;
    let strip = MemoryStrip::new(config.grid.cell_count());
    let driver = Driver::new(&config, strip, cli.panel.rng())?;
    info!("emulating a {}x{} panel", config.grid.width(), config.grid.height());

    let app = PanelApp::new(driver, config.step_delay);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Serpentine Life Panel",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
