use clap::Parser;
use impact_wheel::gui::app::AppModel;
use impact_wheel::gui::wheel::State;
use impact_wheel::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;
use wheel_core::{Chart, config, store};

#[derive(Parser, Debug)]
#[command(name = "impact-wheel", version, about, long_about = None)]
struct Cli {
    /// Chart file to load and save (defaults to the user data directory)
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Start with every selection cleared
    #[arg(long)]
    reset: bool,

    /// Write the default config file if it does not exist, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let categories = config::load_or_default().categories_or_default();

    let store_path = cli.state.or_else(|| match store::default_path() {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("Selections will not be saved: {}", e);
            None
        }
    });

    let mut chart = match &store_path {
        Some(path) => store::load_or_new(path, categories),
        None => Chart::new(categories),
    };
    if cli.reset {
        chart = chart.reset_all();
    }

    let state = State::new(chart, store_path);

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx);

    // clap already consumed the command line
    let app = RelmApp::new("org.wheel.impact-wheel").with_args(Vec::new());
    app.run::<AppModel>((state, rx));

    Ok(())
}
