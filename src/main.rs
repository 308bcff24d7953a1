use fanglogo::settings::Settings;
use fanglogo::viewer::{Outcome, Session};
use fanglogo::window::MinifbViewer;
use fanglogo::Error;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let settings = Settings::default();
    info!(
        resolution = settings.resolution,
        results = %settings.results_dir.display(),
        "starting; press `s` to save, escape to quit, any other key to redraw"
    );

    match Session::new(MinifbViewer::new(), &settings).run() {
        Ok(Outcome::Saved(paths)) => info!(count = paths.len(), "saved all variants"),
        Ok(Outcome::Quit) => info!("quit without saving"),
        Err(err) => {
            error!(%err, "session failed");
            return Err(err);
        }
    }
    Ok(())
}
