use iss_tracker::{process_csv_file, Result, Tracker, TrackerConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = TrackerConfig::default();

    // `iss-tracker <points.csv>` measures a batch of points instead of the station
    if let Some(path) = std::env::args().nth(1) {
        let output = process_csv_file(&path, config.observer)?;
        print!("{}", output.to_csv()?);
        return Ok(());
    }

    let tracker = Tracker::from_config(&config, reqwest::Client::new());
    let report = tracker.report().await?;

    println!("{}", report);

    Ok(())
}
