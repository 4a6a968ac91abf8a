//! iss-tracker - Where is the International Space Station, seen from here?
//!
//! iss-tracker fetches the station's current position, reverse geocodes it,
//! and measures great-circle distance and viewing direction from a fixed
//! observer.
//!
//! # Examples
//!
//! ## Geodesy
//!
//! ```
//! use iss_tracker::{bearing, distance, Coordinate};
//!
//! let observer = Coordinate::new(0.0, 0.0);
//! let target = Coordinate::new(0.0, 90.0);
//!
//! let d = distance(target, observer);
//! assert!((d.kilometers - 10007.5).abs() < 0.1);
//!
//! let b = bearing(target, observer);
//! assert_eq!(b.compass, "E");
//! assert_eq!(b.degrees, 90);
//! ```
//!
//! ## Live report
//!
//! ```no_run
//! use iss_tracker::{Tracker, TrackerConfig};
//!
//! # async fn run() -> iss_tracker::Result<()> {
//! let tracker = Tracker::from_config(&TrackerConfig::default(), reqwest::Client::new());
//! let report = tracker.report().await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod geodesy;
pub mod sources;
pub mod report;
pub mod batch;
pub mod api;

pub use error::{Error, Result};
pub use config::TrackerConfig;
pub use geodesy::{
    bearing, bearing_with, compass_label, distance,
    BearingResult, CompassRose, Coordinate, DistanceResult,
};
pub use sources::{Address, GeocodeClient, OpenNotifyClient, PositionSource, ReverseGeocoder};
pub use report::{Report, Tracker};
pub use batch::{process_csv_file, process_csv_reader, BatchOutput};
