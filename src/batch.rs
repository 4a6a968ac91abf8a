//! Distance and bearing from the observer to many points at once

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::geodesy::{bearing, distance, BearingResult, Coordinate, DistanceResult};

/// One input row: `latitude,longitude[,name]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CsvPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

impl CsvPoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Measurements for one input row
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub point: CsvPoint,
    pub distance: DistanceResult,
    pub bearing: BearingResult,
}

/// Result of a batch run, rows in input order
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub observer: Coordinate,
    pub rows: Vec<BatchRow>,
    pub failed: usize,
    pub execution_time_ms: f64,
}

impl BatchOutput {
    /// Number of rows read, including the failed ones
    pub fn total(&self) -> usize {
        self.rows.len() + self.failed
    }

    /// Renders a statistics comment block followed by the result table
    pub fn to_csv(&self) -> Result<String> {
        let mut output = String::with_capacity(self.rows.len() * 48 + 160);

        output.push_str("# Statistics\n");
        output.push_str(&format!("# Observer: {}\n", self.observer));
        output.push_str(&format!("# Total points: {}\n", self.total()));
        output.push_str(&format!("# Successful: {}\n", self.rows.len()));
        output.push_str(&format!("# Failed: {}\n", self.failed));
        output.push_str(&format!("# Execution time: {:.2} ms\n", self.execution_time_ms));

        let has_names = self.rows.iter().any(|row| row.point.name.is_some());

        let mut writer = csv::Writer::from_writer(Vec::new());
        if has_names {
            writer.write_record([
                "latitude", "longitude", "name", "distance_mi", "distance_km", "compass", "bearing",
            ])?;
        } else {
            writer.write_record([
                "latitude", "longitude", "distance_mi", "distance_km", "compass", "bearing",
            ])?;
        }

        for row in &self.rows {
            let mut record = vec![row.point.latitude.to_string(), row.point.longitude.to_string()];
            if has_names {
                record.push(row.point.name.clone().unwrap_or_default());
            }
            record.push(format!("{:.3}", row.distance.miles));
            record.push(format!("{:.3}", row.distance.kilometers));
            record.push(row.bearing.compass.to_string());
            record.push(row.bearing.degrees.to_string());

            writer.write_record(&record)?;
        }

        let table = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        output.push_str(&String::from_utf8_lossy(&table));

        Ok(output)
    }
}

/// Reads CSV points and measures each one from `observer`
///
/// Rows that fail to parse, or whose coordinates are out of range, are counted
/// as failed and skipped. I/O errors abort the run.
pub fn process_csv_reader<R: Read>(reader: R, observer: Coordinate) -> Result<BatchOutput> {
    let start = Instant::now();

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut points: Vec<CsvPoint> = Vec::new();
    let mut failed = 0;

    for (line, result) in csv_reader.deserialize::<CsvPoint>().enumerate() {
        match result {
            Ok(point) if point.coordinate().is_valid() => points.push(point),
            Ok(point) => {
                log::warn!("row {}: coordinate {} out of range", line + 1, point.coordinate());
                failed += 1;
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("row {}: {}", line + 1, e);
                failed += 1;
            }
        }
    }

    let rows: Vec<BatchRow> = points
        .into_par_iter()
        .map(|point| {
            let target = point.coordinate();
            BatchRow {
                distance: distance(target, observer),
                bearing: bearing(target, observer),
                point,
            }
        })
        .collect();

    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    log::info!(
        "batch measured {} points ({} failed) in {:.2} ms",
        rows.len(),
        failed,
        execution_time_ms
    );

    Ok(BatchOutput {
        observer,
        rows,
        failed,
        execution_time_ms,
    })
}

/// Opens a CSV file and delegates to [`process_csv_reader`]
pub fn process_csv_file<P: AsRef<Path>>(path: P, observer: Coordinate) -> Result<BatchOutput> {
    let file = File::open(path)?;
    process_csv_reader(file, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    #[test]
    fn test_rows_keep_input_order() {
        let data = "latitude,longitude,name\n0,90,East\n10,0,North\n-10,0,South\n0,-90,West\n";
        let output = process_csv_reader(Cursor::new(data), origin()).unwrap();

        let compass: Vec<&str> = output.rows.iter().map(|r| r.bearing.compass).collect();
        assert_eq!(compass, vec!["E", "N", "S", "W"]);
        assert_eq!(output.failed, 0);
        assert_eq!(output.total(), 4);
    }

    #[test]
    fn test_bad_rows_are_counted() {
        let data = "latitude,longitude\n1,1\nbad,1\n95,0\n2,2\n";
        let output = process_csv_reader(Cursor::new(data), origin()).unwrap();

        assert_eq!(output.rows.len(), 2);
        assert_eq!(output.failed, 2);
        assert_eq!(output.total(), 4);
    }

    #[test]
    fn test_missing_name_column() {
        let data = "latitude,longitude\n10,0\n";
        let output = process_csv_reader(Cursor::new(data), origin()).unwrap();

        assert_eq!(output.rows[0].point.name, None);
        let csv = output.to_csv().unwrap();
        assert!(csv.contains("latitude,longitude,distance_mi,distance_km,compass,bearing\n"));
        assert!(csv.contains("10,0,"));
    }

    #[test]
    fn test_to_csv() {
        let data = "latitude,longitude,name\n0,90,\"Quarter, east\"\n";
        let output = process_csv_reader(Cursor::new(data), origin()).unwrap();
        let csv = output.to_csv().unwrap();

        assert!(csv.starts_with("# Statistics\n"));
        assert!(csv.contains("# Total points: 1\n"));
        assert!(csv.contains("# Failed: 0\n"));
        assert!(csv.contains("latitude,longitude,name,distance_mi,distance_km,compass,bearing\n"));
        assert!(csv.contains("0,90,\"Quarter, east\",6217.212,10007.543,E,90\n"));
    }

    #[test]
    fn test_process_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "latitude,longitude,name").unwrap();
        writeln!(file, "# comment lines are skipped").unwrap();
        writeln!(file, "48.8566, 2.3522, Paris").unwrap();
        file.flush().unwrap();

        let manchester = Coordinate::new(53.48097, -2.23715);
        let output = process_csv_file(file.path(), manchester).unwrap();

        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].point.name.as_deref(), Some("Paris"));
        assert_eq!(output.rows[0].bearing.compass, "SE");
        assert!((output.rows[0].distance.kilometers - 605.0).abs() < 5.0);
    }

    #[test]
    fn test_missing_file() {
        let result = process_csv_file("/nonexistent/points.csv", origin());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
