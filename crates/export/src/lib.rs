//! Export helpers for CSV and JSON artifacts.

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    pub const HEADER: &str = "time_s,x_m,y_m,vx_m_s,vy_m_s,ax_m_s2,ay_m_s2,r_m";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the trajectory exporter, one per recorded sample.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub time_s: f64,
        pub x_m: f64,
        pub y_m: f64,
        pub vx_m_s: f64,
        pub vy_m_s: f64,
        pub ax_m_s2: f64,
        pub ay_m_s2: f64,
        pub r_m: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        /// Values are written with full float precision so re-read artifacts
        /// reproduce the run exactly.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                self.time_s,
                self.x_m,
                self.y_m,
                self.vx_m_s,
                self.vy_m_s,
                self.ax_m_s2,
                self.ay_m_s2,
                self.r_m,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Run summary written alongside the trajectory CSV.
    #[derive(Debug, Serialize)]
    pub struct RunSummary<'a> {
        pub scenario: &'a str,
        pub central_body: &'a str,
        pub generated_utc: &'a str,
        pub termination: &'a str,
        pub sample_count: usize,
        pub time_step_s: f64,
        pub time_horizon_s: f64,
        pub final_time_s: Option<f64>,
        pub final_radial_distance_m: Option<f64>,
    }

    /// Write the JSON run summary, creating parent directories as needed.
    pub fn write_summary(path: &Path, summary: &RunSummary<'_>) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
