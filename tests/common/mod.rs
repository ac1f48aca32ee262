use camino::Utf8PathBuf;
use tempfile::TempDir;

use skycat::{CatalogProgress, SkycatError};

/// Upstream header line of the OpenNGC database file.
pub const OPENNGC_HEADER: &str = "Name;Type;RA;Dec;Const;MajAx;MinAx;PosAng;B-Mag;V-Mag;\
J-Mag;H-Mag;K-Mag;SurfBr;Hubble;Pax;Pm-RA;Pm-Dec;RadVel;Redshift;\
Cstar U-Mag;Cstar B-Mag;Cstar V-Mag;M;NGC;IC;Cstar Names;Identifiers;Common Names;\
NED Notes;OpenNGC Notes;Sources";

/// Write a catalog file with the upstream header and the given data rows into a
/// fresh temporary directory. The directory guard must stay alive for the file
/// to exist.
pub fn write_catalog(rows: &[&str]) -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("catalog.csv")).expect("utf-8 path");
    let mut content = String::from(OPENNGC_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).expect("write catalog fixture");
    (dir, path)
}

/// Observer recording every event it receives, for assertions on the run
/// life cycle.
#[derive(Default)]
pub struct RecordingProgress {
    pub started_with: Option<u64>,
    pub rows: Vec<(u64, u64)>,
    pub succeeded_with: Option<u64>,
    pub failures: Vec<String>,
}

impl CatalogProgress for RecordingProgress {
    fn start(&mut self, total_estimate: u64) {
        self.started_with = Some(total_estimate);
    }

    fn row_processed(&mut self, index: u64, total: u64) {
        self.rows.push((index, total));
    }

    fn success(&mut self, count: u64) {
        self.succeeded_with = Some(count);
    }

    fn failure(&mut self, error: &SkycatError) {
        self.failures.push(error.to_string());
    }
}
