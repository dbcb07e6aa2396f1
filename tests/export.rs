// tests/export.rs
use std::fs;
use std::path::PathBuf;

use cricket_stats::batch::{self, fetch_table};
use cricket_stats::catalog::{Catalog, ReportLink};
use cricket_stats::config::options::{ExportFormat, ExportOptions, available_seasons, current_season};
use cricket_stats::config::consts::FIRST_SEASON;
use cricket_stats::fetch::{FetchError, HttpResponse, ProxyMode, Transport, parse_rows};
use cricket_stats::file;
use cricket_stats::progress::{NullProgress, Progress};
use cricket_stats::table::{RenderedTable, TableSchema};

fn table(json: &str) -> RenderedTable {
    let rows = parse_rows(json).unwrap();
    RenderedTable::render(&TableSchema::infer(&rows), &rows)
}

/// Serves canned bodies by URL; unknown URLs get a 500.
struct MapTransport(Vec<(&'static str, &'static str)>);

impl Transport for MapTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        match self.0.iter().find(|(u, _)| *u == url) {
            Some((_, body)) => Ok(HttpResponse::ok(*body)),
            None => Ok(HttpResponse { status: 500, reason: "Internal Server Error".into(), body: String::new() }),
        }
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, id: &str) { self.done.push(id.to_string()); }
    fn item_failed(&mut self, id: &str, _err: &str) { self.failed.push(id.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn csv_and_tsv_strings() {
    let t = table(r#"[{"no":1,"name":"A","runs":50},{"no":2,"name":"B","runs":30}]"#);

    let csv = file::to_export_string(&t, ExportFormat::Csv, true).unwrap();
    assert_eq!(csv, "#,Player,Runs\n1,A,50\n2,B,30\n");

    let tsv = file::to_export_string(&t, ExportFormat::Tsv, false).unwrap();
    assert_eq!(tsv, "1\tA\t50\n2\tB\t30\n");
}

#[test]
fn csv_quotes_cells_with_delimiters() {
    let t = table(r#"[{"name":"Smith, J","avg":12.5}]"#);
    let csv = file::to_export_string(&t, ExportFormat::Csv, true).unwrap();
    assert_eq!(csv, "Player,Avg\n\"Smith, J\",12.50\n");

    // no quoting needed once the delimiter is a tab
    let tsv = file::to_export_string(&t, ExportFormat::Tsv, true).unwrap();
    assert_eq!(tsv, "Player\tAvg\nSmith, J\t12.50\n");
}

#[test]
fn export_path_naming() {
    let opts = ExportOptions { format: ExportFormat::Tsv, include_headers: true, out_dir: PathBuf::from("out") };
    assert_eq!(opts.out_path("report-0-most-runs", 2024), PathBuf::from("out").join("report-0-most-runs_2024.tsv"));

    let defaults = ExportOptions::default();
    assert_eq!(defaults.format, ExportFormat::Csv);
    assert!(defaults.include_headers);
    assert_eq!(ExportFormat::parse(" TSV "), Some(ExportFormat::Tsv));
    assert_eq!(ExportFormat::parse("xlsx"), None);
}

#[test]
fn write_export_creates_missing_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = ExportOptions {
        format: ExportFormat::Csv,
        include_headers: true,
        out_dir: tmp.path().join("nested").join("out"),
    };
    let t = table(r#"[{"no":1,"name":"A","runs":50}]"#);

    let path = file::write_export(&opts, "report-0-most-runs", 2023, &t).unwrap();
    assert!(path.ends_with("report-0-most-runs_2023.csv"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "#,Player,Runs\n1,A,50\n");
}

#[test]
fn export_refuses_file_in_place_of_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("out");
    fs::write(&blocker, "not a dir").unwrap();

    let opts = ExportOptions { out_dir: blocker, ..ExportOptions::default() };
    let t = table(r#"[{"name":"A"}]"#);
    assert!(file::write_export(&opts, "report-0-x", 2023, &t).is_err());
}

#[test]
fn fetch_table_none_for_empty_report() {
    let t = MapTransport(vec![
        ("http://test/empty", "[]"),
        ("http://test/shapeless", r#"[7, {"name":"A"}]"#),
        ("http://test/one", r#"[{"name":"A"}]"#),
    ]);
    assert!(fetch_table(&t, &ProxyMode::Direct, "http://test/empty", 2025).unwrap().is_none());
    assert!(fetch_table(&t, &ProxyMode::Direct, "http://test/shapeless", 2025).unwrap().is_none());

    let one = fetch_table(&t, &ProxyMode::Direct, "http://test/one", 2025).unwrap().unwrap();
    assert_eq!(one.rows.len(), 1);

    assert!(fetch_table(&t, &ProxyMode::Direct, "http://test/missing", 2025).is_err());
}

#[test]
fn dump_writes_one_file_per_report_and_skips_failures() {
    let tmp = tempfile::tempdir().unwrap();
    let cat = Catalog::build(&[
        ReportLink::new("Most Runs", "http://test/runs?season=2025"),
        ReportLink::new("Most Ducks", "http://test/ducks?season=2025"),
        ReportLink::new("Most Wickets", "http://test/wkts?season=2025"),
    ]);
    // season is substituted before the request goes out
    let transport = MapTransport(vec![
        ("http://test/runs?season=2022", r#"[{"no":1,"name":"A","runs":50}]"#),
        ("http://test/ducks?season=2022", "[]"),
    ]);
    let opts = ExportOptions { out_dir: tmp.path().to_path_buf(), ..ExportOptions::default() };

    let mut progress = Recorder::default();
    let summary = batch::dump(&cat, &transport, &ProxyMode::Direct, 2022, &opts, &mut progress);

    assert_eq!(summary.written, [tmp.path().join("report-0-most-runs_2022.csv")]);
    assert_eq!(summary.empty, 1);
    assert_eq!(summary.failed, 1);

    assert_eq!(progress.total, 3);
    assert_eq!(progress.done, ["report-0-most-runs"]);
    assert_eq!(progress.failed, ["report-2-most-wickets"]);
    assert!(progress.finished);

    let written = fs::read_to_string(&summary.written[0]).unwrap();
    assert!(written.starts_with("#,Player,Runs\n"));
}

#[test]
fn dump_of_empty_catalog_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = ExportOptions { out_dir: tmp.path().to_path_buf(), ..ExportOptions::default() };
    let summary = batch::dump(&Catalog::build(&[]), &MapTransport(vec![]), &ProxyMode::Direct, 2025, &opts, &mut NullProgress);
    assert!(summary.written.is_empty());
    assert_eq!(summary.failed, 0);
}

#[test]
fn season_list_runs_newest_first() {
    assert_eq!(available_seasons(2020, 2023), [2023, 2022, 2021, 2020]);
    assert!(available_seasons(2025, 2020).is_empty());
    assert!(current_season() >= FIRST_SEASON);
}
