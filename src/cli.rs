// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};

use crate::{
    batch::{self, fetch_table},
    catalog::{self, Catalog, Category, ReportLinks},
    config::{
        consts::DEFAULT_OUT_DIR,
        options::{ExportFormat, ExportOptions, current_season},
    },
    fetch::{HttpTransport, ProxyMode, Transport},
    file,
    progress::Progress,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Cricket club season statistics from the command line")]
pub struct Cli {
    /// Use this link list instead of the bundled one
    #[arg(long, global = true)]
    links: Option<PathBuf>,

    /// How requests reach the statistics host (default depends on build)
    #[arg(long, global = true, value_enum)]
    proxy: Option<ProxyArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProxyArg {
    Direct,
    Dev,
    Relay,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available reports
    List {
        /// Only reports in this category (batting, bowling, …)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        /// Group the listing by category
        #[arg(long)]
        by_category: bool,
    },
    /// Fetch one report and print it (or write it with --out)
    Fetch {
        /// Report id as shown by `list`
        report: String,
        #[arg(long)]
        season: Option<u16>,
        #[arg(long, value_enum, default_value = "csv")]
        format: FormatArg,
        #[arg(long)]
        no_headers: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Fetch every report and write one file per report
    Dump {
        #[arg(long)]
        season: Option<u16>,
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
        #[arg(long, value_enum, default_value = "csv")]
        format: FormatArg,
        #[arg(long)]
        no_headers: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_key(s).ok_or_else(|| {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        format!("unknown category '{}' (expected one of: {})", s, keys.join(", "))
    })
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    crate::logging::init_stderr();
    let cli = Cli::parse();

    let owned;
    let catalog: &Catalog = match &cli.links {
        Some(path) => {
            owned = Catalog::from_links(&ReportLinks::from_path(path)?);
            &owned
        }
        None => catalog::global(),
    };

    let proxy = match cli.proxy {
        Some(ProxyArg::Direct) => ProxyMode::Direct,
        Some(ProxyArg::Dev) => ProxyMode::dev(),
        Some(ProxyArg::Relay) => ProxyMode::relay(),
        None => ProxyMode::for_build(),
    };

    match cli.command {
        Command::List { category, by_category } => {
            list(catalog, category, by_category);
            Ok(())
        }
        Command::Fetch { report, season, format, no_headers, out } => {
            let transport = HttpTransport::new()?;
            let season = season.unwrap_or_else(current_season);
            fetch_one(catalog, &transport, &proxy, &report, season, format.into(), !no_headers, out)
        }
        Command::Dump { season, out_dir, format, no_headers } => {
            let transport = HttpTransport::new()?;
            let season = season.unwrap_or_else(current_season);
            let mut progress = StderrProgress::default();
            let export = ExportOptions { format: format.into(), include_headers: !no_headers, out_dir };
            let summary = batch::dump(catalog, &transport, &proxy, season, &export, &mut progress);
            if summary.failed > 0 {
                return Err(eyre!("{} of {} report(s) failed", summary.failed, catalog.len()));
            }
            Ok(())
        }
    }
}

fn list(catalog: &Catalog, category: Option<Category>, by_category: bool) {
    if by_category {
        for (cat, reports) in catalog.all_by_category() {
            if category.is_some_and(|c| c != cat) { continue; }
            println!("{} {} ({})", cat.icon(), cat.label(), reports.len());
            for r in reports {
                println!("  {}\t{} {}", r.id, r.icon, r.title);
            }
        }
        return;
    }
    for r in catalog.all() {
        if category.is_some_and(|c| c != r.category) { continue; }
        println!("{}\t{}\t{} {}", r.id, r.category, r.icon, r.title);
    }
}

#[allow(clippy::too_many_arguments)]
fn fetch_one(
    catalog: &Catalog,
    transport: &dyn Transport,
    proxy: &ProxyMode,
    report_id: &str,
    season: u16,
    format: ExportFormat,
    include_headers: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let report = catalog
        .get(report_id)
        .ok_or_else(|| eyre!("unknown report id '{}' (see `list`)", report_id))?;

    let Some(table) = fetch_table(transport, proxy, &report.url, season)? else {
        eprintln!("No data for \"{}\" in season {}", report.title, season);
        return Ok(());
    };

    match out {
        Some(path) => {
            file::write_table_to_path(&path, &table, format, include_headers)
                .map_err(|e| eyre!("{}", e))?;
            logf!("Export: {} → {}", report.id, path.display());
            eprintln!("Wrote {} ({})", path.display(), table.record_count_label());
        }
        None => {
            let txt = file::to_export_string(&table, format, include_headers)
                .map_err(|e| eyre!("{}", e))?;
            print!("{}", txt);
        }
    }
    Ok(())
}

#[derive(Default)]
struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        logd!("{}", msg);
    }
    fn item_done(&mut self, report_id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, report_id);
    }
    fn item_failed(&mut self, report_id: &str, err: &str) {
        self.done += 1;
        loge!("Dump: {} failed: {}", report_id, err);
        eprintln!("[{}/{}] {} FAILED: {}", self.done, self.total, report_id, err);
    }
    fn finish(&mut self) {
        eprintln!("Done ({}/{})", self.done, self.total);
    }
}
