// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::Datelike;

use super::consts::*;
use crate::fetch::ProxyMode;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub season: u16,
    pub proxy: ProxyMode,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            season: current_season(),
            proxy: ProxyMode::for_build(),
        }
    }
}

/// Current calendar year, clamped so it never precedes `FIRST_SEASON`.
pub fn current_season() -> u16 {
    let year = chrono::Local::now().year();
    u16::try_from(year).unwrap_or(FIRST_SEASON).max(FIRST_SEASON)
}

/// Selectable seasons, newest first: `latest` down to `first` inclusive.
pub fn available_seasons(first: u16, latest: u16) -> Vec<u16> {
    if latest < first {
        return Vec::new();
    }
    (first..=latest).rev().collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<report id>_<season>.<ext>`
    pub fn out_path(&self, report_id: &str, season: u16) -> PathBuf {
        self.out_path_in(&self.out_dir, report_id, season)
    }

    pub fn out_path_in(&self, dir: &Path, report_id: &str, season: u16) -> PathBuf {
        dir.join(format!("{}_{}.{}", report_id, season, self.format.ext()))
    }
}
