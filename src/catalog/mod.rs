// src/catalog/mod.rs
//! # Report catalog
//!
//! Turns the raw link list into the ordered, classified set of reports the
//! dashboard navigates over.
//!
//! ## Build rules
//! - Links are deduplicated by `url`; the first occurrence wins and keeps its
//!   position, later duplicates are dropped.
//! - Ids are `report-<index>-<slug>` where `index` is the position *after*
//!   deduplication, so ids are unique even when two titles slug the same.
//! - Icon and category come from the keyword tables in [`rules`].
//!
//! ## Views
//! The catalog is immutable once built. Every view ([`Catalog::primary`],
//! [`Catalog::secondary`], the grouped views, [`Catalog::get`]) is a pure
//! function of it. The process-wide instance built from the bundled link
//! list lives behind [`global`].

use std::collections::{BTreeMap, HashSet};
use std::sync::{LazyLock, OnceLock};

use regex::Regex;

use crate::config::consts::PRIMARY_REPORT_COUNT;

pub mod links;
pub mod rules;

pub use links::{LinksError, ReportLink, ReportLinks};
pub use rules::{Category, category_for_title, icon_for_title};

const SLUG_MAX: usize = 30;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^a-z0-9]+").expect("static regex")
});

/// One navigable statistics table backed by a remote query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub url: String,
    pub icon: &'static str,
    pub category: Category,
}

/// Reports grouped by category. Buckets come out in `Category` order and
/// keep catalog order inside; empty categories are absent.
pub type ByCategory<'a> = BTreeMap<Category, Vec<&'a Report>>;

#[derive(Clone, Debug)]
pub struct Catalog {
    reports: Vec<Report>,
    primary_count: usize,
}

/// Lower-case, collapse every run of non `[a-z0-9]` into one `-`, cut to 30.
pub fn slug(title: &str) -> String {
    let lc = title.to_lowercase();
    let dashed = NON_ALNUM.replace_all(&lc, "-");
    dashed.chars().take(SLUG_MAX).collect()
}

pub fn report_id(title: &str, index: usize) -> String {
    format!("report-{}-{}", index, slug(title))
}

impl Catalog {
    pub fn build(links: &[ReportLink]) -> Self {
        Self::build_with_primary(links, PRIMARY_REPORT_COUNT)
    }

    pub fn build_with_primary(links: &[ReportLink], primary_count: usize) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(links.len());
        let unique: Vec<&ReportLink> = links
            .iter()
            .filter(|l| seen.insert(l.url.as_str()))
            .collect();

        let dropped = links.len() - unique.len();
        if dropped > 0 {
            logd!("Catalog: dropped {} duplicate link(s)", dropped);
        }

        let reports: Vec<Report> = unique
            .into_iter()
            .enumerate()
            .map(|(index, link)| Report {
                id: report_id(&link.title, index),
                title: link.title.clone(),
                url: link.url.clone(),
                icon: icon_for_title(&link.title),
                category: category_for_title(&link.title),
            })
            .collect();

        logf!(
            "Catalog: {} report(s), {} primary",
            reports.len(),
            primary_count.min(reports.len())
        );

        Self { reports, primary_count }
    }

    pub fn from_links(links: &ReportLinks) -> Self {
        Self::build(&links.links)
    }

    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Always-visible tabs: the first `primary_count` reports.
    pub fn primary(&self) -> &[Report] {
        &self.reports[..self.split()]
    }

    /// Everything after the primary cutoff.
    pub fn secondary(&self) -> &[Report] {
        &self.reports[self.split()..]
    }

    pub fn secondary_by_category(&self) -> ByCategory<'_> {
        group(self.secondary())
    }

    pub fn all_by_category(&self) -> ByCategory<'_> {
        group(&self.reports)
    }

    /// Reports of one category in catalog order (possibly empty).
    pub fn in_category(&self, category: Category) -> Vec<&Report> {
        self.reports.iter().filter(|r| r.category == category).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    fn split(&self) -> usize {
        self.primary_count.min(self.reports.len())
    }
}

fn group(reports: &[Report]) -> ByCategory<'_> {
    let mut out: ByCategory<'_> = BTreeMap::new();
    for r in reports {
        out.entry(r.category).or_default().push(r);
    }
    out
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Process-wide catalog built once from the bundled link list.
///
/// A malformed bundled list yields an empty catalog (logged) rather than a
/// panic; the GUI then shows its "select a report" state.
pub fn global() -> &'static Catalog {
    GLOBAL.get_or_init(|| match ReportLinks::bundled() {
        Ok(links) => Catalog::from_links(&links),
        Err(e) => {
            loge!("Catalog: bundled link list unusable: {}", e);
            Catalog::build(&[])
        }
    })
}
