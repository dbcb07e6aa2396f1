// src/fetch/session.rs
//
// Background fetches with last-requested-wins semantics.
//
// Each `select` bumps a monotonically increasing ticket and spawns a worker.
// Workers report back over a channel tagged with their ticket; the UI thread
// applies a result only if its ticket is still the latest. Superseded
// requests are not cancelled, their results are dropped on arrival.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use std::thread;
use std::time::{Duration, Instant};

use super::{FetchError, ProxyMode, Transport, fetch_report_data};
use crate::catalog::Report;
use crate::table::{StatsRow, TableView};

pub type Ticket = u64;

/// Called from the worker thread after it posts a result (GUI: request a
/// repaint so `poll` runs).
pub type Notify = Arc<dyn Fn() + Send + Sync>;

struct Completion {
    ticket: Ticket,
    report: Report,
    season: u16,
    result: Result<Vec<StatsRow>, FetchError>,
}

pub struct FetchSession {
    transport: Arc<dyn Transport>,
    proxy: ProxyMode,
    latest: Ticket,
    discarded: u64,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    view: TableView,
    notify: Option<Notify>,
}

impl FetchSession {
    pub fn new(transport: Arc<dyn Transport>, proxy: ProxyMode) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            transport,
            proxy,
            latest: 0,
            discarded: 0,
            tx,
            rx,
            view: TableView::NoReportSelected,
            notify: None,
        }
    }

    pub fn with_notify(mut self, notify: Notify) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn proxy(&self) -> &ProxyMode {
        &self.proxy
    }

    /// Applies to fetches started after this call.
    pub fn set_proxy(&mut self, proxy: ProxyMode) {
        self.proxy = proxy;
    }

    /// Ticket of the most recent request (0 before the first).
    pub fn latest(&self) -> Ticket {
        self.latest
    }

    /// Results that arrived after being superseded.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Start fetching `report` for `season`; the view goes to `Loading`.
    pub fn select(&mut self, report: &Report, season: u16) -> Ticket {
        self.latest += 1;
        let ticket = self.latest;
        self.view = TableView::loading(report);

        logf!("Fetch: #{} begin {} season={}", ticket, report.id, season);

        let transport = Arc::clone(&self.transport);
        let proxy = self.proxy.clone();
        let report = report.clone();
        let tx = self.tx.clone();
        let notify = self.notify.clone();

        thread::spawn(move || {
            let result = fetch_report_data(transport.as_ref(), &proxy, &report.url, season);
            // Receiver gone means the session was dropped; nothing to tell.
            let _ = tx.send(Completion { ticket, report, season, result });
            if let Some(n) = notify {
                n();
            }
        });

        ticket
    }

    /// Drop the selection. Anything in flight becomes stale.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.view = TableView::NoReportSelected;
    }

    /// Apply finished fetches without blocking. True if the view changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(c) = self.rx.try_recv() {
            changed |= self.apply(c);
        }
        changed
    }

    /// Block until the latest request has resolved, or `timeout` passes.
    /// True if the view is no longer loading.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.view.is_loading() {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return false;
            }
            match self.rx.recv_timeout(left) {
                Ok(c) => {
                    self.apply(c);
                }
                Err(_) => return false,
            }
        }
        true
    }

    fn apply(&mut self, c: Completion) -> bool {
        if c.ticket != self.latest {
            self.discarded += 1;
            logd!(
                "Fetch: #{} stale ({} season={}), latest is #{}",
                c.ticket, c.report.id, c.season, self.latest
            );
            return false;
        }

        match &c.result {
            Ok(rows) => logf!("Fetch: #{} ok {} rows={}", c.ticket, c.report.id, rows.len()),
            Err(e) => loge!("Fetch: #{} failed {}: {} ({})", c.ticket, c.report.id, e, e.detail()),
        }

        self.view = TableView::resolved(c.report, c.result);
        true
    }
}
