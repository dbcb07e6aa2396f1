// src/fetch/mod.rs
//! # Report fetching
//!
//! `report url + season ─▶ season::substitute ─▶ ProxyMode::route ─▶ Transport::get`
//!
//! - [`season`] rewrites the first `season=<digits>` parameter. URLs without
//!   one are used as-is, so the season picker has no effect on them.
//! - [`proxy`] decides how the request leaves the process (direct, local
//!   same-origin proxy, public relay).
//! - [`client`] owns the HTTP seam ([`Transport`]) and turns a response into
//!   rows or a [`FetchError`].
//! - [`session`] runs fetches off the UI thread and applies only the most
//!   recently requested result.

pub mod client;
pub mod error;
pub mod proxy;
pub mod season;
pub mod session;

pub use client::{HttpResponse, HttpTransport, Transport, fetch_report_data, parse_rows};
pub use error::FetchError;
pub use proxy::ProxyMode;
pub use season::substitute_season;
pub use session::{FetchSession, Ticket};
