//! egytrains schedule document client.
//!
//! This module provides an HTTP client for the egytrains.com Next.js
//! data endpoints, which publish one JSON schedule document per
//! station.
//!
//! Key characteristics of the endpoints:
//! - Documents live at `<base>/<station name>.json`, keyed by English
//!   display name **including spaces**, so paths need real
//!   percent-encoding
//! - The base URL embeds the build id of the current site deployment;
//!   a redeploy rotates it and the old base starts returning 404s
//! - Train numbers are the JSON object keys under
//!   `pageProps.data.trains`
//! - Times are "HH:MM" strings, omitted at an origin (no arrival) or
//!   terminus (no departure)

mod client;
mod error;
mod types;

pub use client::{EgytrainsClient, EgytrainsConfig};
pub use error::EgytrainsError;
pub use types::{CityStop, PageProps, ScheduleDocument, TrainDetail, TrainsResponse};
