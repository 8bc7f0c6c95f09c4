//! egytrains API response DTOs.
//!
//! These types map the slice of the Next.js data document the exporter
//! reads. Anything else in the payload deserializes into nothing and
//! is ignored; `Option` covers the fields the site omits rather than
//! sending as null.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Envelope of a per-station data document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainsResponse {
    /// Next.js page payload wrapper.
    pub page_props: PageProps,
}

/// The page props wrapper around the station's schedule data.
#[derive(Debug, Clone, Deserialize)]
pub struct PageProps {
    /// The schedule document itself.
    pub data: ScheduleDocument,
}

/// Every train calling at one station.
///
/// Keys are train numbers as published. A `BTreeMap` keeps train
/// iteration deterministic (sorted by number string); nothing
/// downstream depends on any particular cross-train order.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDocument {
    /// Train number → schedule detail.
    pub trains: BTreeMap<String, TrainDetail>,
}

/// One train's published schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainDetail {
    /// Stops in travel order.
    pub cities: Vec<CityStop>,
}

/// A single stop of a train.
#[derive(Debug, Clone, Deserialize)]
pub struct CityStop {
    /// Display name of the city, as the station mapping spells it.
    pub name: String,

    /// Arrival time ("HH:MM"). Omitted at the train's origin.
    pub a: Option<String>,

    /// Departure time ("HH:MM"). Omitted at the train's terminus.
    pub d: Option<String>,
}
