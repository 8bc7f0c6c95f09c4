//! Flat schedule exporter for egytrains.com timetable data.
//!
//! A batch tool that answers: "what does every train calling at every
//! known station do, as one flat CSV?"

pub mod egytrains;
pub mod export;
pub mod stations;
