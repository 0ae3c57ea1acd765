//! Driver-facing surfaces: CSV batch I/O and the demonstration walkthrough.

pub mod csv;
pub mod driver;
