//! Schedule risk advising: a student strength score, a schedule challenge
//! score and the Low/Moderate/High recommendation derived from them.

pub mod config;
pub mod error;
pub mod load;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod types;
