//! TheSportsDB fixture source.
//!
//! Implements [`FixtureSource`](crate::port::outbound::sports::FixtureSource)
//! over the `searchevents.php` endpoint.

pub mod client;
pub mod dto;

pub use client::SportsDb;
