//! CO₂ emission estimator server.
//!
//! A web application that answers: "how much CO₂ does this trip emit,
//! how does that compare with other ways of travelling, and what would it
//! cost to offset?"

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod format;
pub mod logging;
pub mod web;
