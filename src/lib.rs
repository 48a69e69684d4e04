//! Search and aggregation core for the NetGuard security operations console.
//!
//! The console UI renders lists of monitored endpoints ([`models::Agent`]) and
//! security events ([`models::Alert`]) together with derived KPI tiles and
//! severity breakdowns. This crate is the in-memory layer behind those views:
//!
//! - **Search**: [`search::SearchIndex`] turns a free-text query into an
//!   order-preserving, case-insensitive substring filter over a record
//!   snapshot.
//! - **Aggregation**: [`aggregation::AggregationEngine`] rolls a snapshot up
//!   into category tallies in a fixed canonical order, zero-filled so that
//!   bars and legends keep a stable layout across renders.
//! - **Providers**: [`provider::RecordProvider`] implementations validate and
//!   normalize raw upstream records before they reach the core.
//! - **Dashboard**: [`dashboard::DashboardSummary`] combines both engines into
//!   the summary the landing page displays.
//!
//! Both engines are pure, synchronous functions over caller-supplied
//! snapshots; they never mutate their input and hold no state between calls.
//!
//! # Example
//!
//! ```
//! use netguard_console::aggregation::AggregationEngine;
//! use netguard_console::models::{Agent, AgentStatus};
//! use netguard_console::search::SearchIndex;
//!
//! let agents = vec![
//!     Agent::new("003", "wazuh-premises-production-civ", "192.168.3.21", AgentStatus::Active),
//!     Agent::new("008", "bastion-premises-production-sen", "10.10.60.13", AgentStatus::Inactive),
//! ];
//!
//! let hits = SearchIndex::filter(&agents, "wazuh");
//! assert_eq!(hits.len(), 1);
//!
//! let counts = AggregationEngine::count_by(&agents, |a| a.status).unwrap();
//! assert_eq!(counts[0].count, 1); // Active
//! ```

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod models;
pub mod provider;
pub mod search;

pub use error::{AppError, Result};
