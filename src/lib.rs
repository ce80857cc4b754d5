//! Payslip Engine library crate.
//!
//! This crate exposes the employee list query engine and the payslip
//! derivation engine as reusable modules, together with the data
//! sources and HTTP API that compose them.  External applications may
//! depend on the `payslip_engine` crate and call into
//! `query::QueryEngine` and `payroll::PayrollDeriver` directly or embed
//! the API via `api::build_router`.

pub mod api;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod payroll;
pub mod query;
pub mod source;
pub mod words;
