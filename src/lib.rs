//! Paid Annual Leave Accrual Engine
//!
//! This crate computes paid annual leave under the Korean Labor Standards Act
//! (Article 60) for two conventions: the anniversary convention, which
//! follows each employee's hire date, and the fiscal convention, which moves
//! every grant after the hire year to January 1. It produces per-year
//! ledgers, dated grant schedules, and a monthly projection comparing both.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
