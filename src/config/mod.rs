//! Configuration loading and management for the Leave Accrual Engine.
//!
//! This module loads leave policies from YAML files: statute metadata and
//! the numbers that drive the accrual rules.
//!
//! # Example
//!
//! ```no_run
//! use leave_accrual_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/korea_lsa").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualPolicy, LeavePolicyConfig, StatuteMetadata};
