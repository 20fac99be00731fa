//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and hosts configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use sfeed_kernel::config::load_feed_config;
//!
//! let cfg = load_feed_config(Some(std::path::Path::new("sfeed.toml"))).unwrap();
//! println!("{:?}", cfg.catalog.condition_types);
//! ```

pub mod config;

pub use sfeed_domain as domain;
