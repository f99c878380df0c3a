//! # stockdeck - Terminal Stock Dashboard
//!
//! A terminal dashboard for browsing a stock listing, screener results,
//! per-stock details, and news sentiment. All market data is display
//! data pulled through a provider abstraction; the bundled provider
//! serves hard-coded sample values.
//!
//! ## Architecture
//!
//! - **App**: Core application lifecycle and the event loop
//! - **UI**: Layout and rendering logic
//! - **State**: Centralized state with reducer-style transitions, built
//!   around the shared filter/pagination core in [`state::filter`]
//! - **Data**: The `MarketData` provider abstraction and sample data
//! - **Events**: Input handling
//! - **Config**: Configuration management

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use data::{MarketData, SampleData};
pub use error::{Error, Result};
