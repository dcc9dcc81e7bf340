//! Service layer for the saju chart engine.
//!
//! A [`SajuService`] is built once from a [`SajuConfig`] and owns the
//! calculators it needs. Basic and enhanced analysis are separate
//! [`ChartCalculator`] implementations; the enhanced one wraps a basic one
//! rather than replacing it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let service = SajuService::new(SajuConfig::default())?;
//! let input = BirthInput::new(1984, 2, 4, 0, Gender::Male)?;
//! match service.analyze(&input)? {
//!     Analysis::Enhanced(r) => println!("{}", r.format.korean()),
//!     Analysis::Basic(r) => println!("{}", r.chart.day),
//!     Analysis::Degraded { reading, cause } => eprintln!("{cause}: {}", reading.chart.day),
//! }
//! ```

pub mod calculator;
pub mod error;
pub mod service;

pub use calculator::{
    Analysis, BasicCalculator, ChartCalculator, EnhancedCalculator, EnhancedReading, MonthInfo,
    Reading, analyze_with,
};
pub use error::ServiceError;
pub use service::SajuService;

// Re-export the types callers need alongside the service.
pub use saju_base::{
    BirthInput, Chart, FortuneScores, Gender, LuckCycle, LuckTimeline, PeriodForecast,
};
pub use saju_config::{AnalysisLevel, SajuConfig};
