//! Result pipeline: candidates → offenses → per-validator collections →
//! aggregate.

pub mod aggregate;
pub mod builder;
pub mod formatter;
pub mod offense;

pub use aggregate::{AggregateResult, Statistics};
pub use builder::{RawOutputs, ResultBuilder, ValidatorOffenses};
pub use formatter::format_offenses;
pub use offense::{Offense, OffenseKind, Severity};
