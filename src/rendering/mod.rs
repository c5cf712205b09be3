//! Output rendering - from batch outcomes to terminal text.
//!
//! Two layers:
//! - Badge/color primitives shared by every renderer
//! - The batch report renderer used by the CLI

mod colors;
mod report;

pub use colors::{Badge, Colorizer};
pub use report::ReportRenderer;
