//! # ronpr - Romanian Number Plate Recognition core
//!
//! Rule-based engines for locating probable number-plate regions inside a
//! vehicle crop and for filtering OCR output into dates and Romanian plate
//! numbers. The surrounding collaborators (vehicle detection, text-region
//! detection, OCR itself) are external: this crate consumes their output
//! through plain data types and returns plain data back.
//!
//! ## Quick Start
//!
//! ```rust
//! use ronpr::{OrientedRect, RegionDetector, TextFilter};
//!
//! // Minimal-area boxes from the upstream contour step.
//! let boxes: Vec<OrientedRect> = Vec::new();
//!
//! let detector = RegionDetector::default();
//! let output = detector.detect(&boxes, 720, 1280);
//! println!("{} plate regions", output.regions.len());
//!
//! let filter = TextFilter::new();
//! let (dates, plates) = filter.filter_dates_and_plates(&["23/11/2021", "CJ 12 ABC"]);
//! assert_eq!(dates, vec!["23/11/2021"]);
//! assert_eq!(plates, vec!["CJ12ABC"]);
//! ```

// Core modules
mod detect;
mod geometry;
mod postprocess;
mod results;
mod textfilter;
mod types;

// Caller-side imaging helpers
pub mod crops;

// Public API exports
pub use crate::detect::{DetectOutput, RegionDetector};
pub use crate::geometry::{margin_corners, AxisRect, OrientedRect, Point};
pub use crate::postprocess::merge_overlapping;
pub use crate::results::{ReportError, ResultMap, NO_DATE};
pub use crate::textfilter::{TextFilter, COUNTY_CODES};
pub use crate::types::DetectConfig;
