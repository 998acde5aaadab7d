//! Core building blocks for usbtop
//!
//! This crate provides the pieces of the dashboard that do not touch the
//! terminal: the enumeration-output parser, device classification, the
//! filter, the render-state builder, and the subprocess adapter that
//! produces enumeration snapshots. Everything except [`source`] is pure
//! and deterministic.

pub mod device;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod render;
pub mod source;
pub mod test_utils;

pub use device::{DeviceKind, DeviceRecord};
pub use error::{Error, Result};
pub use logging::setup_logging;
pub use parser::parse_listing;
pub use render::{RenderRow, RenderState, RowEmphasis};
pub use source::EnumerationSource;
