//! Decoding of zigbee cluster library (zcl) data, as reported by devices.
//!
//! - [`datatype`]: wire layout of zcl data type tags
//! - [`attr`]: attribute records (`[attr id][type][value]`)
//! - [`cluster`]: per-cluster attribute names, units and conversions
//! - [`frame`]: envelope of raw commands
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod attr;
pub mod cluster;
pub mod convert;
pub mod datatype;
pub mod error;
pub mod frame;
pub mod labels;
pub mod value;

pub use attr::DecodedAttribute;
pub use frame::RawCommandHeader;
pub use value::Value;
