//! Decoding of Tuya datapoint (dp) frames, tunneled in the private `0xef00`
//! cluster.
//!
//! A frame is either a 2-byte heartbeat, or a single datapoint:
//!
//! ```text
//! [cmd:u8][seq:u8][dp id:u8][dp type:u8][len:u16 BE][value:len bytes]
//! ```
//!
//! Datapoints are named and formatted through the registry in [`moes`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod datapoint;
pub mod descriptor;
pub mod error;
pub mod frame;
pub mod moes;

pub use frame::{DecodedDp, ShortDpFrame, TuyaFrame};

#[cfg(test)]
mod tests {
    #[macro_export]
    macro_rules! compare_float {
        ($expr:expr, $value:expr, $diff:expr) => {
            let a = $expr;
            let b = $value;
            eprintln!("{a} vs {b:.4}");
            assert!((a - b).abs() < $diff);
        };
    }

    #[macro_export]
    macro_rules! compare {
        ($expr:expr, $value:expr) => {
            compare_float!($expr, $value, 1e-4)
        };
    }
}
