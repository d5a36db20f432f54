mod carrier;

pub use carrier::{Gray16Image, GrayImageCarrier};
