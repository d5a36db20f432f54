pub mod audio;
mod carrier;
pub mod image;
mod primitives;
mod types;

use std::path::Path;

pub use carrier::Carrier;
pub use primitives::*;
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
