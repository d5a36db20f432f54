mod embed;
mod extract;

pub use embed::embed;
pub use extract::extract;
