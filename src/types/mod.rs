mod detection;
mod facts;

pub use detection::*;
pub use facts::*;
