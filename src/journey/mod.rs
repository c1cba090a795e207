pub mod archive;
pub mod definition;
pub mod vault;

pub use archive::*;
pub use definition::*;
pub use vault::*;
