pub mod import;
pub mod node;
pub mod store;

pub use import::*;
pub use node::*;
pub use store::*;
