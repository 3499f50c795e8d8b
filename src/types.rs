//! Subscription Census - Type System
//!
//! - `node`: Ordered list of decoded node lines
//! - `protocol`: Scheme tally and coarse protocol families
//! - `summary`: The structured result of one census run

mod node;
mod protocol;
mod summary;

pub use node::*;
pub use protocol::*;
pub use summary::*;
