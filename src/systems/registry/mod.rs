//! Body Registry - owns every live shape
//!
//! Other systems refer to bodies by `BodyId` only. A body leaves the
//! registry exactly once; asking about it afterwards yields `None`.

mod body;
mod store;

pub use body::{Body, BodySnapshot, Lifecycle};
pub use store::{BodyRegistry, FadeProgress};
