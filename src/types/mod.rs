//! Types for the SES Query API operations.

mod address;
mod email;
mod responses;

pub use address::*;
pub use email::*;
pub use responses::*;
