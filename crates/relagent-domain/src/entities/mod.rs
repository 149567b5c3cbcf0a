//! Core domain entities with business logic and validation
//!
//! This module contains the domain entities organized by responsibility:
//! - `batch`: Manufacturing batch and its release state machine
//! - `test_result`: Quality-control test results attached to a batch
//! - `decision`: Qualified Person release/reject decisions

mod batch;
mod decision;
mod test_result;

pub use batch::*;
pub use decision::*;
pub use test_result::*;
