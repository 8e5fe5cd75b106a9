//! Individual rule checks.
//!
//! Each check returns the issues it found; an empty vector means the draft
//! passes that rule.

pub mod axes;
pub mod cardinality;
pub mod length;
pub mod membership;
pub mod presence;
pub mod uniqueness;
