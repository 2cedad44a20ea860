//! Shared data structures for gas lift screening
//!
//! - Assessments: the three categorical input groups (production, economic, environmental)
//! - Raw input: string-typed assessments as received from CLI flags or JSON bodies
//! - Decisions: per-group sub-decisions, votes, verdicts and rationale

mod assessment;
mod decision;
mod raw;

pub use assessment::*;
pub use decision::*;
pub use raw::*;
