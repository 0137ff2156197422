//! Pure computation behind recommendations and quest generation.
//!
//! Nothing in here touches the database; services load the inputs, call into these
//! functions and persist the outcome.

pub mod matching;
pub mod quest;
