//! Small parsing and validation helpers shared by services.

pub mod date;
pub mod email;
pub mod url;
