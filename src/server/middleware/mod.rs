//! Request guards shared by the HTTP and WebSocket controllers.

pub mod auth;

#[cfg(test)]
mod test;
