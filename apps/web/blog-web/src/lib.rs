// Library exports for testing
// The binary (main.rs) imports these as well

pub mod context;
pub mod error;
pub mod forms;
pub mod guard;
pub mod handlers;
pub mod logger;
pub mod routes;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;
