// Composition root for the registration form.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory output and the form handler.
// - Wire the handler into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
