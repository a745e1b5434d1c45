// Single-user session: the state store, the transitions that drive it, the
// derived views and the HTTP handlers that expose them.

pub mod controller;
pub mod handlers;
pub mod store;
pub mod view;
