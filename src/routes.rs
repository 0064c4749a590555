//! HTTP route handlers.
//!
//! One module per route family, each exposing a `routes()` function
//! merged into the router by [`crate::app::create_app`].

pub mod health;
pub mod home;
pub mod submit;
