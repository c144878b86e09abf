//! Screen flows of the diagnosis pipeline
//!
//! One module per screen's logic, kept free of rendering concerns. Each
//! flow reads and writes the session store and talks to external services
//! through the clients in `crate::external`.

pub mod auth;
pub mod chatbot;
pub mod dashboard;
pub mod heatmap;
pub mod location;
pub mod results;
pub mod satellite;
pub mod weather;
