//! Shared building blocks of the conversion tool.
//!
//! - `model`: wire types exchanged with the conversion server and their
//!   interpretation into outcomes the UI can render.
//! - `requests`: endpoint paths and form field names the server expects.
//! - `ui`: platform independent state machines driven by the frontend
//!   components (column selection, option panels, request sequencing).

pub mod model;
pub mod requests;
pub mod ui;
