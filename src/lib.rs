// THEORY:
// This file is the main entry point for the `pixeltint` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers.
//
// The primary goal is to export the `ImageSession` and its associated data
// structures (`ResourceStore`, `ChannelAverages`, `FilterName`, etc.) as the
// clean, high-level interface for the entire transform engine. The internal
// modules (`core_modules`) stay encapsulated behind it: callers hold a session,
// chain transforms on it, and ask it for statistics, without ever touching the
// pixel-level machinery directly.

pub mod core_modules;
pub mod error;
pub mod session;

pub use core_modules::codec::ResourceStore;
pub use core_modules::filter::{DispatchMode, FilterName};
pub use core_modules::statistics::ChannelAverages;
pub use error::{Error, Result};
pub use session::ImageSession;
