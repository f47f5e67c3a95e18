//! Landing page state, waitlist types and server plumbing

mod analytics;
mod ideas;
mod landing;
mod shuffle;
mod waitlist;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;

pub use analytics::*;
pub use ideas::*;
pub use landing::*;
pub use shuffle::*;
pub use waitlist::*;
