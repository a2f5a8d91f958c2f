//! # marklink
//!
//! A small, fast library for turning plain message text into HTML.
//!
//! ## Features
//!
//! - Bare URLs and `www.` domains become links, with trailing punctuation
//!   kept out of the href
//! - Image URLs become inline `<img>` tags
//! - Lightweight markdown: headings, rules, quotes, lists, emphasis,
//!   underline, inline and fenced code
//! - Total over all input: unrecognized markers are left as text
//! - Runs in the browser via the `wasm` feature
//!
//! ## Quick Start
//!
//! ```
//! use marklink::linkify;
//!
//! let html = linkify("see www.example.com.");
//! assert_eq!(
//!     html,
//!     r#"see <a href="https://www.example.com" target="_blank" rel="noopener noreferrer">https://www.example.com</a>."#
//! );
//! ```
//!
//! ## Reading Files
//!
//! ```no_run
//! use marklink::{ConvertOptions, linkify_file};
//!
//! let options = ConvertOptions::new().with_encoding("windows-1251").unwrap();
//! linkify_file("message.txt", "message.html", &options).unwrap();
//! ```

pub mod convert;
pub mod error;
pub mod markup;
pub mod netinfo;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use convert::{ConvertOptions, linkify_bytes, linkify_file, linkify_reader};
pub use error::{Error, Result};
pub use markup::transform as linkify;
pub use netinfo::{ConnectionInfo, ConnectionQuality};
