//! # Introduction
//!
//! showbytes makes the in-memory storage order of scalar values observable.
//! A value's storage is viewed as bytes in address order, exactly as the host
//! lays them out, and rendered as hexadecimal text:
//!
//! ```text
//! 0x12345678_i32  →  78 56 34 12   (little-endian host)
//!                 →  12 34 56 78   (big-endian host)
//! ```
//!
//! ## Modules
//!
//! 1. [`inspect`] — checked byte views ([`inspect::inspect`]) and hex
//!    rendering ([`inspect::render`]), plus one-call wrappers per C scalar type.
//! 2. [`layout`] — [`layout::ScalarKind`] sizes and [`layout::Specimen`], an
//!    owned, labelled copy of a value's storage.
//! 3. [`report`] — the demo inspections printed by the binary.
//! 4. [`config`] — command-line options.
//! 5. [`ui`] — ratatui-based viewer; not part of the stable library API.
//!
//! ## Bounds
//!
//! Inspecting more bytes than a value holds returns
//! [`inspect::InspectError::OutOfBounds`] instead of reading past its end.

pub mod config;
pub mod constants;
pub mod inspect;
pub mod layout;
pub mod report;
pub mod ui;
