//! Raw byte inspection of typed values
//!
//! This module exposes the storage of a value as a read-only sequence of bytes,
//! in the order the host actually places them in memory, and renders that
//! sequence as hexadecimal text.
//!
//! - [`inspect`]: checked view over the first `length` bytes of a region
//! - [`inspect_value`]: the same over the storage of any plain-old-data value
//! - [`render`] / [`render_line`]: `"78 56 34 12"` style formatting
//! - `inspect_*` wrappers: inspect a whole scalar and render it in one call
//!
//! # Storage Order
//!
//! Bytes are never reordered. Inspecting `0x12345678_i32` yields
//! `78 56 34 12` on a little-endian host and `12 34 56 78` on a big-endian
//! one; [`Endianness::native`] tells the two apart.
//!
//! # Bounds
//!
//! Asking for more bytes than the region holds is an
//! [`InspectError::OutOfBounds`], not a read past the end.

pub mod errors;

pub use errors::InspectError;

use bytemuck::NoUninit;
use std::fmt::Write;
use std::iter::Copied;
use std::slice;

/// Byte order of multi-byte values in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least-significant byte first
    Little,
    /// Most-significant byte first
    Big,
}

impl Endianness {
    /// The storage order of the host this crate was compiled for
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endianness::Little => "little-endian",
            Endianness::Big => "big-endian",
        }
    }
}

/// Read-only view over a prefix of a value's storage
///
/// Borrowed from the inspected region, so it cannot outlive the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }

    /// Iterate bytes in address order
    pub fn iter(&self) -> Copied<slice::Iter<'a, u8>> {
        self.bytes.iter().copied()
    }
}

impl<'a> IntoIterator for ByteView<'a> {
    type Item = u8;
    type IntoIter = Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &ByteView<'a> {
    type Item = u8;
    type IntoIter = Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// View the first `length` bytes of `region`, in address order
pub fn inspect(region: &[u8], length: usize) -> Result<ByteView<'_>, InspectError> {
    match region.get(..length) {
        Some(bytes) => Ok(ByteView { bytes }),
        None => Err(InspectError::OutOfBounds {
            requested: length,
            available: region.len(),
        }),
    }
}

/// View the first `length` bytes of `value`'s storage
pub fn inspect_value<T: NoUninit>(
    value: &T,
    length: usize,
) -> Result<ByteView<'_>, InspectError> {
    inspect(bytemuck::bytes_of(value), length)
}

/// Render bytes as two lowercase hex digits each, separated by single spaces
///
/// An empty sequence renders as an empty string.
pub fn render<I: IntoIterator<Item = u8>>(bytes: I) -> String {
    let bytes = bytes.into_iter();
    let mut s = String::with_capacity(3 * bytes.size_hint().0);
    for (i, byte) in bytes.enumerate() {
        if i > 0 {
            s.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// [`render`] followed by a line terminator
pub fn render_line<I: IntoIterator<Item = u8>>(bytes: I) -> String {
    let mut s = render(bytes);
    s.push('\n');
    s
}

fn show<T: NoUninit>(value: &T) -> Result<String, InspectError> {
    let view = inspect_value(value, std::mem::size_of::<T>())?;
    Ok(render(view))
}

/// Render the storage of a C `char`
pub fn inspect_char(x: u8) -> Result<String, InspectError> {
    show(&x)
}

/// Render the storage of a C `short`
pub fn inspect_short(x: i16) -> Result<String, InspectError> {
    show(&x)
}

/// Render the storage of a C `int`
pub fn inspect_int(x: i32) -> Result<String, InspectError> {
    show(&x)
}

/// Render the storage of a 64-bit `long`
pub fn inspect_long(x: i64) -> Result<String, InspectError> {
    show(&x)
}

/// Render the storage of a C `float`
pub fn inspect_float(x: f32) -> Result<String, InspectError> {
    show(&x)
}

/// Render the storage of a C `double`
pub fn inspect_double(x: f64) -> Result<String, InspectError> {
    show(&x)
}

/// Render the storage of the address of `value` (the pointer itself, not the pointee)
pub fn inspect_address<T: ?Sized>(value: &T) -> Result<String, InspectError> {
    show(&address_of(value))
}

/// Render the bytes of `text`, without any terminator
pub fn inspect_text(text: &str) -> Result<String, InspectError> {
    let view = inspect(text.as_bytes(), text.len())?;
    Ok(render(view))
}

/// Numeric address of `value`, pointer-width
pub fn address_of<T: ?Sized>(value: &T) -> usize {
    (value as *const T).cast::<()>() as usize
}
