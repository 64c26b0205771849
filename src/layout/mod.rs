//! Scalar kinds and captured specimens
//!
//! This module describes the values the demos inspect:
//! - [`ScalarKind`]: C-style scalar kinds and their host sizes
//! - [`Specimen`]: a labelled, owned copy of a value's storage bytes
//!
//! # Type Sizes
//!
//! Unlike the sizes a C textbook tabulates, these are the sizes of the host
//! this crate was built for:
//! - `char`: 1 byte
//! - `short`: 2 bytes
//! - `int`: 4 bytes
//! - `long`: 8 bytes (always 64-bit here)
//! - `float` / `double`: 4 / 8 bytes
//! - address: pointer width (`usize`)
//! - text: its length in bytes, no terminator

use crate::inspect::{self, address_of, ByteView, InspectError};
use bytemuck::NoUninit;
use std::mem::size_of;

/// Kinds of scalar values that can be captured as specimens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Address,
    Text(usize),
}

impl ScalarKind {
    /// Size of this kind in bytes on the host
    pub fn size(self) -> usize {
        match self {
            ScalarKind::Char => size_of::<u8>(),
            ScalarKind::Short => size_of::<i16>(),
            ScalarKind::Int => size_of::<i32>(),
            ScalarKind::Long => size_of::<i64>(),
            ScalarKind::Float => size_of::<f32>(),
            ScalarKind::Double => size_of::<f64>(),
            ScalarKind::Address => size_of::<usize>(),
            ScalarKind::Text(len) => len,
        }
    }

    /// C-style type name
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Char => "char",
            ScalarKind::Short => "short",
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Address => "void *",
            ScalarKind::Text(_) => "char[]",
        }
    }
}

/// A labelled copy of a value's storage bytes
#[derive(Debug, Clone, PartialEq)]
pub struct Specimen {
    label: String,
    kind: ScalarKind,
    storage: Vec<u8>, // Host storage order
}

impl Specimen {
    fn capture<T: NoUninit>(label: impl Into<String>, kind: ScalarKind, value: &T) -> Self {
        Specimen {
            label: label.into(),
            kind,
            storage: bytemuck::bytes_of(value).to_vec(),
        }
    }

    pub fn char(label: impl Into<String>, value: u8) -> Self {
        Self::capture(label, ScalarKind::Char, &value)
    }

    pub fn short(label: impl Into<String>, value: i16) -> Self {
        Self::capture(label, ScalarKind::Short, &value)
    }

    pub fn int(label: impl Into<String>, value: i32) -> Self {
        Self::capture(label, ScalarKind::Int, &value)
    }

    pub fn long(label: impl Into<String>, value: i64) -> Self {
        Self::capture(label, ScalarKind::Long, &value)
    }

    pub fn float(label: impl Into<String>, value: f32) -> Self {
        Self::capture(label, ScalarKind::Float, &value)
    }

    pub fn double(label: impl Into<String>, value: f64) -> Self {
        Self::capture(label, ScalarKind::Double, &value)
    }

    /// Capture the address of `value` (the pointer, not the pointee)
    pub fn address<T: ?Sized>(label: impl Into<String>, value: &T) -> Self {
        Self::capture(label, ScalarKind::Address, &address_of(value))
    }

    pub fn text(label: impl Into<String>, value: &str) -> Self {
        Specimen {
            label: label.into(),
            kind: ScalarKind::Text(value.len()),
            storage: value.as_bytes().to_vec(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.storage.len()
    }

    pub fn storage(&self) -> &[u8] {
        &self.storage
    }

    /// View the first `length` stored bytes
    pub fn inspect(&self, length: usize) -> Result<ByteView<'_>, InspectError> {
        inspect::inspect(&self.storage, length)
    }

    /// Render every stored byte
    pub fn render(&self) -> String {
        inspect::render(self.storage.iter().copied())
    }

    /// The captured value, decoded from its stored bytes
    pub fn describe(&self) -> String {
        let bytes = self.storage.as_slice();
        let decoded = match self.kind {
            ScalarKind::Char => bytes.first().map(|&b| format_char(b)),
            ScalarKind::Short => read::<i16>(bytes).map(|v| v.to_string()),
            ScalarKind::Int => read::<i32>(bytes).map(|v| v.to_string()),
            ScalarKind::Long => read::<i64>(bytes).map(|v| v.to_string()),
            ScalarKind::Float => read::<f32>(bytes).map(|v| format!("{:?}", v)),
            ScalarKind::Double => read::<f64>(bytes).map(|v| format!("{:?}", v)),
            ScalarKind::Address => read::<usize>(bytes).map(|v| format!("0x{:x}", v)),
            ScalarKind::Text(_) => Some(format!("\"{}\"", String::from_utf8_lossy(bytes))),
        };
        decoded.unwrap_or_else(|| "[unreadable]".to_string())
    }
}

fn read<T: bytemuck::AnyBitPattern>(bytes: &[u8]) -> Option<T> {
    bytemuck::try_pod_read_unaligned(bytes).ok()
}

fn format_char(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("'\\x{:02x}'", byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Endianness;

    #[test]
    fn test_storage_matches_kind_size() {
        let value = 7i32;
        let specimens = [
            Specimen::char("c", b'A'),
            Specimen::short("s", -2),
            Specimen::int("i", 1),
            Specimen::long("l", 1),
            Specimen::float("f", 1.5),
            Specimen::double("d", 1.5),
            Specimen::address("p", &value),
            Specimen::text("t", "hello"),
        ];
        for specimen in &specimens {
            assert_eq!(specimen.size(), specimen.kind().size(), "{}", specimen.label());
        }
    }

    #[test]
    fn test_describe_decodes_values() {
        assert_eq!(Specimen::int("i", 12345).describe(), "12345");
        assert_eq!(Specimen::short("s", -1).describe(), "-1");
        assert_eq!(Specimen::float("f", 12345.0).describe(), "12345.0");
        assert_eq!(Specimen::char("c", b'A').describe(), "'A'");
        assert_eq!(Specimen::char("c", 7).describe(), "'\\x07'");
        assert_eq!(Specimen::text("t", "AB").describe(), "\"AB\"");
    }

    #[test]
    fn test_address_describes_pointer_value() {
        let value = 0u64;
        let specimen = Specimen::address("p", &value);
        assert_eq!(specimen.describe(), format!("0x{:x}", address_of(&value)));
    }

    #[test]
    fn test_short_layout() {
        let specimen = Specimen::short("s", 0x0102);
        let expected = match Endianness::native() {
            Endianness::Little => "02 01",
            Endianness::Big => "01 02",
        };
        assert_eq!(specimen.render(), expected);
    }

    #[test]
    fn test_specimen_prefix_bounds() {
        let specimen = Specimen::text("t", "ABC");
        assert_eq!(specimen.inspect(2).unwrap().as_slice(), b"AB");
        assert!(specimen.inspect(4).is_err());
    }
}
