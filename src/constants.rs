// Fixed values inspected by the demo report and the viewer

/// Word whose byte order is easy to read back: each byte is distinct
pub const DEMO_WORD: i32 = 0x1234_5678;

/// Classic integer specimen, also inspected as a float
pub const DEMO_INT: i32 = 12345;

/// Text specimen inspected byte by byte
pub const DEMO_TEXT: &str = "ABCDEF";

/// Value used by the pointer-basics walkthrough
pub const DEMO_AGE: i32 = 18;

/// Number of `DEMO_WORD` prefixes printed by the default report
pub const DEMO_PREFIXES: usize = 3;
