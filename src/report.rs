//! Demo report: the inspections printed by the command-line tool
//!
//! Each entry pairs a label with a rendered hex line. The binary writes the
//! hex to stdout and the label to stderr, so stdout stays a plain list of
//! byte lines. The pointer walkthrough is not hex and also goes to stderr.

use crate::constants::{DEMO_INT, DEMO_TEXT};
use crate::inspect::{self, address_of, InspectError};
use crate::layout::Specimen;
use std::mem::size_of_val;

/// One labelled, rendered inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub label: String,
    pub hex: String,
}

/// Specimens shown by the report and the viewer
pub fn demo_specimens() -> Vec<Specimen> {
    let ival = DEMO_INT;
    vec![
        Specimen::int(format!("int {}", ival), ival),
        Specimen::float(format!("float {:.1}", ival as f32), ival as f32),
        Specimen::address("&ival", &ival),
        Specimen::short("short -12345", -12345),
        Specimen::long(format!("long {}", ival), ival as i64),
        Specimen::double(format!("double {:.1}", ival as f64), ival as f64),
        Specimen::char("char 'A'", b'A'),
        Specimen::text(format!("\"{}\"", DEMO_TEXT), DEMO_TEXT),
    ]
}

/// Inspect the first 1..=`max` bytes of `word`
pub fn word_prefixes(word: i32, max: usize) -> Result<Vec<Inspection>, InspectError> {
    let mut result = Vec::with_capacity(max);
    for n in 1..=max {
        let view = inspect::inspect_value(&word, n)?;
        result.push(Inspection {
            label: format!("0x{:08x} first {} byte{}", word, n, if n == 1 { "" } else { "s" }),
            hex: inspect::render(view),
        });
    }
    Ok(result)
}

/// Full default report: every demo specimen, then the word prefixes
pub fn demo_report(word: i32, prefixes: usize) -> Result<Vec<Inspection>, InspectError> {
    let mut result: Vec<Inspection> = demo_specimens()
        .iter()
        .map(|s| Inspection {
            label: format!("{} ({} bytes)", s.label(), s.size()),
            hex: s.render(),
        })
        .collect();
    result.extend(word_prefixes(word, prefixes)?);
    Ok(result)
}

/// Walk through a variable, a pointer to it, and their sizes
pub fn pointer_basics(age: i32) -> Vec<String> {
    let p_age = &age;
    vec![
        format!("address of age 0x{:x}", address_of(&age)),
        format!("value of pointer 0x{:x}", address_of(p_age)),
        format!("value of age {}", age),
        format!("pointer dereferencing {}", *p_age),
        format!("size of age {} bytes", size_of_val(&age)),
        format!("size of pointer age {} bytes", size_of_val(&p_age)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_and_variable_share_address() {
        let lines = pointer_basics(18);
        let address = lines[0].trim_start_matches("address of age ");
        let pointer = lines[1].trim_start_matches("value of pointer ");
        assert_eq!(address, pointer);
        assert_eq!(lines[2], "value of age 18");
        assert_eq!(lines[3], "pointer dereferencing 18");
        assert_eq!(lines[4], "size of age 4 bytes");
        assert_eq!(
            lines[5],
            format!("size of pointer age {} bytes", std::mem::size_of::<usize>())
        );
    }

    #[test]
    fn test_report_lists_specimens_then_prefixes() {
        let report = demo_report(0x1234_5678, 3).unwrap();
        assert_eq!(report.len(), demo_specimens().len() + 3);
        assert!(report[0].label.starts_with("int 12345"));
        assert_eq!(report.last().unwrap().hex.len(), 8);
    }

    #[test]
    fn test_prefix_past_word_fails() {
        assert!(word_prefixes(1, 5).is_err());
    }
}
