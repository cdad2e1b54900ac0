//! Regex flag toggles

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

bitflags! {
    /// Matching modifiers applied when a pattern is compiled
    #[derive(Default)]
    pub struct RegexFlags: u8 {
        /// Case-insensitive matching
        const IGNORE_CASE = 0b001;
        /// `^` and `$` match at line boundaries
        const MULTILINE = 0b010;
        /// `.` also matches `\n`
        const DOT_ALL = 0b100;
    }
}

impl RegexFlags {
    /// Combine the three checkbox states into a flag set
    pub fn resolve(ignore_case: bool, multiline: bool, dot_all: bool) -> Self {
        let mut flags = RegexFlags::empty();
        if ignore_case {
            flags |= RegexFlags::IGNORE_CASE;
        }
        if multiline {
            flags |= RegexFlags::MULTILINE;
        }
        if dot_all {
            flags |= RegexFlags::DOT_ALL;
        }
        flags
    }

    /// Compile `pattern` with these flags
    pub fn compile(self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.contains(RegexFlags::IGNORE_CASE))
            .multi_line(self.contains(RegexFlags::MULTILINE))
            .dot_matches_new_line(self.contains(RegexFlags::DOT_ALL))
            .build()
    }
}
