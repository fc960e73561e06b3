//! String interner backing [`Name`].
//!
//! The engine is pure and runs once per declaration (no incremental or
//! concurrent access within one invocation), so a plain single-threaded
//! interner suffices. Drivers that process declarations in parallel give
//! each task its own interner or wrap one externally.

use rustc_hash::FxHashMap;

use crate::Name;

/// Interns strings into compact [`Name`] handles.
pub struct StringInterner {
    strings: Vec<String>,
    map: FxHashMap<String, u32>,
}

impl StringInterner {
    pub fn new() -> Self {
        let mut interner = StringInterner {
            strings: Vec::new(),
            map: FxHashMap::default(),
        };
        // Slot 0 is the pre-interned empty string (Name::EMPTY).
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Intern a string, returning its stable handle.
    ///
    /// Interning the same string twice returns the same `Name`.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&idx) = self.map.get(s) {
            return Name::from_raw(idx);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "interner indices always fit u32"
        )]
        let idx = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.map.insert(s.to_string(), idx);
        Name::from_raw(idx)
    }

    /// Resolve a handle back to its string.
    ///
    /// Returns the empty string for handles not produced by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", String::as_str)
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied().map(Name::from_raw)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        // Slot 0 always holds the empty string.
        self.strings.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
