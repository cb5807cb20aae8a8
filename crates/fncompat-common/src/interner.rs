//! String interning for identifiers and literal text.
//!
//! Names of parameters, members and definitions are interned once and then
//! carried around as `Atom` handles, so comparing two names is a `u32`
//! comparison and types that mention names stay `Copy`-friendly and hashable.

use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// Interned string handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string, always pre-registered at index 0.
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Default)]
struct InternerState {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

/// Thread-safe string interner.
///
/// Reads take a shared lock; the write lock is only held while inserting a
/// string that has not been seen before.
pub struct Interner {
    state: RwLock<InternerState>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    pub fn new() -> Self {
        let interner = Self {
            state: RwLock::new(InternerState::default()),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Atom::EMPTY);
        interner
    }

    /// Intern a string, returning the existing atom if it was seen before.
    pub fn intern(&self, s: &str) -> Atom {
        {
            let state = self.state.read().expect("interner lock poisoned");
            if let Some(&atom) = state.map.get(s) {
                return atom;
            }
        }

        let mut state = self.state.write().expect("interner lock poisoned");
        // Another writer may have won the race between the two locks.
        if let Some(&atom) = state.map.get(s) {
            return atom;
        }
        let text: Arc<str> = Arc::from(s);
        let atom = Atom(state.strings.len() as u32);
        state.strings.push(text.clone());
        state.map.insert(text, atom);
        atom
    }

    /// Resolve an atom back to its text.
    ///
    /// Unknown atoms resolve to the empty string.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let state = self.state.read().expect("interner lock poisoned");
        state
            .strings
            .get(atom.index())
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Atom> {
        let state = self.state.read().expect("interner lock poisoned");
        state.map.get(s).copied()
    }

    pub fn len(&self) -> usize {
        self.state.read().expect("interner lock poisoned").strings.len()
    }

    /// True when only the pre-registered empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
