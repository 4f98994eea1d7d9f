//! State selection
//!
//! The host convention is an integer: a positive index names one state,
//! `0` means all states and `-1` means the host's current state. [`State`]
//! captures that once at the entry point; [`StateScope`] is what host
//! queries receive after `Current` has been resolved.

use std::fmt;

use crate::{AtomSource, GeomError, GeomResult};

/// A requested state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// The host's current state
    #[default]
    Current,
    /// Every state
    All,
    /// One state, 1-based
    Specific(usize),
}

/// A resolved state, as passed to host queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateScope {
    /// Aggregate over every state
    All,
    /// One state, 1-based
    Index(usize),
}

impl State {
    /// Build from the host integer convention
    pub fn from_index(index: i64) -> GeomResult<Self> {
        match index {
            -1 => Ok(State::Current),
            0 => Ok(State::All),
            n if n > 0 => Ok(State::Specific(n as usize)),
            n => Err(GeomError::InvalidState(n)),
        }
    }

    /// Convert back to the host integer convention
    pub fn to_index(self) -> i64 {
        match self {
            State::Current => -1,
            State::All => 0,
            State::Specific(n) => n as i64,
        }
    }

    /// Resolve `Current` against the host
    pub fn resolve<S: AtomSource + ?Sized>(self, source: &S) -> StateScope {
        match self {
            State::Current => StateScope::Index(source.current_state()),
            State::All => StateScope::All,
            State::Specific(n) => StateScope::Index(n),
        }
    }

    /// Expand to the list of single states this request covers
    ///
    /// `All` becomes every host state in order; the others resolve to one index.
    pub fn expand<S: AtomSource + ?Sized>(self, source: &S) -> Vec<usize> {
        match self.resolve(source) {
            StateScope::All => (1..=source.count_states()).collect(),
            StateScope::Index(n) => vec![n],
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Current => write!(f, "current"),
            State::All => write!(f, "all"),
            State::Specific(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{atom, FixedSource};

    #[test]
    fn test_from_index() {
        assert_eq!(State::from_index(-1).unwrap(), State::Current);
        assert_eq!(State::from_index(0).unwrap(), State::All);
        assert_eq!(State::from_index(7).unwrap(), State::Specific(7));
        assert_eq!(State::from_index(-2), Err(GeomError::InvalidState(-2)));
    }

    #[test]
    fn test_index_roundtrip() {
        for i in [-1, 0, 3] {
            assert_eq!(State::from_index(i).unwrap().to_index(), i);
        }
    }

    #[test]
    fn test_resolve_current() {
        let mut source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 1.0)]);
        source.states.push(vec![atom(1.0, 0.0, 0.0, 1.0)]);
        source.current = 2;

        assert_eq!(State::Current.resolve(&source), StateScope::Index(2));
        assert_eq!(State::All.resolve(&source), StateScope::All);
        assert_eq!(State::Specific(1).resolve(&source), StateScope::Index(1));
    }

    #[test]
    fn test_expand() {
        let mut source = FixedSource::single(vec![atom(0.0, 0.0, 0.0, 1.0)]);
        source.states.push(vec![atom(1.0, 0.0, 0.0, 1.0)]);
        source.states.push(vec![atom(2.0, 0.0, 0.0, 1.0)]);

        assert_eq!(State::All.expand(&source), vec![1, 2, 3]);
        assert_eq!(State::Current.expand(&source), vec![1]);
        assert_eq!(State::Specific(3).expand(&source), vec![3]);
    }
}
