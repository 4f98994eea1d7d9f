//! Molecular objects
//!
//! A molecule is a list of named atoms plus one coordinate set per state.
//! Every coordinate set has exactly one position per atom.

use lin_alg::f64::Vec3;
use serde::{Deserialize, Serialize};

use crate::{SceneError, SceneResult};

/// Atom name given to pseudoatoms
pub const PSEUDOATOM_NAME: &str = "PS1";

/// An atom's identity; positions live in the coordinate sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub name: String,
    pub mass: f64,
}

impl Atom {
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
        }
    }
}

/// A molecule with per-state coordinates
#[derive(Debug, Clone)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
    coord_sets: Vec<Vec<Vec3>>,
}

impl Molecule {
    /// Create an empty molecule with no atoms and no states
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atoms: Vec::new(),
            coord_sets: Vec::new(),
        }
    }

    /// Create a single-state molecule from `(name, mass, position)` triples
    pub fn from_atoms<'a>(
        name: impl Into<String>,
        atoms: impl IntoIterator<Item = (&'a str, f64, Vec3)>,
    ) -> Self {
        let mut mol = Self::new(name);
        let mut coords = Vec::new();
        for (atom_name, mass, pos) in atoms {
            mol.atoms.push(Atom::new(atom_name, mass));
            coords.push(pos);
        }
        mol.coord_sets.push(coords);
        mol
    }

    /// A one-atom molecule as created by `pseudoatom`
    pub fn pseudoatom(name: impl Into<String>) -> Self {
        let mut mol = Self::new(name);
        mol.atoms.push(Atom::new(PSEUDOATOM_NAME, 0.0));
        mol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn state_count(&self) -> usize {
        self.coord_sets.len()
    }

    /// Coordinates of a state (1-based)
    pub fn coords(&self, state: usize) -> Option<&[Vec3]> {
        state
            .checked_sub(1)
            .and_then(|i| self.coord_sets.get(i))
            .map(|c| c.as_slice())
    }

    /// Append a coordinate set as the next state
    pub fn add_state(&mut self, coords: Vec<Vec3>) -> SceneResult<usize> {
        self.check_count(&coords)?;
        self.coord_sets.push(coords);
        Ok(self.coord_sets.len())
    }

    /// Set the coordinates of `state` (1-based)
    ///
    /// State 0 or the state right after the last one appends; an existing
    /// state is replaced. Leaving a gap is an error.
    pub fn set_state(&mut self, state: usize, coords: Vec<Vec3>) -> SceneResult<usize> {
        self.check_count(&coords)?;
        let count = self.coord_sets.len();
        match state {
            0 => self.add_state(coords),
            n if n == count + 1 => self.add_state(coords),
            n if n <= count => {
                self.coord_sets[n - 1] = coords;
                Ok(n)
            }
            n => Err(SceneError::InvalidState { index: n, count }),
        }
    }

    fn check_count(&self, coords: &[Vec3]) -> SceneResult<()> {
        if coords.len() != self.atoms.len() {
            return Err(SceneError::CoordCountMismatch {
                expected: self.atoms.len(),
                actual: coords.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Molecule {
        Molecule::from_atoms(
            "hoh",
            [
                ("O", 15.999, Vec3::new(0.0, 0.0, 0.0)),
                ("H1", 1.008, Vec3::new(0.96, 0.0, 0.0)),
                ("H2", 1.008, Vec3::new(-0.24, 0.93, 0.0)),
            ],
        )
    }

    #[test]
    fn test_from_atoms() {
        let mol = water();
        assert_eq!(mol.name(), "hoh");
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.state_count(), 1);
        assert_eq!(mol.atoms()[1].name, "H1");
        assert_eq!(mol.coords(1).map(|c| c.len()), Some(3));
        assert!(mol.coords(0).is_none());
        assert!(mol.coords(2).is_none());
    }

    #[test]
    fn test_add_state() {
        let mut mol = water();
        let shifted = mol
            .coords(1)
            .unwrap()
            .iter()
            .map(|p| *p + Vec3::new(1.0, 0.0, 0.0))
            .collect();
        assert_eq!(mol.add_state(shifted).unwrap(), 2);
        assert_eq!(mol.coords(2).unwrap()[0].x, 1.0);
    }

    #[test]
    fn test_coord_count_mismatch() {
        let mut mol = water();
        assert_eq!(
            mol.add_state(vec![Vec3::new(0.0, 0.0, 0.0)]),
            Err(SceneError::CoordCountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_pseudoatom_states() {
        let mut mol = Molecule::pseudoatom("pc");
        assert_eq!(mol.state_count(), 0);
        assert_eq!(mol.atoms()[0].name, PSEUDOATOM_NAME);

        assert_eq!(mol.set_state(0, vec![Vec3::new(1.0, 0.0, 0.0)]).unwrap(), 1);
        assert_eq!(mol.set_state(2, vec![Vec3::new(2.0, 0.0, 0.0)]).unwrap(), 2);
        assert_eq!(mol.set_state(1, vec![Vec3::new(3.0, 0.0, 0.0)]).unwrap(), 1);
        assert_eq!(mol.coords(1).unwrap()[0].x, 3.0);
        assert_eq!(
            mol.set_state(5, vec![Vec3::new(0.0, 0.0, 0.0)]),
            Err(SceneError::InvalidState { index: 5, count: 2 })
        );
    }
}
