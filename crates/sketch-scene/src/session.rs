//! In-memory host session
//!
//! [`Session`] stores molecules, loaded CGOs, settings and a color table,
//! and implements every host trait the sketch commands consume.

use lin_alg::f64::Vec3;
use sketch_cgo::{Cgo, CgoSink};
use sketch_color::{Color, ColorLookup, NamedColors};
use sketch_geom::{AtomSample, AtomSource, Extent, HostError, StateScope};

use crate::object::{CgoObject, ObjectRegistry, ObjectType, SceneObject};
use crate::selection::{evaluate, parse_selection};
use crate::{HostLike, Molecule, SceneError, SceneResult, SettingStore};

/// An in-memory host
#[derive(Debug, Default)]
pub struct Session {
    objects: ObjectRegistry,
    settings: SettingStore,
    colors: NamedColors,
    zoom_count: usize,
}

impl Session {
    /// Create an empty session with default settings and palette
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    pub fn settings(&self) -> &SettingStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingStore {
        &mut self.settings
    }

    pub fn colors_mut(&mut self) -> &mut NamedColors {
        &mut self.colors
    }

    /// Add a molecule, replacing any object of the same name
    pub fn load_molecule(&mut self, molecule: Molecule) -> String {
        let name = molecule.name().to_string();
        log::debug!(
            "Loaded molecule '{}' ({} atoms, {} states)",
            name,
            molecule.atom_count(),
            molecule.state_count()
        );
        self.objects.add(SceneObject::Molecule(molecule));
        self.note_load(&name);
        name
    }

    pub fn molecule(&self, name: &str) -> Option<&Molecule> {
        self.objects.get_molecule(name)
    }

    pub fn cgo(&self, name: &str) -> Option<&CgoObject> {
        self.objects.get_cgo(name)
    }

    /// Make `state` (1-based) the current state
    pub fn set_frame(&mut self, state: usize) -> SceneResult<()> {
        let count = self.count_states();
        if state == 0 || state > count {
            return Err(SceneError::InvalidState {
                index: state,
                count,
            });
        }
        self.settings.set("state", state as i32)?;
        Ok(())
    }

    /// Number of loads that happened while `auto_zoom` was enabled
    pub fn zoom_count(&self) -> usize {
        self.zoom_count
    }

    fn note_load(&mut self, name: &str) {
        if self.settings.get_int("auto_zoom").unwrap_or(0) != 0 {
            self.zoom_count += 1;
            log::debug!("Zooming on '{}'", name);
        }
    }

    fn wrong_type(name: &str, expected: ObjectType, actual: ObjectType) -> HostError {
        SceneError::InvalidObjectType {
            name: name.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
        .into()
    }

    /// Selected atoms in `scope`, in load order
    fn select_atoms(&self, selection: &str, scope: StateScope) -> Result<Vec<AtomSample>, HostError> {
        let count = self.count_states();
        if let StateScope::Index(index) = scope {
            if index == 0 || index > count {
                return Err(HostError::InvalidState { index, count });
            }
        }

        let expr = parse_selection(selection)?;
        let molecules: Vec<&Molecule> = self.objects.molecules().collect();
        let selected = evaluate(&expr, &molecules)?;

        let states: Vec<usize> = match scope {
            StateScope::All => (1..=count).collect(),
            StateScope::Index(index) => vec![index],
        };

        let mut atoms = Vec::new();
        for state in states {
            for &(m, a) in &selected {
                let mol = molecules[m];
                // Molecules with fewer states do not contribute to later ones
                if let Some(coords) = mol.coords(state) {
                    atoms.push(AtomSample::new(coords[a], mol.atoms()[a].mass));
                }
            }
        }
        Ok(atoms)
    }
}

impl AtomSource for Session {
    fn extent(&self, selection: &str, scope: StateScope) -> Result<Extent, HostError> {
        let atoms = self.select_atoms(selection, scope)?;
        Extent::from_points(atoms.iter().map(|a| a.position))
            .ok_or_else(|| HostError::EmptySelection(selection.to_string()))
    }

    fn atoms(&self, selection: &str, scope: StateScope) -> Result<Vec<AtomSample>, HostError> {
        self.select_atoms(selection, scope)
    }

    fn count_states(&self) -> usize {
        self.objects
            .molecules()
            .map(Molecule::state_count)
            .max()
            .unwrap_or(0)
    }

    fn current_state(&self) -> usize {
        self.settings.get_int("state").unwrap_or(1).max(1) as usize
    }
}

impl ColorLookup for Session {
    fn lookup_color(&self, name: &str) -> Option<Color> {
        self.colors.lookup_color(name)
    }
}

impl CgoSink for Session {
    fn unused_name(&self, prefix: &str, always_number: bool) -> String {
        self.objects.unused_name(prefix, always_number)
    }

    fn delete_object(&mut self, name: &str) -> Result<(), HostError> {
        if self.objects.remove(name).is_some() {
            log::debug!("Deleted object '{}'", name);
        }
        Ok(())
    }

    fn set_view_option(&mut self, name: &str, value: i32) -> Result<i32, HostError> {
        let previous = self.settings.set(name, value)?;
        Ok(previous.as_int().unwrap_or(0))
    }

    fn load_cgo(&mut self, cgo: &Cgo, name: &str, state: usize) -> Result<(), HostError> {
        let state = match self.objects.get_mut(name) {
            Some(SceneObject::Cgo(obj)) => obj.set_state(state, cgo.clone()),
            Some(other) => {
                return Err(Self::wrong_type(name, ObjectType::Cgo, other.object_type()));
            }
            None => {
                let mut obj = CgoObject::new(name);
                let state = obj.set_state(state, cgo.clone());
                self.objects.add(SceneObject::Cgo(obj));
                state
            }
        };
        log::debug!("Loaded CGO '{}' into state {}", name, state);
        self.note_load(name);
        Ok(())
    }
}

impl HostLike for Session {
    fn legal_name(&self, text: &str) -> Result<String, HostError> {
        let mut name = String::with_capacity(text.len());
        for c in text.chars() {
            let c = if c.is_ascii_alphanumeric() || matches!(c, '-' | '.') {
                c
            } else {
                '_'
            };
            if c == '_' && name.ends_with('_') {
                continue;
            }
            name.push(c);
        }

        let name = name.trim_matches('_');
        if name.is_empty() {
            return Err(HostError::InvalidName(text.to_string()));
        }
        Ok(name.to_string())
    }

    fn pseudoatom(&mut self, name: &str, position: Vec3, state: usize) -> Result<(), HostError> {
        let state = match self.objects.get_mut(name) {
            Some(SceneObject::Molecule(mol)) => mol.set_state(state, vec![position])?,
            Some(other) => {
                return Err(Self::wrong_type(name, ObjectType::Molecule, other.object_type()));
            }
            None => {
                let mut mol = Molecule::pseudoatom(name);
                let state = mol.set_state(state, vec![position])?;
                self.objects.add(SceneObject::Molecule(mol));
                state
            }
        };
        log::debug!("Placed pseudoatom '{}' in state {}", name, state);
        self.note_load(name);
        Ok(())
    }
}
