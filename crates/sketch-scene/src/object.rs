//! Named object table

use std::collections::BTreeMap;
use std::fmt;

use ahash::AHashMap;
use sketch_cgo::Cgo;

use crate::Molecule;

/// Object type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Molecule,
    Cgo,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Molecule => write!(f, "molecule"),
            ObjectType::Cgo => write!(f, "cgo"),
        }
    }
}

/// A loaded CGO, one stream per state
#[derive(Debug, Clone)]
pub struct CgoObject {
    name: String,
    states: BTreeMap<usize, Cgo>,
}

impl CgoObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a stream at `state`; 0 appends after the highest state
    pub fn set_state(&mut self, state: usize, cgo: Cgo) -> usize {
        let state = if state == 0 {
            self.states.keys().next_back().map_or(1, |last| last + 1)
        } else {
            state
        };
        self.states.insert(state, cgo);
        state
    }

    pub fn state(&self, state: usize) -> Option<&Cgo> {
        self.states.get(&state)
    }

    /// Highest populated state
    pub fn state_count(&self) -> usize {
        self.states.keys().next_back().copied().unwrap_or(0)
    }

    pub fn states(&self) -> impl Iterator<Item = (usize, &Cgo)> {
        self.states.iter().map(|(k, v)| (*k, v))
    }
}

/// Any object held by the registry
#[derive(Debug, Clone)]
pub enum SceneObject {
    Molecule(Molecule),
    Cgo(CgoObject),
}

impl SceneObject {
    pub fn name(&self) -> &str {
        match self {
            SceneObject::Molecule(m) => m.name(),
            SceneObject::Cgo(c) => c.name(),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            SceneObject::Molecule(_) => ObjectType::Molecule,
            SceneObject::Cgo(_) => ObjectType::Cgo,
        }
    }
}

/// Object registry for managing named objects
///
/// Objects are stored by name; load order is kept for selection results.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: AHashMap<String, SceneObject>,
    order: Vec<String>,
}

impl ObjectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Add an object, replacing any object of the same name
    pub fn add(&mut self, obj: SceneObject) {
        let name = obj.name().to_string();
        self.order.retain(|n| n != &name);
        self.order.push(name.clone());
        self.objects.insert(name, obj);
    }

    /// Remove an object by name
    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        self.order.retain(|n| n != name);
        self.objects.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name)
    }

    pub fn get_molecule(&self, name: &str) -> Option<&Molecule> {
        match self.objects.get(name) {
            Some(SceneObject::Molecule(m)) => Some(m),
            _ => None,
        }
    }

    pub fn get_cgo(&self, name: &str) -> Option<&CgoObject> {
        match self.objects.get(name) {
            Some(SceneObject::Cgo(c)) => Some(c),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Object names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Molecules in load order
    pub fn molecules(&self) -> impl Iterator<Item = &Molecule> {
        self.order
            .iter()
            .filter_map(|name| self.get_molecule(name))
    }

    /// A name starting with `prefix` that no object uses
    ///
    /// Numbered names are `prefix01`, `prefix02`, ... With `always_number`
    /// off, `prefix` itself is returned when it is free.
    pub fn unused_name(&self, prefix: &str, always_number: bool) -> String {
        if !always_number && !self.contains(prefix) {
            return prefix.to_string();
        }

        let mut n = 1;
        loop {
            let name = format!("{}{:02}", prefix, n);
            if !self.contains(&name) {
                return name;
            }
            n += 1;
        }
    }
}
