//! Named color registry and the host color-table seam

use ahash::AHashMap;

use crate::Color;

/// Host color table
///
/// Resolves a color name to an RGB triple. Implemented by [`NamedColors`];
/// a host with its own palette implements it directly.
pub trait ColorLookup {
    /// Look up a color by name, `None` if the table has no such entry
    fn lookup_color(&self, name: &str) -> Option<Color>;
}

/// PyMOL's default palette, in registration order
const DEFAULT_PALETTE: &[(&str, [f32; 3])] = &[
    ("white", [1.0, 1.0, 1.0]),
    ("black", [0.0, 0.0, 0.0]),
    ("red", [1.0, 0.0, 0.0]),
    ("green", [0.0, 1.0, 0.0]),
    ("blue", [0.0, 0.0, 1.0]),
    ("yellow", [1.0, 1.0, 0.0]),
    ("cyan", [0.0, 1.0, 1.0]),
    ("magenta", [1.0, 0.0, 1.0]),
    ("gray", [0.5, 0.5, 0.5]),
    ("grey", [0.5, 0.5, 0.5]),
    ("gray10", [0.1, 0.1, 0.1]),
    ("gray30", [0.3, 0.3, 0.3]),
    ("gray50", [0.5, 0.5, 0.5]),
    ("gray70", [0.7, 0.7, 0.7]),
    ("gray90", [0.9, 0.9, 0.9]),
    ("carbon", [0.2, 1.0, 0.2]),
    ("nitrogen", [0.2, 0.2, 1.0]),
    ("oxygen", [1.0, 0.3, 0.3]),
    ("hydrogen", [0.9, 0.9, 0.9]),
    ("sulfur", [0.9, 0.775, 0.25]),
    ("orange", [1.0, 0.5, 0.0]),
    ("pink", [1.0, 0.65, 0.85]),
    ("purple", [0.75, 0.0, 0.75]),
    ("salmon", [1.0, 0.6, 0.6]),
    ("lime", [0.5, 1.0, 0.5]),
    ("slate", [0.5, 0.5, 1.0]),
    ("hotpink", [1.0, 0.0, 0.5]),
    ("teal", [0.0, 0.75, 0.75]),
    ("marine", [0.0, 0.5, 1.0]),
    ("forest", [0.2, 0.6, 0.2]),
    ("firebrick", [0.7, 0.13, 0.13]),
    ("wheat", [0.99, 0.82, 0.65]),
    ("violet", [1.0, 0.5, 1.0]),
    ("lightblue", [0.75, 0.75, 1.0]),
    ("palecyan", [0.8, 1.0, 1.0]),
    ("paleyellow", [1.0, 1.0, 0.8]),
    ("deepteal", [0.1, 0.6, 0.6]),
    ("deepsalmon", [1.0, 0.42, 0.42]),
    ("tv_red", [1.0, 0.2, 0.2]),
    ("tv_green", [0.2, 1.0, 0.2]),
    ("tv_blue", [0.3, 0.3, 1.0]),
    ("tv_yellow", [1.0, 1.0, 0.2]),
    ("tv_orange", [1.0, 0.55, 0.15]),
];

/// Registry of named colors
#[derive(Debug)]
pub struct NamedColors {
    colors: Vec<Color>,
    by_name: AHashMap<String, u32>,
}

impl NamedColors {
    /// Create a new named color registry with PyMOL's default colors
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, rgb) in DEFAULT_PALETTE {
            registry.register(name, Color::from(*rgb));
        }
        registry
    }

    /// Create a registry without any colors
    pub fn empty() -> Self {
        NamedColors {
            colors: Vec::with_capacity(DEFAULT_PALETTE.len()),
            by_name: AHashMap::new(),
        }
    }

    /// Register a new named color, replacing any previous color of that name
    pub fn register(&mut self, name: &str, color: Color) -> u32 {
        let index = self.colors.len() as u32;
        self.colors.push(color);
        self.by_name.insert(name.to_lowercase(), index);
        index
    }

    /// Get a color by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Option<(u32, Color)> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| (idx, self.colors[idx as usize]))
    }

    /// Get a color by index
    pub fn get_by_index(&self, index: u32) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    /// Get the number of registered colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get all registered color names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for NamedColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLookup for NamedColors {
    fn lookup_color(&self, name: &str) -> Option<Color> {
        self.get_by_name(name).map(|(_, color)| color)
    }
}
