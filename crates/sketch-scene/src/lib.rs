//! Host side of pymol-sketch
//!
//! This crate defines [`HostLike`], the full set of capabilities the sketch
//! commands need from a molecular viewer, and [`Session`], an in-memory host
//! implementing it:
//!
//! - Molecules with named atoms and one coordinate set per state
//! - A small selection language (`all`, object names, `name X`, `and`, `or`)
//! - A named object table holding molecules and loaded CGOs
//! - Typed runtime settings (`auto_zoom`, `state`)
//! - PyMOL's default named colors
//!
//! # Example
//!
//! ```
//! use lin_alg::f64::Vec3;
//! use sketch_geom::{center_of_mass, State};
//! use sketch_scene::{Molecule, Session};
//!
//! let mut session = Session::new();
//! session.load_molecule(Molecule::from_atoms(
//!     "pair",
//!     [("C1", 12.0, Vec3::new(0.0, 0.0, 0.0)), ("C2", 12.0, Vec3::new(2.0, 0.0, 0.0))],
//! ));
//!
//! let com = center_of_mass(&session, "pair", State::Current).unwrap();
//! assert_eq!(com.x, 1.0);
//! ```

mod error;
mod host;
mod molecule;
mod object;
mod selection;
mod session;
mod settings;

pub use error::{SceneError, SceneResult};
pub use host::HostLike;
pub use molecule::{Atom, Molecule, PSEUDOATOM_NAME};
pub use object::{CgoObject, ObjectRegistry, ObjectType, SceneObject};
pub use selection::{evaluate, parse_selection, AtomSet, SelectionExpr};
pub use session::Session;
pub use settings::{SettingStore, SettingValue};
