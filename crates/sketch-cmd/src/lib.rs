//! pymol-sketch Command System
//!
//! This crate provides the command parsing, registration, and execution layer
//! for the sketch commands.
//!
//! # Overview
//!
//! | command        | draws                                              |
//! |----------------|----------------------------------------------------|
//! | `sketch_pcoc`  | pseudoatom at the center of coordinates            |
//! | `sketch_pcom`  | pseudoatom at the center of mass                   |
//! | `sketch_scoc`  | sphere at the center of coordinates                |
//! | `sketch_scom`  | sphere at the center of mass                       |
//! | `sketch_bbox`  | wire bounding box                                  |
//! | `sketch_rgyr`  | sphere with the radius of gyration                 |
//! | `sketch_arrow` | arrow between two points                           |
//!
//! # Example
//!
//! ```
//! use lin_alg::f64::Vec3;
//! use sketch_cmd::CommandExecutor;
//! use sketch_scene::{Molecule, Session};
//!
//! let mut session = Session::new();
//! session.load_molecule(Molecule::from_atoms(
//!     "pair",
//!     [("C1", 12.0, Vec3::new(0.0, 0.0, 0.0)), ("C2", 12.0, Vec3::new(2.0, 0.0, 0.0))],
//! ));
//!
//! let executor = CommandExecutor::new();
//! let output = executor.do_with_options(&mut session, "sketch_scom pair, color=red", false).unwrap();
//! assert_eq!(output.lines(), vec!["Center of mass: 1.000, 0.000, 0.000"]);
//! assert!(session.cgo("com01").is_some());
//! ```
//!
//! # Architecture
//!
//! - **Parser**: parses command strings into [`ParsedCommand`] objects
//! - **Command trait**: interface for implementing commands
//! - **CommandRegistry**: maps command names to implementations
//! - **CommandExecutor**: dispatches and executes commands
//! - **commands**: the sketch commands, also callable as plain functions

mod args;
mod command;
pub mod commands;
mod config;
mod error;
mod executor;
mod naming;
mod output;
mod parser;

pub use args::{to_color_spec, to_vec3, ArgValue, ParsedCommand};
pub use command::{Command, CommandContext, CommandRegistry, HostLike};
pub use config::{
    ArrowDefaults, BoxDefaults, GyrationDefaults, PseudoatomDefaults, SketchConfig, SphereDefaults,
};
pub use error::{CmdError, CmdResult, ParseError};
pub use executor::{format_command, CommandExecutor, CommandOutput};
pub use naming::derived_name;
pub use output::{OutputKind, OutputMessage};
pub use parser::{parse_command, parse_commands};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::args::{ArgValue, ParsedCommand};
    pub use crate::command::{Command, CommandContext, CommandRegistry, HostLike};
    pub use crate::commands::arrow::{sketch_arrow, ArrowArgs};
    pub use crate::commands::bbox::{sketch_bbox, BoxArgs};
    pub use crate::commands::gyration::{sketch_rgyr, GyrationArgs};
    pub use crate::commands::pseudoatom::{sketch_pcoc, sketch_pcom, PseudoatomArgs};
    pub use crate::commands::sphere::{sketch_scoc, sketch_scom, SphereArgs};
    pub use crate::error::{CmdError, CmdResult};
    pub use crate::executor::CommandExecutor;
}
