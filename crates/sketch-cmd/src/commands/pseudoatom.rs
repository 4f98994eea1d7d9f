//! Pseudoatom commands: sketch_pcoc, sketch_pcom
//!
//! Place a single-atom object at the center of a selection, one state per
//! host state by default.

use lin_alg::f64::Vec3;
use sketch_geom::State;
use sketch_scene::HostLike;

use crate::args::ParsedCommand;
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::commands::{format_point, per_state, CenterKind, Sketch};
use crate::config::PseudoatomDefaults;
use crate::error::CmdResult;
use crate::naming::derived_name;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(PcocCommand);
    registry.register(PcomCommand);
}

const ARG_NAMES: &[&str] = &["selection", "state", "name", "prefix", "suffix"];

/// Arguments of `sketch_pcoc` / `sketch_pcom`
#[derive(Debug, Clone)]
pub struct PseudoatomArgs {
    pub selection: String,
    /// `All` (the default) places one pseudoatom state per host state
    pub state: State,
    /// Object name; derived from the selection when unset
    pub name: Option<String>,
    pub prefix: String,
    pub suffix: String,
}

impl PseudoatomArgs {
    /// Arguments with an empty prefix and suffix
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            state: State::All,
            name: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn from_parsed(args: &ParsedCommand, defaults: &PseudoatomDefaults, suffix: &str) -> CmdResult<Self> {
        args.check_names(ARG_NAMES)?;
        Ok(Self {
            selection: args.str_arg(0, "selection")?,
            state: args.state_arg_or(1, "state", State::All)?,
            name: args.opt_str_arg(2, "name")?,
            prefix: args
                .opt_str_arg(3, "prefix")?
                .unwrap_or_else(|| defaults.prefix.clone()),
            suffix: args
                .opt_str_arg(4, "suffix")?
                .unwrap_or_else(|| suffix.to_string()),
        })
    }
}

fn place<H: HostLike + ?Sized>(
    host: &mut H,
    kind: CenterKind,
    args: &PseudoatomArgs,
) -> CmdResult<Sketch<Vec3>> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => derived_name(&*host, &args.selection, &args.prefix, &args.suffix),
    };

    let centers = per_state(&*host, &args.selection, args.state, |s| {
        kind.compute(&*host, &args.selection, s)
    })?;

    for (state, center) in &centers {
        // A single-state request adds the next pseudoatom state
        let target = if args.state == State::All { *state } else { 0 };
        host.pseudoatom(&name, *center, target)?;
    }
    log::debug!("Placed {} state(s) of '{}'", centers.len(), name);

    Ok(Sketch {
        name,
        results: centers,
    })
}

/// Pseudoatom at the center of coordinates of a selection
pub fn sketch_pcoc<H: HostLike + ?Sized>(host: &mut H, args: &PseudoatomArgs) -> CmdResult<Sketch<Vec3>> {
    place(host, CenterKind::Coordinates, args)
}

/// Pseudoatom at the center of mass of a selection
pub fn sketch_pcom<H: HostLike + ?Sized>(host: &mut H, args: &PseudoatomArgs) -> CmdResult<Sketch<Vec3>> {
    place(host, CenterKind::Mass, args)
}

fn run<'a>(
    ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
    args: &ParsedCommand,
    kind: CenterKind,
) -> CmdResult {
    let config = ctx.config;
    let defaults = &config.pseudoatom;
    let suffix = match kind {
        CenterKind::Coordinates => &defaults.coc_suffix,
        CenterKind::Mass => &defaults.com_suffix,
    };
    let parsed = PseudoatomArgs::from_parsed(args, defaults, suffix)?;
    let sketch = place(&mut *ctx.host, kind, &parsed)?;

    log::debug!(
        "{}",
        sketch
            .values()
            .map(|c| format_point(kind.label(), *c))
            .collect::<Vec<_>>()
            .join("; ")
    );
    Ok(())
}

// ============================================================================
// sketch_pcoc command
// ============================================================================

struct PcocCommand;

impl Command for PcocCommand {
    fn name(&self) -> &str {
        "sketch_pcoc"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_pcoc" creates a pseudoatom at the center of coordinates of a
    selection.

USAGE

    sketch_pcoc selection [, state [, name [, prefix [, suffix ]]]]

ARGUMENTS

    selection = string: atoms to measure
    state = int: state index, 0 for all states, -1 for current {default: 0}
    name = string: object name {default: prefix + selection + suffix}
    prefix = string: prefix of the derived name {default: ''}
    suffix = string: suffix of the derived name {default: '_coc'}

EXAMPLES

    sketch_pcoc (resn PHE), state=10
"#
    }

    fn execute<'a>(
        &self,
        ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
        args: &ParsedCommand,
    ) -> CmdResult {
        run(ctx, args, CenterKind::Coordinates)
    }
}

// ============================================================================
// sketch_pcom command
// ============================================================================

struct PcomCommand;

impl Command for PcomCommand {
    fn name(&self) -> &str {
        "sketch_pcom"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_pcom" creates a pseudoatom at the center of mass of a selection.

USAGE

    sketch_pcom selection [, state [, name [, prefix [, suffix ]]]]

ARGUMENTS

    selection = string: atoms to measure
    state = int: state index, 0 for all states, -1 for current {default: 0}
    name = string: object name {default: prefix + selection + suffix}
    prefix = string: prefix of the derived name {default: ''}
    suffix = string: suffix of the derived name {default: '_com'}

EXAMPLES

    sketch_pcom (resn PHE), state=10
"#
    }

    fn execute<'a>(
        &self,
        ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
        args: &ParsedCommand,
    ) -> CmdResult {
        run(ctx, args, CenterKind::Mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_geom::AtomSource;
    use sketch_scene::{Molecule, Session};

    fn two_state_session() -> Session {
        let mut session = Session::new();
        let mut mol = Molecule::from_atoms(
            "pair",
            [
                ("C1", 12.0, Vec3::new(0.0, 0.0, 0.0)),
                ("C2", 12.0, Vec3::new(2.0, 0.0, 0.0)),
            ],
        );
        mol.add_state(vec![Vec3::new(0.0, 4.0, 0.0), Vec3::new(2.0, 6.0, 0.0)])
            .unwrap();
        session.load_molecule(mol);
        session
    }

    #[test]
    fn test_pcoc_all_states() {
        let mut session = two_state_session();
        let args = PseudoatomArgs::new("pair").with_suffix("_coc");
        let sketch = sketch_pcoc(&mut session, &args).unwrap();

        assert_eq!(sketch.name, "pair_coc");
        assert_eq!(sketch.results.len(), 2);

        let pc = session.molecule("pair_coc").unwrap();
        assert_eq!(pc.state_count(), 2);
        assert_eq!(pc.coords(1).unwrap()[0].x, 1.0);
        assert_eq!(pc.coords(2).unwrap()[0].y, 5.0);
    }

    #[test]
    fn test_pcom_single_state() {
        let mut session = two_state_session();
        let args = PseudoatomArgs::new("pair")
            .with_state(State::Specific(2))
            .with_name("mark");
        let sketch = sketch_pcom(&mut session, &args).unwrap();

        assert_eq!(sketch.name, "mark");
        let pc = session.molecule("mark").unwrap();
        assert_eq!(pc.state_count(), 1);
        assert_eq!(pc.coords(1).unwrap()[0].y, 5.0);
    }

    #[test]
    fn test_unresolvable_name_falls_back() {
        let mut session = two_state_session();
        let args = PseudoatomArgs::new("*")
            .with_prefix("p")
            .with_suffix("_com")
            .with_state(State::Current);
        let sketch = sketch_pcom(&mut session, &args).unwrap();
        assert_eq!(sketch.name, "p_com");
        assert!(session.molecule("p_com").is_some());
    }

    #[test]
    fn test_missing_selection_creates_nothing() {
        let mut session = two_state_session();
        let args = PseudoatomArgs::new("ghost").with_suffix("_coc");
        assert!(sketch_pcoc(&mut session, &args).is_err());
        assert!(session.molecule("ghost_coc").is_none());
        assert_eq!(session.count_states(), 2);
    }
}
