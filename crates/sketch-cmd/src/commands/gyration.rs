//! Radius of gyration command: sketch_rgyr

use sketch_cgo::{sphere, Cgo};
use sketch_color::ColorSpec;
use sketch_geom::{gyration, Gyration, State};
use sketch_scene::HostLike;

use crate::args::ParsedCommand;
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::commands::{load_frames, per_state, render_options, Sketch};
use crate::config::GyrationDefaults;
use crate::error::CmdResult;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(RgyrCommand);
}

const ARG_NAMES: &[&str] = &[
    "selection", "state", "name", "prefix", "mass", "color", "alpha", "verbose",
];

/// Arguments of `sketch_rgyr`
#[derive(Debug, Clone)]
pub struct GyrationArgs {
    pub selection: String,
    pub state: State,
    pub name: Option<String>,
    pub prefix: String,
    /// Weight atoms by mass; every atom counts once otherwise
    pub mass_weighted: bool,
    pub color: ColorSpec,
    pub alpha: f32,
}

impl GyrationArgs {
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            state: State::Current,
            name: None,
            prefix: "rgyr".to_string(),
            mass_weighted: true,
            color: ColorSpec::Named("gray".to_string()),
            alpha: 0.3,
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

    pub fn with_mass_weighted(mut self, mass_weighted: bool) -> Self {
        self.mass_weighted = mass_weighted;
        self
    }

    fn from_parsed(args: &ParsedCommand, defaults: &GyrationDefaults) -> CmdResult<Self> {
        args.check_names(ARG_NAMES)?;
        Ok(Self {
            selection: args.str_arg(0, "selection")?,
            state: args.state_arg_or(1, "state", State::Current)?,
            name: args.opt_str_arg(2, "name")?,
            prefix: args
                .opt_str_arg(3, "prefix")?
                .unwrap_or_else(|| defaults.prefix.clone()),
            mass_weighted: args.bool_arg_or(4, "mass", defaults.mass_weighted)?,
            color: args.color_arg_or(5, "color", &defaults.color)?,
            alpha: args.float_arg_or(6, "alpha", defaults.alpha as f64)? as f32,
        })
    }
}

/// Translucent sphere of radius Rg around the weighted center of a selection
pub fn sketch_rgyr<H: HostLike + ?Sized>(host: &mut H, args: &GyrationArgs) -> CmdResult<Sketch<Gyration>> {
    let color = args.color.resolve(&*host)?;
    let results = per_state(&*host, &args.selection, args.state, |s| {
        gyration(&*host, &args.selection, s, args.mass_weighted)
    })?;

    let frames: Vec<(usize, Cgo)> = results
        .iter()
        .map(|(state, g)| (*state, sphere(g.center, g.radius, color)))
        .collect();
    let options = render_options(args.name.as_deref(), &args.prefix, args.alpha);
    let name = load_frames(host, args.state, &frames, &options)?;

    Ok(Sketch { name, results })
}

/// Summary lines, one per state
pub fn summary(sketch: &Sketch<Gyration>) -> Vec<String> {
    sketch
        .values()
        .map(|g| format!("Radius of gyration: {:.3}", g.radius))
        .collect()
}

struct RgyrCommand;

impl Command for RgyrCommand {
    fn name(&self) -> &str {
        "sketch_rgyr"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_rgyr" draws a translucent sphere whose radius is the radius of
    gyration of a selection, centered on its weighted center.

USAGE

    sketch_rgyr selection [, state [, name [, prefix [, mass [, color
                [, alpha [, verbose ]]]]]]]

ARGUMENTS

    selection = string: atoms to measure
    state = int: state index, 0 for all states, -1 for current {default: -1}
    name = string: CGO object name {default: next free prefix + number}
    prefix = string: prefix of the generated name {default: rgyr}
    mass = bool: weight atoms by mass {default: on}
    color = string: color name or (r, g, b) {default: gray}
    alpha = float: opacity {default: 0.3}
    verbose = bool: print the radius {default: on}

EXAMPLES

    sketch_rgyr prot
    sketch_rgyr prot, state=0, mass=off
"#
    }

    fn execute<'a>(
        &self,
        ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
        args: &ParsedCommand,
    ) -> CmdResult {
        let config = ctx.config;
        let parsed = GyrationArgs::from_parsed(args, &config.gyration)?;
        let verbose = args.bool_arg_or(7, "verbose", config.verbose)?;

        let sketch = sketch_rgyr(&mut *ctx.host, &parsed)?;
        if verbose {
            for line in summary(&sketch) {
                ctx.print(&line);
            }
        }
        Ok(())
    }
}
