//! Sphere commands: sketch_scoc, sketch_scom
//!
//! Draw a sphere at the center of a selection and report the center.

use lin_alg::f64::Vec3;
use sketch_cgo::{sphere, Cgo};
use sketch_color::ColorSpec;
use sketch_geom::State;
use sketch_scene::HostLike;

use crate::args::ParsedCommand;
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::commands::{format_point, load_frames, per_state, render_options, CenterKind, Sketch};
use crate::config::SphereDefaults;
use crate::error::CmdResult;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(ScocCommand);
    registry.register(ScomCommand);
}

const ARG_NAMES: &[&str] = &[
    "selection", "state", "name", "prefix", "radius", "color", "alpha", "verbose",
];

/// Arguments of `sketch_scoc` / `sketch_scom`
#[derive(Debug, Clone)]
pub struct SphereArgs {
    pub selection: String,
    pub state: State,
    pub name: Option<String>,
    /// Name prefix; the center kind's default (`coc` / `com`) when unset
    pub prefix: Option<String>,
    pub radius: f64,
    pub color: ColorSpec,
    pub alpha: f32,
}

impl SphereArgs {
    /// Arguments with the plugin defaults: current state, radius 1, gray, alpha 0.5
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            state: State::Current,
            name: None,
            prefix: None,
            radius: 1.0,
            color: ColorSpec::Named("gray".to_string()),
            alpha: 0.5,
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
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    fn from_parsed(args: &ParsedCommand, defaults: &SphereDefaults) -> CmdResult<Self> {
        args.check_names(ARG_NAMES)?;
        Ok(Self {
            selection: args.str_arg(0, "selection")?,
            state: args.state_arg_or(1, "state", State::Current)?,
            name: args.opt_str_arg(2, "name")?,
            prefix: args.opt_str_arg(3, "prefix")?,
            radius: args.float_arg_or(4, "radius", defaults.radius)?,
            color: args.color_arg_or(5, "color", &defaults.color)?,
            alpha: args.float_arg_or(6, "alpha", defaults.alpha as f64)? as f32,
        })
    }
}

fn draw<H: HostLike + ?Sized>(
    host: &mut H,
    kind: CenterKind,
    default_prefix: &str,
    args: &SphereArgs,
) -> CmdResult<Sketch<Vec3>> {
    let color = args.color.resolve(&*host)?;
    let centers = per_state(&*host, &args.selection, args.state, |s| {
        kind.compute(&*host, &args.selection, s)
    })?;

    let frames: Vec<(usize, Cgo)> = centers
        .iter()
        .map(|(state, center)| (*state, sphere(*center, args.radius, color)))
        .collect();
    let prefix = args.prefix.as_deref().unwrap_or(default_prefix);
    let options = render_options(args.name.as_deref(), prefix, args.alpha);
    let name = load_frames(host, args.state, &frames, &options)?;

    Ok(Sketch {
        name,
        results: centers,
    })
}

/// Sphere at the center of coordinates of a selection
pub fn sketch_scoc<H: HostLike + ?Sized>(host: &mut H, args: &SphereArgs) -> CmdResult<Sketch<Vec3>> {
    draw(host, CenterKind::Coordinates, "coc", args)
}

/// Sphere at the center of mass of a selection
pub fn sketch_scom<H: HostLike + ?Sized>(host: &mut H, args: &SphereArgs) -> CmdResult<Sketch<Vec3>> {
    draw(host, CenterKind::Mass, "com", args)
}

/// Summary lines, one per state
pub fn summary(kind: CenterKind, sketch: &Sketch<Vec3>) -> Vec<String> {
    sketch.values().map(|c| format_point(kind.label(), *c)).collect()
}

fn run<'a>(
    ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
    args: &ParsedCommand,
    kind: CenterKind,
) -> CmdResult {
    let config = ctx.config;
    let defaults = &config.sphere;
    let prefix = match kind {
        CenterKind::Coordinates => &defaults.coc_prefix,
        CenterKind::Mass => &defaults.com_prefix,
    };
    let parsed = SphereArgs::from_parsed(args, defaults)?;
    let verbose = args.bool_arg_or(7, "verbose", config.verbose)?;

    let sketch = draw(&mut *ctx.host, kind, prefix, &parsed)?;
    if verbose {
        for line in summary(kind, &sketch) {
            ctx.print(&line);
        }
    }
    Ok(())
}

// ============================================================================
// sketch_scoc command
// ============================================================================

struct ScocCommand;

impl Command for ScocCommand {
    fn name(&self) -> &str {
        "sketch_scoc"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_scoc" draws a sphere at the center of coordinates of a
    selection.

USAGE

    sketch_scoc selection [, state [, name [, prefix [, radius [, color
                [, alpha [, verbose ]]]]]]]

ARGUMENTS

    selection = string: atoms to measure
    state = int: state index, 0 for all states, -1 for current {default: -1}
    name = string: CGO object name {default: next free prefix + number}
    prefix = string: prefix of the generated name {default: coc}
    radius = float: sphere radius {default: 1.0}
    color = string: color name or (r, g, b) {default: gray}
    alpha = float: opacity {default: 0.5}
    verbose = bool: print the center {default: on}

EXAMPLES

    sketch_scoc resn PHE, state=10, radius=3.2
    sketch_scoc resn PHE, state=10, color=red
    sketch_scoc resn PHE, state=10, color=(0, 0.2, 0)
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
// sketch_scom command
// ============================================================================

struct ScomCommand;

impl Command for ScomCommand {
    fn name(&self) -> &str {
        "sketch_scom"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_scom" draws a sphere at the center of mass of a selection.

USAGE

    sketch_scom selection [, state [, name [, prefix [, radius [, color
                [, alpha [, verbose ]]]]]]]

ARGUMENTS

    selection = string: atoms to measure
    state = int: state index, 0 for all states, -1 for current {default: -1}
    name = string: CGO object name {default: next free prefix + number}
    prefix = string: prefix of the generated name {default: com}
    radius = float: sphere radius {default: 1.0}
    color = string: color name or (r, g, b) {default: gray}
    alpha = float: opacity {default: 0.5}
    verbose = bool: print the center {default: on}

EXAMPLES

    sketch_scom resn PHE, state=10, radius=3.2
    sketch_scom resn PHE, state=10, color=red
    sketch_scom resn PHE, state=10, color=(0, 0.2, 0)
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
