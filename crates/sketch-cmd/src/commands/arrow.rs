//! Arrow command: sketch_arrow

use lin_alg::f64::Vec3;
use sketch_cgo::{
    render, Arrow, DEFAULT_HEAD_LENGTH_SCALE, DEFAULT_HEAD_RADIUS_SCALE, MIN_ARROW_LENGTH,
};
use sketch_color::ColorSpec;
use sketch_scene::HostLike;

use crate::args::ParsedCommand;
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::commands::render_options;
use crate::config::ArrowDefaults;
use crate::error::CmdResult;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(ArrowCommand);
}

const ARG_NAMES: &[&str] = &[
    "p1",
    "p2",
    "radius",
    "color",
    "color2",
    "color3",
    "head_length",
    "head_radius",
    "name",
    "prefix",
    "alpha",
];

/// Arguments of `sketch_arrow`
#[derive(Debug, Clone)]
pub struct ArrowArgs {
    /// Tail
    pub p1: Vec3,
    /// Tip
    pub p2: Vec3,
    pub radius: f64,
    pub color: ColorSpec,
    pub color2: Option<ColorSpec>,
    pub color3: Option<ColorSpec>,
    pub head_length: Option<f64>,
    pub head_radius: Option<f64>,
    pub head_length_scale: f64,
    pub head_radius_scale: f64,
    pub name: Option<String>,
    pub prefix: String,
    pub alpha: f32,
}

impl ArrowArgs {
    pub fn new(p1: Vec3, p2: Vec3) -> Self {
        Self {
            p1,
            p2,
            radius: 0.2,
            color: ColorSpec::Named("white".to_string()),
            color2: None,
            color3: None,
            head_length: None,
            head_radius: None,
            head_length_scale: DEFAULT_HEAD_LENGTH_SCALE,
            head_radius_scale: DEFAULT_HEAD_RADIUS_SCALE,
            name: None,
            prefix: "arrow".to_string(),
            alpha: 1.0,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_color2(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color2 = Some(color.into());
        self
    }

    pub fn with_head_length(mut self, length: f64) -> Self {
        self.head_length = Some(length);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn from_parsed(args: &ParsedCommand, defaults: &ArrowDefaults) -> CmdResult<Self> {
        args.check_names(ARG_NAMES)?;
        Ok(Self {
            p1: args.vec3_arg(0, "p1")?,
            p2: args.vec3_arg(1, "p2")?,
            radius: args.float_arg_or(2, "radius", defaults.radius)?,
            color: args.color_arg_or(3, "color", &defaults.color)?,
            color2: args.opt_color_arg(4, "color2")?,
            color3: args.opt_color_arg(5, "color3")?,
            head_length: args.opt_float_arg(6, "head_length")?,
            head_radius: args.opt_float_arg(7, "head_radius")?,
            head_length_scale: defaults.head_length_scale,
            head_radius_scale: defaults.head_radius_scale,
            name: args.opt_str_arg(8, "name")?,
            prefix: args
                .opt_str_arg(9, "prefix")?
                .unwrap_or_else(|| defaults.prefix.clone()),
            alpha: args.float_arg_or(10, "alpha", defaults.alpha as f64)? as f32,
        })
    }
}

/// Arrow from `p1` to `p2`; returns the object name
pub fn sketch_arrow<H: HostLike + ?Sized>(host: &mut H, args: &ArrowArgs) -> CmdResult<String> {
    let mut arrow = Arrow::new(args.p1, args.p2, args.radius, args.color.resolve(&*host)?)
        .head_length_scale(args.head_length_scale)
        .head_radius_scale(args.head_radius_scale);
    if let Some(spec) = &args.color2 {
        arrow = arrow.color2(spec.resolve(&*host)?);
    }
    if let Some(spec) = &args.color3 {
        arrow = arrow.color3(spec.resolve(&*host)?);
    }
    if let Some(length) = args.head_length {
        arrow = arrow.head_length(length);
    }
    if let Some(radius) = args.head_radius {
        arrow = arrow.head_radius(radius);
    }

    let options = render_options(args.name.as_deref(), &args.prefix, args.alpha);
    Ok(render(host, &arrow.build(), &options)?)
}

struct ArrowCommand;

impl Command for ArrowCommand {
    fn name(&self) -> &str {
        "sketch_arrow"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_arrow" draws an arrow from p1 to p2: a cylinder shaft and a
    cone head ending at p2.

USAGE

    sketch_arrow p1, p2 [, radius [, color [, color2 [, color3
                 [, head_length [, head_radius [, name [, prefix [, alpha ]]]]]]]]]

ARGUMENTS

    p1 = vector: tail, as (x, y, z) or [x, y, z]
    p2 = vector: tip
    radius = float: shaft radius {default: 0.2}
    color = string: tail color {default: white}
    color2 = string: color where shaft meets head {default: color}
    color3 = string: tip color {default: color2}
    head_length = float: {default: radius * 3.0}
    head_radius = float: {default: head_length * 0.6}
    name = string: CGO object name {default: next free prefix + number}
    prefix = string: prefix of the generated name {default: arrow}
    alpha = float: opacity {default: 1.0}

EXAMPLES

    sketch_arrow (0, 0, 0), (10, 0, 0), color=red, color3=blue
"#
    }

    fn execute<'a>(
        &self,
        ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
        args: &ParsedCommand,
    ) -> CmdResult {
        let config = ctx.config;
        let parsed = ArrowArgs::from_parsed(args, &config.arrow)?;
        if (parsed.p1 - parsed.p2).magnitude() <= MIN_ARROW_LENGTH {
            ctx.warn("sketch_arrow: p1 and p2 coincide, the arrow has no direction");
        }
        let name = sketch_arrow(&mut *ctx.host, &parsed)?;
        log::debug!("Drew arrow '{}'", name);
        Ok(())
    }
}
