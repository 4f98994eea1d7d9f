//! Bounding box command: sketch_bbox

use sketch_cgo::{wire_box, Cgo, DEFAULT_LINE_WIDTH};
use sketch_color::ColorSpec;
use sketch_geom::{bounding_box, BoundingBox, State};
use sketch_scene::HostLike;

use crate::args::ParsedCommand;
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::commands::{load_frames, per_state, render_options, Sketch};
use crate::config::BoxDefaults;
use crate::error::CmdResult;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(BboxCommand);
}

const ARG_NAMES: &[&str] = &[
    "selection", "state", "name", "prefix", "padding", "linewidth", "color", "alpha", "verbose",
];

/// Arguments of `sketch_bbox`
#[derive(Debug, Clone)]
pub struct BoxArgs {
    pub selection: String,
    pub state: State,
    pub name: Option<String>,
    pub prefix: String,
    /// Distance the box is grown by on every side
    pub padding: f64,
    pub line_width: f32,
    pub color: ColorSpec,
    pub alpha: f32,
}

impl BoxArgs {
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            state: State::Current,
            name: None,
            prefix: "bbox".to_string(),
            padding: 0.0,
            line_width: DEFAULT_LINE_WIDTH,
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

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    fn from_parsed(args: &ParsedCommand, defaults: &BoxDefaults) -> CmdResult<Self> {
        args.check_names(ARG_NAMES)?;
        Ok(Self {
            selection: args.str_arg(0, "selection")?,
            state: args.state_arg_or(1, "state", State::Current)?,
            name: args.opt_str_arg(2, "name")?,
            prefix: args
                .opt_str_arg(3, "prefix")?
                .unwrap_or_else(|| defaults.prefix.clone()),
            padding: args.float_arg_or(4, "padding", defaults.padding)?,
            line_width: args.float_arg_or(5, "linewidth", defaults.line_width as f64)? as f32,
            color: args.color_arg_or(6, "color", &defaults.color)?,
            alpha: args.float_arg_or(7, "alpha", defaults.alpha as f64)? as f32,
        })
    }
}

/// Wire box around a selection
pub fn sketch_bbox<H: HostLike + ?Sized>(host: &mut H, args: &BoxArgs) -> CmdResult<Sketch<BoundingBox>> {
    let color = args.color.resolve(&*host)?;
    let boxes = per_state(&*host, &args.selection, args.state, |s| {
        bounding_box(&*host, &args.selection, s, args.padding)
    })?;

    let frames: Vec<(usize, Cgo)> = boxes
        .iter()
        .map(|(state, bbox)| (*state, wire_box(&bbox.vertices(), color, args.line_width)))
        .collect();
    let options = render_options(args.name.as_deref(), &args.prefix, args.alpha);
    let name = load_frames(host, args.state, &frames, &options)?;

    Ok(Sketch {
        name,
        results: boxes,
    })
}

/// Summary lines with the box widths, one per state
pub fn summary(sketch: &Sketch<BoundingBox>) -> Vec<String> {
    sketch
        .values()
        .map(|bbox| {
            let d = bbox.dimensions();
            format!("Bounding box: {:.3}, {:.3}, {:.3}", d[3], d[4], d[5])
        })
        .collect()
}

struct BboxCommand;

impl Command for BboxCommand {
    fn name(&self) -> &str {
        "sketch_bbox"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "sketch_bbox" draws the axis-aligned bounding box of a selection.

USAGE

    sketch_bbox selection [, state [, name [, prefix [, padding
                [, linewidth [, color [, alpha [, verbose ]]]]]]]]

ARGUMENTS

    selection = string: atoms to enclose
    state = int: state index, 0 for all states, -1 for current {default: -1}
    name = string: CGO object name {default: next free prefix + number}
    prefix = string: prefix of the generated name {default: bbox}
    padding = float: growth on every side {default: 0}
    linewidth = float: line width {default: 2.0}
    color = string: color name or (r, g, b) {default: gray}
    alpha = float: opacity {default: 0.5}
    verbose = bool: print the box widths {default: on}

EXAMPLES

    sketch_bbox resn PHE, state=10
    sketch_bbox resn PHE, state=10, color=red
    sketch_bbox resn PHE, padding=2, color=(0, 0.2, 0)
"#
    }

    fn execute<'a>(
        &self,
        ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
        args: &ParsedCommand,
    ) -> CmdResult {
        let config = ctx.config;
        let parsed = BoxArgs::from_parsed(args, &config.bounding_box)?;
        let verbose = args.bool_arg_or(8, "verbose", config.verbose)?;

        let sketch = sketch_bbox(&mut *ctx.host, &parsed)?;
        if verbose {
            for line in summary(&sketch) {
                ctx.print(&line);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lin_alg::f64::Vec3;
    use sketch_cgo::CgoOp;
    use sketch_scene::{Molecule, Session};

    fn session() -> Session {
        let mut session = Session::new();
        session.load_molecule(Molecule::from_atoms(
            "blk",
            [
                ("A", 1.0, Vec3::new(0.0, 0.0, 0.0)),
                ("B", 1.0, Vec3::new(1.0, 2.0, 3.0)),
            ],
        ));
        session
    }

    #[test]
    fn test_bbox_stream() {
        let mut session = session();
        let sketch = sketch_bbox(&mut session, &BoxArgs::new("blk")).unwrap();
        assert_eq!(sketch.name, "bbox01");

        let cgo = session.cgo("bbox01").and_then(|o| o.state(1)).unwrap();
        assert_eq!(cgo.count(|op| matches!(op, CgoOp::Vertex(_))), 24);
        assert!(matches!(cgo.ops()[1], CgoOp::LineWidth(w) if w == 2.0));
    }

    #[test]
    fn test_padding_is_applied() {
        let mut session = session();
        let args = BoxArgs::new("blk").with_padding(1.0);
        let sketch = sketch_bbox(&mut session, &args).unwrap();

        let bbox = sketch.first().unwrap();
        assert_eq!(bbox.dimensions(), [-1.0, -1.0, -1.0, 3.0, 4.0, 5.0]);
        assert_eq!(summary(&sketch), vec!["Bounding box: 3.000, 4.000, 5.000".to_string()]);
    }

    #[test]
    fn test_empty_selection() {
        let mut session = session();
        let args = BoxArgs::new("blk and name Z");
        assert!(sketch_bbox(&mut session, &args).is_err());
        assert!(session.cgo("bbox01").is_none());
    }
}
