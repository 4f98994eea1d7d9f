//! Command argument types and utilities
//!
//! Arguments arrive as untyped [`ArgValue`]s and are converted to domain
//! types (`State`, `ColorSpec`, `Vec3`) once, at the command boundary.

use std::fmt;

use lin_alg::f64::Vec3;
use sketch_color::{parse_vec3, ColorSpec};
use sketch_geom::State;

use crate::error::{CmdError, CmdResult};

/// A command argument value
///
/// Arguments can be strings, numbers, booleans, lists, or None (for omitted optional args).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArgValue {
    /// String value (a selection, object name, color name, vector text, ...)
    String(String),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean value (on/off, true/false)
    Bool(bool),
    /// List of values (e.g., coordinates [1.0, 2.0, 3.0])
    List(Vec<ArgValue>),
    /// No value (omitted optional argument)
    #[default]
    None,
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(s) => write!(f, "{}", s),
            ArgValue::Int(i) => write!(f, "{}", i),
            ArgValue::Float(n) => write!(f, "{}", n),
            ArgValue::Bool(b) => write!(f, "{}", if *b { "on" } else { "off" }),
            ArgValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ArgValue::None => Ok(()),
        }
    }
}

impl ArgValue {
    pub fn is_none(&self) -> bool {
        matches!(self, ArgValue::None)
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(i) => Some(*i),
            ArgValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Try to get as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(f) => Some(*f),
            ArgValue::Int(i) => Some(*i as f64),
            ArgValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Try to get as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            ArgValue::Int(i) => Some(*i != 0),
            ArgValue::String(s) => match s.to_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(true),
                "false" | "off" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Numeric components of a list value
    pub fn as_floats(&self) -> Option<Vec<f64>> {
        match self {
            ArgValue::List(items) => items.iter().map(ArgValue::as_float).collect(),
            _ => None,
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::String(s)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Int(i)
    }
}

impl From<i32> for ArgValue {
    fn from(i: i32) -> Self {
        ArgValue::Int(i as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        ArgValue::Float(f)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(v: Vec<T>) -> Self {
        ArgValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// A parsed command with its name and arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// The command name (e.g., "sketch_scom")
    pub name: String,
    /// Arguments as (optional_name, value) pairs
    ///
    /// Positional arguments have `None` as the name.
    /// Named arguments have `Some(name)` as the name.
    pub args: Vec<(Option<String>, ArgValue)>,
}

impl ParsedCommand {
    /// Create a new parsed command with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument
    pub fn with_arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.args.push((None, value.into()));
        self
    }

    /// Add a named argument
    pub fn with_named_arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.push((Some(name.into()), value.into()));
        self
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get the `index`-th positional argument (0-based), skipping named ones
    pub fn get_arg(&self, index: usize) -> Option<&ArgValue> {
        self.args
            .iter()
            .filter(|(n, _)| n.is_none())
            .nth(index)
            .map(|(_, v)| v)
    }

    /// Get a named argument by name
    pub fn get_named(&self, name: &str) -> Option<&ArgValue> {
        self.args
            .iter()
            .find(|(n, _)| n.as_deref() == Some(name))
            .map(|(_, v)| v)
    }

    /// Look up an argument by name, falling back to its position
    ///
    /// Mirrors a Python-style signature where every parameter can be given
    /// either way. Omitted values (`ArgValue::None`) count as absent.
    pub fn arg(&self, index: usize, name: &str) -> Option<&ArgValue> {
        self.get_named(name)
            .or_else(|| self.get_arg(index))
            .filter(|v| !v.is_none())
    }

    /// Reject named arguments that are not in `known`
    pub fn check_names(&self, known: &[&str]) -> CmdResult {
        for (name, _) in &self.args {
            if let Some(name) = name {
                if !known.contains(&name.as_str()) {
                    return Err(CmdError::invalid_arg(name, format!("unexpected keyword for {}", self.name)));
                }
            }
        }
        if let Some(extra) = self.get_arg(known.len()) {
            return Err(CmdError::invalid_arg(
                format!("#{}", known.len() + 1),
                format!("unexpected extra argument '{}'", extra),
            ));
        }
        Ok(())
    }

    /// A required string argument
    pub fn str_arg(&self, index: usize, name: &str) -> CmdResult<String> {
        match self.arg(index, name) {
            Some(ArgValue::List(_)) => Err(CmdError::invalid_arg(name, "expected text, got a list")),
            Some(value) => Ok(value.to_string()),
            None => Err(CmdError::MissingArgument(name.to_string())),
        }
    }

    /// An optional string argument
    pub fn opt_str_arg(&self, index: usize, name: &str) -> CmdResult<Option<String>> {
        match self.arg(index, name) {
            None => Ok(None),
            Some(_) => self.str_arg(index, name).map(Some),
        }
    }

    /// A float argument with a default
    pub fn float_arg_or(&self, index: usize, name: &str, default: f64) -> CmdResult<f64> {
        match self.arg(index, name) {
            None => Ok(default),
            Some(v) => v
                .as_float()
                .ok_or_else(|| CmdError::invalid_arg(name, format!("expected a number, got '{}'", v))),
        }
    }

    /// An optional float argument
    pub fn opt_float_arg(&self, index: usize, name: &str) -> CmdResult<Option<f64>> {
        match self.arg(index, name) {
            None => Ok(None),
            Some(_) => self.float_arg_or(index, name, 0.0).map(Some),
        }
    }

    /// A boolean argument with a default
    pub fn bool_arg_or(&self, index: usize, name: &str, default: bool) -> CmdResult<bool> {
        match self.arg(index, name) {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| CmdError::invalid_arg(name, format!("expected on/off, got '{}'", v))),
        }
    }

    /// A state argument in the host integer convention
    pub fn state_arg_or(&self, index: usize, name: &str, default: State) -> CmdResult<State> {
        match self.arg(index, name) {
            None => Ok(default),
            Some(v) => {
                let index = v
                    .as_int()
                    .ok_or_else(|| CmdError::invalid_arg(name, format!("expected an integer, got '{}'", v)))?;
                Ok(State::from_index(index)?)
            }
        }
    }

    /// A color argument: a name, a literal `(r, g, b)` text or a numeric list
    pub fn color_arg_or(&self, index: usize, name: &str, default: &str) -> CmdResult<ColorSpec> {
        match self.arg(index, name) {
            None => Ok(ColorSpec::parse(default)?),
            Some(v) => to_color_spec(name, v),
        }
    }

    /// An optional color argument
    pub fn opt_color_arg(&self, index: usize, name: &str) -> CmdResult<Option<ColorSpec>> {
        self.arg(index, name).map(|v| to_color_spec(name, v)).transpose()
    }

    /// A required point: `(x, y, z)` text or a three-element list
    pub fn vec3_arg(&self, index: usize, name: &str) -> CmdResult<Vec3> {
        let value = self
            .arg(index, name)
            .ok_or_else(|| CmdError::MissingArgument(name.to_string()))?;
        to_vec3(name, value)
    }
}

/// Convert an argument to a color specification
pub fn to_color_spec(name: &str, value: &ArgValue) -> CmdResult<ColorSpec> {
    match value {
        ArgValue::List(_) => {
            let values = value
                .as_floats()
                .ok_or_else(|| CmdError::invalid_arg(name, "color components must be numbers"))?;
            Ok(ColorSpec::from_components(&values)?)
        }
        ArgValue::String(s) => Ok(ColorSpec::parse(s)?),
        other => Err(CmdError::invalid_arg(name, format!("not a color: '{}'", other))),
    }
}

/// Convert an argument to a point
pub fn to_vec3(name: &str, value: &ArgValue) -> CmdResult<Vec3> {
    match value {
        ArgValue::List(items) => {
            let values = value
                .as_floats()
                .ok_or_else(|| CmdError::invalid_arg(name, "coordinates must be numbers"))?;
            match values.as_slice() {
                [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
                _ => Err(CmdError::invalid_arg(
                    name,
                    format!("expected 3 coordinates, got {}", items.len()),
                )),
            }
        }
        ArgValue::String(s) => Ok(parse_vec3(s)?),
        other => Err(CmdError::invalid_arg(name, format!("not a point: '{}'", other))),
    }
}
