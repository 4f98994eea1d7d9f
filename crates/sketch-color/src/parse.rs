//! Text parsing for literal vectors and color specifications
//!
//! User input carries points and colors as loose text such as `(0, 0.2, 0)`
//! or `[1.0, 2.5, 3]`. The first comma-separated run of numbers found anywhere
//! in the text is taken; everything around it is ignored.
//!
//! # Number grammar
//!
//! ```text
//! number := digits ("." digits)? | "." digits
//! run    := number (ws? "," ws? number)*
//! ```
//!
//! There is no exponent and no sign. A `+` or `-` in front of a number is
//! skipped, so `"-1, 2, 3"` yields `[1, 2, 3]`.

use lin_alg::f64::Vec3;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map_res, opt, recognize},
    multi::many0,
    sequence::{pair, preceded, tuple},
    IResult,
};

use crate::{Color, ColorError, ColorLookup, ColorResult};

/// Parse a single unsigned decimal number
fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
        str::parse::<f64>,
    )(input)
}

/// Separator between numbers; a stray sign after the comma is consumed
fn separator(input: &str) -> IResult<&str, ()> {
    let (input, _) = tuple((multispace0, char(','), multispace0, opt(one_of("+-"))))(input)?;
    Ok((input, ()))
}

/// Parse a comma-separated run of numbers starting at the head of `input`
fn number_run(input: &str) -> IResult<&str, Vec<f64>> {
    let (input, first) = number(input)?;
    let (input, rest) = many0(preceded(separator, number))(input)?;

    let mut values = Vec::with_capacity(rest.len() + 1);
    values.push(first);
    values.extend(rest);
    Ok((input, values))
}

/// Extract the first run of comma-separated numbers from `text`
///
/// Arity is not checked; see [`parse_vec3`] for the three-component form.
///
/// # Example
/// ```
/// use sketch_color::parse_vector;
///
/// assert_eq!(parse_vector("(1, 2.5, 3)").unwrap(), vec![1.0, 2.5, 3.0]);
/// assert_eq!(parse_vector("x = .5").unwrap(), vec![0.5]);
/// assert!(parse_vector("no numbers").is_err());
/// ```
pub fn parse_vector(text: &str) -> ColorResult<Vec<f64>> {
    for (offset, _) in text.char_indices() {
        if let Ok((_, values)) = number_run(&text[offset..]) {
            return Ok(values);
        }
    }
    Err(ColorError::Parse(text.to_string()))
}

/// Extract exactly three numbers from `text` as a vector
pub fn parse_vec3(text: &str) -> ColorResult<Vec3> {
    let values = parse_vector(text)?;
    match values.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ColorError::Arity {
            text: text.to_string(),
            expected: 3,
            got: values.len(),
        }),
    }
}

fn color_from_components(text: &str, values: &[f64]) -> ColorResult<Color> {
    match values {
        [r, g, b] => Ok(Color::new(*r as f32, *g as f32, *b as f32)),
        _ => Err(ColorError::Arity {
            text: text.to_string(),
            expected: 3,
            got: values.len(),
        }),
    }
}

/// Resolve a color token against a color table
///
/// Names known to `table` win; anything else is parsed as a literal
/// `r, g, b` triple.
pub fn resolve_color<T: ColorLookup + ?Sized>(table: &T, token: &str) -> ColorResult<Color> {
    let token = token.trim();
    if let Some(color) = table.lookup_color(token) {
        return Ok(color);
    }
    let values = parse_vector(token)?;
    color_from_components(token, &values)
}

/// A color as given by the user, before resolution against a color table
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// A color name, looked up in the host color table
    Named(String),
    /// An explicit RGB triple
    Literal(Color),
}

impl ColorSpec {
    /// Classify a color token
    ///
    /// Identifier-like tokens (`red`, `gray50`, `tv_blue`) become
    /// [`ColorSpec::Named`]; anything else must contain an RGB triple.
    pub fn parse(token: &str) -> ColorResult<Self> {
        let token = token.trim();
        if is_identifier(token) {
            return Ok(ColorSpec::Named(token.to_string()));
        }
        let values = parse_vector(token)?;
        color_from_components(token, &values).map(ColorSpec::Literal)
    }

    /// Build a literal color from numeric components (e.g. a `[r, g, b]` list argument)
    pub fn from_components(values: &[f64]) -> ColorResult<Self> {
        let text = format!("{:?}", values);
        color_from_components(&text, values).map(ColorSpec::Literal)
    }

    /// Resolve to an RGB color
    ///
    /// A name missing from `table` is retried as a literal before failing.
    pub fn resolve<T: ColorLookup + ?Sized>(&self, table: &T) -> ColorResult<Color> {
        match self {
            ColorSpec::Literal(color) => Ok(*color),
            ColorSpec::Named(name) => resolve_color(table, name),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Literal(color)
    }
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
