//! Command parser using nom
//!
//! Parses command strings into structured [`ParsedCommand`] objects.
//!
//! # Supported Syntax
//!
//! - Simple commands: `sketch_scom prot`
//! - Named arguments: `sketch_scom prot, radius=2.0`
//! - Selections with spaces or parens: `sketch_bbox (prot and name CA), padding=1`
//! - Literal vectors: `sketch_arrow (0, 0, 0), [1, 2, 3]`
//! - Quoted strings: `sketch_scom "prot", name='ball'`
//! - Multiple commands: `sketch_pcoc prot; sketch_bbox prot`
//! - Comments: lines starting with `#` are skipped

use nom::{
    branch::alt,
    bytes::complete::{escaped, tag, take_while, take_while1},
    character::complete::{char, multispace0, none_of, one_of},
    combinator::{map, recognize},
    multi::{many0, separated_list0},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::args::{ArgValue, ParsedCommand};
use crate::error::ParseError;

/// Parse a single command from a string
///
/// # Example
/// ```
/// use sketch_cmd::parse_command;
///
/// let cmd = parse_command("sketch_scom prot and name CA, radius=2").unwrap();
/// assert_eq!(cmd.name, "sketch_scom");
/// assert_eq!(cmd.get_arg(0).and_then(|v| v.as_str()), Some("prot and name CA"));
/// assert_eq!(cmd.get_named("radius").and_then(|v| v.as_float()), Some(2.0));
/// ```
pub fn parse_command(input: &str) -> Result<ParsedCommand, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    match parse_single_command(input) {
        Ok(("", cmd)) => Ok(cmd),
        Ok((remaining, _)) => Err(ParseError::Generic(format!(
            "unexpected trailing input: '{}'",
            remaining
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Parse multiple commands separated by semicolons or newlines
///
/// # Example
/// ```
/// use sketch_cmd::parse_commands;
///
/// let cmds = parse_commands("sketch_pcoc prot; sketch_bbox prot\n# done").unwrap();
/// assert_eq!(cmds.len(), 2);
/// assert_eq!(cmds[1].name, "sketch_bbox");
/// ```
pub fn parse_commands(input: &str) -> Result<Vec<ParsedCommand>, ParseError> {
    let mut commands = Vec::new();
    let mut current = input.trim();

    while !current.is_empty() {
        if let Some(rest) = current.strip_prefix(';') {
            current = rest.trim_start();
            continue;
        }

        if current.starts_with('#') {
            current = match current.find('\n') {
                Some(pos) => current[pos + 1..].trim_start(),
                None => "",
            };
            continue;
        }

        let end = find_command_end(current);
        let text = current[..end].trim();
        current = current[end..].trim_start();

        if !text.is_empty() {
            commands.push(parse_command(text)?);
        }
    }

    Ok(commands)
}

/// Find the end of a command (semicolon or newline), respecting quotes and brackets
fn find_command_end(input: &str) -> usize {
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                ';' | '\n' if depth == 0 => return i,
                _ => {}
            },
        }
    }

    input.len()
}

/// Parse a single command (name and arguments)
fn parse_single_command(input: &str) -> IResult<&str, ParsedCommand> {
    let (input, name) = preceded(multispace0, parse_command_name)(input)?;
    let (input, _) = multispace0(input)?;

    let (input, args) = if input.is_empty() {
        (input, Vec::new())
    } else {
        parse_arguments(input)?
    };

    Ok((
        input,
        ParsedCommand {
            name: name.to_string(),
            args,
        },
    ))
}

/// Parse a command name (letters, digits and underscores, not starting with a digit)
fn parse_command_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

/// Parse comma-separated arguments
///
/// A plain space also separates arguments after a token that ends on its
/// own (a number, a quoted string, a list or a parenthesised expression).
fn parse_arguments(input: &str) -> IResult<&str, Vec<(Option<String>, ArgValue)>> {
    let (input, first) = parse_argument(input)?;

    let (input, rest) = many0(preceded(
        alt((
            map(tuple((multispace0, char(','), multispace0)), |_| ()),
            map(take_while1(|c: char| c == ' ' || c == '\t'), |_| ()),
        )),
        parse_argument,
    ))(input)?;

    let mut args = vec![first];
    args.extend(rest);
    Ok((input.trim_start(), args))
}

/// Parse a single argument (possibly named)
fn parse_argument(input: &str) -> IResult<&str, (Option<String>, ArgValue)> {
    let (input, _) = multispace0(input)?;

    if let Ok((remaining, (name, _, _, value))) = tuple((
        parse_arg_name,
        multispace0,
        char('='),
        preceded(multispace0, parse_arg_value),
    ))(input)
    {
        return Ok((remaining, (Some(name.to_string()), value)));
    }

    let (input, value) = parse_arg_value(input)?;
    Ok((input, (None, value)))
}

fn parse_arg_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Parse an argument value
fn parse_arg_value(input: &str) -> IResult<&str, ArgValue> {
    alt((
        map(parse_paren_expr, |s| ArgValue::String(s.to_string())),
        parse_list,
        map(parse_quoted_string, ArgValue::String),
        parse_number,
        parse_bool,
        map(parse_unquoted_value, |s| ArgValue::String(s.to_string())),
    ))(input)
}

/// Parse a parenthesized expression, plus any selection operators that follow
///
/// `(a and name CA) or b` is taken whole; `(1, 2, 3)` stops at the `)`.
fn parse_paren_expr(input: &str) -> IResult<&str, &str> {
    let (rest, _) = recognize(delimited(char('('), take_balanced_parens, char(')')))(input)?;

    let mut end = input.len() - rest.len();
    let tail = rest.trim_start();
    let continues = ["and ", "or ", "+ "].iter().any(|op| tail.starts_with(op));
    if continues {
        let skipped = rest.len() - tail.len();
        let taken: usize = tail
            .chars()
            .take_while(|c| !matches!(c, ',' | ';' | '\n' | '\r' | '[' | ']'))
            .map(char::len_utf8)
            .sum();
        end += skipped + tail[..taken].trim_end().len();
    }

    Ok((&input[end..], &input[..end]))
}

/// Take content up to the `)` closing an already opened paren
fn take_balanced_parens(input: &str) -> IResult<&str, &str> {
    let mut depth = 1;
    let mut quote: Option<char> = None;
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok((&input[i..], &input[..i]));
                    }
                }
                _ => {}
            },
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Parse a bracketed list
fn parse_list(input: &str) -> IResult<&str, ArgValue> {
    let (input, items) = delimited(
        pair(char('['), multispace0),
        separated_list0(tuple((multispace0, char(','), multispace0)), parse_arg_value),
        pair(multispace0, char(']')),
    )(input)?;

    Ok((input, ArgValue::List(items)))
}

/// Parse a quoted string (single or double quotes)
fn parse_quoted_string(input: &str) -> IResult<&str, String> {
    alt((
        map(tag("\"\""), |_| String::new()),
        map(tag("''"), |_| String::new()),
        map(
            delimited(
                char('"'),
                escaped(none_of("\"\\"), '\\', one_of("\"\\nrt")),
                char('"'),
            ),
            unescape_string,
        ),
        map(
            delimited(
                char('\''),
                escaped(none_of("'\\"), '\\', one_of("'\\nrt")),
                char('\''),
            ),
            unescape_string,
        ),
    ))(input)
}

/// True if `rest` starts with a character that continues an identifier
fn continues_word(rest: &str, extra: &[char]) -> bool {
    rest.chars()
        .next()
        .map_or(false, |c| c.is_alphanumeric() || c == '_' || extra.contains(&c))
}

/// Parse a number (int or float)
fn parse_number(input: &str) -> IResult<&str, ArgValue> {
    let (remaining, text) = recognize_float(input)?;
    let fail = || nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float));

    // "1abc" or "3.x" is an identifier, not a number
    if continues_word(remaining, &['.']) {
        return Err(fail());
    }

    if let Ok(i) = text.parse::<i64>() {
        return Ok((remaining, ArgValue::Int(i)));
    }
    text.parse::<f64>()
        .map(|f| (remaining, ArgValue::Float(f)))
        .map_err(|_| fail())
}

/// Parse boolean keywords
fn parse_bool(input: &str) -> IResult<&str, ArgValue> {
    let (remaining, value) = alt((
        map(alt((tag("true"), tag("yes"), tag("on"))), |_| true),
        map(alt((tag("false"), tag("no"), tag("off"))), |_| false),
    ))(input)?;

    if continues_word(remaining, &[]) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }

    // "on" alone is a keyword; "on and ..." is a selection
    let after = remaining.trim_start();
    if !(after.is_empty() || after.starts_with(',') || after.starts_with(';')) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }

    Ok((remaining, ArgValue::Bool(value)))
}

/// Parse an unquoted value: everything up to the next comma or command end
fn parse_unquoted_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, ',' | ';' | '\n' | '\r' | '[' | ']'))(input)
        .map(|(remaining, value)| (remaining, value.trim_end()))
}

/// Unescape a string (handle \n, \t, etc.)
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some(c @ ('\\' | '"' | '\'')) => result.push(c),
            Some(c) => {
                result.push('\\');
                result.push(c);
            }
            None => result.push('\\'),
        }
    }

    result
}
