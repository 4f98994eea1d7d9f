//! Selection expressions
//!
//! A small subset of the PyMOL selection language:
//!
//! ```text
//! expr   := term (("or" | "+") term)*
//! term   := factor ("and" factor)*
//! factor := "(" expr ")" | "all" | "*" | "name" IDENT | IDENT
//! ```
//!
//! A bare identifier names a molecular object. Keywords are case-insensitive.

use std::collections::BTreeSet;

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, value},
    multi::many0,
    sequence::delimited,
    IResult,
};

use crate::{Molecule, SceneError, SceneResult};

/// Parsed selection expression
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionExpr {
    /// Every atom of every molecule
    All,
    /// All atoms of one object
    Object(String),
    /// Atoms with the given name, in any object
    Name(String),
    And(Box<SelectionExpr>, Box<SelectionExpr>),
    Or(Box<SelectionExpr>, Box<SelectionExpr>),
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    LParen,
    RParen,
    Plus,
    Word(String),
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '\'' | '*')
}

fn token(input: &str) -> IResult<&str, Token> {
    delimited(
        multispace0,
        alt((
            value(Token::LParen, char('(')),
            value(Token::RParen, char(')')),
            value(Token::Plus, char('+')),
            map(take_while1(is_word_char), |s: &str| Token::Word(s.to_string())),
        )),
        multispace0,
    )(input)
}

fn tokenize(input: &str) -> SceneResult<Vec<Token>> {
    let (rest, tokens) = many0(token)(input)
        .map_err(|e| SceneError::SelectionParse(format!("{}: {}", input, e)))?;
    if !rest.trim().is_empty() {
        return Err(SceneError::SelectionParse(format!(
            "unexpected input '{}' in '{}'",
            rest, input
        )));
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(Token::Word(w)) if w.eq_ignore_ascii_case(keyword))
    }

    fn expr(&mut self) -> SceneResult<SelectionExpr> {
        let mut left = self.term()?;
        loop {
            if matches!(self.peek(), Some(Token::Plus)) || self.peek_keyword("or") {
                self.pos += 1;
                let right = self.term()?;
                left = SelectionExpr::Or(Box::new(left), Box::new(right));
            } else {
                return Ok(left);
            }
        }
    }

    fn term(&mut self) -> SceneResult<SelectionExpr> {
        let mut left = self.factor()?;
        while self.peek_keyword("and") {
            self.pos += 1;
            let right = self.factor()?;
            left = SelectionExpr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn factor(&mut self) -> SceneResult<SelectionExpr> {
        match self.next() {
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(SceneError::SelectionParse("missing ')'".to_string())),
                }
            }
            Some(Token::Word(w)) if w == "*" || w.eq_ignore_ascii_case("all") => {
                Ok(SelectionExpr::All)
            }
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("name") => match self.next() {
                Some(Token::Word(atom)) => Ok(SelectionExpr::Name(atom)),
                _ => Err(SceneError::SelectionParse(
                    "'name' requires an atom name".to_string(),
                )),
            },
            Some(Token::Word(w)) if w.eq_ignore_ascii_case("and") || w.eq_ignore_ascii_case("or") => {
                Err(SceneError::SelectionParse(format!("unexpected '{}'", w)))
            }
            Some(Token::Word(w)) => Ok(SelectionExpr::Object(w)),
            Some(tok) => Err(SceneError::SelectionParse(format!("unexpected {:?}", tok))),
            None => Err(SceneError::SelectionParse(
                "unexpected end of selection".to_string(),
            )),
        }
    }
}

/// Parse a selection string into an expression
pub fn parse_selection(input: &str) -> SceneResult<SelectionExpr> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SceneError::SelectionParse("empty selection".to_string()));
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(SceneError::SelectionParse(format!("unexpected {:?}", tok)));
    }
    Ok(expr)
}

/// Atoms as `(molecule index, atom index)` pairs, in load order
pub type AtomSet = BTreeSet<(usize, usize)>;

/// Evaluate an expression against molecules given in load order
///
/// Unknown object names are an error, not an empty result.
pub fn evaluate(expr: &SelectionExpr, molecules: &[&Molecule]) -> SceneResult<AtomSet> {
    match expr {
        SelectionExpr::All => Ok(molecules
            .iter()
            .enumerate()
            .flat_map(|(m, mol)| (0..mol.atom_count()).map(move |a| (m, a)))
            .collect()),
        SelectionExpr::Object(name) => {
            let m = molecules
                .iter()
                .position(|mol| mol.name() == name)
                .ok_or_else(|| SceneError::ObjectNotFound(name.clone()))?;
            Ok((0..molecules[m].atom_count()).map(|a| (m, a)).collect())
        }
        SelectionExpr::Name(atom_name) => Ok(molecules
            .iter()
            .enumerate()
            .flat_map(|(m, mol)| {
                mol.atoms()
                    .iter()
                    .enumerate()
                    .filter(|(_, atom)| atom.name.eq_ignore_ascii_case(atom_name))
                    .map(move |(a, _)| (m, a))
            })
            .collect()),
        SelectionExpr::And(left, right) => {
            let left = evaluate(left, molecules)?;
            let right = evaluate(right, molecules)?;
            Ok(left.intersection(&right).copied().collect())
        }
        SelectionExpr::Or(left, right) => {
            let mut left = evaluate(left, molecules)?;
            left.extend(evaluate(right, molecules)?);
            Ok(left)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lin_alg::f64::Vec3;

    fn obj(name: &str) -> SelectionExpr {
        SelectionExpr::Object(name.to_string())
    }

    fn molecules() -> (Molecule, Molecule) {
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let a = Molecule::from_atoms("a", [("CA", 12.0, origin), ("CB", 12.0, origin)]);
        let b = Molecule::from_atoms("b", [("CA", 12.0, origin), ("O", 16.0, origin)]);
        (a, b)
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_selection("all").unwrap(), SelectionExpr::All);
        assert_eq!(parse_selection("*").unwrap(), SelectionExpr::All);
        assert_eq!(parse_selection("  prot ").unwrap(), obj("prot"));
        assert_eq!(parse_selection("(prot)").unwrap(), obj("prot"));
    }

    #[test]
    fn test_parse_precedence() {
        // "and" binds tighter than "or"
        assert_eq!(
            parse_selection("a or b and name CA").unwrap(),
            SelectionExpr::Or(
                Box::new(obj("a")),
                Box::new(SelectionExpr::And(
                    Box::new(obj("b")),
                    Box::new(SelectionExpr::Name("CA".to_string()))
                ))
            )
        );
        assert_eq!(
            parse_selection("(a + b) AND name CA").unwrap(),
            SelectionExpr::And(
                Box::new(SelectionExpr::Or(Box::new(obj("a")), Box::new(obj("b")))),
                Box::new(SelectionExpr::Name("CA".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_selection("").is_err());
        assert!(parse_selection("(a").is_err());
        assert!(parse_selection("a or").is_err());
        assert!(parse_selection("name").is_err());
        assert!(parse_selection("a )").is_err());
        assert!(parse_selection("a, b").is_err());
    }

    #[test]
    fn test_evaluate() {
        let (a, b) = molecules();
        let mols = [&a, &b];

        let all = evaluate(&parse_selection("all").unwrap(), &mols).unwrap();
        assert_eq!(all.len(), 4);

        let cas = evaluate(&parse_selection("name ca").unwrap(), &mols).unwrap();
        assert_eq!(cas.into_iter().collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);

        let b_ca = evaluate(&parse_selection("b and name CA").unwrap(), &mols).unwrap();
        assert_eq!(b_ca.into_iter().collect::<Vec<_>>(), vec![(1, 0)]);

        // Unions do not duplicate atoms
        let both = evaluate(&parse_selection("a + a or b").unwrap(), &mols).unwrap();
        assert_eq!(both.len(), 4);

        let none = evaluate(&parse_selection("a and name O").unwrap(), &mols).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_evaluate_unknown_object() {
        let (a, b) = molecules();
        assert_eq!(
            evaluate(&obj("missing"), &[&a, &b]),
            Err(SceneError::ObjectNotFound("missing".to_string()))
        );
    }
}
