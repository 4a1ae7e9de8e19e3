//! Bracketed literal reader and writer
//!
//! Every value type prints and parses through one syntax:
//!
//! ```text
//! value  := number | '(' number {',' number} ')' | '[' value {',' value} ']'
//! ```
//!
//! - `2.5` or `(2.5)` is a real scalar, `(r,i)` a complex scalar, and so on
//! - `[v0,v1,...]` is a list; nesting depth is the rank
//! - nested lists must be rectangular
//!
//! The reader produces a normalized [`Literal`]: the shape (outermost bracket
//! first) plus a flat list of per-element decimal components in reading
//! order. Value types convert those components into their own fixed-precision
//! representation.

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;

/// Parsed literal: a shape and the components of each element
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    /// Extent of each nesting level, outermost bracket first
    pub shape: Vec<usize>,
    /// Components of each element, in reading order
    pub values: Vec<Vec<f64>>,
}

impl Literal {
    /// Nesting depth
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements
    #[inline]
    pub fn element_count(&self) -> usize {
        self.values.len()
    }

    /// Convert every element into `T`
    pub fn elements<T: Element>(&self) -> Result<Vec<T>> {
        self.values.iter().map(|v| T::from_components(v)).collect()
    }
}

/// Deepest list nesting the reader accepts
pub const MAX_NESTING: usize = 32;

enum Node {
    Scalar(Vec<f64>),
    List(Vec<Node>),
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        Error::parse(self.input, format!("{} at offset {}", reason.into(), self.pos))
    }

    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.bytes.get(self.pos).copied()
    }

    fn number(&mut self) -> Result<f64> {
        self.skip_ws();
        let start = self.pos;
        while self.pos < self.bytes.len()
            && !matches!(self.bytes[self.pos], b',' | b')' | b']' | b'(' | b'[')
            && !self.bytes[self.pos].is_ascii_whitespace()
        {
            self.pos += 1;
        }
        let input = self.input;
        let token = &input[start..self.pos];
        match token {
            "" => Err(self.error("expected a number")),
            "true" => Ok(1.0),
            "false" => Ok(0.0),
            _ => token
                .parse::<f64>()
                .map_err(|_| self.error(format!("invalid number '{}'", token))),
        }
    }

    fn value(&mut self) -> Result<Node> {
        match self.peek() {
            Some(b'[') => {
                if self.depth == MAX_NESTING {
                    return Err(self.error(format!("lists nested deeper than {}", MAX_NESTING)));
                }
                self.pos += 1;
                self.depth += 1;
                let list = self.list();
                self.depth -= 1;
                list
            }
            Some(b'(') => {
                self.pos += 1;
                let mut components = vec![self.number()?];
                loop {
                    match self.peek() {
                        Some(b',') => {
                            self.pos += 1;
                            components.push(self.number()?);
                        }
                        Some(b')') => {
                            self.pos += 1;
                            return Ok(Node::Scalar(components));
                        }
                        _ => return Err(self.error("expected ',' or ')'")),
                    }
                }
            }
            Some(_) => Ok(Node::Scalar(vec![self.number()?])),
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Children of a list whose opening bracket was consumed
    fn list(&mut self) -> Result<Node> {
        let mut children = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Node::List(children));
        }
        loop {
            children.push(self.value()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Node::List(children));
                }
                _ => return Err(self.error("expected ',' or ']'")),
            }
        }
    }
}

fn shape_of(node: &Node) -> Vec<usize> {
    match node {
        Node::Scalar(_) => Vec::new(),
        Node::List(children) => {
            let mut shape = vec![children.len()];
            if let Some(first) = children.first() {
                shape.extend(shape_of(first));
            }
            shape
        }
    }
}

fn flatten(node: Node, shape: &[usize], input: &str, out: &mut Vec<Vec<f64>>) -> Result<()> {
    match (node, shape.split_first()) {
        (Node::Scalar(components), None) => {
            out.push(components);
            Ok(())
        }
        (Node::List(children), Some((&len, rest))) if children.len() == len => {
            for child in children {
                flatten(child, rest, input, out)?;
            }
            Ok(())
        }
        _ => Err(Error::parse(input, "nested lists are not rectangular")),
    }
}

/// Parse a bracketed literal
///
/// # Errors
///
/// Returns `Parse` for malformed text, trailing characters, ragged
/// nesting, or lists nested deeper than [`MAX_NESTING`].
pub fn parse_literal(input: &str) -> Result<Literal> {
    let mut parser = Parser::new(input);
    let root = parser.value()?;
    if parser.peek().is_some() {
        return Err(parser.error("trailing characters"));
    }
    let shape = shape_of(&root);
    // shape comes from first children only and is unchecked until flatten
    let mut values = Vec::new();
    flatten(root, &shape, input, &mut values)?;
    Ok(Literal { shape, values })
}

/// Parse a single scalar value such as `2`, `(1,2)` or `(1,0,0,0)`
pub fn parse_scalar<T: Element>(input: &str) -> Result<T> {
    let literal = parse_literal(input)?;
    if literal.rank() != 0 {
        return Err(Error::parse(input, "expected a scalar, found a list"));
    }
    T::from_components(&literal.values[0])
}

/// Values readable from the bracketed literal syntax
///
/// Implemented by every value type a kernel operates on. The packed records
/// and the aggregates also implement `FromStr` with the same behavior; `f64`
/// and `bool` keep their std parsers, so this trait is the common entry
/// point.
pub trait FromLiteral: Sized {
    /// Parse `input`
    fn from_literal(input: &str) -> Result<Self>;
}

impl FromLiteral for f64 {
    fn from_literal(input: &str) -> Result<Self> {
        parse_scalar(input)
    }
}

impl FromLiteral for bool {
    fn from_literal(input: &str) -> Result<Self> {
        parse_scalar(input)
    }
}

/// Write `elements` (reading order) nested according to `shape`
/// (outermost first)
///
/// A rank-0 shape writes the single element bare.
pub fn write_nested<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    shape: &[usize],
    elements: &[T],
) -> fmt::Result {
    match shape.split_first() {
        None => match elements.first() {
            Some(e) => write!(f, "{}", e),
            None => Ok(()),
        },
        Some((&len, rest)) => {
            let chunk: usize = rest.iter().product();
            f.write_str("[")?;
            for n in 0..len {
                if n > 0 {
                    f.write_str(",")?;
                }
                let start = (n * chunk).min(elements.len());
                let end = (start + chunk).min(elements.len());
                write_nested(f, rest, &elements[start..end])?;
            }
            f.write_str("]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_forms() {
        let lit = parse_literal("  2.5 ").unwrap();
        assert_eq!(lit.shape, Vec::<usize>::new());
        assert_eq!(lit.values, vec![vec![2.5]]);

        let lit = parse_literal("(1, -2)").unwrap();
        assert_eq!(lit.values, vec![vec![1.0, -2.0]]);
    }

    #[test]
    fn test_parse_nested() {
        let lit = parse_literal("[[1,2,3],[4,5,6]]").unwrap();
        assert_eq!(lit.shape, vec![2, 3]);
        let flat: Vec<f64> = lit.values.iter().map(|v| v[0]).collect();
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_parse_tuples_in_list() {
        let lit = parse_literal("[(1,2),(3,4)]").unwrap();
        assert_eq!(lit.shape, vec![2]);
        assert_eq!(lit.values[1], vec![3.0, 4.0]);
    }

    #[test]
    fn test_parse_special_numbers() {
        let lit = parse_literal("[NaN,inf,-inf]").unwrap();
        assert!(lit.values[0][0].is_nan());
        assert_eq!(lit.values[1][0], f64::INFINITY);
        assert_eq!(lit.values[2][0], f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_booleans() {
        let lit = parse_literal("[true,false]").unwrap();
        assert_eq!(lit.values, vec![vec![1.0], vec![0.0]]);
    }

    #[test]
    fn test_from_literal_primitives() {
        assert_eq!(f64::from_literal("-1.5").unwrap(), -1.5);
        assert!(bool::from_literal("true").unwrap());
        assert!(!bool::from_literal("(0)").unwrap());
        assert!(bool::from_literal("2").unwrap());
        assert!(f64::from_literal("[1]").is_err());
    }

    #[test]
    fn test_parse_empty_list() {
        let lit = parse_literal("[]").unwrap();
        assert_eq!(lit.shape, vec![0]);
        assert!(lit.values.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_literal("[[1,2],[3]]").is_err());
        assert!(parse_literal("[1,2").is_err());
        assert!(parse_literal("(1,2))").is_err());
        assert!(parse_literal("[1,x]").is_err());
        assert!(parse_literal("").is_err());
        assert!(parse_literal("[[1],2]").is_err());
    }

    #[test]
    fn test_parse_scalar_rejects_list() {
        assert!(parse_scalar::<f64>("[1]").is_err());
        assert_eq!(parse_scalar::<f64>("(4)").unwrap(), 4.0);
    }

    struct Nested<'a>(&'a [usize], &'a [f64]);

    impl fmt::Display for Nested<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_nested(f, self.0, self.1)
        }
    }

    #[test]
    fn test_write_nested() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(Nested(&[2, 3], &data).to_string(), "[[1,2,3],[4,5,6]]");
        assert_eq!(Nested(&[6], &data).to_string(), "[1,2,3,4,5,6]");
        assert_eq!(Nested(&[], &data[..1]).to_string(), "1");
        assert_eq!(Nested(&[0], &[]).to_string(), "[]");
    }
}
