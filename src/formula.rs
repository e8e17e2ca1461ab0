//! Guide formula parsing and evaluation.
//!
//! The document layer hands adjustments over as `<a:gd name="adj" fmla="val 50000"/>`
//! pairs. [`GuideFormula`] parses the `fmla` string with a small pest grammar
//! and evaluates it through the same operator functions the preset generators
//! use, in DrawingML units (ratios in 1/100000, angles in 1/60000 degree).

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::defaults;
use crate::errors::FormulaError;
use crate::geometry;

#[derive(Parser)]
#[grammar = "guide.pest"]
struct GuideParser;

/// Guide operators, named after their DrawingML tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOp {
    /// `*/ x y z` = x * y / z
    MulDiv,
    /// `+- x y z` = x + y - z
    AddSub,
    /// `+/ x y z` = (x + y) / z
    AddDiv,
    /// `?: x y z` = x > 0 ? y : z
    IfElse,
    Abs,
    /// `at2 x y` = atan2(y, x)
    At2,
    /// `cat2 x y z` = x * cos(atan2(z, y))
    Cat2,
    /// `cos x y` = x * cos(y)
    Cos,
    Max,
    Min,
    /// `mod x y z` = sqrt(x² + y² + z²)
    Mod,
    /// `pin x y z` = y clamped to [x, z]
    Pin,
    /// `sat2 x y z` = x * sin(atan2(z, y))
    Sat2,
    /// `sin x y` = x * sin(y)
    Sin,
    Sqrt,
    /// `tan x y` = x * tan(y)
    Tan,
    Val,
}

impl GuideOp {
    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "*/" => GuideOp::MulDiv,
            "+-" => GuideOp::AddSub,
            "+/" => GuideOp::AddDiv,
            "?:" => GuideOp::IfElse,
            "abs" => GuideOp::Abs,
            "at2" => GuideOp::At2,
            "cat2" => GuideOp::Cat2,
            "cos" => GuideOp::Cos,
            "max" => GuideOp::Max,
            "min" => GuideOp::Min,
            "mod" => GuideOp::Mod,
            "pin" => GuideOp::Pin,
            "sat2" => GuideOp::Sat2,
            "sin" => GuideOp::Sin,
            "sqrt" => GuideOp::Sqrt,
            "tan" => GuideOp::Tan,
            "val" => GuideOp::Val,
            _ => return None,
        })
    }

    pub fn token(self) -> &'static str {
        match self {
            GuideOp::MulDiv => "*/",
            GuideOp::AddSub => "+-",
            GuideOp::AddDiv => "+/",
            GuideOp::IfElse => "?:",
            GuideOp::Abs => "abs",
            GuideOp::At2 => "at2",
            GuideOp::Cat2 => "cat2",
            GuideOp::Cos => "cos",
            GuideOp::Max => "max",
            GuideOp::Min => "min",
            GuideOp::Mod => "mod",
            GuideOp::Pin => "pin",
            GuideOp::Sat2 => "sat2",
            GuideOp::Sin => "sin",
            GuideOp::Sqrt => "sqrt",
            GuideOp::Tan => "tan",
            GuideOp::Val => "val",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            GuideOp::Abs | GuideOp::Sqrt | GuideOp::Val => 1,
            GuideOp::At2 | GuideOp::Cos | GuideOp::Max | GuideOp::Min | GuideOp::Sin | GuideOp::Tan => 2,
            GuideOp::MulDiv
            | GuideOp::AddSub
            | GuideOp::AddDiv
            | GuideOp::IfElse
            | GuideOp::Cat2
            | GuideOp::Mod
            | GuideOp::Pin
            | GuideOp::Sat2 => 3,
        }
    }

    /// Apply to already-evaluated operands. Angles are in 1/60000 degree.
    ///
    /// `args` must hold exactly [`GuideOp::arity`] values.
    pub fn apply(self, args: &[f64]) -> f64 {
        let arg = |i: usize| args.get(i).copied().unwrap_or(0.0);
        let deg = |v: f64| v / defaults::ANGLE_UNITS;
        match self {
            GuideOp::MulDiv => geometry::mul_div(arg(0), arg(1), arg(2)),
            GuideOp::AddSub => geometry::add_sub(arg(0), arg(1), arg(2)),
            GuideOp::AddDiv => geometry::add_div(arg(0), arg(1), arg(2)),
            GuideOp::IfElse => geometry::if_else(arg(0), arg(1), arg(2)),
            GuideOp::Abs => arg(0).abs(),
            GuideOp::At2 => geometry::at2(arg(0), arg(1)) * defaults::ANGLE_UNITS,
            GuideOp::Cat2 => geometry::cat2(arg(0), arg(1), arg(2)),
            GuideOp::Cos => geometry::cos_of(arg(0), deg(arg(1))),
            GuideOp::Max => arg(0).max(arg(1)),
            GuideOp::Min => arg(0).min(arg(1)),
            GuideOp::Mod => geometry::modulus(arg(0), arg(1), arg(2)),
            GuideOp::Pin => geometry::pin(arg(0), arg(1), arg(2)),
            GuideOp::Sat2 => geometry::sat2(arg(0), arg(1), arg(2)),
            GuideOp::Sin => geometry::sin_of(arg(0), deg(arg(1))),
            GuideOp::Sqrt => geometry::sqrt_of(arg(0)),
            GuideOp::Tan => geometry::tan_of(arg(0), deg(arg(1))),
            GuideOp::Val => arg(0),
        }
    }
}

/// A formula operand: a literal or a reference to another guide
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Literal(f64),
    Guide { name: String, offset: usize },
}

/// A parsed guide formula
#[derive(Debug, Clone, PartialEq)]
pub struct GuideFormula {
    source: String,
    op: GuideOp,
    operands: Vec<Operand>,
}

impl GuideFormula {
    /// Parse a `fmla` string.
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        let mut pairs = GuideParser::parse(Rule::formula, source).map_err(|e| syntax_error(source, e))?;
        let Some(formula) = pairs.next() else {
            return Err(FormulaError::Syntax {
                message: "empty formula".to_string(),
                src: named(source),
                span: (0, source.len()).into(),
            });
        };

        let mut op = None;
        let mut operands = Vec::new();
        for pair in formula.into_inner() {
            match pair.as_rule() {
                Rule::op => op = GuideOp::from_token(pair.as_str()),
                Rule::number => operands.push(parse_number(source, &pair)?),
                Rule::guide => operands.push(Operand::Guide {
                    name: pair.as_str().to_string(),
                    offset: pair.as_span().start(),
                }),
                _ => {}
            }
        }

        let Some(op) = op else {
            return Err(FormulaError::Syntax {
                message: "missing operator".to_string(),
                src: named(source),
                span: (0, source.len()).into(),
            });
        };

        if operands.len() != op.arity() {
            return Err(FormulaError::Arity {
                op: op.token(),
                expected: op.arity(),
                got: operands.len(),
                src: named(source),
                span: (0, source.len()).into(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            op,
            operands,
        })
    }

    pub fn op(&self) -> GuideOp {
        self.op
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate, resolving guide references through `lookup`.
    pub fn eval<F>(&self, lookup: F) -> Result<f64, FormulaError>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let mut args = Vec::with_capacity(self.operands.len());
        for operand in &self.operands {
            let value = match operand {
                Operand::Literal(v) => *v,
                Operand::Guide { name, offset } => match lookup(name) {
                    Some(v) => v,
                    None => {
                        let lower = name.to_ascii_lowercase();
                        let suggestion = (lower != *name && lookup(&lower).is_some())
                            .then(|| format!("did you mean `{lower}`?"));
                        return Err(FormulaError::UnknownGuide {
                            name: name.clone(),
                            src: named(&self.source),
                            span: (*offset, name.len()).into(),
                            suggestion,
                        });
                    }
                },
            };
            args.push(value);
        }
        Ok(self.op.apply(&args))
    }
}

fn named(source: &str) -> NamedSource<String> {
    NamedSource::new("fmla", source.to_string())
}

fn parse_number(source: &str, pair: &Pair<Rule>) -> Result<Operand, FormulaError> {
    pair.as_str()
        .parse::<f64>()
        .map(Operand::Literal)
        .map_err(|e| FormulaError::Syntax {
            message: e.to_string(),
            src: named(source),
            span: (pair.as_span().start(), pair.as_str().len()).into(),
        })
}

fn syntax_error(source: &str, err: pest::error::Error<Rule>) -> FormulaError {
    let span: SourceSpan = match err.location {
        InputLocation::Pos(p) => (p, 0).into(),
        InputLocation::Span((start, end)) => (start, end - start).into(),
    };
    FormulaError::Syntax {
        message: err.variant.message().into_owned(),
        src: named(source),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_guides(_: &str) -> Option<f64> {
        None
    }

    #[test]
    fn parse_val() {
        let f = GuideFormula::parse("val 16667").unwrap();
        assert_eq!(f.op(), GuideOp::Val);
        assert_eq!(f.operands(), &[Operand::Literal(16667.0)]);
        assert_eq!(f.eval(no_guides).unwrap(), 16667.0);
    }

    #[test]
    fn parse_negative_literal() {
        let f = GuideFormula::parse("val -20833").unwrap();
        assert_eq!(f.eval(no_guides).unwrap(), -20833.0);
    }

    #[test]
    fn muldiv_with_guides() {
        let f = GuideFormula::parse("*/ w adj 100000").unwrap();
        let v = f
            .eval(|name| match name {
                "w" => Some(200.0),
                "adj" => Some(25000.0),
                _ => None,
            })
            .unwrap();
        assert_eq!(v, 50.0);
    }

    #[test]
    fn digit_leading_guide_name() {
        let f = GuideFormula::parse("+- 3cd4 0 cd4").unwrap();
        let v = f
            .eval(|name| match name {
                "3cd4" => Some(16_200_000.0),
                "cd4" => Some(5_400_000.0),
                _ => None,
            })
            .unwrap();
        assert_eq!(v, 10_800_000.0);
    }

    #[test]
    fn trig_uses_sixty_thousandths() {
        let f = GuideFormula::parse("cos 100 5400000").unwrap();
        assert!(f.eval(no_guides).unwrap().abs() < 1e-9);
        let f = GuideFormula::parse("sin 100 5400000").unwrap();
        assert!((f.eval(no_guides).unwrap() - 100.0).abs() < 1e-9);
        let f = GuideFormula::parse("at2 1 1").unwrap();
        assert!((f.eval(no_guides).unwrap() - 2_700_000.0).abs() < 1e-6);
    }

    #[test]
    fn pin_clamps() {
        let f = GuideFormula::parse("pin 0 70000 50000").unwrap();
        assert_eq!(f.eval(no_guides).unwrap(), 50000.0);
    }

    #[test]
    fn muldiv_by_zero_is_zero() {
        let f = GuideFormula::parse("*/ 5 6 0").unwrap();
        assert_eq!(f.eval(no_guides).unwrap(), 0.0);
    }

    #[test]
    fn arity_error() {
        let err = GuideFormula::parse("*/ w 2").unwrap_err();
        assert!(matches!(err, FormulaError::Arity { expected: 3, got: 2, .. }));
    }

    #[test]
    fn unknown_operator_is_syntax_error() {
        let err = GuideFormula::parse("foo 1 2").unwrap_err();
        assert!(matches!(err, FormulaError::Syntax { .. }));
    }

    #[test]
    fn operator_needs_separator() {
        assert!(GuideFormula::parse("val5").is_err());
        assert!(GuideFormula::parse("").is_err());
    }

    #[test]
    fn unknown_guide_suggests_lowercase() {
        let f = GuideFormula::parse("val ADJ").unwrap();
        let err = f.eval(|name| (name == "adj").then_some(1.0)).unwrap_err();
        match err {
            FormulaError::UnknownGuide { name, suggestion, .. } => {
                assert_eq!(name, "ADJ");
                assert_eq!(suggestion.as_deref(), Some("did you mean `adj`?"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
