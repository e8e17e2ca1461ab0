//! Error types with rich diagnostics using miette
//!
//! Preset generation itself never fails: unknown presets, out-of-range
//! adjustments and degenerate boxes are substituted. The only fallible
//! surfaces are guide formula parsing and the finiteness check used by tests
//! and by the catalog's last-resort fallback.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Guide formula errors
// ============================================================================

/// Errors from parsing or evaluating a DrawingML guide formula (`fmla`)
#[derive(Error, Diagnostic, Debug)]
pub enum FormulaError {
    #[error("invalid guide formula: {message}")]
    #[diagnostic(
        code(prstgeom::formula::syntax),
        help("formulas look like `val 50000` or `*/ w adj 100000`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("`{op}` takes {expected} argument(s), got {got}")]
    #[diagnostic(code(prstgeom::formula::arity))]
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("in this formula")]
        span: SourceSpan,
    },

    #[error("unknown guide: {name}")]
    #[diagnostic(code(prstgeom::formula::unknown_guide))]
    UnknownGuide {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined")]
        span: SourceSpan,
        #[help]
        suggestion: Option<String>,
    },

    #[error("guide `{name}` evaluates to a non-finite value")]
    #[diagnostic(code(prstgeom::formula::non_finite))]
    NonFinite { name: String },
}

// ============================================================================
// Geometry errors
// ============================================================================

/// Defects in generated geometry. These never reach callers of
/// [`crate::get_path`]; they are what the property tests look for.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("non-finite value in path command #{index} ({command})")]
    #[diagnostic(code(prstgeom::geometry::non_finite))]
    NonFinite { index: usize, command: &'static str },

    #[error("empty path")]
    #[diagnostic(code(prstgeom::geometry::empty_path))]
    EmptyPath,

    #[error("path must start with a move, found {command}")]
    #[diagnostic(code(prstgeom::geometry::no_initial_move))]
    NoInitialMove { command: &'static str },
}
