//! Terms: variables, constants, and skolem function terms.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::{Constant, FunctionSymbol, Variable};
use crate::{Error, Result};

// =============================================================================
// Term
// =============================================================================

/// A term occurring as an atom argument.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A logical variable.
    Variable(Variable),
    /// An opaque constant.
    Constant(Constant),
    /// A function (skolem) term.
    Function(FunctionTerm),
}

impl Term {
    /// Creates a variable term.
    #[must_use]
    pub fn var(name: impl Into<Arc<str>>) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// Creates a constant term.
    #[must_use]
    pub fn constant(name: impl Into<Arc<str>>) -> Self {
        Self::Constant(Constant::new(name))
    }

    /// Returns true if this term is a variable.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns true if this term is a function term.
    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the variable if this term is one.
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the function term if this term is one.
    #[must_use]
    pub fn as_function(&self) -> Option<&FunctionTerm> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Appends the variables of this term to `out`, skipping ones already present.
    pub fn collect_variables(&self, out: &mut Vec<Variable>) {
        match self {
            Self::Variable(v) => {
                if !out.contains(v) {
                    out.push(v.clone());
                }
            }
            Self::Constant(_) => {}
            Self::Function(f) => {
                for arg in f.args() {
                    arg.collect_variables(out);
                }
            }
        }
    }

    /// Returns true if `var` occurs anywhere in this term.
    #[must_use]
    pub fn mentions(&self, var: &Variable) -> bool {
        match self {
            Self::Variable(v) => v == var,
            Self::Constant(_) => false,
            Self::Function(f) => f.args().iter().any(|arg| arg.mentions(var)),
        }
    }

    /// Returns true if this term is a function term with a function term argument.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.as_function()
            .is_some_and(|f| f.args().iter().any(Term::is_function))
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Self::Variable(v)
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Self::Constant(c)
    }
}

impl From<FunctionTerm> for Term {
    fn from(f: FunctionTerm) -> Self {
        Self::Function(f)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),
            Self::Constant(c) => write!(f, "{c}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

// =============================================================================
// Function Term
// =============================================================================

/// A function symbol applied to an arity-matching argument list.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionTerm {
    symbol: FunctionSymbol,
    args: Arc<[Term]>,
}

impl FunctionTerm {
    /// Creates a function term.
    ///
    /// # Errors
    /// Returns an arity mismatch if `args` does not match the symbol's arity.
    pub fn new(symbol: FunctionSymbol, args: Vec<Term>) -> Result<Self> {
        if symbol.arity() != args.len() {
            return Err(Error::arity_mismatch(
                symbol.name(),
                symbol.arity(),
                args.len(),
            ));
        }
        Ok(Self {
            symbol,
            args: args.into(),
        })
    }

    /// Creates the skolem term `f(vars...)`, deriving the arity from `vars`.
    #[must_use]
    pub fn skolem(name: impl Into<Arc<str>>, vars: &[Variable]) -> Self {
        Self {
            symbol: FunctionSymbol::new(name, vars.len()),
            args: vars.iter().cloned().map(Term::Variable).collect(),
        }
    }

    /// Rebuilds this term with new arguments of the same length.
    pub(crate) fn with_args(&self, args: Vec<Term>) -> Self {
        debug_assert_eq!(args.len(), self.args.len());
        Self {
            symbol: self.symbol.clone(),
            args: args.into(),
        }
    }

    /// Returns the function symbol.
    #[must_use]
    pub fn symbol(&self) -> &FunctionSymbol {
        &self.symbol
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[Term] {
        &self.args
    }
}

impl fmt::Debug for FunctionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for FunctionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.symbol.name())?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}
