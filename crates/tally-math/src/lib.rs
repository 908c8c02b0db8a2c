//! # Tally Math
//!
//! Numerical utilities for the Tally bond valuation library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with analytic or finite-difference
//!   derivatives, used to invert the spreadsheet price formula
//!
//! ## Design Philosophy
//!
//! - **Fail loudly**: a solver that cannot meet its tolerance returns an error
//!   carrying the last iterate and residual, never a best-effort root
//! - **Local state**: every call owns its iteration state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_raphson_numerical, NewtonSolver, RootFinder, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
pub use solvers::{SolverConfig, SolverResult};
