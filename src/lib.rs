//! # A linear program solver
//!
//! Linear programs are solved using the two-phase Simplex Method on a dense tableau, as described
//! in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The solver is applied to a discretized optimal control problem in the `control` module.
#![warn(missing_docs)]

pub mod algorithm;
pub mod control;
pub mod data;

#[cfg(test)]
mod tests;
