//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_program::solution::Solution;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. The auxiliary variants can only occur when
/// the first phase misbehaves, which indicates a defect rather than a property of the input.
#[allow(missing_docs)]
#[derive(PartialEq, Debug, Clone)]
pub enum OptimizationResult {
    FiniteOptimum(Solution),
    Infeasible,
    Unbounded,
    AuxiliaryInfeasible,
    AuxiliaryUnbounded,
    IterationLimit,
}

impl OptimizationResult {
    /// The status of this result, without any solution attached.
    pub fn status(&self) -> Status {
        match self {
            OptimizationResult::FiniteOptimum(_) => Status::Ok,
            OptimizationResult::Infeasible => Status::Infeasible,
            OptimizationResult::Unbounded => Status::Unbounded,
            OptimizationResult::AuxiliaryInfeasible => Status::AuxiliaryInfeasible,
            OptimizationResult::AuxiliaryUnbounded => Status::AuxiliaryUnbounded,
            OptimizationResult::IterationLimit => Status::IterationLimit,
        }
    }

    /// The solution, if a finite optimum was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            OptimizationResult::FiniteOptimum(solution) => Some(solution),
            _ => None,
        }
    }
}

/// How solving a linear program ended.
///
/// Each status has a stable numerical code, which is used as the exit code of the binary.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,
    Infeasible,
    Unbounded,
    AuxiliaryInfeasible,
    AuxiliaryUnbounded,
    IterationLimit,
}

impl Status {
    /// Numerical code of this status, `0` meaning success.
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Infeasible => 1,
            Status::Unbounded => 2,
            Status::AuxiliaryInfeasible => 3,
            Status::AuxiliaryUnbounded => 4,
            Status::IterationLimit => 5,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Status::Ok => "optimal solution found",
            Status::Infeasible => "problem is infeasible",
            Status::Unbounded => "problem is unbounded",
            Status::AuxiliaryInfeasible => "auxiliary problem is infeasible",
            Status::AuxiliaryUnbounded => "auxiliary problem is unbounded",
            Status::IterationLimit => "iteration limit reached",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::{OptimizationResult, Status};
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn status_codes() {
        let codes = [
            Status::Ok,
            Status::Infeasible,
            Status::Unbounded,
            Status::AuxiliaryInfeasible,
            Status::AuxiliaryUnbounded,
            Status::IterationLimit,
        ].iter().map(|status| status.code()).collect::<Vec<_>>();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn status_of_result() {
        let result = OptimizationResult::FiniteOptimum(Solution::new(1f64, vec![1f64]));
        assert_eq!(result.status(), Status::Ok);
        assert!(result.solution().is_some());

        assert_eq!(OptimizationResult::Unbounded.status(), Status::Unbounded);
        assert!(OptimizationResult::Unbounded.solution().is_none());
    }
}
