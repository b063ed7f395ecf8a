use super::{Operation, Options, Var};
use crate::lang::ast::{Expression, Operand};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Evaluate an expression against the current variables.
pub fn eval(expr: &Expression, vars: &Var, options: &Options) -> Result<f64> {
    match expr {
        Expression::Number(n) => Ok(*n),
        Expression::Var(var_name) => vars.fetch(var_name),
        Expression::Binary(lhs, op, rhs) => {
            let lhs = resolve(lhs, vars)?;
            let rhs = resolve(rhs, vars)?;
            Operation::binary(*op, lhs, rhs, options)
        }
    }
}

fn resolve(operand: &Operand, vars: &Var) -> Result<f64> {
    match operand.literal() {
        Some(n) => Ok(n),
        None => vars.fetch(operand.token()),
    }
}
