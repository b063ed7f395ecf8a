use super::Options;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: f64, rhs: f64, options: &Options) -> Result<f64> {
        use Operator::*;
        match op {
            Plus => Ok(lhs + rhs),
            Minus => Ok(lhs - rhs),
            Multiply => Ok(Self::multiply(lhs, rhs, options)),
            Divide => Self::divide(lhs, rhs),
            Less => Ok(Self::truth(lhs < rhs)),
            Greater => Ok(Self::truth(lhs > rhs)),
            LessEqual => Ok(Self::truth(lhs <= rhs)),
            GreaterEqual => Ok(Self::truth(lhs >= rhs)),
            Equal => Ok(Self::truth(lhs == rhs)),
            NotEqual => Ok(Self::truth(lhs != rhs)),
        }
    }

    /// Historical TL programs rely on `*` subtracting.
    pub fn multiply(lhs: f64, rhs: f64, options: &Options) -> f64 {
        if options.product_multiply {
            lhs * rhs
        } else {
            lhs - rhs
        }
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(lhs / rhs)
        }
    }

    fn truth(b: bool) -> f64 {
        if b {
            1.0
        } else {
            0.0
        }
    }
}
