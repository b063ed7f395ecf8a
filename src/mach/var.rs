use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Undefined variables are an error, never an implicit zero.
    pub fn fetch(&self, var_name: &str) -> Result<f64> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: f64) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_fetch() {
        let mut var = Var::new();
        let x: Rc<str> = Rc::from("x");
        var.store(&x, 1.5);
        var.store(&x, 2.5);
        assert_eq!(var.fetch("x"), Ok(2.5));
        assert_eq!(var.len(), 1);
        var.clear();
        assert!(var.is_empty());
    }

    #[test]
    fn test_undefined() {
        let var = Var::new();
        let e = var.fetch("nope").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::UndefinedVariable);
        assert_eq!(e.get_message(), "nope");
    }
}
