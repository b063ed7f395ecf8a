use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Built once from the whole program before any statement is parsed,
/// so forward references resolve. Read only afterwards.

#[derive(Debug, Default)]
pub struct Link {
    symbols: HashMap<Rc<str>, LineNumber>,
}

impl Link {
    pub fn resolve<'a, T: IntoIterator<Item = &'a Line>>(lines: T, strict: bool) -> Result<Link> {
        let mut symbols: HashMap<Rc<str>, LineNumber> = HashMap::new();
        for line in lines {
            let label = match line.label() {
                Some(label) => label,
                None => continue,
            };
            if let Some(previous) = symbols.insert(label.clone(), line.number()) {
                if strict {
                    return Err(error!(DuplicateLabel, line.number(); label.to_string()));
                }
                warn!(
                    label = &**label,
                    previous,
                    line = line.number(),
                    "label redefined"
                );
            }
        }
        Ok(Link { symbols })
    }

    pub fn get(&self, label: &str) -> Option<LineNumber> {
        self.symbols.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
