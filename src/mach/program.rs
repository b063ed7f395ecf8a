use super::{Link, Options};
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, LineNumber};
use tracing::debug;

/// ## A loaded TL program
///
/// One statement per source line, in source order, plus the label table.

#[derive(Debug, Default)]
pub struct Program {
    statements: Vec<Statement>,
    link: Link,
}

impl Program {
    /// Labels are resolved over every line before any statement is parsed.
    /// The first line that fails to parse aborts the whole load.
    pub fn compile(source: &str, options: &Options) -> Result<Program, Error> {
        let lines: Vec<Line> = source
            .lines()
            .enumerate()
            .map(|(index, s)| Line::new(index + 1, s))
            .collect();
        let link = Link::resolve(&lines, options.strict_labels)?;
        let statements = lines
            .iter()
            .map(Line::ast)
            .collect::<Result<Vec<Statement>, Error>>()?;
        debug!(lines = statements.len(), labels = link.len(), "program compiled");
        Ok(Program { statements, link })
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statement at a 1-based program counter.
    pub fn get(&self, pc: LineNumber) -> Option<&Statement> {
        match pc {
            0 => None,
            _ => self.statements.get(pc - 1),
        }
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}
