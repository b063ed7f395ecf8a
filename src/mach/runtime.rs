use super::{eval, Options, Program, Var};
use crate::error;
use crate::lang::ast::{PrintItem, Statement};
use crate::lang::{Error, LineNumber};
use std::rc::Rc;
use tracing::trace;

/// ## Program runner
///
/// The host loads a program, then calls `execute` until it reports
/// `Event::Stopped`. Output and input requests come back as events so the
/// runtime never touches a terminal.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    vars: Var,
    pc: LineNumber,
    options: Options,
    state: State,
}

/// Events are returned from `Runtime::execute`.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// The program ran past its last line, or nothing is loaded.
    Stopped,
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// Waiting for a line of input; supply it with `Runtime::enter`.
    Input,
    /// One rendered `print` statement including its newline.
    Print(String),
    /// Execution is over.
    Error(Error),
}

#[derive(Debug)]
enum State {
    Stopped,
    Running,
    Input(Rc<str>),
    Interrupt,
    Failed(Error),
}

impl Default for State {
    fn default() -> Self {
        State::Stopped
    }
}

impl Runtime {
    pub fn new(options: Options) -> Runtime {
        Runtime {
            options,
            ..Runtime::default()
        }
    }

    /// Compile `source` and get ready to run it from the first line.
    /// Nothing runs when any line fails to parse.
    pub fn load(&mut self, source: &str) -> Result<(), Error> {
        self.state = State::Stopped;
        self.program = Program::compile(source, &self.options)?;
        self.vars.clear();
        self.pc = 1;
        self.state = State::Running;
        Ok(())
    }

    /// Answer an `Event::Input`. The line must be a number; anything else
    /// ends the run with `Illegal or missing input`.
    pub fn enter(&mut self, s: &str) {
        let var_name = match &self.state {
            State::Input(var_name) => var_name.clone(),
            _ => return,
        };
        self.state = match s.trim().parse::<f64>() {
            Ok(value) => {
                self.vars.store(&var_name, value);
                self.pc += 1;
                State::Running
            }
            Err(_) => State::Failed(error!(InvalidInput, self.pc)),
        };
    }

    pub fn interrupt(&mut self) {
        if let State::Running | State::Input(_) = self.state {
            self.state = State::Interrupt;
        }
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        match std::mem::take(&mut self.state) {
            State::Stopped => return Event::Stopped,
            State::Input(var_name) => {
                self.state = State::Input(var_name);
                return Event::Input;
            }
            State::Interrupt => return Event::Error(error!(Break, self.pc)),
            State::Failed(error) => return Event::Error(error),
            State::Running => self.state = State::Running,
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => continue,
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Error(error.in_line_number(self.pc));
                }
            }
        }
        Event::Running
    }

    fn step(&mut self) -> Result<Option<Event>, Error> {
        let statement = match self.program.get(self.pc) {
            Some(statement) => statement,
            None => {
                self.state = State::Stopped;
                return Ok(Some(Event::Stopped));
            }
        };
        trace!(pc = self.pc, statement = %statement, "execute");
        match statement {
            Statement::Let(var_name, expr) => {
                let value = eval(expr, &self.vars, &self.options)?;
                self.vars.store(var_name, value);
            }
            Statement::If(expr, label) => {
                if eval(expr, &self.vars, &self.options)? != 0.0 {
                    self.pc = match self.program.link().get(label) {
                        Some(pc) => pc,
                        None => return Err(error!(IllegalGoto; label.to_string())),
                    };
                    return Ok(None);
                }
            }
            Statement::Input(var_name) => {
                self.state = State::Input(var_name.clone());
                return Ok(Some(Event::Input));
            }
            Statement::Print(items) => {
                let mut s = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        s.push(' ');
                    }
                    match item {
                        PrintItem::Text(text) => s.push_str(text),
                        PrintItem::Expression(expr) => {
                            s.push_str(&eval(expr, &self.vars, &self.options)?.to_string())
                        }
                    }
                }
                s.push('\n');
                self.pc += 1;
                return Ok(Some(Event::Print(s)));
            }
        }
        self.pc += 1;
        Ok(None)
    }
}
