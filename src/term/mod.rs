extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{ErrorKind, IsTerminal, Lines, StdinLock, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tl::error;
use tl::lang::Error;
use tl::mach::{Event, Options, Runtime};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::from_env("TL_LOG"))
        .init();
}

pub fn main(path: &Path, options: Options) -> ExitCode {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    let mut console = Console::new();
    match main_loop(path, options, &mut console, interrupted) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` means a diagnostic was already shown.
fn main_loop(
    path: &Path,
    options: Options,
    console: &mut Console,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<bool> {
    let mut runtime = Runtime::new(options);
    let source = match load(path) {
        Ok(source) => source,
        Err(error) => {
            console.error(&error)?;
            return Ok(false);
        }
    };
    if let Err(error) = runtime.load(&source) {
        console.error(&error)?;
        return Ok(false);
    }
    debug!(path = %path.display(), "running");

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => return Ok(true),
            Event::Running => {}
            Event::Print(s) => console.print(&s)?,
            Event::Input => match console.read_line()? {
                Input::Line(string) => runtime.enter(&string),
                Input::Interrupt => runtime.interrupt(),
                // Treated the same as a line that isn't a number.
                Input::Eof => runtime.enter(""),
            },
            Event::Error(error) => {
                console.error(&error)?;
                return Ok(false);
            }
        }
    }
}

enum Input {
    Line(String),
    Interrupt,
    Eof,
}

/// Interactive terminals get line editing. Piped input is read as is.
enum Console {
    Terminal(Interface<DefaultTerminal>),
    Pipe(Lines<StdinLock<'static>>),
}

impl Console {
    fn new() -> Console {
        if std::io::stdin().is_terminal() {
            match Interface::new("TL") {
                Ok(interface) => {
                    interface.set_report_signal(Signal::Interrupt, true);
                    return Console::Terminal(interface);
                }
                Err(error) => warn!(%error, "no line editing"),
            }
        }
        Console::Pipe(std::io::stdin().lines())
    }

    fn read_line(&mut self) -> std::io::Result<Input> {
        match self {
            Console::Terminal(interface) => match interface.read_line()? {
                ReadResult::Input(string) => Ok(Input::Line(string)),
                ReadResult::Signal(Signal::Interrupt) => {
                    interface.set_buffer("")?;
                    Ok(Input::Interrupt)
                }
                ReadResult::Signal(_) | ReadResult::Eof => Ok(Input::Eof),
            },
            Console::Pipe(lines) => match lines.next() {
                Some(line) => Ok(Input::Line(line?)),
                None => Ok(Input::Eof),
            },
        }
    }

    fn print(&self, s: &str) -> std::io::Result<()> {
        match self {
            Console::Terminal(interface) => interface.write_fmt(format_args!("{}", s)),
            Console::Pipe(_) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(s.as_bytes())?;
                stdout.flush()
            }
        }
    }

    fn error(&self, error: &Error) -> std::io::Result<()> {
        let styled = Style::new().bold().paint(error.to_string());
        match self {
            Console::Terminal(interface) => interface.write_fmt(format_args!("{}\n", styled)),
            Console::Pipe(_) => {
                if std::io::stdout().is_terminal() {
                    self.print(&format!("{}\n", styled))
                } else {
                    self.print(&format!("{}\n", error))
                }
            }
        }
    }
}

fn load(path: &Path) -> Result<String, Error> {
    match std::fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; path.display().to_string())),
            _ => Err(error!(DiskIoError; format!("{}: {}", path.display(), error))),
        },
    }
}
