#![allow(dead_code)]
use tl::mach::{Event, Options, Runtime};

pub fn run(source: &str) -> String {
    run_with(source, Options::default())
}

pub fn run_with(source: &str, options: Options) -> String {
    let mut r = Runtime::new(options);
    match r.load(source) {
        Ok(()) => exec(&mut r),
        Err(error) => format!("{}\n", error),
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Collects output until the program stops, fails or wants input.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Input => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
