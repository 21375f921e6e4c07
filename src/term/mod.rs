extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Config, Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod edit;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        log::warn!("error setting Ctrl-C handler: {}", error);
    }
    let program = std::env::args().nth(1);
    if let Err(error) = main_loop(interrupted, program) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, program: Option<String>) -> std::io::Result<()> {
    let config = Config::from_env();
    log::debug!("{:?}", config);
    let mut runtime = Runtime::new(config);
    let command = Interface::new("TURTLE")?;
    command.set_prompt("> ")?;
    command.write_fmt(format_args!("TURTLE BASIC\n"))?;

    match program {
        Some(name) => {
            let name = name.trim_end_matches(".bas");
            runtime.enter(&format!("LOAD \"{}\"", name));
            runtime.enter("RUN");
        }
        None => command.write_fmt(format_args!("READY.\n"))?,
    }

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if !string.trim().is_empty() {
                    command.add_history_unique(string.clone());
                }
                runtime.enter(&string);
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?;
            }
            Event::Edit => edit::edit(&mut runtime)?,
            Event::Cls => {
                command.write_fmt(format_args!("\x1b[2J\x1b[H"))?;
            }
            Event::Bye => break,
        }
    }
    Ok(())
}
