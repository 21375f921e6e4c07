use super::exec::{self, Step};
use super::{disk, Config, DisplayList, Editor, Flow, Listing, Machine, Turtle, Var};
use crate::error;
use crate::lang::{lex, Error, Line, LineNumber};

/// ## Events for the front end
///
/// [`Runtime::execute`] hands these out one at a time. `Stopped` means the
/// runtime is waiting for [`Runtime::enter`]. `Running` means the cycle
/// budget ran out and `execute` should be called again after the front end
/// has redrawn and checked for an interrupt.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Error(Error),
    /// Show the program editor, see [`Runtime::editor_mut`].
    Edit,
    /// Clear the console scrollback.
    Cls,
    Bye,
}

/// ## Run driver
///
/// Executes the listing statement by statement from position 0. Every way
/// a run ends, normal or not, prints `READY.`.

#[derive(Debug)]
pub struct Runtime {
    machine: Machine,
    editor: Option<Editor>,
    pc: usize,
    running: bool,
    interrupted: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            machine: Machine::new(config),
            editor: None,
            pc: 0,
            running: false,
            interrupted: false,
        }
    }

    /// Accept one line of console input.
    pub fn enter(&mut self, s: &str) {
        let s = s.trim();
        match s.to_ascii_uppercase().as_str() {
            "" => {}
            "EDIT" => self.edit(),
            "LIST" => self.list(),
            "RUN" => self.run(),
            "NEW" => self.new_program(),
            "DIR" | "FILES" => self.dir(),
            "CLS" => self.cls(),
            "BYE" => self.machine.emit(Event::Bye),
            _ => match Line::parse(s) {
                Some(line) => self.enter_line(line),
                None => self.direct(s),
            },
        }
    }

    /// Interrupt a running program at the next cycle.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn listing(&self) -> &Listing {
        &self.machine.listing
    }

    pub fn var(&self) -> &Var {
        &self.machine.var
    }

    pub fn flow(&self) -> &Flow {
        &self.machine.flow
    }

    pub fn turtle(&self) -> &Turtle {
        &self.machine.turtle
    }

    pub fn canvas(&self) -> &DisplayList {
        &self.machine.canvas
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        self.editor.as_mut()
    }

    /// Open the editor on the current program.
    pub fn edit(&mut self) {
        self.editor = Some(Editor::new(&self.machine.listing, self.machine.config.step));
        self.machine.emit(Event::Edit);
    }

    /// Close the editor, replacing the program with what it holds.
    pub fn commit(&mut self) {
        if let Some(editor) = self.editor.take() {
            self.machine.listing = editor.commit();
            log::debug!("committed {} lines", self.machine.listing.len());
            self.machine.print("READY.");
        }
    }

    pub fn run(&mut self) {
        self.commit();
        if self.machine.listing.is_empty() {
            self.machine.print("READY.");
            return;
        }
        log::debug!("run {} lines", self.machine.listing.len());
        self.machine.flow.clear();
        self.pc = 0;
        self.running = true;
    }

    /// Run at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.machine.take_event() {
            return event;
        }
        if self.interrupted {
            self.interrupted = false;
            if self.running {
                let line_number = self.line_number();
                self.machine.emit(Event::Error(error!(Break, line_number)));
                self.stop();
                if let Some(event) = self.machine.take_event() {
                    return event;
                }
            }
        }
        for _ in 0..cycles {
            if !self.running {
                break;
            }
            self.step();
            if self.machine.has_events() {
                break;
            }
        }
        match self.machine.take_event() {
            Some(event) => event,
            None if self.running => Event::Running,
            None => Event::Stopped,
        }
    }

    fn line_number(&self) -> Option<LineNumber> {
        self.machine.listing.get(self.pc).map(|line| line.number())
    }

    fn step(&mut self) {
        let (line_number, words) = match self.machine.listing.get(self.pc) {
            Some(line) => (line.number(), lex(line.body())),
            None => return self.stop(),
        };
        log::trace!("{} {:?}", line_number, words);
        match exec::execute(&mut self.machine, &words, self.pc, false) {
            Ok(Step::Next) => self.pc += 1,
            Ok(Step::Jump(delta)) => self.jump(delta),
            Ok(Step::End) => return self.stop(),
            Err(error) => {
                if error.is_fatal() {
                    log::debug!("{} in line {}", error, line_number);
                    let error = error.in_line_number(Some(line_number));
                    self.machine.emit(Event::Error(error));
                    return self.stop();
                }
                self.machine.emit(Event::Error(error));
                self.pc += 1;
            }
        }
        if self.pc >= self.machine.listing.len() {
            self.stop();
        }
    }

    fn jump(&mut self, delta: isize) {
        let pc = self.pc as isize + delta;
        if pc < 0 {
            self.pc = self.machine.listing.len();
        } else {
            self.pc = pc as usize;
        }
    }

    fn stop(&mut self) {
        if self.running {
            log::debug!("stopped at position {}", self.pc);
        }
        self.running = false;
        self.machine.print("READY.");
    }

    /// A statement typed at the console. It runs at position 0 and a jump
    /// out of it continues as a run from the jump target.
    fn direct(&mut self, s: &str) {
        let words = lex(s);
        match exec::execute(&mut self.machine, &words, 0, true) {
            Ok(Step::Jump(delta)) => {
                if delta >= 0 && (delta as usize) < self.machine.listing.len() {
                    self.pc = delta as usize;
                    self.running = true;
                }
            }
            Ok(_) => {}
            Err(error) => self.machine.emit(Event::Error(error)),
        }
    }

    /// `10 PRINT "HI"` stores a line, a bare `10` deletes one.
    fn enter_line(&mut self, line: Line) {
        if line.is_empty() {
            self.machine.listing.remove(line.number());
        } else {
            self.machine.listing.insert(line);
        }
    }

    fn list(&mut self) {
        if self.machine.listing.is_empty() {
            self.machine.print("(empty)");
            return;
        }
        for line in self.machine.listing.text() {
            self.machine.print(line);
        }
    }

    fn new_program(&mut self) {
        self.editor = None;
        self.running = false;
        self.machine.clear();
        self.machine.print("READY.");
    }

    fn dir(&mut self) {
        match disk::dir(&self.machine.config.dir) {
            Ok(files) if files.is_empty() => self.machine.print("(no files)"),
            Ok(files) => {
                for file in files {
                    self.machine.print(file);
                }
            }
            Err(error) => self.machine.emit(Event::Error(error)),
        }
    }

    fn cls(&mut self) {
        self.machine.canvas.clear();
        self.machine.home();
        self.machine.emit(Event::Cls);
    }
}
