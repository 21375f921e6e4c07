use super::{Config, DisplayList, Event, Flow, Listing, Turtle, Var};
use std::collections::VecDeque;

/// ## Interpreter context
///
/// Everything a statement can touch. Owned by a [`Runtime`](super::Runtime)
/// and lent to the statement handlers, so independent machines never share
/// state.

#[derive(Debug)]
pub struct Machine {
    pub config: Config,
    pub var: Var,
    pub flow: Flow,
    pub listing: Listing,
    pub turtle: Turtle,
    pub canvas: DisplayList,
    events: VecDeque<Event>,
}

impl Machine {
    pub fn new(config: Config) -> Machine {
        let canvas = DisplayList::new(config.canvas_width, config.canvas_height);
        Machine {
            config,
            var: Var::default(),
            flow: Flow::default(),
            listing: Listing::default(),
            turtle: Turtle::new(canvas.center()),
            canvas,
            events: VecDeque::default(),
        }
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        self.events.push_back(Event::Print(s.into()));
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn take_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Turtle back to the middle of the canvas, heading 0. The pen is kept.
    pub fn home(&mut self) {
        let (x, y) = self.canvas.center();
        self.turtle.x = x;
        self.turtle.y = y;
        self.turtle.heading = 0.0;
    }

    /// `NEW`
    pub fn clear(&mut self) {
        self.listing.clear();
        self.var.clear();
        self.flow.clear();
        self.canvas.clear();
        self.turtle = Turtle::new(self.canvas.center());
    }
}
