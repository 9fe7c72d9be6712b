use std::rc::Rc;

use yew::Reducible;

/// Which FAQ entry is expanded. Holding a single index keeps at most one panel open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

pub enum AccordionAction {
    Toggle(usize),
}

impl AccordionState {
    #[cfg(test)]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapses `index` if it is open, otherwise opens it in place of whatever was open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn glyph(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "−"
        } else {
            "+"
        }
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            AccordionAction::Toggle(index) => next.toggle(index),
        }
        Rc::new(next)
    }
}
