//! Screen history with browser-style back semantics.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    SelectFocus,
    Results,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::SelectFocus => "select",
            Screen::Results => "results",
        }
    }
}

/// Stack of visited screens. The bottom entry is always [`Screen::Landing`].
pub struct History {
    stack: Vec<Screen>,
}

impl History {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Landing],
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Landing)
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Pop the current screen. Returns `false` (and does nothing) on the
    /// initial screen.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        true
    }
}
