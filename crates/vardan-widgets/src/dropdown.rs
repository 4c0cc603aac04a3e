//! Navigation dropdown.

/// Class toggled on the dropdown root while open.
pub const OPEN_CLASS: &str = "open";

/// Where a click landed relative to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The toggle control.
    Toggle,
    /// A link inside the dropdown content.
    ContainedLink,
    /// Anything else inside the dropdown.
    Inside,
    /// Anywhere outside the dropdown.
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply a click and return the new open state.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Toggle => self.open = !self.open,
            ClickTarget::ContainedLink | ClickTarget::Outside => self.open = false,
            ClickTarget::Inside => {}
        }
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut d = Dropdown::new();
        assert!(d.click(ClickTarget::Toggle));
        assert!(!d.click(ClickTarget::Toggle));
    }

    #[test]
    fn test_closes_on_outside_click_and_link() {
        let mut d = Dropdown::new();
        d.click(ClickTarget::Toggle);
        assert!(d.click(ClickTarget::Inside));
        assert!(!d.click(ClickTarget::Outside));

        d.click(ClickTarget::Toggle);
        assert!(!d.click(ClickTarget::ContainedLink));
    }
}
