/// Open/closed state of the collapsible navigation menu on narrow viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    is_open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Following a link closes the menu.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}
