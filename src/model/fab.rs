/// Open/closed state of the floating action button menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FabMenu {
    active: bool,
}

/// Where a document-level click landed relative to the FAB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    MainButton,
    Options,
    Container,
    Outside,
}

impl FabMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn on_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::MainButton => self.toggle(),
            ClickTarget::Options | ClickTarget::Container => {}
            ClickTarget::Outside => self.close(),
        }
    }

    /// Keys pressed while the main button has focus. Returns `true` when the
    /// key was consumed and its default action should be suppressed.
    pub fn on_main_key(&mut self, key: &str) -> bool {
        match key {
            "Enter" | " " => {
                self.toggle();
                true
            }
            _ => false,
        }
    }

    pub fn on_document_key(&mut self, key: &str) {
        if key == "Escape" && self.active {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_click_toggles() {
        let mut fab = FabMenu::new();
        fab.on_click(ClickTarget::MainButton);
        assert!(fab.is_active());
        fab.on_click(ClickTarget::MainButton);
        assert!(!fab.is_active());
    }

    #[test]
    fn outside_click_closes_but_options_click_does_not() {
        let mut fab = FabMenu::new();
        fab.toggle();

        fab.on_click(ClickTarget::Options);
        assert!(fab.is_active());
        fab.on_click(ClickTarget::Container);
        assert!(fab.is_active());

        fab.on_click(ClickTarget::Outside);
        assert!(!fab.is_active());
    }

    #[test]
    fn keyboard_toggle_and_escape() {
        let mut fab = FabMenu::new();
        assert!(fab.on_main_key("Enter"));
        assert!(fab.is_active());
        assert!(fab.on_main_key(" "));
        assert!(!fab.is_active());
        assert!(!fab.on_main_key("a"));

        fab.toggle();
        fab.on_document_key("Tab");
        assert!(fab.is_active());
        fab.on_document_key("Escape");
        assert!(!fab.is_active());
    }
}
