/// Open/closed flag owned by a single trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub open: bool,
}

impl ToggleState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// The header's independent toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderToggle {
    UserMenu,
    AboutMenu,
    AboutModal,
    Sidebar,
}

impl HeaderToggle {
    pub const ALL: [HeaderToggle; 4] = [
        HeaderToggle::UserMenu,
        HeaderToggle::AboutMenu,
        HeaderToggle::AboutModal,
        HeaderToggle::Sidebar,
    ];
}

/// Open/closed state of every header surface.
///
/// Opening one surface never closes another; the about modal and the sidebar
/// are routinely open together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderToggles {
    pub user_menu: ToggleState,
    pub about_menu: ToggleState,
    pub about_modal: ToggleState,
    pub sidebar: ToggleState,
}

impl Default for HeaderToggles {
    fn default() -> Self {
        Self {
            user_menu: ToggleState::new(false),
            about_menu: ToggleState::new(false),
            about_modal: ToggleState::new(false),
            sidebar: ToggleState::new(true),
        }
    }
}

impl HeaderToggles {
    pub fn get(&self, which: HeaderToggle) -> ToggleState {
        match which {
            HeaderToggle::UserMenu => self.user_menu,
            HeaderToggle::AboutMenu => self.about_menu,
            HeaderToggle::AboutModal => self.about_modal,
            HeaderToggle::Sidebar => self.sidebar,
        }
    }

    pub fn get_mut(&mut self, which: HeaderToggle) -> &mut ToggleState {
        match which {
            HeaderToggle::UserMenu => &mut self.user_menu,
            HeaderToggle::AboutMenu => &mut self.about_menu,
            HeaderToggle::AboutModal => &mut self.about_modal,
            HeaderToggle::Sidebar => &mut self.sidebar,
        }
    }

    pub fn is_open(&self, which: HeaderToggle) -> bool {
        self.get(which).is_open()
    }

    pub fn toggle(&mut self, which: HeaderToggle) {
        self.get_mut(which).toggle();
    }

    pub fn open(&mut self, which: HeaderToggle) {
        self.get_mut(which).open();
    }

    pub fn close(&mut self, which: HeaderToggle) {
        self.get_mut(which).close();
    }
}
