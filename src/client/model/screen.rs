use crate::model::server::ServerInfo;

/// One of the three screens the body mount point can show.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Login,
    Register,
    Dashboard(Dashboard),
}

/// Data the dashboard screen is rendered from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub servers: Vec<ServerInfo>,
}

impl Screen {
    /// The header is only shown to logged in users.
    pub fn shows_header(&self) -> bool {
        matches!(self, Screen::Dashboard(_))
    }
}

/// Current screen plus header visibility.
///
/// `screen` is `None` until the first screen resolves. Every call to `show` replaces the
/// whole body; nothing of the previous screen is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    screen: Option<Screen>,
    header_visible: bool,
}

impl ViewState {
    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn show(&mut self, screen: Screen) {
        self.header_visible = screen.shows_header();
        self.screen = Some(screen);
    }

    /// Reveal the header while the dashboard data is still loading. The previous body
    /// stays until `show` is called with the loaded dashboard.
    pub fn begin_dashboard(&mut self) {
        self.header_visible = true;
    }
}
