//! Settings page panels.
//!
//! The username and password change forms are collapsible panels. Each
//! panel's visibility is an explicit [`PanelState`]; the `display` style and
//! the `is-active` class are projections of it, never read back.

/// Class the server renders on a panel that should start open.
pub const ACTIVE_CLASS: &str = "is-active";

/// A collapsible settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsPanel {
    Username,
    Password,
}

impl SettingsPanel {
    /// Query flag asking the server to render this panel open.
    pub fn show_query(self) -> &'static str {
        match self {
            Self::Username => "show_username_form",
            Self::Password => "show_password_form",
        }
    }

    /// `type` of the inputs cleared when the panel closes.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Username => "text",
            Self::Password => "password",
        }
    }

    /// Settings page URL that renders this panel open.
    pub fn reveal_href(self) -> String {
        format!("/settings?{}=true", self.show_query())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

impl PanelState {
    /// Server-rendered state: open iff the panel carries [`ACTIVE_CLASS`].
    pub fn from_class_list(classes: &str) -> Self {
        if classes.split_whitespace().any(|class| class == ACTIVE_CLASS) {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Inline `display` value.
    pub fn display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "block",
        }
    }

    /// Whether [`ACTIVE_CLASS`] is present.
    pub fn is_active(self) -> bool {
        self == Self::Visible
    }
}

/// What the page must do after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleEffect {
    /// Show the panel.
    Shown,
    /// Hide the panel and clear its inputs of the given `type`.
    Hidden { clear_inputs: &'static str },
    /// The panel is not on this page; navigate to a page that renders it.
    Navigate(String),
}

/// Visibility of the panels present on the current settings page.
///
/// `None` means the panel was not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsForms {
    username: Option<PanelState>,
    password: Option<PanelState>,
}

impl SettingsForms {
    pub fn new(username: Option<PanelState>, password: Option<PanelState>) -> Self {
        Self { username, password }
    }

    pub fn state(&self, panel: SettingsPanel) -> Option<PanelState> {
        match panel {
            SettingsPanel::Username => self.username,
            SettingsPanel::Password => self.password,
        }
    }

    fn slot(&mut self, panel: SettingsPanel) -> &mut Option<PanelState> {
        match panel {
            SettingsPanel::Username => &mut self.username,
            SettingsPanel::Password => &mut self.password,
        }
    }

    pub fn toggle(&mut self, panel: SettingsPanel) -> ToggleEffect {
        match self.slot(panel) {
            None => ToggleEffect::Navigate(panel.reveal_href()),
            Some(state @ PanelState::Hidden) => {
                *state = PanelState::Visible;
                ToggleEffect::Shown
            }
            Some(state @ PanelState::Visible) => {
                *state = PanelState::Hidden;
                ToggleEffect::Hidden {
                    clear_inputs: panel.input_type(),
                }
            }
        }
    }
}
