use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    /// Selected/active rows.
    pub accent: Style,
    /// Rows that can be activated.
    pub action: Style,
    /// The keyboard focus cursor.
    pub focus: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().black().on_cyan(),
            action: Style::default().cyan(),
            focus: Style::default().underlined(),
        }
    }
}
