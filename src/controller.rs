//! Search-dropdown behavior, independent of any widget toolkit.
//!
//! The controller owns the panel state, the input value and the last
//! submitted value. The view reads from it; the app feeds it activations
//! and key presses.

use crate::error::{Error, Result};
use crate::submit::{AfterSubmit, SubmitHandler};

/// Dropdown panel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Closed,
    Open,
}

/// Input corner shape. Follows the panel: square bottom while open so the
/// panel attaches flush underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corners {
    Rounded,
    FlatTop,
}

impl From<Panel> for Corners {
    fn from(panel: Panel) -> Self {
        match panel {
            Panel::Open => Corners::FlatTop,
            Panel::Closed => Corners::Rounded,
        }
    }
}

/// Where an activation landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Input,
    /// The option row at this index
    Option(usize),
    /// Empty space inside the open panel
    Panel,
    /// Inside the search container but on none of its elements
    Container,
    Outside,
}

impl Target {
    fn in_container(self) -> bool {
        !matches!(self, Target::Outside)
    }
}

/// Non-empty list of option texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options(Vec<String>);

impl Options {
    pub fn new(options: Vec<String>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::NoOptions);
        }
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(Error::BlankOption { index });
        }
        Ok(Self(options))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub struct Controller {
    options: Options,
    panel: Panel,
    value: String,
    last_captured: String,
    on_submit: Box<dyn SubmitHandler>,
}

impl Controller {
    pub fn new(options: Options, on_submit: Box<dyn SubmitHandler>) -> Self {
        Self {
            options,
            panel: Panel::Closed,
            value: String::new(),
            last_captured: String::new(),
            on_submit,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == Panel::Open
    }

    pub fn corners(&self) -> Corners {
        self.panel.into()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value captured by the most recent submission
    pub fn last_captured(&self) -> &str {
        &self.last_captured
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn location(&self) -> Option<&str> {
        self.on_submit.location()
    }

    /// Dispatch one activation. Input and option handlers see it first, the
    /// outside-dismiss check runs last, so an activation that opens the panel
    /// is never closed again by the same event.
    pub fn activate(&mut self, target: Target) {
        match target {
            Target::Input => self.toggle(),
            Target::Option(index) => self.select_option(index),
            Target::Panel | Target::Container | Target::Outside => {}
        }
        if !target.in_container() {
            self.dismiss();
        }
    }

    pub fn toggle(&mut self) {
        let next = match self.panel {
            Panel::Closed => Panel::Open,
            Panel::Open => Panel::Closed,
        };
        self.set_panel(next);
    }

    /// Copy the option's text into the input and close. Unknown index: no-op.
    pub fn select_option(&mut self, index: usize) {
        let Some(text) = self.options.get(index) else {
            return;
        };
        self.value = text.to_string();
        self.set_panel(Panel::Closed);
    }

    /// Force the panel closed, whatever its state
    pub fn dismiss(&mut self) {
        self.set_panel(Panel::Closed);
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Enter in the focused input
    pub fn submit(&mut self) {
        self.last_captured = self.value.clone();
        if self.on_submit.on_submit(&self.last_captured) == AfterSubmit::Clear {
            self.value.clear();
        }
    }

    fn set_panel(&mut self, panel: Panel) {
        if self.panel != panel {
            tracing::debug!("panel {:?} -> {:?}", self.panel, panel);
        }
        self.panel = panel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{HistoryNavigator, LogOnly};

    fn options() -> Options {
        Options::new(
            ["Electronics", "Books", "Clothing"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
        .unwrap()
    }

    fn history_controller() -> Controller {
        Controller::new(options(), Box::new(HistoryNavigator::new("/")))
    }

    fn assert_corners_follow_panel(c: &Controller) {
        match c.panel() {
            Panel::Open => assert_eq!(c.corners(), Corners::FlatTop),
            Panel::Closed => assert_eq!(c.corners(), Corners::Rounded),
        }
    }

    #[test]
    fn starts_closed_and_rounded() {
        let c = history_controller();
        assert_eq!(c.panel(), Panel::Closed);
        assert_eq!(c.corners(), Corners::Rounded);
        assert_eq!(c.value(), "");
    }

    #[test]
    fn input_activation_alternates() {
        let mut c = history_controller();
        for i in 0..7 {
            c.activate(Target::Input);
            let expected = if i % 2 == 0 { Panel::Open } else { Panel::Closed };
            assert_eq!(c.panel(), expected, "after click {}", i + 1);
            assert_corners_follow_panel(&c);
        }
    }

    #[test]
    fn open_then_select_option() {
        let mut c = history_controller();
        c.activate(Target::Input);
        assert!(c.is_open());
        assert_eq!(c.corners(), Corners::FlatTop);

        c.activate(Target::Option(0));
        assert_eq!(c.value(), "Electronics");
        assert_eq!(c.panel(), Panel::Closed);
        assert_eq!(c.corners(), Corners::Rounded);
    }

    #[test]
    fn selecting_replaces_typed_value() {
        let mut c = history_controller();
        c.set_value("boo".to_string());
        c.activate(Target::Input);
        c.activate(Target::Option(1));
        assert_eq!(c.value(), "Books");
    }

    #[test]
    fn unknown_option_and_empty_panel_space_change_nothing() {
        let mut c = history_controller();
        c.set_value("typed".to_string());
        c.activate(Target::Input);

        c.activate(Target::Option(42));
        assert!(c.is_open());
        assert_eq!(c.value(), "typed");

        c.activate(Target::Panel);
        assert!(c.is_open());

        c.activate(Target::Container);
        assert!(c.is_open());
        assert_eq!(c.value(), "typed");
        assert_corners_follow_panel(&c);
    }

    #[test]
    fn outside_activation_closes_and_is_idempotent() {
        let mut c = history_controller();
        c.activate(Target::Outside);
        assert_eq!(c.panel(), Panel::Closed);

        c.activate(Target::Input);
        c.activate(Target::Outside);
        assert_eq!(c.panel(), Panel::Closed);
        assert_eq!(c.corners(), Corners::Rounded);

        c.activate(Target::Outside);
        assert_eq!(c.panel(), Panel::Closed);
        assert_eq!(c.corners(), Corners::Rounded);
    }

    #[test]
    fn opening_click_is_not_undone_by_dismiss() {
        let mut c = history_controller();
        c.activate(Target::Input);
        assert!(c.is_open());
    }

    #[test]
    fn history_submit_replaces_location_and_clears() {
        let mut c = history_controller();
        c.set_value("shoes".to_string());
        c.submit();
        assert_eq!(c.location(), Some("search?query=shoes"));
        assert_eq!(c.value(), "");
        assert_eq!(c.last_captured(), "shoes");
    }

    #[test]
    fn log_submit_keeps_value() {
        let mut c = Controller::new(options(), Box::new(LogOnly));
        c.set_value("shoes".to_string());
        c.submit();
        assert_eq!(c.value(), "shoes");
        assert_eq!(c.last_captured(), "shoes");
        assert_eq!(c.location(), None);
    }

    #[test]
    fn submit_does_not_touch_panel() {
        let mut c = history_controller();
        c.activate(Target::Input);
        c.submit();
        assert!(c.is_open());
        assert_corners_follow_panel(&c);
    }

    #[test]
    fn last_captured_is_overwritten() {
        let mut c = history_controller();
        c.set_value("first".to_string());
        c.submit();
        c.set_value("second".to_string());
        c.submit();
        assert_eq!(c.last_captured(), "second");
        assert_eq!(c.location(), Some("search?query=second"));
    }

    #[test]
    fn options_must_be_present_and_non_blank() {
        assert!(matches!(Options::new(Vec::new()), Err(Error::NoOptions)));
        assert!(matches!(
            Options::new(vec!["a".to_string(), "  ".to_string()]),
            Err(Error::BlankOption { index: 1 })
        ));
        assert_eq!(options().len(), 3);
    }
}
