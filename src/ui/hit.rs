use crate::controller::Target;

/// A region that reports pointer enter/exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Container,
    Input,
    Panel,
    Option(usize),
}

/// Which regions the pointer is currently over.
///
/// Presses are resolved against this to find the innermost region hit.
#[derive(Debug, Default)]
pub struct Hover {
    container: bool,
    input: bool,
    panel: bool,
    option: Option<usize>,
}

impl Hover {
    pub fn set(&mut self, region: Region, inside: bool) {
        match region {
            Region::Container => self.container = inside,
            Region::Input => self.input = inside,
            Region::Panel => self.panel = inside,
            Region::Option(i) => {
                if inside {
                    self.option = Some(i);
                } else if self.option == Some(i) {
                    self.option = None;
                }
            }
        }
    }

    pub fn hovered_option(&self) -> Option<usize> {
        self.option
    }

    /// Panel widgets leave the tree without an exit event when it closes
    pub fn panel_closed(&mut self) {
        self.panel = false;
        self.option = None;
    }

    pub fn target(&self) -> Target {
        if self.input {
            Target::Input
        } else if let Some(i) = self.option {
            Target::Option(i)
        } else if self.panel {
            Target::Panel
        } else if self.container {
            Target::Container
        } else {
            Target::Outside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_hovered_is_outside() {
        assert_eq!(Hover::default().target(), Target::Outside);
    }

    #[test]
    fn innermost_region_wins() {
        let mut hover = Hover::default();
        hover.set(Region::Container, true);
        assert_eq!(hover.target(), Target::Container);

        hover.set(Region::Panel, true);
        assert_eq!(hover.target(), Target::Panel);

        hover.set(Region::Option(2), true);
        assert_eq!(hover.target(), Target::Option(2));

        hover.set(Region::Option(2), false);
        assert_eq!(hover.target(), Target::Panel);

        hover.set(Region::Panel, false);
        hover.set(Region::Input, true);
        assert_eq!(hover.target(), Target::Input);
    }

    #[test]
    fn late_exit_from_previous_option_is_ignored() {
        let mut hover = Hover::default();
        hover.set(Region::Option(0), true);
        hover.set(Region::Option(1), true);
        hover.set(Region::Option(0), false);
        assert_eq!(hover.target(), Target::Option(1));
    }

    #[test]
    fn closing_panel_clears_stale_hover() {
        let mut hover = Hover::default();
        hover.set(Region::Container, true);
        hover.set(Region::Panel, true);
        hover.set(Region::Option(1), true);

        hover.panel_closed();
        assert_eq!(hover.target(), Target::Container);
    }
}
