use crate::model::{ActivityName, Roster, StatusMessage};
use std::cell::RefCell;

pub const LOADING_TEXT: &str = "Loading activities...";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Listing {
    #[default]
    Loading,
    Loaded(Roster),
    Failed(String),
}

/// Everything the roster page displays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    pub listing: Listing,
    pub options: Vec<ActivityName>,
    pub message: Option<StatusMessage>,
    /// Bumped on every form reset so the form can clear its inputs.
    pub form_generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceUpdate {
    RenderRoster(Roster),
    RenderFailure(String),
    ShowMessage(StatusMessage),
    HideMessage,
    ResetForm,
}

impl RosterState {
    pub fn apply(&mut self, update: SurfaceUpdate) {
        match update {
            SurfaceUpdate::RenderRoster(roster) => {
                self.options = roster.activity_names();
                self.listing = Listing::Loaded(roster);
            }
            SurfaceUpdate::RenderFailure(text) => {
                self.listing = Listing::Failed(text);
            }
            SurfaceUpdate::ShowMessage(message) => {
                self.message = Some(message);
            }
            SurfaceUpdate::HideMessage => {
                self.message = None;
            }
            SurfaceUpdate::ResetForm => {
                self.form_generation = self.form_generation.wrapping_add(1);
            }
        }
    }

    pub fn roster(&self) -> Option<&Roster> {
        match &self.listing {
            Listing::Loaded(roster) => Some(roster),
            _ => None,
        }
    }
}

/// Display target of a roster view.
pub trait RosterSurface {
    fn apply(&self, update: SurfaceUpdate);
}

impl RosterSurface for RefCell<RosterState> {
    fn apply(&self, update: SurfaceUpdate) {
        self.borrow_mut().apply(update);
    }
}
