use crate::model::network::{RosterApi, RosterError, Transport};
use crate::model::{
    MessageKind, RosterSurface, StatusMessage, SurfaceUpdate, TimerScheduler, MESSAGE_DURATION,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";

/// Keeps a surface in sync with the server's activity list.
///
/// Every successful mutation is followed by a full re-fetch; nothing is
/// merged locally. Failures end at this type and only ever surface as a
/// status message or a failed listing.
pub struct RosterView<T, S, C>
where
    T: Transport,
    S: RosterSurface + 'static,
    C: TimerScheduler,
{
    api: RosterApi<T>,
    surface: Rc<S>,
    scheduler: C,
    hide_timer: RefCell<Option<C::Handle>>,
}

impl<T, S, C> RosterView<T, S, C>
where
    T: Transport,
    S: RosterSurface + 'static,
    C: TimerScheduler,
{
    pub fn new(transport: T, surface: Rc<S>, scheduler: C) -> Self {
        Self {
            api: RosterApi::new(transport),
            surface,
            scheduler,
            hide_timer: RefCell::new(None),
        }
    }

    pub fn surface(&self) -> &Rc<S> {
        &self.surface
    }

    pub async fn fetch_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(roster) => {
                log::debug!("Loaded {} activities", roster.len());
                self.surface.apply(SurfaceUpdate::RenderRoster(roster));
            }
            Err(error) => {
                log::error!("Error fetching activities: {}", error);
                self.surface
                    .apply(SurfaceUpdate::RenderFailure(LOAD_FAILED_TEXT.to_string()));
            }
        }
    }

    pub async fn register_participant(&self, activity: &str, email: &str) {
        log::info!("Signing up {} for {}", email, activity);
        let result = self.api.signup(activity, email).await;
        if self.report(result, SIGNUP_FAILED_TEXT) {
            self.surface.apply(SurfaceUpdate::ResetForm);
            self.fetch_activities().await;
        }
    }

    pub async fn unregister_participant(&self, activity: &str, email: &str) {
        log::info!("Unregistering {} from {}", email, activity);
        let result = self.api.unregister(activity, email).await;
        if self.report(result, UNREGISTER_FAILED_TEXT) {
            self.fetch_activities().await;
        }
    }

    /// Shows `text` and replaces any pending hide timer with a fresh one.
    pub fn show_message(&self, text: impl Into<String>, kind: MessageKind) {
        self.surface
            .apply(SurfaceUpdate::ShowMessage(StatusMessage::new(text, kind)));

        let surface = self.surface.clone();
        let handle = self.scheduler.schedule(
            MESSAGE_DURATION,
            Box::new(move || surface.apply(SurfaceUpdate::HideMessage)),
        );
        *self.hide_timer.borrow_mut() = Some(handle);
    }

    /// Shows the outcome of a mutation. Returns true on success.
    fn report(&self, result: Result<String, RosterError>, failure_text: &str) -> bool {
        match result {
            Ok(message) => {
                self.show_message(message, MessageKind::Success);
                true
            }
            Err(error) => {
                match error.user_message() {
                    Some(detail) => {
                        log::warn!("{}: {}", error, detail);
                        self.show_message(detail, MessageKind::Error);
                    }
                    None => {
                        log::error!("{}", error);
                        self.show_message(failure_text, MessageKind::Error);
                    }
                }
                false
            }
        }
    }
}
