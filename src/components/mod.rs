mod activity_card;
mod participant_list;
mod roster_app;
mod signup_form;
mod status_message;

pub use activity_card::{ActivityCardComp, ActivityCardProps};
pub use participant_list::{ParticipantListComp, ParticipantListProps, NO_PARTICIPANTS_TEXT};
pub use roster_app::{BrowserRosterView, RosterApp, RosterAppProps};
pub use signup_form::{SignupFormComp, SignupFormProps};
pub use status_message::{StatusMessageComp, StatusMessageProps};
