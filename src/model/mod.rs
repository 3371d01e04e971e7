mod activity;
pub mod network;
mod roster_view;
mod status_message;
mod surface;
mod timer;

pub use activity::{Activity, ActivityName, ParticipantEmail, Roster};
pub use roster_view::{
    RosterView, LOAD_FAILED_TEXT, SIGNUP_FAILED_TEXT, UNREGISTER_FAILED_TEXT,
};
pub use status_message::{MessageKind, StatusMessage, MESSAGE_DURATION};
pub use surface::{Listing, RosterState, RosterSurface, SurfaceUpdate, LOADING_TEXT};
pub use timer::{ManualScheduler, ManualTimer, TimerCallback, TimerScheduler};

#[cfg(feature = "yew")]
pub use timer::GlooScheduler;
