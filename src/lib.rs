#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod model;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    pub use crate::model::network::{
        ApiRequest, ApiResponse, Method, RosterApi, RosterError, Transport,
    };
    pub use crate::model::Activity;
    pub use crate::model::Listing;
    pub use crate::model::MessageKind;
    pub use crate::model::Roster;
    pub use crate::model::RosterState;
    pub use crate::model::RosterSurface;
    pub use crate::model::RosterView;
    pub use crate::model::StatusMessage;
    pub use crate::model::SurfaceUpdate;
    pub use crate::model::TimerScheduler;

    #[cfg(feature = "yew")]
    pub use crate::model::network::HttpTransport;
    #[cfg(feature = "yew")]
    pub use crate::model::GlooScheduler;
}
