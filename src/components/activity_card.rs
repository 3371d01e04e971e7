use crate::components::ParticipantListComp;
use crate::model::{Activity, ActivityName, ParticipantEmail};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityCardProps {
    pub name: ActivityName,
    pub activity: Activity,
    /// Emits `(activity, email)`.
    pub on_unregister: Callback<(ActivityName, ParticipantEmail)>,
}

/// Tags emails from the participant list with the card's activity.
fn card_unregister(
    name: &str,
    on_unregister: &Callback<(ActivityName, ParticipantEmail)>,
) -> Callback<ParticipantEmail> {
    let name = name.to_string();
    on_unregister.reform(move |email| (name.clone(), email))
}

#[function_component(ActivityCardComp)]
pub fn activity_card_comp(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;

    let on_unregister = card_unregister(&props.name, &props.on_unregister);

    let availability_class = if activity.spots_left() > 0 {
        "open"
    } else {
        "full"
    };

    html! {
        <div class={classes!("activity-roster-card", availability_class)}>
            <h4 class="activity-roster-card__name">{&props.name}</h4>
            <p class="activity-roster-card__description">{&activity.description}</p>
            <p class="activity-roster-card__schedule">
                <strong>{"Schedule: "}</strong>{&activity.schedule}
            </p>
            <p class="activity-roster-card__availability">
                <strong>{"Availability: "}</strong>{activity.availability()}
            </p>
            <ParticipantListComp
                participants={activity.participants.clone()}
                {on_unregister}
            />
        </div>
    }
}
