use crate::model::ParticipantEmail;
use yew::prelude::*;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

#[derive(Properties, PartialEq, Clone)]
pub struct ParticipantListProps {
    pub participants: Vec<ParticipantEmail>,
    pub on_unregister: Callback<ParticipantEmail>,
}

/// Binds a row's delete button to the row's email.
fn row_unregister(on_unregister: &Callback<ParticipantEmail>, email: &str) -> Callback<()> {
    let email = email.to_string();
    on_unregister.reform(move |_| email.clone())
}

#[function_component(ParticipantListComp)]
pub fn participant_list_comp(props: &ParticipantListProps) -> Html {
    if props.participants.is_empty() {
        return html! {
            <p class="activity-roster-participants__empty">
                <em>{NO_PARTICIPANTS_TEXT}</em>
            </p>
        };
    }

    html! {
        <div class="activity-roster-participants">
            <h5 class="activity-roster-participants__title">{"Participants:"}</h5>
            <ul class="activity-roster-participants__list">
                {for props.participants.iter().map(|email| {
                    let onclick = row_unregister(&props.on_unregister, email)
                        .reform(|_: MouseEvent| ());

                    html! {
                        <li class="activity-roster-participants__item">
                            <span class="activity-roster-participants__email">{email}</span>
                            <button
                                class="activity-roster-participants__delete"
                                title="Unregister participant"
                                {onclick}
                            >
                                {"🗑️"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
