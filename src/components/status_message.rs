use crate::model::StatusMessage;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusMessageProps {
    pub message: Option<StatusMessage>,
}

#[function_component(StatusMessageComp)]
pub fn status_message_comp(props: &StatusMessageProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class={classes!("activity-roster-message", message.kind.css_class())}>
                {&message.text}
            </div>
        },
        None => html! {
            <div class="activity-roster-message hidden"></div>
        },
    }
}
