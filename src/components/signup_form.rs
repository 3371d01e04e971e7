use crate::model::{ActivityName, ParticipantEmail};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SignupFormProps {
    pub options: Vec<ActivityName>,
    /// Inputs are cleared whenever this changes.
    pub reset_generation: u32,
    pub on_submit: Callback<(ActivityName, ParticipantEmail)>,
}

/// Mirrors the form's `required` constraints. Email inputs drop surrounding whitespace.
fn submission(activity: &str, email: &str) -> Option<(ActivityName, ParticipantEmail)> {
    let email = email.trim();
    if activity.is_empty() || email.is_empty() {
        return None;
    }
    Some((activity.to_string(), email.to_string()))
}

#[function_component(SignupFormComp)]
pub fn signup_form_comp(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let activity = use_state(String::new);

    {
        let email = email.clone();
        let activity = activity.clone();
        use_effect_with(props.reset_generation, move |_| {
            email.set(String::new());
            activity.set(String::new());
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let target = e.target_unchecked_into::<HtmlInputElement>();
            email.set(target.value());
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            let target = e.target_unchecked_into::<HtmlSelectElement>();
            activity.set(target.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let activity = activity.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submission(&activity, &email) {
                Some(entry) => on_submit.emit(entry),
                None => log::debug!("Ignoring incomplete signup form"),
            }
        })
    };

    html! {
        <form class="activity-roster-signup" {onsubmit}>
            <div class="activity-roster-signup__group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required={true}
                    placeholder="your-email@mergington.edu"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
            </div>
            <div class="activity-roster-signup__group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required={true} onchange={on_activity_change}>
                    <option value="" selected={activity.is_empty()}>{"-- Select an activity --"}</option>
                    {for props.options.iter().map(|name| {
                        html! {
                            <option value={name.clone()} selected={*activity == *name}>{name}</option>
                        }
                    })}
                </select>
            </div>
            <button type="submit" class="activity-roster-signup__submit">{"Sign Up"}</button>
        </form>
    }
}
