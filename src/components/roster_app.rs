use crate::components::{ActivityCardComp, SignupFormComp, StatusMessageComp};
use crate::model::network::HttpTransport;
use crate::model::{
    ActivityName, GlooScheduler, Listing, ParticipantEmail, RosterState, RosterSurface,
    RosterView, SurfaceUpdate, LOADING_TEXT,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

impl Reducible for RosterState {
    type Action = SurfaceUpdate;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        state.apply(action);
        Rc::new(state)
    }
}

impl RosterSurface for UseReducerDispatcher<RosterState> {
    fn apply(&self, update: SurfaceUpdate) {
        self.dispatch(update);
    }
}

pub type BrowserRosterView =
    RosterView<HttpTransport, UseReducerDispatcher<RosterState>, GlooScheduler>;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterAppProps {
    #[prop_or_default]
    pub api_base_url: AttrValue,
}

#[function_component(RosterApp)]
pub fn roster_app(props: &RosterAppProps) -> Html {
    let state = use_reducer(RosterState::default);

    let view: Rc<BrowserRosterView> = {
        let dispatcher = state.dispatcher();
        use_memo(props.api_base_url.clone(), move |api_base_url| {
            RosterView::new(
                HttpTransport::new(api_base_url.to_string()),
                Rc::new(dispatcher),
                GlooScheduler,
            )
        })
    };

    {
        let view = view.clone();
        use_effect_with(props.api_base_url.clone(), move |_| {
            spawn_local(async move {
                view.fetch_activities().await;
            });
            || ()
        });
    }

    let on_signup = {
        let view = view.clone();
        Callback::from(move |(activity, email): (ActivityName, ParticipantEmail)| {
            let view = view.clone();
            spawn_local(async move {
                view.register_participant(&activity, &email).await;
            });
        })
    };

    let on_unregister = {
        let view = view.clone();
        Callback::from(move |(activity, email): (ActivityName, ParticipantEmail)| {
            let view = view.clone();
            spawn_local(async move {
                view.unregister_participant(&activity, &email).await;
            });
        })
    };

    let listing = match &state.listing {
        Listing::Loading => html! { <p>{LOADING_TEXT}</p> },
        Listing::Failed(text) => html! { <p>{text}</p> },
        Listing::Loaded(roster) => html! {
            <>
                {for roster.iter().map(|(name, activity)| {
                    html! {
                        <ActivityCardComp
                            key={name.clone()}
                            name={name.clone()}
                            activity={activity.clone()}
                            on_unregister={on_unregister.clone()}
                        />
                    }
                })}
            </>
        },
    };

    html! {
        <div class="activity-roster">
            <section class="activity-roster__activities">
                <h3>{"Available Activities"}</h3>
                <div id="activities-list">
                    {listing}
                </div>
            </section>
            <section class="activity-roster__signup">
                <h3>{"Sign Up for an Activity"}</h3>
                <SignupFormComp
                    options={state.options.clone()}
                    reset_generation={state.form_generation}
                    on_submit={on_signup}
                />
                <StatusMessageComp message={state.message.clone()} />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, Roster, StatusMessage};

    #[test]
    fn reducer_applies_surface_updates() {
        let mut roster = Roster::new();
        roster.insert(
            "Chess Club",
            Activity {
                description: "d".to_string(),
                schedule: "Mon 3pm".to_string(),
                max_participants: 10,
                participants: vec![],
            },
        );

        let state = Rc::new(RosterState::default())
            .reduce(SurfaceUpdate::RenderRoster(roster.clone()))
            .reduce(SurfaceUpdate::ShowMessage(StatusMessage::success("ok")));

        assert_eq!(state.roster(), Some(&roster));
        assert_eq!(state.options, vec!["Chess Club"]);
        assert_eq!(state.message, Some(StatusMessage::success("ok")));

        let state = state.reduce(SurfaceUpdate::HideMessage);
        assert_eq!(state.message, None);
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use crate::components::{RosterApp, RosterAppProps};
        use crate::model::{LOADING_TEXT, LOAD_FAILED_TEXT};
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        async fn listing_text(root: &web_sys::Element) -> String {
            for _ in 0..50 {
                let text = root.text_content().unwrap_or_default();
                if !text.contains(LOADING_TEXT) {
                    return text;
                }
                TimeoutFuture::new(100).await;
            }
            root.text_content().unwrap_or_default()
        }

        #[wasm_bindgen_test]
        async fn fetches_from_the_configured_base_url() {
            console_error_panic_hook::set_once();

            let document = web_sys::window().unwrap().document().unwrap();
            let root = document.create_element("div").unwrap();
            document.body().unwrap().append_child(&root).unwrap();

            let _app = yew::Renderer::<RosterApp>::with_root_and_props(
                root.clone(),
                RosterAppProps {
                    api_base_url: "http://127.0.0.1:9".into(),
                },
            )
            .render();

            assert!(listing_text(&root).await.contains(LOAD_FAILED_TEXT));
        }
    }
}
