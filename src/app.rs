use activity_roster::prelude::*;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::from_env());

    html! {
        <div class="activity-roster-app">
            <header>
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>
            <main>
                <RosterApp api_base_url={config.api_base_url.clone()} />
            </main>
            <footer>
                <p>{"© 2023 Mergington High School"}</p>
            </footer>
        </div>
    }
}
