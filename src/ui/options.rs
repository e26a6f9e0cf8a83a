/// Options page: the single "open in new tab" preference

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::settings::Settings;
use crate::storage::{load_settings, save_settings};

#[derive(Clone, PartialEq)]
enum OptionsState {
    Loading,
    Idle,
    Saving,
    Saved,
    Error(String),
}

#[function_component(OptionsPage)]
pub fn options_page() -> Html {
    let state = use_state(|| OptionsState::Loading);
    let open_in_new_tab = use_state(|| false);

    // Load settings on mount
    {
        let state = state.clone();
        let open_in_new_tab = open_in_new_tab.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_settings().await {
                    Ok(settings) => {
                        open_in_new_tab.set(settings.open_in_new_tab);
                        state.set(OptionsState::Idle);
                    }
                    Err(e) => {
                        state.set(OptionsState::Error(format!("Failed to load: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    let on_change = {
        let open_in_new_tab = open_in_new_tab.clone();
        let state = state.clone();

        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                open_in_new_tab.set(input.checked());
                state.set(OptionsState::Idle);
            }
        })
    };

    let on_save = {
        let state = state.clone();
        let settings = Settings::new(*open_in_new_tab);

        Callback::from(move |_| {
            let state = state.clone();
            let settings = settings.clone();

            state.set(OptionsState::Saving);

            spawn_local(async move {
                match save_settings(&settings).await {
                    Ok(_) => {
                        state.set(OptionsState::Saved);
                    }
                    Err(e) => {
                        state.set(OptionsState::Error(format!("Failed to save: {}", e)));
                    }
                }
            });
        })
    };

    let is_busy = matches!(*state, OptionsState::Loading | OptionsState::Saving);

    html! {
        <div class="padding-20">
            <h1 class="options-title">{"WP Admin Switcher"}</h1>

            <div class="pf-v5-c-check">
                <input
                    class="pf-v5-c-check__input"
                    type="checkbox"
                    id="openInNewTab"
                    checked={*open_in_new_tab}
                    disabled={is_busy}
                    onchange={on_change}
                />
                <label class="pf-v5-c-check__label" for="openInNewTab">
                    {"Open in new tab"}
                </label>
            </div>

            <div class="message-top-margin">
                <Button onclick={on_save} disabled={is_busy} variant={ButtonVariant::Primary}>
                    {"Save"}
                </Button>
            </div>

            {match &*state {
                OptionsState::Loading | OptionsState::Saving => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                OptionsState::Saved => html! {
                    <Alert r#type={AlertType::Success} title={"Settings saved"} inline={true}>
                    </Alert>
                },
                OptionsState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                OptionsState::Idle => html! {}
            }}
        </div>
    }
}
