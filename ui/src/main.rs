use dioxus::prelude::*;
mod api;

use api::ApiClient;
use phishguard_types::{InterfaceConfig, Label};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Classification form
#[component]
fn Home() -> Element {
    let interface = use_signal(InterfaceConfig::default);
    let load_error = use_signal(|| Option::<String>::None);
    let mut text = use_signal(String::new);
    let mut output = use_signal(|| Option::<Result<Label, String>>::None);
    let submitting = use_signal(|| false);

    use_effect(move || {
        let mut interface = interface;
        let mut load_error = load_error;

        spawn(async move {
            let client = ApiClient::new();
            match client.interface_config().await {
                Ok(config) => interface.set(config),
                Err(e) => load_error.set(Some(format!("Failed to load interface: {e}"))),
            }
        });
    });

    let submit = move |_: MouseEvent| {
        let mut output = output;
        let mut submitting = submitting;

        spawn(async move {
            submitting.set(true);
            let client = ApiClient::new();
            let result = client.classify(&text()).await.map_err(|e| e.to_string());
            output.set(Some(result));
            submitting.set(false);
        });
    };

    let config = interface();

    rsx! {
        div {
            class: "container",
            h1 { "{config.title}" }
            p { class: "description", "{config.description}" }

            if let Some(err) = load_error() {
                div { class: "error", "Error: {err}" }
            }

            label { class: "field-label", r#for: "email_text", "email_text" }
            textarea {
                id: "email_text",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }

            div {
                class: "actions",
                button {
                    onclick: move |_| {
                        text.set(String::new());
                        output.set(None);
                    },
                    "Clear"
                }
                button {
                    disabled: submitting(),
                    onclick: submit,
                    "Submit"
                }
            }

            span { class: "field-label", "output" }
            if let Some(Err(err)) = output() {
                div { class: "error", "Error: {err}" }
            } else {
                div {
                    class: "output",
                    if let Some(Ok(label)) = output() {
                        "{label}"
                    }
                }
            }
        }
    }
}
