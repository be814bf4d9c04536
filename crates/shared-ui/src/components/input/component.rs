use dioxus::prelude::*;

/// A labelled form input with an inline error slot.
///
/// `name` doubles as the element id so the label can point at it.
#[component]
pub fn Input(
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    /// Fired on keydown; call `prevent_default` to reject the key.
    #[props(default)]
    on_keydown: Option<EventHandler<KeyboardEvent>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    /// Minimum character count; `0` leaves it unset.
    #[props(default)]
    min_length: i64,
    #[props(default)] pattern: String,
    #[props(default)] min: String,
    #[props(default)] max: String,
    #[props(default)] step: String,
    /// Message rendered under the input; also marks it `aria-invalid`.
    #[props(default)]
    error: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = !error.is_empty();
    let min_length = (min_length > 0).then_some(min_length);
    let [pattern, min, max, step] = [pattern, min, max, step].map(|v| (!v.is_empty()).then_some(v));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                minlength: min_length,
                pattern: pattern,
                min: min,
                max: max,
                step: step,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                onkeydown: move |evt| {
                    if let Some(handler) = &on_keydown {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
            if invalid {
                span { class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}
