use dioxus::prelude::*;

/// A native select for required choices.
///
/// When `placeholder` is set, a disabled empty option carries it, so the
/// select shows the prompt until a real value is chosen.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// `name`/`id` of the select.
    name: String,
    /// Current selected value; `""` selects the placeholder.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    #[props(default)]
    placeholder: String,
    #[props(default = false)]
    required: bool,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{name}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{name}",
                name: "{name}",
                value: value,
                required: required,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", disabled: true, "{placeholder}" }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_placeholder_and_options() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { name: "type", label: "Dish Type:", placeholder: "Select a dish type", required: true,
                option { value: "pizza", "Pizza" }
                option { value: "soup", "Soup" }
            }
        });
        assert!(html.contains(r#"id="type""#), "{html}");
        assert!(html.contains("Select a dish type"), "{html}");
        assert!(html.contains(r#"value="pizza""#), "{html}");
        assert!(html.contains("Soup"), "{html}");
    }

    #[test]
    fn no_placeholder_option_by_default() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { name: "type",
                option { value: "pizza", "Pizza" }
            }
        });
        assert_eq!(html.matches("<option").count(), 1, "{html}");
    }
}
