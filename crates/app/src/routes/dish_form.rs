use crate::form_state::DishFormState;
use api::DishClient;
use dioxus::prelude::*;
use shared_types::{
    is_digit_key, DishField, DishType, ALL_DISH_TYPES, MAX_SLICES, MAX_SPICINESS, NAME_MIN_LENGTH,
};
use shared_ui::components::{Button, Form, FormField, FormSelect, Input};

const PREPARATION_TIME_PATTERN: &str = "[0-9]{2}:[0-9]{2}:[0-9]{2}";

/// Change handler for one field: mask the new value into the draft.
fn update(mut state: Signal<DishFormState>, field: DishField) -> impl FnMut(FormEvent) {
    move |evt: FormEvent| state.write().edit(field, &evt.value())
}

/// Number inputs only accept digit characters; editing keys pass through.
fn blocks_key(key: &Key) -> bool {
    matches!(key, Key::Character(c) if !is_digit_key(c))
}

fn reject_non_digit(evt: KeyboardEvent) {
    if blocks_key(&evt.key()) {
        evt.prevent_default();
    }
}

/// Form describing one dish, POSTed to the configured endpoint on submit.
#[component]
pub fn DishFormPage() -> Element {
    let client = use_context::<DishClient>();
    let mut state = use_signal(DishFormState::new);

    let handle_submit = move |_evt: FormEvent| {
        let Some(payload) = state.write().begin_submit() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.submit(&payload).await;
            state.write().finish_submit(result);
        });
    };

    let snapshot = state.read().clone();
    let current = &snapshot.draft;
    let error_for = |field: DishField| snapshot.error_for(field);
    let preparation_time_error = error_for(DishField::PreparationTime);
    let type_error = error_for(DishField::Type);
    let submitting = snapshot.submitting;

    let specific_fields = match current.dish_type {
        Some(DishType::Pizza) => rsx! {
            FormField {
                Input {
                    name: DishField::NoOfSlices.form_name().to_string(),
                    label: "Number of Slices:",
                    input_type: "number",
                    min: "1",
                    max: MAX_SLICES.to_string(),
                    required: true,
                    value: current.no_of_slices.clone(),
                    on_input: update(state, DishField::NoOfSlices),
                    on_keydown: move |evt: KeyboardEvent| reject_non_digit(evt),
                    error: error_for(DishField::NoOfSlices),
                }
            }
            FormField {
                Input {
                    name: DishField::Diameter.form_name().to_string(),
                    label: "Diameter:",
                    input_type: "number",
                    step: "0.01",
                    required: true,
                    value: current.diameter.clone(),
                    on_input: update(state, DishField::Diameter),
                    on_keydown: move |evt: KeyboardEvent| reject_non_digit(evt),
                    error: error_for(DishField::Diameter),
                }
            }
        },
        Some(DishType::Soup) => rsx! {
            FormField {
                Input {
                    name: DishField::SpicinessScale.form_name().to_string(),
                    label: "Spiciness Scale (1-10):",
                    input_type: "number",
                    min: "1",
                    max: MAX_SPICINESS.to_string(),
                    required: true,
                    value: current.spiciness_scale.clone(),
                    on_input: update(state, DishField::SpicinessScale),
                    on_keydown: move |evt: KeyboardEvent| reject_non_digit(evt),
                    error: error_for(DishField::SpicinessScale),
                }
            }
        },
        Some(DishType::Sandwich) => rsx! {
            FormField {
                Input {
                    name: DishField::SlicesOfBread.form_name().to_string(),
                    label: "Slices of Bread:",
                    input_type: "number",
                    required: true,
                    value: current.slices_of_bread.clone(),
                    on_input: update(state, DishField::SlicesOfBread),
                    on_keydown: move |evt: KeyboardEvent| reject_non_digit(evt),
                    error: error_for(DishField::SlicesOfBread),
                }
            }
        },
        None => rsx! {},
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dish_form.css") }

        div { class: "dish-form-page",
            h1 { class: "dish-form-title", "New Dish" }

            Form { onsubmit: handle_submit,
                FormField {
                    Input {
                        name: DishField::Name.form_name().to_string(),
                        label: "Dish Name:",
                        min_length: NAME_MIN_LENGTH as i64,
                        required: true,
                        value: current.name.clone(),
                        on_input: update(state, DishField::Name),
                        error: error_for(DishField::Name),
                    }
                }
                FormField {
                    Input {
                        name: DishField::PreparationTime.form_name().to_string(),
                        label: "Preparation Time:",
                        placeholder: "00:00:00",
                        pattern: PREPARATION_TIME_PATTERN.to_string(),
                        required: true,
                        value: current.preparation_time.clone(),
                        on_input: update(state, DishField::PreparationTime),
                        error: preparation_time_error,
                    }
                }
                FormField {
                    FormSelect {
                        name: DishField::Type.form_name().to_string(),
                        label: "Dish Type:",
                        placeholder: "Select a dish type",
                        required: true,
                        value: current.value(DishField::Type).to_string(),
                        onchange: update(state, DishField::Type),
                        for dish_type in ALL_DISH_TYPES {
                            option { value: dish_type.as_str(), {dish_type.display_name()} }
                        }
                    }
                    if !type_error.is_empty() {
                        span { class: "dish-form-error", role: "alert", "{type_error}" }
                    }
                }

                {specific_fields}

                Button {
                    button_type: "submit",
                    disabled: submitting,
                    if submitting { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}
