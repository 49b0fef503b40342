//! Farmer registration form.

use super::CARD_STYLE;
use agri_core::profile::ProfilePatch;
use dioxus::prelude::*;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Props, Clone, PartialEq)]
struct FieldProps {
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())]
    input_type: String,
}

#[component]
fn Field(props: FieldProps) -> Element {
    let mut value = props.value;
    let current = value();

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 2px; font-size: 13px; font-weight: 600;",
            "{props.label}"
            input {
                r#type: "{props.input_type}",
                value: "{current}",
                style: "padding: 6px 8px; border: 1px solid #cbd5e0; border-radius: 6px; font-weight: normal;",
                oninput: move |evt: Event<FormData>| value.set(evt.value()),
            }
        }
    }
}

/// Collects the farmer's details and hands them to the registration task,
/// which mints the profile locally and then sends it to the backend.
#[component]
pub fn RegistrationForm() -> Element {
    let registrations = use_coroutine_handle::<ProfilePatch>();
    let name = use_signal(String::new);
    let location = use_signal(String::new);
    let farm_size = use_signal(String::new);
    let crop_type = use_signal(String::new);
    let farming_method = use_signal(String::new);
    let years = use_signal(String::new);
    let email = use_signal(String::new);
    let phone = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let on_register = move |_: MouseEvent| {
        if name().trim().is_empty() || location().trim().is_empty() {
            form_error.set(Some("Name and location are required.".to_string()));
            return;
        }
        form_error.set(None);

        let patch = ProfilePatch {
            name: non_empty(name()),
            location: non_empty(location()),
            farm_size: non_empty(farm_size()),
            crop_type: non_empty(crop_type()),
            farming_method: non_empty(farming_method()),
            years_of_experience: non_empty(years()),
            email: non_empty(email()),
            phone: non_empty(phone()),
            ..Default::default()
        };
        registrations.send(patch);
    };

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: "margin: 0 0 4px 0; font-size: 18px;", "Register as a Farmer" }
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #4a5568;",
                "Complete registration to mint your Farmer NFT and unlock insurance, lending and carbon credits."
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 10px;",
                Field { label: "Full name".to_string(), value: name }
                Field { label: "Location".to_string(), value: location }
                Field { label: "Farm size".to_string(), value: farm_size }
                Field { label: "Crop type".to_string(), value: crop_type }
                Field { label: "Farming method".to_string(), value: farming_method }
                Field { label: "Years of experience".to_string(), value: years }
                Field { label: "Email".to_string(), value: email, input_type: "email".to_string() }
                Field { label: "Phone".to_string(), value: phone, input_type: "tel".to_string() }
            }
            if let Some(err) = form_error() {
                p { style: "color: #C62828; font-size: 13px;", "{err}" }
            }
            button {
                style: "margin-top: 12px; padding: 8px 16px; border: none; border-radius: 8px; background: #1a365d; color: #fff; font-weight: 600; cursor: pointer;",
                onclick: on_register,
                "Complete Registration"
            }
        }
    }
}
