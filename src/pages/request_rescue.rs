//! Citizen rescue-request form. Anonymous submissions are allowed.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::net::http::use_api_handle;
use crate::net::rescue_api;
use crate::net::types::{CreateRequestResponse, CreateRescueRequest, EmergencyLevel, RequestLocation};
use crate::util::validate;

/// Rescue request form: situation, contact, and location. Coordinates are
/// entered directly; there is no map layer in this client.
#[component]
pub fn RequestRescuePage() -> impl IntoView {
    let api = use_api_handle();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let level = RwSignal::new(EmergencyLevel::High);
    let people_count = RwSignal::new(String::from("1"));
    let contact_name = RwSignal::new(String::new());
    let contact_phone = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let flood_depth = RwSignal::new(String::new());

    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<CreateRequestResponse>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if contact_name.get_untracked().trim().is_empty() {
            error.set(Some("Contact name must not be blank".to_owned()));
            return;
        }
        if !validate::is_valid_phone(contact_phone.get_untracked().trim()) {
            error.set(Some("Phone number must be 0 or +84 followed by nine digits".to_owned()));
            return;
        }
        let (Ok(lat), Ok(lng)) = (
            latitude.get_untracked().trim().parse::<f64>(),
            longitude.get_untracked().trim().parse::<f64>(),
        ) else {
            error.set(Some("Latitude and longitude must be decimal coordinates".to_owned()));
            return;
        };
        pending.set(true);
        error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let request = CreateRescueRequest {
                title: title.get_untracked(),
                description: description.get_untracked(),
                emergency_level: level.get_untracked(),
                people_count: people_count.get_untracked().trim().parse().unwrap_or(1),
                contact_name: contact_name.get_untracked().trim().to_owned(),
                contact_phone: contact_phone.get_untracked().trim().to_owned(),
                location: RequestLocation {
                    latitude: lat,
                    longitude: lng,
                    address_text: Some(address.get_untracked()).filter(|s| !s.trim().is_empty()),
                    flood_depth: flood_depth.get_untracked().trim().parse().ok(),
                },
            };
            match rescue_api::create_request(&api, &request).await {
                Ok(response) => submitted.set(Some(response)),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="page">
            <Header/>
            <main class="rescue-page">
                {move || {
                    if let Some(response) = submitted.get() {
                        view! {
                            <div class="rescue-page__done">
                                <h1>"Request received"</h1>
                                <p>
                                    "Keep this tracking code to follow your rescue: "
                                    <strong>{response.tracking_code.clone()}</strong>
                                </p>
                                <a class="btn btn--primary" href="/track">
                                    "Track this request"
                                </a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <form class="rescue-form" on:submit=on_submit>
                                <h1>"Request Rescue"</h1>

                                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                                <label class="rescue-form__label">
                                    "Situation"
                                    <input
                                        type="text"
                                        required
                                        placeholder="Family on a rooftop"
                                        prop:value=move || title.get()
                                        on:input=move |ev| title.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="rescue-form__label">
                                    "Details"
                                    <textarea
                                        prop:value=move || description.get()
                                        on:input=move |ev| description.set(event_target_value(&ev))
                                    ></textarea>
                                </label>

                                <div class="rescue-form__row">
                                    <label class="rescue-form__label">
                                        "Emergency Level"
                                        <select on:change=move |ev| {
                                            if let Some(parsed) = EmergencyLevel::from_code(&event_target_value(&ev)) {
                                                level.set(parsed);
                                            }
                                        }>
                                            {EmergencyLevel::SELECTABLE
                                                .into_iter()
                                                .map(|option| {
                                                    view! {
                                                        <option
                                                            value=option.as_str()
                                                            selected=move || level.get() == option
                                                        >
                                                            {option.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <label class="rescue-form__label">
                                        "People"
                                        <input
                                            type="number"
                                            min="1"
                                            prop:value=move || people_count.get()
                                            on:input=move |ev| people_count.set(event_target_value(&ev))
                                        />
                                    </label>
                                </div>

                                <div class="rescue-form__row">
                                    <label class="rescue-form__label">
                                        "Contact Name"
                                        <input
                                            type="text"
                                            required
                                            prop:value=move || contact_name.get()
                                            on:input=move |ev| contact_name.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="rescue-form__label">
                                        "Contact Phone"
                                        <input
                                            type="tel"
                                            required
                                            placeholder="0912345678"
                                            prop:value=move || contact_phone.get()
                                            on:input=move |ev| contact_phone.set(event_target_value(&ev))
                                        />
                                    </label>
                                </div>

                                <div class="rescue-form__row">
                                    <label class="rescue-form__label">
                                        "Latitude"
                                        <input
                                            type="text"
                                            required
                                            placeholder="10.7769"
                                            prop:value=move || latitude.get()
                                            on:input=move |ev| latitude.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="rescue-form__label">
                                        "Longitude"
                                        <input
                                            type="text"
                                            required
                                            placeholder="106.7009"
                                            prop:value=move || longitude.get()
                                            on:input=move |ev| longitude.set(event_target_value(&ev))
                                        />
                                    </label>
                                </div>

                                <label class="rescue-form__label">
                                    "Address (optional)"
                                    <input
                                        type="text"
                                        prop:value=move || address.get()
                                        on:input=move |ev| address.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="rescue-form__label">
                                    "Flood depth in meters (optional)"
                                    <input
                                        type="text"
                                        placeholder="1.5"
                                        prop:value=move || flood_depth.get()
                                        on:input=move |ev| flood_depth.set(event_target_value(&ev))
                                    />
                                </label>

                                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                                    {move || if pending.get() { "Sending..." } else { "Send Request" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
