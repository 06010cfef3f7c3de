//! Admin page for adding hotels, one at a time or in bulk from a CSV file.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the admin guard. Form validation runs locally before any
//! request; a 401/403 from either endpoint ends the session and the guard
//! takes the user to the login page.

#[cfg(test)]
#[path = "add_hotel_test.rs"]
mod add_hotel_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::NewHotel;

pub const HOTEL_ADDED: &str = "Hotel added successfully!";
pub const NETWORK_ERROR: &str = "Network error: Unable to connect to the server. Please check if the backend is running.";
pub const INVALID_WEBSITE: &str = "Website URL must start with http:// or https://";
pub const NO_FILE: &str = "Please select a file first";
pub const UPLOAD_FAILED: &str = "Error uploading file. Please try again.";
pub const TEMPLATE_FILE_NAME: &str = "hotel_template.csv";

/// Header row plus one example line, matching the upload endpoint's columns.
pub const HOTEL_CSV_TEMPLATE: &str = "hotelName,email1,email2,address,mobilePhoneContact,landlineContact,concerningPersonName,preferred,city,state,website\n\
Example Hotel,hotel@example.com,secondary@example.com,123 Main St,1234567890,0987654321,John Doe,false,New York,NY,https://example.com";

const CSV_MIME_TYPES: [&str; 3] = ["text/csv", "application/vnd.ms-excel", "text/plain"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotelField {
    HotelName,
    Email1,
    Email2,
    Address,
    MobilePhoneContact,
    LandlineContact,
    ConcerningPersonName,
    City,
    State,
    Website,
}

impl HotelField {
    pub const ALL: [Self; 10] = [
        Self::HotelName,
        Self::Email1,
        Self::Email2,
        Self::Address,
        Self::MobilePhoneContact,
        Self::LandlineContact,
        Self::ConcerningPersonName,
        Self::City,
        Self::State,
        Self::Website,
    ];

    /// Required fields in the order they are checked.
    pub const REQUIRED: [Self; 7] = [
        Self::HotelName,
        Self::Email1,
        Self::Address,
        Self::MobilePhoneContact,
        Self::ConcerningPersonName,
        Self::City,
        Self::State,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::HotelName => "Hotel name",
            Self::Email1 => "Primary email",
            Self::Email2 => "Secondary email",
            Self::Address => "Address",
            Self::MobilePhoneContact => "Mobile phone contact",
            Self::LandlineContact => "Landline contact",
            Self::ConcerningPersonName => "Concerning person name",
            Self::City => "City",
            Self::State => "State",
            Self::Website => "Website",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email1 | Self::Email2 => "email",
            Self::MobilePhoneContact | Self::LandlineContact => "tel",
            Self::Website => "url",
            _ => "text",
        }
    }

    pub fn required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// Raw form state of the single-hotel tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotelDraft {
    pub hotel_name: String,
    pub email1: String,
    pub email2: String,
    pub address: String,
    pub mobile_phone_contact: String,
    pub landline_contact: String,
    pub concerning_person_name: String,
    pub preferred: bool,
    pub city: String,
    pub state: String,
    pub website: String,
}

impl HotelDraft {
    pub fn value(&self, field: HotelField) -> &str {
        match field {
            HotelField::HotelName => &self.hotel_name,
            HotelField::Email1 => &self.email1,
            HotelField::Email2 => &self.email2,
            HotelField::Address => &self.address,
            HotelField::MobilePhoneContact => &self.mobile_phone_contact,
            HotelField::LandlineContact => &self.landline_contact,
            HotelField::ConcerningPersonName => &self.concerning_person_name,
            HotelField::City => &self.city,
            HotelField::State => &self.state,
            HotelField::Website => &self.website,
        }
    }

    pub fn value_mut(&mut self, field: HotelField) -> &mut String {
        match field {
            HotelField::HotelName => &mut self.hotel_name,
            HotelField::Email1 => &mut self.email1,
            HotelField::Email2 => &mut self.email2,
            HotelField::Address => &mut self.address,
            HotelField::MobilePhoneContact => &mut self.mobile_phone_contact,
            HotelField::LandlineContact => &mut self.landline_contact,
            HotelField::ConcerningPersonName => &mut self.concerning_person_name,
            HotelField::City => &mut self.city,
            HotelField::State => &mut self.state,
            HotelField::Website => &mut self.website,
        }
    }

    /// Check the draft and build the request body.
    ///
    /// # Errors
    ///
    /// Returns `"<label> is required"` for the first blank required field, or
    /// [`INVALID_WEBSITE`] when a website lacks an http(s) scheme.
    pub fn validate(&self) -> Result<NewHotel, String> {
        if let Some(missing) = HotelField::REQUIRED.into_iter().find(|f| self.value(*f).trim().is_empty()) {
            return Err(format!("{} is required", missing.label()));
        }
        let website = optional(&self.website);
        if website.as_deref().is_some_and(|w| !(w.starts_with("http://") || w.starts_with("https://"))) {
            return Err(INVALID_WEBSITE.to_owned());
        }
        Ok(NewHotel {
            hotel_name: self.hotel_name.trim().to_owned(),
            email1: self.email1.trim().to_owned(),
            email2: optional(&self.email2),
            address: self.address.trim().to_owned(),
            mobile_phone_contact: self.mobile_phone_contact.trim().to_owned(),
            landline_contact: optional(&self.landline_contact),
            concerning_person_name: self.concerning_person_name.trim().to_owned(),
            preferred: self.preferred,
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_owned(),
            website,
        })
    }
}

fn optional(raw: &str) -> Option<String> {
    Some(raw.trim()).filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Whether the server message describes a uniqueness conflict.
pub fn is_duplicate_message(message: &str) -> bool {
    ["already exists", "duplicate", "unique"].iter().any(|needle| message.contains(needle))
}

/// User-facing text for a failed save or upload. Auth failures have no
/// message here; they end the session instead.
pub fn save_error_message(err: &ApiError) -> Option<String> {
    match err {
        ApiError::Unauthorized { .. } => None,
        ApiError::Network(_) => Some(NETWORK_ERROR.to_owned()),
        ApiError::Validation(message) if is_duplicate_message(message) => Some(format!(
            "Validation Error: {message}. Please use different values for hotel name, email, or phone number."
        )),
        ApiError::Validation(message) => Some(format!("Validation Error: {message}")),
        ApiError::Server { message, .. } => Some(format!("Server Error: {message}")),
        ApiError::NotFound | ApiError::Decode(_) | ApiError::Unavailable => Some(format!("Server Error: {err}")),
    }
}

/// Accept files by `.csv` extension or a CSV-ish MIME type.
pub fn is_csv_file(name: &str, mime: &str) -> bool {
    CSV_MIME_TYPES.contains(&mime) || name.to_ascii_lowercase().ends_with(".csv")
}

pub fn invalid_csv_message(mime: &str) -> String {
    format!("Please select a valid CSV file. Selected: {mime}")
}

pub fn upload_success_message(count: usize) -> String {
    format!("Successfully uploaded {count} hotels")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Single,
    Bulk,
}

#[component]
pub fn AddHotelPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::default());
    let draft = RwSignal::new(HotelDraft::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let selected_file = RwSignal::new(None::<String>);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let saved = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let (auth, api) = (crate::state::auth::use_auth(), StoredValue::new(crate::net::api::use_api()));
    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if saved.get() {
                navigate(session::HOME_PATH, leptos_router::NavigateOptions::default());
            }
        });
    }

    let switch_tab = move |next: Tab| {
        tab.set(next);
        error.set(None);
        success.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        let hotel = match draft.with(HotelDraft::validate) {
            Ok(hotel) => hotel,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::token_or_reset(&auth, busy) else {
                    return;
                };
                match api.add_hotel(&token, &hotel).await {
                    Ok(created) => {
                        log::info!("add hotel: created {} ({})", created.hotel_name, created.id);
                        success.set(Some(HOTEL_ADDED.to_owned()));
                        draft.set(HotelDraft::default());
                        saved.set(true);
                    }
                    Err(e) => {
                        log::error!("add hotel: {e}");
                        if !crate::state::auth::check_api_error(&auth, &e) {
                            error.set(save_error_message(&e));
                            busy.set(false);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (hotel, saved);
            busy.set(false);
        }
    };

    let on_file_change = move |_| {
        error.set(None);
        success.set(None);
        #[cfg(feature = "csr")]
        {
            let file = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0));
            match file {
                Some(file) if is_csv_file(&file.name(), &file.type_()) => selected_file.set(Some(file.name())),
                Some(file) => {
                    error.set(Some(invalid_csv_message(&file.type_())));
                    selected_file.set(None);
                }
                None => selected_file.set(None),
            }
        }
    };

    let on_upload = move |_| {
        if busy.get() {
            return;
        }
        if selected_file.with(Option::is_none) {
            error.set(Some(NO_FILE.to_owned()));
            return;
        }
        error.set(None);
        success.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                error.set(Some(NO_FILE.to_owned()));
                busy.set(false);
                return;
            };
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::auth::token_or_reset(&auth, busy) else {
                    return;
                };
                log::info!("csv upload: sending {} ({})", file.name(), file.type_());
                match api.upload_hotels_csv(&token, &file).await {
                    Ok(summary) => {
                        success.set(Some(upload_success_message(summary.hotels.len())));
                        selected_file.set(None);
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                    Err(e) => {
                        log::error!("csv upload: {e}");
                        if !crate::state::auth::check_api_error(&auth, &e) {
                            error.set(Some(save_error_message(&e).unwrap_or_else(|| UPLOAD_FAILED.to_owned())));
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        busy.set(false);
    };

    let on_template = move |_| {
        if let Err(e) = crate::util::download::save_bytes(TEMPLATE_FILE_NAME, "text/csv;charset=utf-8;", HOTEL_CSV_TEMPLATE.as_bytes()) {
            log::error!("csv template: {e}");
            error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="add-hotel-page">
            <header class="page-header">
                <h1>"Add Hotels"</h1>
            </header>
            <div class="tabs">
                <button class="tab" class:tab--active=move || tab.get() == Tab::Single on:click=move |_| switch_tab(Tab::Single)>
                    "Add Single Hotel"
                </button>
                <button class="tab" class:tab--active=move || tab.get() == Tab::Bulk on:click=move |_| switch_tab(Tab::Bulk)>
                    "Bulk Upload via CSV"
                </button>
            </div>

            {move || error.get().map(|e| view! { <p class="form-message form-message--error">{e}</p> })}
            {move || success.get().map(|s| view! { <p class="form-message form-message--success">{s}</p> })}

            <Show when=move || tab.get() == Tab::Single>
                <form class="hotel-form" on:submit=on_submit>
                    {HotelField::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <label class="field">
                                    <span>{field.label()} {field.required().then_some(" *")}</span>
                                    <input
                                        type=field.input_type()
                                        prop:value=move || draft.with(|d| d.value(field).to_owned())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            draft.update(|d| *d.value_mut(field) = value);
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.preferred)
                            on:change=move |ev| draft.update(|d| d.preferred = event_target_checked(&ev))
                        />
                        <span>"Preferred hotel"</span>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Add Hotel" }}
                    </button>
                </form>
            </Show>

            <Show when=move || tab.get() == Tab::Bulk>
                <section class="csv-upload">
                    <p>"Upload a CSV file with one hotel per row. Use the template for the expected columns."</p>
                    <button class="btn btn--ghost" on:click=on_template>"Download template"</button>
                    <input id="csv-upload" type="file" accept=".csv" node_ref=file_input on:change=on_file_change/>
                    {move || selected_file.get().map(|name| view! { <p class="muted">"Selected: " {name}</p> })}
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_upload>
                        {move || if busy.get() { "Uploading..." } else { "Upload CSV" }}
                    </button>
                </section>
            </Show>
        </div>
    }
}
