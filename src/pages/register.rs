//! Travel-agency registration form.
//!
//! New accounts start unapproved; an admin approves them from the approvals
//! page before they can sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::error::ApiError;
use crate::net::types::Registration;

pub const REGISTERED: &str =
    "Registration successful! Your account is pending admin approval. You will be able to login once approved.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    CompanyName,
    Address,
    City,
    State,
    ContactNumber,
    MobileNumber,
    Email,
    Website,
    UserName,
    Password,
    ConcerningPersonName,
}

impl Field {
    /// Display order of the form.
    pub const ALL: [Self; 11] = [
        Self::CompanyName,
        Self::Address,
        Self::City,
        Self::State,
        Self::ContactNumber,
        Self::MobileNumber,
        Self::Email,
        Self::Website,
        Self::UserName,
        Self::Password,
        Self::ConcerningPersonName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company name",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::ContactNumber => "Contact number",
            Self::MobileNumber => "Mobile number",
            Self::Email => "Email",
            Self::Website => "Website",
            Self::UserName => "Username",
            Self::Password => "Password",
            Self::ConcerningPersonName => "Concerning person name",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            _ => "text",
        }
    }

    pub fn required(self) -> bool {
        self != Self::Website
    }

    pub fn value(self, form: &Registration) -> &str {
        match self {
            Self::CompanyName => &form.company_name,
            Self::Address => &form.address,
            Self::City => &form.city,
            Self::State => &form.state,
            Self::ContactNumber => &form.contact_number,
            Self::MobileNumber => &form.mobile_number,
            Self::Email => &form.email,
            Self::Website => &form.website,
            Self::UserName => &form.user_name,
            Self::Password => &form.password,
            Self::ConcerningPersonName => &form.concerning_person_name,
        }
    }

    pub fn value_mut(self, form: &mut Registration) -> &mut String {
        match self {
            Self::CompanyName => &mut form.company_name,
            Self::Address => &mut form.address,
            Self::City => &mut form.city,
            Self::State => &mut form.state,
            Self::ContactNumber => &mut form.contact_number,
            Self::MobileNumber => &mut form.mobile_number,
            Self::Email => &mut form.email,
            Self::Website => &mut form.website,
            Self::UserName => &mut form.user_name,
            Self::Password => &mut form.password,
            Self::ConcerningPersonName => &mut form.concerning_person_name,
        }
    }
}

/// Trim every field except the password and check the required ones.
///
/// # Errors
///
/// Returns a message naming the first blank required field.
pub fn validate_registration(form: &Registration) -> Result<Registration, String> {
    let mut clean = form.clone();
    for field in Field::ALL {
        if field != Field::Password {
            let trimmed = field.value(&clean).trim().to_owned();
            *field.value_mut(&mut clean) = trimmed;
        }
        if field.required() && field.value(&clean).trim().is_empty() {
            return Err(format!("{} is required", field.label()));
        }
    }
    Ok(clean)
}

pub fn registration_error_message(err: &ApiError) -> String {
    err.server_message().map_or_else(|| REGISTRATION_FAILED.to_owned(), str::to_owned)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(Registration::default());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let api = crate::net::api::use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let registration = match validate_registration(&form.get()) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.register(&registration).await {
                    Ok(()) => {
                        log::info!("register: submitted {}", registration.user_name);
                        success.set(REGISTERED.to_owned());
                        form.set(Registration::default());
                    }
                    Err(e) => {
                        log::error!("register: failed: {e}");
                        error.set(registration_error_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Register"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-message form-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="form-message form-message--success">{move || success.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {Field::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <label class="field">
                                    <span>{field.label()} {(!field.required()).then_some(" (optional)")}</span>
                                    <input
                                        type=field.input_type()
                                        required=field.required()
                                        prop:value=move || form.with(|f| field.value(f).to_owned())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| *field.value_mut(f) = value);
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already approved? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
