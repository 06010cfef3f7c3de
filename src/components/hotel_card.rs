//! Expandable card for one hotel in the directory listing.

#[cfg(test)]
#[path = "hotel_card_test.rs"]
mod hotel_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Hotel;

/// Contact rows shown when a card is expanded; blank values are skipped.
pub fn contact_rows(hotel: &Hotel) -> Vec<(&'static str, String)> {
    let optional = |value: &Option<String>| value.as_deref().map(str::trim).unwrap_or_default().to_owned();
    [
        ("Contact", hotel.concerning_person_name.trim().to_owned()),
        ("Email", hotel.email1.trim().to_owned()),
        ("Alt. email", optional(&hotel.email2)),
        ("Mobile", hotel.mobile_phone_contact.trim().to_owned()),
        ("Landline", optional(&hotel.landline_contact)),
        ("Address", hotel.address.trim().to_owned()),
        ("Website", optional(&hotel.website)),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect()
}

#[component]
pub fn HotelCard(
    hotel: Hotel,
    /// Shows the delete button and reports the hotel id when pressed.
    #[prop(default = None)]
    on_delete: Option<Callback<String>>,
    /// Gates the delete button; re-evaluated as the session changes.
    #[prop(into, default = Signal::stored(true))]
    can_delete: Signal<bool>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let href = format!("/hotels/{}", hotel.id);
    let location = hotel.location();
    let rows = contact_rows(&hotel);
    let id = hotel.id.clone();

    view! {
        <article class="hotel-card" class:hotel-card--expanded=move || expanded.get()>
            <header class="hotel-card__header" on:click=move |_| expanded.update(|e| *e = !*e)>
                <h3 class="hotel-card__name">{hotel.hotel_name}</h3>
                {hotel.preferred.then(|| view! { <span class="badge badge--preferred">"Preferred"</span> })}
                <span class="hotel-card__location">{location}</span>
            </header>
            <Show when=move || expanded.get()>
                <dl class="hotel-card__details">
                    {rows
                        .clone()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()}
                </dl>
            </Show>
            <footer class="hotel-card__actions">
                <A href=href.clone() attr:class="btn btn--secondary">"Details"</A>
                {on_delete.map(|on_delete| {
                    let id = StoredValue::new(id.clone());
                    move || {
                        can_delete.get().then(|| view! {
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.get_value())>
                                "Delete"
                            </button>
                        })
                    }
                })}
            </footer>
        </article>
    }
}
