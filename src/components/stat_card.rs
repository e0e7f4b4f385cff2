//! Small metric tile for dashboards.

use leptos::prelude::*;

/// A single headline number with its label.
#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<usize>,
    /// Accent modifier appended as `stat-card--<accent>`.
    #[prop(into, optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let class = accent.map_or_else(|| "stat-card".to_owned(), |a| format!("stat-card stat-card--{a}"));

    view! {
        <div class=class>
            <p class="stat-card__value">{move || value.get()}</p>
            <p class="stat-card__label">{label}</p>
        </div>
    }
}
