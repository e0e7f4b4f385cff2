//! Sidebar chrome shared by the coordinator, manager, admin, and team
//! panels.

use leptos::prelude::*;

use crate::components::header::LogoutButton;

/// Sidebar plus content column for a role-scoped panel.
#[component]
pub fn PanelLayout(
    title: &'static str,
    subtitle: &'static str,
    /// `(href, label)` pairs for the sidebar navigation.
    nav: Vec<(&'static str, &'static str)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="panel">
            <aside class="panel__sidebar">
                <div class="panel__brand">
                    <a href="/">"FloodCoord"</a>
                    <p class="panel__subtitle">{subtitle}</p>
                </div>
                <nav class="panel__nav">
                    {nav
                        .into_iter()
                        .map(|(href, label)| {
                            view! { <a class="panel__link" href=href>{label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="panel__footer">
                    <LogoutButton/>
                </div>
            </aside>
            <main class="panel__main">
                <h1 class="panel__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
