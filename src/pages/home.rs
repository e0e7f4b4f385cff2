//! Public landing page.

use leptos::prelude::*;

use crate::components::header::Header;

/// Landing page with the two citizen entry points.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="home">
                <section class="home__hero">
                    <h1>"Flood Rescue Coordination"</h1>
                    <p>
                        "Report people in danger, track an ongoing rescue, or sign in to "
                        "coordinate teams, vehicles, and supplies."
                    </p>
                </section>
                <section class="home__cards">
                    <a class="home-card home-card--urgent" href="/request">
                        <h2>"Request Rescue"</h2>
                        <p>"Send a rescue request with location and contact details. No account needed."</p>
                    </a>
                    <a class="home-card" href="/track">
                        <h2>"Track a Request"</h2>
                        <p>"Follow your request with the tracking code from your submission."</p>
                    </a>
                </section>
            </main>
        </div>
    }
}
