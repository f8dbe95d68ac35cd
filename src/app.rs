//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, hotel_admin::HotelAdminPage, login::LoginPage,
};
use crate::state::prices::PriceCache;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session service and shared state contexts, restores the
/// persisted session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let ui = RwSignal::new(UiState { dark_mode: util::dark_mode::read_preference(), ..UiState::default() });
    let prices = RwSignal::new(PriceCache::default());

    provide_context(session);
    provide_context(ui);
    provide_context(prices);

    session.bootstrap();

    // Theme changes flow through state; the DOM class follows.
    Effect::new(move || {
        util::dark_mode::apply(ui.with(|u| u.dark_mode));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/stayhub.css"/>
        <Title text="StayHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("hotel-admin") view=HotelAdminPage/>
            </Routes>
        </Router>
    }
}
