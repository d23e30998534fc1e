use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NotificationContainer;
use crate::contexts::api::ApiProvider;
use crate::contexts::notifications::NotificationProvider;
use crate::pages::RoomSearchPage;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;

/// Resolve the backend base URL: build-time environment first, with a
/// same-origin fallback.
fn backend_url() -> String {
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        })
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ApiProvider base_url={backend_url()}>
                <NotificationProvider>
                    <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                        <Switch<Route> render={switch} />
                        <NotificationContainer />
                    </div>
                </NotificationProvider>
            </ApiProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <RoomSearchPage />
            </main>
        },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
                    <p class="text-neutral-600 dark:text-neutral-300">{"Page not found"}</p>
                </div>
            </main>
        },
    }
}
