mod alert;
mod contact;
mod header;
mod homepage;
mod projects;

pub use alert::{use_alert_context, AlertContext};
pub use projects::Card;

use alert::Alert;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{build_date, OWNER};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    AlertContext::provide();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <Alert />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let (year, built) = match build_date() {
        Some(d) => (d.format("%Y").to_string(), d.format("%b %e %Y").to_string()),
        None => (String::new(), String::new()),
    };
    view! {
        <footer class="bg-[#18181b] text-white">
            <div class="flex flex-col sm:flex-row justify-between items-center max-w-7xl mx-auto px-12 py-4 text-sm">
                <p>{format!("{OWNER} • © {year}")}</p>
                <p class="text-muted">"Last built " {built}</p>
            </div>
        </footer>
    }
}
