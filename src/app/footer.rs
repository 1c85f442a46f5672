use leptos::prelude::*;
use leptos_router::components::*;

use super::use_locale;
use crate::{
    config::build_year,
    content::{GITHUB_URL, LINKEDIN_URL, OWNER, OWNER_EMAIL},
    i18n::Localized,
};

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let year = build_year();

    view! {
        <footer class="w-full border-t border-muted/30">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-8 flex flex-col md:flex-row gap-6 items-center justify-between">
                <div class="flex flex-col items-center md:items-start gap-1">
                    <span class="text-2xl font-bold text-primary">"EB"</span>
                    <span class="text-sm text-muted">
                        {move || locale.text(Localized::new("Web Developer", "Webentwickler"))}
                    </span>
                </div>
                <span class="text-sm">{format!("© {OWNER} {year}")}</span>
                <div class="flex items-center gap-6 text-sm">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                        "LinkedIn"
                    </a>
                    <a href=format!("mailto:{OWNER_EMAIL}")>"Email"</a>
                    <A href="/legal-notice" attr:class="hover:text-primary">
                        {move || locale.text(Localized::new("Legal Notice", "Impressum"))}
                    </A>
                    <A href="/privacy-policy" attr:class="hover:text-primary">
                        {move || locale.text(Localized::new("Privacy Policy", "Datenschutz"))}
                    </A>
                </div>
            </div>
        </footer>
    }
}
