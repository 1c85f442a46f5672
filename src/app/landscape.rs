use leptos::prelude::*;
use leptos_meta::Title;

use super::use_locale;
use crate::i18n::Localized;

const ROTATE_HINT: Localized = Localized::new(
    "Please rotate your device to portrait mode.",
    "Bitte drehen Sie Ihr Gerät in den Hochformat-Modus.",
);

#[component]
fn RotateHint() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="flex flex-col items-center gap-6 text-center px-8">
            <span class="text-6xl" aria-hidden="true">
                "⟳"
            </span>
            <p class="text-xl font-bold">{move || locale.text(ROTATE_HINT)}</p>
        </div>
    }
}

/// Overlay shown by the stylesheet only on small landscape screens.
#[component]
pub fn LandscapeBlocker() -> impl IntoView {
    view! {
        <div class="landscape-blocker">
            <RotateHint />
        </div>
    }
}

#[component]
pub fn LandscapePage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <Title text=move || locale.text(Localized::new("Rotate device", "Gerät drehen")) />
        <div class="min-h-screen flex items-center justify-center">
            <RotateHint />
        </div>
    }
}
