use leptos::prelude::*;

use super::use_locale;
use crate::{content::SKILLS, i18n::Localized};

#[component]
pub fn SkillSet() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="skills" class="max-w-5xl mx-auto px-4 py-16 section-content">
            <h2 class="text-4xl font-bold mb-8">
                {move || locale.text(Localized::new("Skill set", "Fähigkeiten"))}
            </h2>
            <div class="grid grid-cols-3 md:grid-cols-5 gap-8">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="flex flex-col items-center gap-2">
                                <img src=skill.icon alt=skill.name class="h-14 w-14" />
                                <span class="text-sm">{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="mt-10 text-muted">
                {move || {
                    locale
                        .text(
                            Localized::new(
                                "Looking for another skill? Feel free to contact me, I'm always learning.",
                                "Sie suchen eine andere Fähigkeit? Kontaktieren Sie mich gerne, ich lerne ständig dazu.",
                            ),
                        )
                }}
            </p>
        </section>
    }
}
