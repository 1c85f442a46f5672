use leptos::prelude::*;

use super::{use_locale, use_viewport};
use crate::{
    carousel::{Carousel, Direction, Metrics, WINDOW_RADIUS},
    content::TESTIMONIALS,
    i18n::Localized,
};

#[component]
pub fn Social() -> impl IntoView {
    let locale = use_locale();
    let viewport = use_viewport();
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let metrics = Memo::new(move |_| Metrics::for_viewport(viewport.width.get()));

    let go = move |direction: Direction| {
        let m = metrics.get_untracked();
        let Some(Some(duration)) = carousel.try_update(|c| c.begin(direction, &m)) else {
            return;
        };
        set_timeout(
            move || {
                if let Some(delay) = carousel.try_update(Carousel::settle) {
                    set_timeout(move || carousel.update(Carousel::release), delay);
                }
            },
            duration,
        );
    };

    let track_style = move || {
        let m = metrics.get();
        carousel.with(|c| {
            // centre the middle card of the rendered window
            let base = -(WINDOW_RADIUS as f64 * m.step() + m.item_width / 2.0);
            let transition = if c.transition_enabled() {
                format!("transform {}ms ease-in-out", m.duration.as_millis())
            } else {
                "none".to_string()
            };
            format!(
                "gap: {}px; transform: translateX({}px); transition: {transition};",
                m.gap,
                base + c.offset()
            )
        })
    };

    view! {
        <section id="social" class="py-16 overflow-hidden section-content">
            <h2 class="text-4xl font-bold text-center mb-12">
                {move || locale.text(Localized::new("What my colleagues say about me", "Was meine Kollegen über mich sagen"))}
            </h2>
            <div class="relative h-[320px]">
                <div class="absolute left-1/2 flex" style=track_style>
                    {move || {
                        let lang = locale.get();
                        let width = metrics.get().item_width;
                        carousel
                            .with(|c| c.visible())
                            .into_iter()
                            .enumerate()
                            .map(|(slot, idx)| {
                                let t = &TESTIMONIALS[idx];
                                let class = if slot == WINDOW_RADIUS {
                                    "comment comment-active"
                                } else {
                                    "comment"
                                };
                                view! {
                                    <article class=class style=format!("width: {width}px; flex-shrink: 0;")>
                                        <p class="leading-relaxed">{t.text.get(lang)}</p>
                                        <span class="block mt-4 text-primary">{t.author.get(lang)}</span>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            <div class="flex justify-center items-center gap-6 mt-8">
                <button
                    class="carousel-arrow"
                    aria-label="Previous"
                    on:click=move |_| go(Direction::Prev)
                >
                    "←"
                </button>
                {(0..TESTIMONIALS.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if carousel.with(|c| c.active()) == i {
                                        "carousel-dot carousel-dot-active"
                                    } else {
                                        "carousel-dot"
                                    }
                                }
                                aria-label=format!("Testimonial {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.select(i))
                            ></button>
                        }
                    })
                    .collect_view()}
                <button
                    class="carousel-arrow"
                    aria-label="Next"
                    on:click=move |_| go(Direction::Next)
                >
                    "→"
                </button>
            </div>
        </section>
    }
}
