use leptos::{
    ev::{MouseEvent, TransitionEvent},
    html,
    prelude::*,
};

use crate::marquee::{ends_return, Marquee, RESTART_DELAY, RETURN_FALLBACK};

fn computed_transform(el: &web_sys::Element) -> Option<String> {
    window()
        .get_computed_style(el)
        .ok()
        .flatten()?
        .get_property_value("transform")
        .ok()
}

/// A link whose label scrolls sideways while hovered.
#[component]
pub fn MarqueeButton(
    href: &'static str,
    label: Signal<&'static str>,
    #[prop(optional)] new_tab: bool,
    #[prop(optional)] extra_class: &'static str,
) -> impl IntoView {
    let marquee = RwSignal::new(Marquee::default());
    let style = Memo::new(move |_| marquee.with(Marquee::style));
    let wrap_ref = NodeRef::<html::Span>::new();
    let fallback = StoredValue::new(None::<TimeoutHandle>);

    let clear_fallback = move || {
        if let Some(handle) = fallback.get_value() {
            handle.clear();
        }
        fallback.set_value(None);
    };

    let settle = move || {
        clear_fallback();
        if marquee.try_update(Marquee::settle).unwrap_or(false) {
            set_timeout(move || marquee.update(Marquee::restart), RESTART_DELAY);
        }
    };

    let on_enter = move |_: MouseEvent| {
        // a new hover cycle, not a re-entry during the return
        if !marquee.with_untracked(Marquee::is_settling) {
            clear_fallback();
        }
        marquee.update(Marquee::enter);
    };

    let on_leave = move |_: MouseEvent| {
        let current = wrap_ref
            .get_untracked()
            .and_then(|el| computed_transform(&el));
        marquee.update(|m| m.leave(current));
        if !marquee.with_untracked(Marquee::is_settling) {
            return;
        }
        // two frames so the frozen transform is painted before easing back
        request_animation_frame(move || {
            request_animation_frame(move || marquee.update(Marquee::release));
        });
        clear_fallback();
        match set_timeout_with_handle(settle, RETURN_FALLBACK) {
            Ok(handle) => fallback.set_value(Some(handle)),
            Err(err) => log::warn!("could not schedule marquee fallback: {err:?}"),
        }
    };

    let on_transition_end = move |ev: TransitionEvent| {
        if ends_return(&ev.property_name()) && marquee.with_untracked(Marquee::is_settling) {
            settle();
        }
    };

    let text_style = move || {
        if style.get().hold_text_color {
            "color: var(--white); transition: color 0.1s ease-out;"
        } else {
            ""
        }
    };

    view! {
        <a
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            class=move || {
                let active = if style.get().active { " marquee-active" } else { "" };
                format!("marquee-button {extra_class}{active}")
            }
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <span
                class="label"
                style=move || {
                    if style.get().label_hidden {
                        "opacity: 0; transition: opacity 120ms linear;"
                    } else {
                        ""
                    }
                }
            >
                {label}
            </span>
            <span class="marquee-track" aria-hidden="true">
                <span
                    node_ref=wrap_ref
                    class="text-wrap"
                    style=move || style.get().wrap
                    on:transitionend=on_transition_end
                >
                    <span class="text" style=text_style>{label}</span>
                    <span class="text" style=text_style>{label}</span>
                </span>
            </span>
        </a>
    }
}
