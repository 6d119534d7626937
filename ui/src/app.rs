use crate::{
    embed::EmbedPanel,
    state::{provide_shell_ctx, use_shell_ctx},
    theme::GLOBAL_CSS,
};
use leptos::*;
use leptos_meta::*;
use shell_core::{container_min_height_px, header_opacity, header_visible, opacity_class, LogoSlot};

#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, MediaQueryListEvent};

const BADGE_SRC: &str = "/acmud.png";
const LOGO_SRCS: [&str; 2] = ["/pygroup.png", "/gidata.png"];
#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn embed_url_default() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        read_global("NOTEBOOK_SHELL_EMBED_URL")
            .unwrap_or_else(|| "https://xmaux-ds-acmud.hf.space".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "https://xmaux-ds-acmud.hf.space".to_string()
    }
}

fn initial_viewport_h() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        800.0
    }
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark_mode() -> bool {
    let Some(win) = window() else {
        return false;
    };
    match win.match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = provide_shell_ctx(embed_url_default(), initial_viewport_h());
    let store = ctx.store;
    let viewport_h = ctx.viewport_h;

    #[cfg(target_arch = "wasm32")]
    {
        // Effective scheme at first paint, before any change event.
        if prefers_dark_mode() {
            store.update(|s| s.set_dark(true));
        }

        // Live color-scheme changes for the lifetime of the view.
        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            let Ok(Some(query)) = win.match_media(DARK_SCHEME_QUERY) else {
                return;
            };
            let cb = Rc::new(Closure::<dyn FnMut(MediaQueryListEvent)>::wrap(Box::new(
                move |ev: MediaQueryListEvent| {
                    store.update(|s| s.set_dark(ev.matches()));
                },
            )));
            let _ = query
                .add_event_listener_with_callback("change", cb.as_ref().as_ref().unchecked_ref());
            on_cleanup({
                let cb = cb.clone();
                move || {
                    let _ = query.remove_event_listener_with_callback(
                        "change",
                        cb.as_ref().as_ref().unchecked_ref(),
                    );
                }
            });
        });

        // Raw vertical offset, via a passive listener so scrolling never
        // blocks on the handler.
        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            let win_reader = win.clone();
            let opts = web_sys::AddEventListenerOptions::new();
            opts.set_passive(true);
            let cb = Rc::new(Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let y = win_reader.scroll_y().unwrap_or(0.0);
                store.update(|s| s.set_scroll(y));
            })));
            let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                cb.as_ref().as_ref().unchecked_ref(),
                &opts,
            );
            on_cleanup({
                let cb = cb.clone();
                move || {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            cb.as_ref().as_ref().unchecked_ref(),
                        );
                    }
                }
            });
        });

        // Viewport height drives both the container's scroll room and
        // the frame height policy.
        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            let win_reader = win.clone();
            let cb = Rc::new(Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(h) = win_reader.inner_height().ok().and_then(|v| v.as_f64()) {
                    viewport_h.set(h);
                }
            })));
            let _ =
                win.add_event_listener_with_callback("resize", cb.as_ref().as_ref().unchecked_ref());
            on_cleanup({
                let cb = cb.clone();
                move || {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            cb.as_ref().as_ref().unchecked_ref(),
                        );
                    }
                }
            });
        });
    }

    let theme_class = create_memo(move |_| {
        store.with(|s| {
            if s.dark_theme {
                "shell-app dark-theme".to_string()
            } else {
                "shell-app".to_string()
            }
        })
    });

    let opacity = create_memo(move |_| store.with(|s| header_opacity(s.scroll_y)));

    let header_class = create_memo(move |_| {
        let op = opacity.get();
        let scrolled = store.with(|s| s.scroll_y > 0.0);
        format!(
            "panel header-card {} {} {}",
            opacity_class(op),
            if header_visible(op) { "expanded" } else { "collapsed" },
            if scrolled { "scale-90" } else { "scale-100" },
        )
    });

    let hint_class = create_memo(move |_| {
        let op = opacity.get();
        format!(
            "scroll-hint {} {}",
            opacity_class(op),
            if header_visible(op) { "expanded" } else { "collapsed" },
        )
    });

    let container_style = create_memo(move |_| {
        format!("min-height: {}px;", container_min_height_px(viewport_h.get()))
    });

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text="Introducción a Ciencia de Datos"/>
        <main class=move || theme_class.get()>
            <div class="shell-container" style=move || container_style.get()>
                <div class="badge-float">
                    <img src=BADGE_SRC alt="ACMUD" class="badge-avatar"/>
                </div>
                <header class=move || header_class.get()>
                    <div class="header-layout">
                        <LogoStack/>
                        <div class="header-copy">
                            <h1 class="header-title">
                                <span class="accent">"Introducción"</span>
                                " a Ciencia de Datos"
                            </h1>
                            <p class="header-text">
                                "Este notebook interactivo te servirá de guía para avanzar en tu aprendizaje en la ciencia de datos."
                            </p>
                        </div>
                    </div>
                </header>
                <div class=move || hint_class.get()>
                    <ChevronDownIcon/>
                    <p>"Haz scroll para expandir"</p>
                </div>
                <EmbedPanel/>
                <div class="scroll-spacer"></div>
            </div>
        </main>
    }
}

/// The two stacked logo cards. The active one sits on top, upright
/// offset; the inactive one recedes behind it.
#[component]
fn LogoStack() -> impl IntoView {
    let ctx = use_shell_ctx();
    let store = ctx.store;
    let active = create_memo(move |_| store.with(|s| s.active_logo));

    let card = move |slot: LogoSlot| {
        let src = LOGO_SRCS[slot.index()];
        let alt = match slot {
            LogoSlot::Primary => "Logo principal",
            LogoSlot::Secondary => "Logo alternativo",
        };
        let style = move || {
            let tilt = match slot {
                LogoSlot::Primary => -5,
                LogoSlot::Secondary => 5,
            };
            let (offset, layer) = if active.get() == slot { (0, 20) } else { (10, 10) };
            format!("transform: rotate({tilt}deg) translateY({offset}px); z-index: {layer};")
        };
        view! {
            <div
                class="logo-card"
                style=style
                on:click=move |_| store.update(|s| s.toggle_logo())
                on:mouseenter=move |_| store.update(|s| s.focus_logo(slot))
                on:touchstart=move |_| store.update(|s| s.focus_logo(slot))
            >
                <div class="logo-frame">
                    <img src=src alt=alt class="logo-img"/>
                </div>
            </div>
        }
    };

    view! {
        <div class="logo-stack">
            {card(LogoSlot::Primary)}
            {card(LogoSlot::Secondary)}
        </div>
    }
}

#[component]
fn ChevronDownIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="chevron-bounce"
        >
            <polyline points="6 9 12 15 18 9"></polyline>
        </svg>
    }
}
