use crate::state::use_shell_ctx;
use leptos::*;
use shell_core::{frame_height_px, is_fullscreen, FrameStatus};

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use shell_core::LOAD_TIMEOUT_MS;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// The embedded-content panel: the notebook iframe while healthy, a
/// spinner overlay until the load signal arrives, and the error panel
/// once the frame fails or times out.
#[component]
pub fn EmbedPanel() -> impl IntoView {
    let ctx = use_shell_ctx();
    let store = ctx.store;
    let viewport_h = ctx.viewport_h;
    let embed_url = ctx.embed_url;

    let status = create_memo(move |_| store.with(|s| s.frame));
    // Split out of `status` so a Loading -> Loaded transition does not
    // re-render the iframe branch (which would restart the load).
    let errored = create_memo(move |_| status.get() == FrameStatus::Errored);
    let loading = create_memo(move |_| status.get() == FrameStatus::Loading);
    let fullscreen = create_memo(move |_| store.with(|s| is_fullscreen(s.scroll_y)));

    let panel_class = create_memo(move |_| {
        if fullscreen.get() {
            "panel frame-card fullscreen"
        } else {
            "panel frame-card"
        }
    });

    let frame_style = create_memo(move |_| {
        let vh = viewport_h.get();
        let h = store.with(|s| frame_height_px(s.scroll_y, vh));
        format!("height: {h}px;")
    });

    // Bounded wait for the load signal. One pending timer at a time:
    // every status change cancels it, and only `Loading` re-arms, so a
    // late successful load can never be clobbered by a stale timer.
    #[cfg(target_arch = "wasm32")]
    {
        let pending = store_value(None::<Timeout>);
        create_effect(move |_| {
            let current = status.get();
            pending.update_value(|slot| {
                if let Some(timer) = slot.take() {
                    timer.cancel();
                }
            });
            if current == FrameStatus::Loading {
                let timer = Timeout::new(LOAD_TIMEOUT_MS, move || {
                    store.update(|s| s.on_load_timeout());
                });
                pending.update_value(|slot| *slot = Some(timer));
            }
        });
        on_cleanup(move || {
            pending.update_value(|slot| {
                if let Some(timer) = slot.take() {
                    timer.cancel();
                }
            });
        });
    }

    view! {
        <div class=move || panel_class.get() style=move || frame_style.get()>
            <div class="frame-surface">
                {move || {
                    if errored.get() {
                        view! { <ErrorPanel/> }.into_view()
                    } else {
                        // Recreated whenever the error branch clears, so a
                        // retry always forces a fresh load attempt.
                        let url = embed_url.get();
                        view! {
                            <iframe
                                src=url
                                class="frame-embed"
                                title="Contenido externo"
                                on:load=move |_| store.update(|s| s.on_frame_load())
                                on:error=move |_| store.update(|s| s.on_frame_error())
                            ></iframe>
                        }
                        .into_view()
                    }
                }}
            </div>
            {move || {
                loading.get().then(|| view! {
                    <div class="frame-spinner">
                        <span class="spinner"></span>
                        <span class="spinner-label">"Cargando..."</span>
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn ErrorPanel() -> impl IntoView {
    let ctx = use_shell_ctx();
    let store = ctx.store;
    let embed_url = ctx.embed_url;

    let open_externally = move |_| {
        #[cfg(target_arch = "wasm32")]
        if let Some(win) = window() {
            let _ = win.open_with_url_and_target(&embed_url.get_untracked(), "_blank");
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &embed_url;
    };

    view! {
        <div class="error-panel">
            <ErrorIcon/>
            <h2 class="error-title">"No se pudo cargar el contenido"</h2>
            <p class="error-text">
                "El contenido externo no se ha cargado correctamente. \
                 Por favor, intente nuevamente más tarde o abra el contenido en una nueva pestaña."
            </p>
            <div class="error-actions">
                <button class="btn primary" on:click=move |_| store.update(|s| s.retry())>
                    "Intentar nuevamente"
                </button>
                <button class="btn secondary" on:click=open_externally>
                    "Abrir en nueva pestaña"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ErrorIcon() -> impl IntoView {
    view! {
        <svg
            class="error-icon"
            fill="currentColor"
            viewBox="0 0 20 20"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                fill-rule="evenodd"
                d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7 4a1 1 0 11-2 0 1 1 0 012 0zm-1-9a1 1 0 00-1 1v4a1 1 0 102 0V6a1 1 0 00-1-1z"
                clip-rule="evenodd"
            />
        </svg>
    }
}
