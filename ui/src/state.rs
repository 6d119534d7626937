use leptos::*;
use shell_core::ShellState;

/// Shared handles for the shell: the state record, the embed target and
/// the live viewport height. Provided once at the root, consumed
/// anywhere below it.
#[derive(Clone)]
pub struct ShellCtx {
    pub store: RwSignal<ShellState>,
    pub embed_url: RwSignal<String>,
    pub viewport_h: RwSignal<f64>,
}

pub fn provide_shell_ctx(embed_url: String, viewport_h: f64) -> ShellCtx {
    let ctx = ShellCtx {
        store: create_rw_signal(ShellState::default()),
        embed_url: create_rw_signal(embed_url),
        viewport_h: create_rw_signal(viewport_h),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_shell_ctx() -> ShellCtx {
    use_context::<ShellCtx>().expect("ShellCtx not provided")
}
