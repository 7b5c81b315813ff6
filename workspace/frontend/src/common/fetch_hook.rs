use std::future::Future;

use crm_common::{FetchState, MountGuard};
use yew::prelude::*;

use crate::common::toast::ToastContext;

/// Run `load` once when the calling component mounts.
///
/// `load` receives the toast context so it can report failures itself, and
/// must resolve to a finished state. A result that arrives after the
/// component unmounted is dropped.
#[hook]
pub fn use_fetch_once<T, F, Fut>(load: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: FnOnce(Option<ToastContext>) -> Fut + 'static,
    Fut: Future<Output = FetchState<T>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            let guard = MountGuard::new();

            {
                let guard = guard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let state = load(toast_ctx).await;
                    guard.set_if_mounted(state, |state| fetch_state.set(state));
                });
            }

            move || guard.unmount()
        });
    }

    fetch_state
}
