//! Bridges `ViewModel` into Leptos signals.

use leptos::*;
use octofit::views::{Resource, ViewModel};
use octofit::ApiResult;
use std::future::Future;

/// View model owned by the current component; unmounts on cleanup
pub fn use_view_model<T: Resource + 'static>() -> RwSignal<ViewModel<T>> {
    let model = create_rw_signal(ViewModel::new());
    on_cleanup(move || {
        model.try_update(|m| m.unmount());
    });
    model
}

/// Enter `Loading` and resolve with the result of `fetch`.
///
/// First call mounts the view; later calls refresh it.
pub fn spawn_load<T, F>(model: RwSignal<ViewModel<T>>, fetch: F)
where
    T: Resource + 'static,
    F: Future<Output = ApiResult<T>> + 'static,
{
    let Some(ticket) = model.try_update(|m| if m.is_mounted() { m.refresh() } else { m.mount() })
    else {
        return;
    };

    spawn_local(async move {
        let result = fetch.await;
        model.try_update(|m| m.resolve(ticket, result));
    });
}
