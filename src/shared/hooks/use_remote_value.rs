use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::domain::RemoteValue;
use crate::shared::services::ApiService;

/// Load `path` once when the component mounts and keep the field `project`
/// picks out of the payload.
///
/// The signal holds `fallback` until the request succeeds; on failure it
/// keeps the fallback with `loaded == false`. The request is not cancelled on
/// unmount, the late write only touches this component's signal.
pub fn use_remote_value<R, T>(
    path: &'static str,
    fallback: impl FnOnce() -> T,
    project: fn(R) -> T,
) -> Signal<RemoteValue<T>>
where
    R: DeserializeOwned + 'static,
    T: Clone + 'static,
{
    let mut remote = use_signal(|| RemoteValue::fallback(fallback()));

    use_effect(move || {
        // peek: the effect must not subscribe to its own output
        let fallback = remote.peek().value.clone();
        spawn(async move {
            let api = ApiService::new();
            let result = api.fetch_remote(path, fallback, project).await;
            remote.set(result);
        });
    });

    remote
}
