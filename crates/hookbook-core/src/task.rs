use std::future::Future;

use futures::future::{Aborted, abortable};
use futures::task::LocalSpawnExt;

use crate::{Error, Runtime, Scope, current_scope};

/// Spawn a future on the current runtime's local executor. It is polled when
/// the scheduler pumps tasks.
pub fn spawn_local(fut: impl Future<Output = ()> + 'static) -> Result<(), Error> {
    let rt = Runtime::current().ok_or(Error::NoRuntime("spawn_local"))?;
    rt.spawner.spawn_local(fut)?;
    Ok(())
}

/// Spawn `fut` tied to the current scope: it is aborted when the scope is
/// disposed, and `on_done` only runs while the scope is still alive.
pub fn spawn_scoped<T: 'static>(
    fut: impl Future<Output = T> + 'static,
    on_done: impl FnOnce(T) + 'static,
) -> Result<(), Error> {
    let (fut, handle) = abortable(fut);
    let scope = current_scope();
    let abort = scope.as_ref().map(|s| s.add_disposer(move || handle.abort()));
    let owner = scope.as_ref().map(Scope::liveness).zip(abort);

    let spawned = spawn_local(async move {
        match fut.await {
            Ok(out) => {
                let Some((liveness, abort)) = owner else {
                    on_done(out);
                    return;
                };
                match liveness.scope().filter(|s| !s.is_disposed()) {
                    Some(scope) => {
                        // Finished: nothing left to abort.
                        scope.remove_disposer(abort);
                        on_done(out);
                    }
                    None => log::debug!("dropping task result: owner is gone"),
                }
            }
            Err(Aborted) => log::trace!("task aborted"),
        }
    });
    if spawned.is_err()
        && let (Some(scope), Some(abort)) = (&scope, abort)
    {
        scope.remove_disposer(abort);
    }
    spawned
}
