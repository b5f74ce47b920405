use hookbook_core::*;
use hookbook_ui::*;
use serde_json::Value;

use crate::ui::{ErrorLine, Section};

/// Loads the name list once on mount; each button loads one record.
pub fn EffectFetch() -> View {
    let names = remember(|| signal(Vec::<String>::new()));
    let selected = remember(|| signal(None::<Value>));
    let error = remember(|| signal(None::<String>));

    // Loading straight from the body never settles. The read finishes, the
    // write to `names` asks for a frame, that frame reads again, and so on:
    //
    // load("/names.json", &error, move |list: Vec<String>| names.set(list));
    //
    // A mount effect runs once, after the view tree exists.
    mount_effect({
        let names = names.as_ref().clone();
        let error = error.as_ref().clone();
        move || {
            load("/names.json", &error, move |list: Vec<String>| names.set(list));
            Dispose::noop()
        }
    });

    // This also works, but it is the wrong tool. Clicks would only store a
    // name, and an effect keyed on it would do the read:
    //
    // disposable_effect(picked.get(), move || {
    //     if let Some(name) = picked.get() {
    //         load(&format!("/{name}.json"), &error, move |r: Value| selected.set(Some(r)));
    //     }
    //     Dispose::noop()
    // });
    //
    // Reacting to the user belongs in the handler. Keep effects for work that
    // follows the tree itself, and beware of effects that write what they read.
    let pick = |name: &str| {
        let path = format!("/{name}.json");
        let selected = selected.as_ref().clone();
        let error = error.as_ref().clone();
        move || {
            let selected = selected.clone();
            load(&path, &error, move |record: Value| selected.set(Some(record)));
        }
    };

    let buttons: Vec<View> = names.with(|names| {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Button(name.clone(), pick(name)).modifier(
                    Modifier::new()
                        .key(i as u64)
                        .test_tag(format!("fetch.pick.{name}")),
                )
            })
            .collect()
    });

    let record = selected.with(|s| match s {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    });

    Section(
        "mount_effect: fetch on mount",
        Column(Modifier::new()).child((
            Text(names.with(|n| n.join(", "))).modifier(Modifier::new().test_tag("fetch.names")),
            Row(Modifier::new().test_tag("fetch.buttons")).child(buttons),
            Text(format!("selectedName: {record}"))
                .modifier(Modifier::new().test_tag("fetch.selected")),
            error
                .get()
                .map(|e| ErrorLine(e).modifier(Modifier::new().test_tag("fetch.error"))),
        )),
    )
}

/// Read and decode `path`. On failure the state is left alone and the error
/// is shown in the panel.
fn load<T: serde::de::DeserializeOwned + 'static>(
    path: &str,
    error: &Signal<Option<String>>,
    on_ok: impl FnOnce(T) + 'static,
) {
    let failed = error.clone();
    let spawned = spawn_scoped(fetch_json::<T>(path), move |result| match result {
        Ok(value) => {
            failed.set(None);
            on_ok(value);
        }
        Err(e) => {
            log::warn!("{e}");
            failed.set(Some(e.to_string()));
        }
    });
    if let Err(e) = spawned {
        error.set(Some(e.to_string()));
    }
}
