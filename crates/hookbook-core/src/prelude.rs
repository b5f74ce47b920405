pub use crate::assets::{AssetLoader, StaticAssets, asset_loader, fetch_json};
pub use crate::color::Color;
pub use crate::effects::{Dispose, on_unmount};
pub use crate::effects_ext::{disposable_effect, mount_effect};
pub use crate::error::{Error, FetchError};
pub use crate::locals::{Theme, theme, with_theme};
pub use crate::memo::{ByRef, MemoCell, remember_callback, remember_memo};
pub use crate::modifier::Modifier;
pub use crate::refs::{NodeRef, Ref, remember_node_ref, remember_ref};
pub use crate::render_api::RenderBackend;
pub use crate::runtime::{
    Frame, HitRegion, Scheduler, remember, remember_with_key, slot_group,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::state::{Dispatch, StateHolder, remember_reducer};
pub use crate::task::{spawn_local, spawn_scoped};
pub use crate::timer::{Clock, ManualClock, SystemClock, interval};
pub use crate::view::{
    FontStyle, ImageHandle, Scene, SceneLine, StyledRun, View, ViewId, ViewKind,
};
