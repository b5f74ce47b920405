//! # State, Effects, Memo and Reducers
//!
//! Hookbook keeps UI state in a small reactive core instead of a widget tree
//! with mutable fields. The pieces:
//!
//! - `Signal<T>`: observable value; every write asks the runtime for a frame.
//! - `remember*`: composition-bound storage (order-based or keyed).
//! - `mount_effect` / `disposable_effect`: post-mount side effects with cleanup.
//! - `remember_memo` / `remember_callback`: single-slot caches keyed on deps.
//! - `remember_reducer`: compound state driven by a pure `StateHolder`.
//! - `Ref<T>` / `NodeRef`: mutable cells that never trigger a frame.
//!
//! ## Signals
//!
//! ```rust
//! use hookbook_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! ```rust,ignore
//! fn Counter() -> View {
//!     let count = remember(|| signal(0));
//!     hookbook_ui::Button(format!("Count = {}", count.get()), {
//!         let count = count.clone();
//!         move || count.update(|c| *c += 1)
//!     })
//! }
//! ```
//!
//! - `remember` is order-based: the Nth call in a slot group always refers to
//!   the Nth stored value. Wrap independent subtrees in `slot_group` so they
//!   keep their own slots.
//! - `remember_with_key` is key-based and stable across conditional branches.
//!
//! ## Effects and cleanup
//!
//! ```rust,ignore
//! fn Clock() -> View {
//!     let ticks = remember(|| signal(0u64));
//!     mount_effect({
//!         let ticks = ticks.as_ref().clone();
//!         move || interval(Duration::from_secs(1), move || ticks.update(|t| *t += 1))
//!     });
//!     hookbook_ui::Text(format!("{}", ticks.get()))
//! }
//! ```
//!
//! Effects run after the frame's view tree exists, so element handles are
//! bound by then. The returned `Dispose` runs when the key changes or when the
//! scheduler unmounts the tree.

pub mod assets;
pub mod color;
pub mod effects;
pub mod effects_ext;
pub mod error;
pub mod locals;
pub mod memo;
pub mod modifier;
pub mod prelude;
pub mod refs;
pub mod render_api;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod task;
pub mod tests;
pub mod timer;
pub mod view;

pub use assets::*;
pub use color::*;
pub use effects::*;
pub use effects_ext::*;
pub use error::*;
pub use locals::*;
pub use memo::*;
pub use modifier::*;
pub use refs::*;
pub use render_api::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use task::*;
pub use timer::*;
pub use view::*;
