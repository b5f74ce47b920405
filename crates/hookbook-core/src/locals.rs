//! # Theming and locals
//!
//! Hookbook uses thread‑local “composition locals” for page-wide UI
//! parameters. Only `Theme` lives here today. Override it for a subtree with
//! `with_theme`:
//!
//! ```rust
//! use hookbook_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::WHITE);
//! });
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        match st.last_mut() {
            Some(top) => {
                top.insert(t, v);
            }
            None => {
                // no frame: create a temporary one
                let mut m = HashMap::new();
                m.insert(t, v);
                st.push(m);
            }
        }
    });
}

fn local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Page color theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Panel surface.
    pub surface: Color,
    /// Primary foreground color on top of `surface`/`background`.
    pub on_surface: Color,
    /// Low-emphasis text (hints, line numbers).
    pub muted: Color,

    /// Accent for buttons and headings.
    pub primary: Color,

    pub outline: Color,
    /// Focus marker.
    pub focus: Color,

    /// Code block background.
    pub code_background: Color,

    /// Inline error text.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            muted: Color::from_hex("#888888"),
            primary: Color::from_hex("#34AF82"),
            outline: Color::from_hex("#555555"),
            focus: Color::from_hex("#88CCFF"),
            code_background: Color::from_hex("#1E1E1E"),
            error: Color::from_hex("#ae3636"),
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn theme() -> Theme {
    local::<Theme>()
}
