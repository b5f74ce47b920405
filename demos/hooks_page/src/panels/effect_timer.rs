use std::time::Duration;

use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

pub const TICK: Duration = Duration::from_secs(1);

/// Counts seconds since mount. The timer is cancelled when the panel goes away.
pub fn EffectTimer() -> View {
    let ticks = remember(|| signal(0u64));

    // Started from the body, every frame adds one more timer, and each tick
    // asks for another frame:
    //
    // interval(TICK, move || ticks.update(|t| *t += 1));

    mount_effect({
        let ticks = ticks.as_ref().clone();
        // `let now = ticks.get();` here would pin every tick to 0.
        // update() reads the value at tick time, not the one captured here.
        move || interval(TICK, move || ticks.update(|t| *t += 1))
        // The returned guard is the cleanup: it cancels the timer on unmount.
        // Keying the effect on `ticks.get()` instead of `()` would tear the
        // timer down and start a new one on every tick.
    });

    Section(
        "mount_effect: interval",
        Text(format!("Time: {}", ticks.get())).modifier(Modifier::new().test_tag("timer.ticks")),
    )
}
