#![no_std]
#![no_main]

use cortex_m_rt::entry;
use debounce_toggle::{
    ButtonConfig, ButtonRegistry, DebouncedButton, Level, Millis, MillisDuration, PinId,
    ToggleTimer,
};
use panic_halt as _;

// ============================================================================
// Buttons
// ============================================================================

static SELECT: DebouncedButton<Millis> = DebouncedButton::with_config(
    ButtonConfig::new(MillisDuration::from_ms(50), MillisDuration::from_ms(1000), Level::Low),
    Millis::ZERO,
);

static BACK: DebouncedButton<Millis> = DebouncedButton::with_config(
    ButtonConfig::new(MillisDuration::from_ms(20), MillisDuration::from_ms(2000), Level::Low),
    Millis::ZERO,
);

// ============================================================================
// Library Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_buttons(now: Millis) {
    let mut registry = ButtonRegistry::<Millis, 2>::new();
    let _ = registry.bind(PinId(0), &SELECT);
    let _ = registry.bind(PinId(1), &BACK);

    let level = core::hint::black_box(Level::Low);
    let _ = registry.dispatch(PinId(0), level, now);
    let _ = registry.dispatch(PinId(1), level.inverted(), now);

    core::hint::black_box(SELECT.is_pressed());
    core::hint::black_box(SELECT.was_pressed());
    core::hint::black_box(BACK.was_long_pressed());
    registry.reset_all();
}

#[inline(never)]
fn exercise_timer(timer: &mut ToggleTimer<Millis>, now: Millis) -> bool {
    if !timer.has_started() {
        timer.start(now);
    }
    timer.update(now);
    timer.has_state_changed()
}

#[entry]
fn main() -> ! {
    let mut blink = ToggleTimer::new(MillisDuration::from_ms(250));
    let mut ticks: u32 = 0;

    loop {
        ticks = ticks.wrapping_add(1);
        let now = Millis(core::hint::black_box(ticks));

        exercise_buttons(now);
        if exercise_timer(&mut blink, now) {
            core::hint::black_box(blink.is_on());
        }
    }
}
