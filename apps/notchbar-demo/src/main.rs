use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use notchbar_ui::{
    default_items, BarFrame, BarStyle, Density, FancyBottomBar, FrameClock, Point,
};
use web_time::Instant;

const BAR_WIDTH: f32 = 400.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Gives up on a transition that has not settled after this long.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Tap positions along the bar, in order.
const TAPS: &[f32] = &[250.0, 390.0, 120.0, 5.0, 260.0];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let clock = FrameClock::new();
    let mut bar = FancyBottomBar::new(default_items(), BarStyle::default(), Density::default(), &clock)
        .context("building bottom bar")?;
    bar.set_on_selection_changed(|index| log::info!("selection changed to item {index}"));
    bar.measure(BAR_WIDTH).context("measuring bottom bar")?;

    let started = Instant::now();
    log_frame(&bar.render());

    let tap_y = bar.metrics().height - bar.metrics().row_height() / 2.0;
    for &x in TAPS {
        match bar.on_tap(Point::new(x, tap_y)) {
            Some(index) => log::info!("tap at x={x} hit item {index}"),
            None => log::info!("tap at x={x} missed"),
        }
        run_until_settled(&bar, &clock, started)?;
        log_frame(&bar.render());
    }

    log::info!(
        "finished on item {} with notch at {:.1}",
        bar.selected_index(),
        bar.notch_position()
    );
    Ok(())
}

fn run_until_settled(bar: &FancyBottomBar, clock: &FrameClock, started: Instant) -> Result<()> {
    let deadline = Instant::now() + SETTLE_TIMEOUT;
    while clock.has_pending_callbacks() {
        if Instant::now() > deadline {
            bail!("bar still animating after {SETTLE_TIMEOUT:?}");
        }
        let frame_time = started.elapsed().as_nanos() as u64;
        clock.drain_frame_callbacks(frame_time);
        log::debug!(
            "frame at {}ms: notch {:.1}",
            frame_time / 1_000_000,
            bar.notch_position()
        );
        thread::sleep(FRAME_INTERVAL);
    }
    Ok(())
}

fn log_frame(frame: &BarFrame) {
    let labels: Vec<&str> = frame.visible_labels().map(|label| label.text.as_str()).collect();
    log::info!(
        "{}x{} bar, notch at {:.1}, {} primitives, labels {:?}",
        frame.size.width,
        frame.size.height,
        frame.notch_center,
        frame.primitives.len(),
        labels
    );
}
