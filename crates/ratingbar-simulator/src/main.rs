//! Desktop simulator for the ratingbar widget.
//!
//! Renders a [`RatingBar`] in an SDL2 window via `embedded-graphics-simulator`
//! and logs every committed rating.
//!
//! # Key bindings
//!
//! | Key        | Action                          |
//! |------------|---------------------------------|
//! | Up / Down  | Add / remove a star             |
//! | Left/Right | Shrink / grow the gap           |
//! | 0-9        | Set the rating directly         |
//! | H          | Toggle heart / built-in icons   |
//! | T          | Toggle dark / light theme       |
//! | Q          | Quit                            |
//!
//! Mouse press, drag and release are forwarded as touch events.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use ratingbar::framebuffer::FrameBuffer;
use ratingbar::ui::{
    Action, Drawable, MaskImage, MeasureSpec, Measurable, Padding, StarImage, Theme, TouchEvent,
    TouchPoint, TouchResult, Touchable,
};
use ratingbar::{RatingBar, RatingBarConfig, ResourceId, StaticResources};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Resource id the heart icon is registered under.
const HEART: ResourceId = ResourceId(1);

/// 16x16 heart, 1 bit per pixel.
static HEART_MASK: [u8; 32] = [
    0x00, 0x00, 0x1C, 0x38, 0x3E, 0x7C, 0x7F, 0xFE, 0x7F, 0xFE, 0x7F, 0xFE, 0x7F, 0xFE, 0x3F,
    0xFC, 0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xE0, 0x03, 0xC0, 0x01, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn build_resources() -> StaticResources<2> {
    let mut resources = StaticResources::new();
    match MaskImage::new(16, 16, &HEART_MASK) {
        Ok(mask) => {
            if resources.register(HEART, StarImage::Mask(mask)).is_err() {
                warn!("Resource table full, heart icon unavailable");
            }
        }
        Err(e) => error!("Heart mask rejected: {}", e),
    }
    resources
}

/// Measure the bar against the screen and center it.
fn layout(bar: &mut RatingBar<StaticResources<2>>) {
    let size = bar.measure(
        MeasureSpec::AtMost(DISPLAY_WIDTH_PX),
        MeasureSpec::AtMost(DISPLAY_HEIGHT_PX),
    );
    let x = (DISPLAY_WIDTH_PX - size.width) / 2;
    let y = (DISPLAY_HEIGHT_PX - size.height) / 2;
    bar.set_position(Point::new(x as i32, y as i32));
}

fn apply_theme(bar: &mut RatingBar<StaticResources<2>>, theme: &Theme) {
    bar.set_active_tint(theme.palette.star_active);
    bar.set_inactive_tint(theme.palette.star_inactive);
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

fn digit(keycode: Keycode) -> Option<u32> {
    match keycode {
        Keycode::Num0 | Keycode::Kp0 => Some(0),
        Keycode::Num1 | Keycode::Kp1 => Some(1),
        Keycode::Num2 | Keycode::Kp2 => Some(2),
        Keycode::Num3 | Keycode::Kp3 => Some(3),
        Keycode::Num4 | Keycode::Kp4 => Some(4),
        Keycode::Num5 | Keycode::Kp5 => Some(5),
        Keycode::Num6 | Keycode::Kp6 => Some(6),
        Keycode::Num7 | Keycode::Kp7 => Some(7),
        Keycode::Num8 | Keycode::Kp8 => Some(8),
        Keycode::Num9 | Keycode::Kp9 => Some(9),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting ratingbar simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Up/Down=stars  Left/Right=gap  0-9=rating  H=hearts  T=theme  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Rating Bar Simulator", &output_settings);

    let config = RatingBarConfig::new()
        .with_star_size(40)
        .with_stars_padding(8)
        .with_padding(Padding::all(6));
    let mut bar = match RatingBar::new(config, build_resources()) {
        Ok(bar) => bar,
        Err(e) => {
            error!("Could not create rating bar: {}", e);
            return;
        }
    };
    bar.set_listener(|rating| info!("Selected rating: {}", rating));

    let mut theme = Theme::dark();
    let mut hearts = false;
    let mut pointer_down = false;
    let mut framebuffer = FrameBuffer::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let mut needs_clear = true;

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(theme.palette.background);
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            let touch = match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    match keycode {
                        Keycode::Q | Keycode::Escape => break 'running,
                        Keycode::Up => {
                            if let Err(e) = bar.set_stars_count(bar.stars_count() + 1) {
                                warn!("{}", e);
                            }
                        }
                        Keycode::Down => {
                            if let Err(e) = bar.set_stars_count(bar.stars_count().saturating_sub(1)) {
                                warn!("{}", e);
                            }
                        }
                        Keycode::Left => {
                            if let Err(e) = bar.set_stars_padding(bar.stars_padding().saturating_sub(2)) {
                                warn!("{}", e);
                            }
                        }
                        Keycode::Right => {
                            if let Err(e) = bar.set_stars_padding(bar.stars_padding() + 2) {
                                warn!("{}", e);
                            }
                        }
                        Keycode::H => {
                            hearts = !hearts;
                            if hearts {
                                bar.set_active_star_resource(HEART);
                                bar.set_inactive_star_resource(HEART);
                            } else {
                                bar.set_active_star_image(StarImage::DEFAULT_ACTIVE);
                                bar.set_inactive_star_image(StarImage::DEFAULT_INACTIVE);
                            }
                        }
                        Keycode::T => {
                            theme = if theme == Theme::dark() {
                                Theme::light()
                            } else {
                                Theme::dark()
                            };
                            apply_theme(&mut bar, &theme);
                        }
                        other => {
                            if let Some(rating) = digit(other) {
                                bar.set_rating(rating);
                            }
                        }
                    }
                    needs_clear = true;
                    None
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    pointer_down = true;
                    Some(TouchEvent::Press(touch_point(point)))
                }
                SimulatorEvent::MouseMove { point } if pointer_down => {
                    Some(TouchEvent::Drag(touch_point(point)))
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    pointer_down = false;
                    Some(TouchEvent::Release(touch_point(point)))
                }

                _ => None,
            };

            if let Some(touch) = touch
                && let TouchResult::Action(Action::RatingChanged(rating)) = bar.handle_touch(touch)
            {
                info!("Touch → rating {} of {}", rating, bar.stars_count());
            }
        }

        // --- Layout -------------------------------------------------------
        if bar.needs_layout() {
            layout(&mut bar);
        }

        // --- Render -------------------------------------------------------
        if needs_clear || bar.is_dirty() {
            let _ = framebuffer.clear(theme.palette.background);
            let _ = bar.draw(&mut framebuffer);
            bar.mark_clean();
            needs_clear = false;

            if let Err(e) = framebuffer.flush(&mut display) {
                error!("Flush error: {:?}", e);
            }
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
