pub mod life;

pub use crate::life::palette::ColorScheme;
pub use crate::life::{Cell, InvalidDimensions, LifeGrid};

use std::time::{Duration, Instant};

use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

const GRID_ROWS: usize = 100;
const GRID_COLS: usize = 100;
/// Probability that a cell starts alive.
const THRESHOLD: f32 = 0.3;
/// Time between generations.
const PERIOD: Duration = Duration::from_millis(100);

pub fn run(
    width: f64,
    height: f64,
    scheme: ColorScheme,
) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    let mut input = WinitInputHelper::new();

    let window = {
        let size = LogicalSize::new(width, height);
        WindowBuilder::new()
            .with_title("Chroma Life")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    };

    // One logical pixel per cell; the surface scales the frame up to the
    // window.
    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(GRID_COLS as u32, GRID_ROWS as u32, surface_texture)?
    };

    let mut grid = LifeGrid::new_random(GRID_ROWS, GRID_COLS, THRESHOLD)?;
    info!(
        "{}x{} grid seeded at threshold {}",
        GRID_ROWS, GRID_COLS, THRESHOLD
    );

    let mut paused = false;
    let mut last_step = Instant::now();

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = event
        {
            grid.draw(pixels.frame_mut(), &scheme);
            if let Err(err) = pixels.render() {
                log_error("pixels.render", err);
                elwt.exit();
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() {
                elwt.exit();
                return;
            }
            if input.key_pressed(KeyCode::Space) {
                paused = !paused;
            }
            if input.key_pressed(KeyCode::KeyR) {
                debug!("reseeding grid");
                let mut rng: randomize::PCG32 = life::generate_seed().into();
                grid.randomize(&mut rng, THRESHOLD);
                last_step = Instant::now();
            }
            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    elwt.exit();
                    return;
                }
            }

            if !paused && last_step.elapsed() >= PERIOD {
                grid.update();
                last_step = Instant::now();
            }
            window.request_redraw();
        }
    })?;

    Ok(())
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
