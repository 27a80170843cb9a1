//! Brick-breaking arcade game on top of SDL2.
//!
//! The simulation lives in the `rbrick` library; this binary only owns the
//! platform side: window and canvas creation, the event queue, keyboard
//! state, and the two drawing primitives the game needs.

use color_eyre::eyre::{WrapErr, eyre};
use rbrick::geometry::Rect;
use rbrick::input::{InputSource, KeyState};
use rbrick::items::Color;
use rbrick::render::Surface;
use rbrick::{Game, GameConfig};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Scancode;
use sdl2::pixels;
use sdl2::render::Canvas;
use sdl2::video::Window;

fn to_sdl(color: Color) -> pixels::Color {
    pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

/// The gfx primitives read the packed color in reverse byte order.
fn to_abgr(color: Color) -> pixels::Color {
    pixels::Color::RGBA(color.a, color.b, color.g, color.r)
}

/// Drawing surface backed by an SDL2 window canvas.
struct SdlSurface {
    canvas: Canvas<Window>,
}

impl Surface for SdlSurface {
    type Error = String;

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        color: Color,
    ) -> Result<(), String> {
        let x = center[0] as i16;
        let y = center[1] as i16;
        let rad = radius as i16;
        self.canvas.filled_circle(x, y, rad, to_abgr(color))
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<(), String> {
        let target =
            sdl2::rect::Rect::new(rect.x as i32, rect.y as i32, rect.w as u32, rect.h as u32);
        self.canvas.set_draw_color(to_sdl(color));
        self.canvas.fill_rect(target)
    }

    fn present(&mut self) -> Result<(), String> {
        self.canvas.present();
        Ok(())
    }
}

/// Keyboard and window events from the SDL event pump.
///
/// `A`/`Left` move left, `D`/`Right` move right, `Escape` or closing the
/// window quits.
struct SdlInput {
    events: EventPump,
}

impl InputSource for SdlInput {
    fn poll(&mut self) -> KeyState {
        let mut quit = false;
        for event in self.events.poll_iter() {
            if let Event::Quit { .. } = event {
                quit = true;
            }
        }

        let keys = self.events.keyboard_state();
        KeyState {
            left: keys.is_scancode_pressed(Scancode::A)
                || keys.is_scancode_pressed(Scancode::Left),
            right: keys.is_scancode_pressed(Scancode::D)
                || keys.is_scancode_pressed(Scancode::Right),
            quit: quit || keys.is_scancode_pressed(Scancode::Escape),
        }
    }
}

/// Creates the window and runs the game until the player quits.
///
/// # Arguments
///
/// * `config` - Validated game configuration (window size, entity sizes, speeds)
fn run(config: GameConfig) -> color_eyre::Result<()> {
    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().map_err(|e| eyre!("failed to initialize SDL: {e}"))?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| eyre!("failed to initialize SDL video: {e}"))?;

    let width = config.arena_width as u32;
    let height = config.arena_height as u32;
    let window = video_subsystem
        .window(&config.title, width, height)
        .position_centered()
        .build()
        .wrap_err("failed to create window")?;

    // Presentation pacing comes from vsync
    let canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .wrap_err("failed to create renderer")?;
    let events = sdl_context
        .event_pump()
        .map_err(|e| eyre!("failed to acquire event pump: {e}"))?;
    log::info!("Opened {}x{} window \"{}\"", width, height, config.title);

    let mut game = Game::new(config).wrap_err("invalid game configuration")?;
    let mut surface = SdlSurface { canvas };
    let mut input = SdlInput { events };

    game.run(&mut input, &mut surface)
        .map_err(|e| eyre!("failed to draw frame: {e}"))?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    log::info!("rbrick starting...");

    let config = GameConfig::load()
        .inspect_err(|e| log::error!("{e}"))
        .wrap_err("failed to load configuration")?;
    run(config).inspect_err(|e| log::error!("{e:#}"))
}
