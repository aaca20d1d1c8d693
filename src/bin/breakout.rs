//! Breakout: mouse steers the paddle, SPACE launches, Y/N at the prompt.

use std::time::Instant;

use anyhow::Result;
use log::{error, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use pixel_arcade::Settings;
use pixel_arcade::audio::{Audio, Tone};
use pixel_arcade::breakout::{GameEvent, GameState, TickInput, draw, tick};
use pixel_arcade::consts::{MAX_SUBSTEPS, TICK_DT, WINDOW_HEIGHT, WINDOW_WIDTH};
use pixel_arcade::gfx::{FpsCounter, Frame, GREEN, text_width};

/// Paddle hits beep high, bricks boop low.
const PADDLE_BEEP: Tone = Tone::new(800.0, 0.1);
const BRICK_BOOP: Tone = Tone::new(400.0, 0.15);

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let audio = match Audio::new(settings.effective_volume()) {
        Ok(audio) => Some(audio),
        Err(err) => {
            warn!("audio disabled: {err}");
            None
        }
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Breakout")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(WINDOW_WIDTH, WINDOW_HEIGHT, surface_texture)?;

    let mut state = GameState::new();
    let mut pointer_x: Option<f32> = None;
    let mut launch = false;
    let mut restart = false;
    let mut decline = false;

    let show_fps = settings.show_fps;
    let mut fps = FpsCounter::new(Instant::now());

    let mut last_update = Instant::now();
    let mut accumulator = 0.0f32;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // Physical to logical: the sim works in window points.
                    pointer_x = Some((position.x / window.scale_factor()) as f32);
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match key {
                    VirtualKeyCode::Space => launch = true,
                    VirtualKeyCode::Y => restart = true,
                    VirtualKeyCode::N => decline = true,
                    VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                accumulator += now.duration_since(last_update).as_secs_f32();
                last_update = now;

                let mut substeps = 0;
                while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                    // Edge-triggered keys feed exactly one tick.
                    let input = TickInput {
                        launch: std::mem::take(&mut launch),
                        restart: std::mem::take(&mut restart),
                        decline: std::mem::take(&mut decline),
                        pointer_x,
                    };
                    for event in tick(&mut state, &input) {
                        match event {
                            GameEvent::PaddleHit => play(&audio, PADDLE_BEEP),
                            GameEvent::BrickBroken => play(&audio, BRICK_BOOP),
                            GameEvent::BallLost => {}
                            GameEvent::QuitRequested => *control_flow = ControlFlow::Exit,
                        }
                    }
                    accumulator -= TICK_DT;
                    substeps += 1;
                }
                // Shed backlog instead of spiraling after a long stall.
                accumulator = accumulator.min(TICK_DT);

                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let reading = fps.frame(Instant::now());
                let mut frame = Frame::new(pixels.frame_mut(), WINDOW_WIDTH, WINDOW_HEIGHT);
                draw::draw(&state, &mut frame);
                if show_fps {
                    let text = format!("FPS: {reading}");
                    let x = WINDOW_WIDTH as i32 - text_width(&text, 1) - 4;
                    frame.draw_text(x, 4, &text, GREEN, 1);
                }
                if let Err(err) = pixels.render() {
                    error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn play(audio: &Option<Audio>, tone: Tone) {
    if let Some(audio) = audio {
        audio.play(tone);
    }
}
