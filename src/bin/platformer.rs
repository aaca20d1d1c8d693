//! Platformer: arrow keys walk, SPACE jumps, ESC quits.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use pixel_arcade::Settings;
use pixel_arcade::audio::{Audio, Tone};
use pixel_arcade::consts::{MAX_SUBSTEPS, TICK_DT, WINDOW_HEIGHT, WINDOW_WIDTH};
use pixel_arcade::gfx::{FpsCounter, Frame, GREEN, text_width};
use pixel_arcade::platformer::{GameEvent, Session, TickInput, draw, tick};

// The platformer's tones run at full amplitude.
const JUMP_TONE: Tone = Tone::new(440.0, 0.1).with_amplitude(1.0);
const BLOCK_TONE: Tone = Tone::new(659.0, 0.1).with_amplitude(1.0);
const FLAGPOLE_TONE: Tone = Tone::new(784.0, 0.5).with_amplitude(1.0);

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

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Platformer")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(WINDOW_WIDTH, WINDOW_HEIGHT, surface_texture)?;

    let mut session = Session::new(seed);
    let mut left = false;
    let mut right = false;
    let mut jump = false;
    let mut jump_held = false;

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
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    let pressed = state == ElementState::Pressed;
                    match key {
                        VirtualKeyCode::Left => left = pressed,
                        VirtualKeyCode::Right => right = pressed,
                        VirtualKeyCode::Space => {
                            // Filter OS key repeat so holding SPACE does not
                            // re-jump on every landing.
                            if pressed && !jump_held {
                                jump = true;
                            }
                            jump_held = pressed;
                        }
                        VirtualKeyCode::Escape if pressed => {
                            *control_flow = ControlFlow::Exit;
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                accumulator += now.duration_since(last_update).as_secs_f32();
                last_update = now;

                let mut substeps = 0;
                while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                    let input = TickInput {
                        left,
                        right,
                        jump: std::mem::take(&mut jump),
                    };
                    for event in tick(&mut session, &input) {
                        match event {
                            GameEvent::Jump => play(&audio, JUMP_TONE),
                            GameEvent::QuestionHit => play(&audio, BLOCK_TONE),
                            GameEvent::FlagpoleReached => play(&audio, FLAGPOLE_TONE),
                            GameEvent::NextLevel => {
                                info!("entering world {}-{}", session.world, session.level);
                            }
                            GameEvent::GameOver => info!("game over, score {}", session.score),
                            GameEvent::GameWon => info!("game won, score {}", session.score),
                            GameEvent::MushroomCollected | GameEvent::LifeLost => {}
                        }
                    }
                    accumulator -= TICK_DT;
                    substeps += 1;
                }
                accumulator = accumulator.min(TICK_DT);

                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let reading = fps.frame(Instant::now());
                let mut frame = Frame::new(pixels.frame_mut(), WINDOW_WIDTH, WINDOW_HEIGHT);
                draw::draw(&session, &mut frame);
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
