use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use softbuffer::{Context, Surface};

use fbpong::{round, Buttons, Framebuffer, HostConfig, InputSource, KeyTracker, MatchState, Params};
use fbpong::error::HostError;

/// Stand-in for the handheld: a window showing the framebuffer, paced to a
/// fixed vertical blank.
pub struct WindowApp {
    window: Option<Rc<Window>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    size: PhysicalSize<u32>,
    config: HostConfig,
    keys: KeyTracker,
    game: MatchState,
    framebuffer: Framebuffer,
    frame_period: Duration,
    next_vblank: Instant,
    frame_due: bool,
    frames: u64,
    error: Option<HostError>,
}

impl WindowApp {
    /// First error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<HostError> {
        self.error.take()
    }

    fn fail(&mut self, ev_loop: &ActiveEventLoop, err: HostError) {
        log::error!("{err}");
        self.error.get_or_insert(err);
        ev_loop.exit();
    }

    fn create_surface(&mut self, ev_loop: &ActiveEventLoop) -> Result<(), HostError> {
        let (width, height) = self.config.window_size();
        let attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(width, height));
        let win = Rc::new(ev_loop.create_window(attrs)?);
        let ctx = Context::new(win.clone())?;
        let sfc = Surface::new(&ctx, win.clone())?;
        self.size = win.inner_size();
        self.window = Some(win);
        self.surface = Some(sfc);
        self.resize_surface()?;
        Ok(())
    }

    fn resize_surface(&mut self) -> Result<(), HostError> {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(self.size.width),
            NonZeroU32::new(self.size.height),
        ) else {
            return Ok(());
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height)?;
        }
        Ok(())
    }

    /// One emulated vblank: sample input, advance the match, draw.
    fn step(&mut self) {
        let input = self.keys.sample();
        let events = round::frame(&mut self.game, &input, &mut self.framebuffer);
        self.frames += 1;
        if events.winner.is_some() {
            log::info!("match over after {} frames", self.frames);
        }
    }

    fn present(&mut self) -> Result<(), HostError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        if self.size.width == 0 || self.size.height == 0 {
            return Ok(());
        }
        let out_width = self.size.width as usize;
        let scale = (self.size.width / Params::SCREEN_WIDTH as u32)
            .min(self.size.height / Params::SCREEN_HEIGHT as u32)
            .max(1) as usize;
        let mut buffer = surface.buffer_mut()?;
        buffer.fill(0);
        self.framebuffer.blit_scaled(&mut buffer, out_width, scale);
        buffer.present()?;
        Ok(())
    }

    fn handle_key(&mut self, ev_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        if code == KeyCode::Escape {
            log::info!("escape pressed, exiting");
            ev_loop.exit();
            return;
        }
        let Some(button) = map_key(code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.keys.key_down(button),
            ElementState::Released => self.keys.key_up(button),
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, ev_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.create_surface(ev_loop) {
            Ok(()) => {
                log::info!(
                    "window created: {}x{} (scale {})",
                    self.size.width,
                    self.size.height,
                    self.config.scale
                );
                self.next_vblank = Instant::now();
            }
            Err(err) => self.fail(ev_loop, err),
        }
    }

    fn about_to_wait(&mut self, ev_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_vblank {
            self.next_vblank += self.frame_period;
            if self.next_vblank < now {
                // fell behind; skip the missed blanks instead of catching up
                log::warn!("missed vblank, resyncing");
                self.next_vblank = now + self.frame_period;
            }
            self.frame_due = true;
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        ev_loop.set_control_flow(ControlFlow::WaitUntil(self.next_vblank));
    }

    fn window_event(&mut self, ev_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, exiting after {} frames", self.frames);
                ev_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if self.frame_due {
                    self.frame_due = false;
                    self.step();
                }
                if let Err(err) = self.present() {
                    log::error!("dropped frame {}: {err}", self.frames);
                }
            }
            WindowEvent::Resized(phy_size) => {
                self.size = phy_size;
                log::info!("resized to {}x{}", phy_size.width, phy_size.height);
                if let Err(err) = self.resize_surface() {
                    self.fail(ev_loop, err);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(ev_loop, event),
            _ => {}
        }
    }
}

fn map_key(code: KeyCode) -> Option<Buttons> {
    match code {
        KeyCode::ArrowUp => Some(Buttons::UP),
        KeyCode::ArrowDown => Some(Buttons::DOWN),
        KeyCode::ArrowLeft => Some(Buttons::LEFT),
        KeyCode::ArrowRight => Some(Buttons::RIGHT),
        KeyCode::KeyZ => Some(Buttons::A),
        KeyCode::KeyX => Some(Buttons::B),
        KeyCode::KeyA => Some(Buttons::L),
        KeyCode::KeyS => Some(Buttons::R),
        KeyCode::Enter => Some(Buttons::START),
        KeyCode::Backspace => Some(Buttons::SELECT),
        _ => None,
    }
}

pub fn init_window(config: HostConfig) -> Result<(EventLoop<()>, WindowApp), HostError> {
    let ev_loop = EventLoop::new()?;
    ev_loop.set_control_flow(ControlFlow::Poll);
    let app = WindowApp {
        window: None,
        surface: None,
        size: Default::default(),
        config,
        keys: KeyTracker::new(),
        game: MatchState::default(),
        framebuffer: Framebuffer::default(),
        frame_period: Duration::from_secs(1) / Params::FRAME_RATE,
        next_vblank: Instant::now(),
        frame_due: false,
        frames: 0,
        error: None,
    };
    Ok((ev_loop, app))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_map() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Buttons::UP));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Buttons::DOWN));
        assert_eq!(map_key(KeyCode::Enter), Some(Buttons::START));
        assert_eq!(map_key(KeyCode::KeyQ), None);
        assert_eq!(map_key(KeyCode::Escape), None);
    }
}
