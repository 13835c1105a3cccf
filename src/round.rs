//! Round lifecycle: the pause before each serve, and the per-frame driver
//! that ties physics, input and drawing together.
//!
//! A frame always runs in the same order:
//!
//! 1. advance the rally or the pause, depending on [`Phase`]
//! 2. erase last frame's bodies, draw the net, scores, labels and bodies
//! 3. remember this frame's positions for the next erase
//! 4. resolve paddle hits against the positions just drawn
//!
//! Step 4 runs in every phase, paused or not.

use log::{debug, info, trace};

use crate::font;
use crate::input::InputSnapshot;
use crate::pong::{self, Body, Events, MatchState, Side};
use crate::render::{self, Color, Renderer};

pub const HUMAN_WINS: &str = " YOU WIN! ";
pub const CPU_WINS: &str = " CPU WINS ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Rallying,
    Paused,
    /// Paused for good after a winning point
    Finished(Side),
}

/// What a paused frame asks of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTick {
    Waiting,
    Serve,
    Resume,
}

/// Pause flag, frames spent paused, and how long this pause lasts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTimer {
    pub phase: Phase,
    pub counter: u32,
    pub length: u32,
}

impl RoundTimer {
    /// Starts paused for `length` frames
    pub fn new(length: u32) -> Self {
        Self {
            phase: Phase::Paused,
            counter: 0,
            length,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase != Phase::Rallying
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn pause(&mut self, length: u32) {
        self.phase = Phase::Paused;
        self.length = length;
    }

    /// Pause with no end. The length is left as it was.
    pub fn finish(&mut self, winner: Side) {
        self.phase = Phase::Finished(winner);
    }

    pub fn resume(&mut self) {
        self.counter = 0;
        self.phase = Phase::Rallying;
    }

    /// Count one paused frame. Serves at the halfway frame and resumes once
    /// the counter passes the full length.
    pub fn tick(&mut self) -> PauseTick {
        if self.phase != Phase::Paused {
            return PauseTick::Waiting;
        }
        self.counter += 1;
        if self.counter == self.length / 2 {
            PauseTick::Serve
        } else if self.counter > self.length {
            self.resume();
            PauseTick::Resume
        } else {
            PauseTick::Waiting
        }
    }
}

/// Run one frame of the match and draw it.
pub fn frame<R: Renderer + ?Sized>(
    state: &mut MatchState,
    input: &InputSnapshot,
    renderer: &mut R,
) -> Events {
    let mut events = Events::default();

    match state.timer.phase {
        Phase::Rallying => pong::rally_step(state, input, &mut events),
        Phase::Paused => match state.timer.tick() {
            PauseTick::Serve => {
                state.serve();
                events.served = true;
                debug!("serve");
            }
            PauseTick::Resume => {
                events.resumed = true;
                debug!("rally resumed");
            }
            PauseTick::Waiting => {}
        },
        Phase::Finished(_) => {}
    }

    if let Some(side) = events.scored {
        info!(
            "{side:?} scores: {} - {}",
            state.score.human, state.score.computer
        );
    }
    if let Some(side) = events.winner {
        info!("{side:?} wins the match");
    }

    draw(state, renderer);
    state.snapshot();

    pong::resolve_paddle_hits(state, &mut events);
    if let Some(side) = events.paddle_hit {
        debug!("{side:?} paddle hit, ball velocity {:?}", state.ball.vel);
    }

    trace!(
        "ball {:?} vel {:?} phase {:?} counter {}",
        state.ball.pos,
        state.ball.vel,
        state.timer.phase,
        state.timer.counter
    );
    events
}

fn draw<R: Renderer + ?Sized>(state: &MatchState, r: &mut R) {
    erase(r, &state.ball);
    erase(r, &state.human);
    erase(r, &state.cpu);

    draw_net(r, state.config.width, state.config.height);

    draw_score(r, state.score.human, render::HUMAN_SCORE_X);
    draw_score(r, state.score.computer, render::CPU_SCORE_X);
    r.draw_text("YOU", render::HUMAN_SCORE_X - 4, render::LABEL_Y);
    r.draw_text("CPU", render::CPU_SCORE_X - 4, render::LABEL_Y);

    if let Some(winner) = state.winner() {
        let net_x = state.config.width / 2;
        r.clear_rect(net_x, render::MENU_TEXT_Y, net_x + 2, render::MENU_TEXT_Y + 30);
        let banner = match winner {
            Side::Human => HUMAN_WINS,
            Side::Computer => CPU_WINS,
        };
        r.draw_text(banner, render::TEXT_X, render::BANNER_Y);
    }

    fill(r, &state.ball, Color::LIME);
    fill(r, &state.human, Color::BLUE);
    fill(r, &state.cpu, Color::BLUE);
}

fn erase<R: Renderer + ?Sized>(r: &mut R, body: &Body) {
    let prev = body.prev_rect();
    r.clear_rect(prev.x, prev.y, prev.right(), prev.bottom());
}

fn fill<R: Renderer + ?Sized>(r: &mut R, body: &Body, color: Color) {
    let rect = body.rect();
    r.fill_rect(rect.x, rect.y, rect.width, rect.height, color);
}

/// Dashed centre line, a 2x4 dash every 8 rows
pub fn draw_net<R: Renderer + ?Sized>(r: &mut R, width: i32, height: i32) {
    for y in (0..height).step_by(8) {
        r.fill_rect(width / 2, y + 2, 2, 4, Color::WHITE);
    }
}

fn draw_score<R: Renderer + ?Sized>(r: &mut R, score: u8, x: i32) {
    match font::score_glyph(score) {
        Some(glyph) => r.draw_score_glyph(glyph, x),
        None => debug!("no score glyph for {score}"),
    }
}
