use nalgebra::vector;

use crate::control;
use crate::geometry::{overlaps, Rect};
use crate::input::InputSnapshot;
use crate::params::Config;
use crate::round::RoundTimer;

pub type V2i = nalgebra::Vector2<i32>;

/// Ball or paddle. Positions are top-left, in whole pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub pos: V2i,
    pub prev: V2i, // where it was last drawn
    pub size: V2i,
    pub vel: V2i,
}

impl Body {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: vector![x, y],
            prev: vector![x, y],
            size: vector![width, height],
            vel: vector![0, 0],
        }
    }

    pub fn with_velocity(mut self, vx: i32, vy: i32) -> Self {
        self.vel = vector![vx, vy];
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn prev_rect(&self) -> Rect {
        Rect::new(self.prev.x, self.prev.y, self.size.x, self.size.y)
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn snapshot(&mut self) {
        self.prev = self.pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point, returning the side's new total
    pub fn increment(&mut self, side: Side) -> u8 {
        let slot = match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        *slot = slot.saturating_add(1);
        *slot
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub scored: Option<Side>,
    pub winner: Option<Side>,
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    pub served: bool,
    pub resumed: bool,
}

/// Everything one match owns
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: Config,
    pub ball: Body,
    pub human: Body,
    pub cpu: Body,
    pub score: Score,
    pub timer: RoundTimer,
}

impl MatchState {
    /// Fresh match, paused for the pre-roll before the first serve
    pub fn new(config: Config) -> Self {
        let (ball_x, ball_y) = config.ball_serve_pos();
        let (vx, vy) = config.ball_serve_vel;
        let paddle_y = config.paddle_serve_y();
        Self {
            ball: Body::new(ball_x, ball_y, config.ball_size, config.ball_size).with_velocity(vx, vy),
            human: Body::new(config.paddle_x(0), paddle_y, config.paddle_width, config.paddle_height),
            cpu: Body::new(config.paddle_x(1), paddle_y, config.paddle_width, config.paddle_height),
            score: Score::new(),
            timer: RoundTimer::new(config.new_game_pause),
            config,
        }
    }

    /// Re-centre ball and paddles. The ball keeps its velocity.
    pub fn serve(&mut self) {
        let (ball_x, ball_y) = self.config.ball_serve_pos();
        self.ball.pos = vector![ball_x, ball_y];
        self.human.pos.y = self.config.paddle_serve_y();
        self.cpu.pos.y = self.config.paddle_serve_y();
    }

    pub fn snapshot(&mut self) {
        self.ball.snapshot();
        self.human.snapshot();
        self.cpu.snapshot();
    }

    pub fn winner(&self) -> Option<Side> {
        self.timer.winner()
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Credit `side` and pause. A winning point pauses for good.
pub fn award_point(state: &mut MatchState, side: Side, events: &mut Events) {
    let total = state.score.increment(side);
    events.scored = Some(side);
    if total >= state.config.winning_score {
        state.timer.finish(side);
        events.winner = Some(side);
    } else {
        state.ball.vel.x = -state.ball.vel.x;
        state.timer.pause(state.config.round_pause);
    }
}

/// A ball reaching a side wall scores for the side it reached
pub fn check_side_walls(state: &mut MatchState, events: &mut Events) {
    let margin = state.config.wall_margin;
    let ball = &mut state.ball;
    if ball.pos.x <= margin && ball.vel.x < 0 {
        ball.pos.x = state.human.pos.x;
        award_point(state, Side::Computer, events);
    } else if ball.pos.x >= state.config.width - ball.size.x - margin && ball.vel.x > 0 {
        ball.pos.x = state.cpu.pos.x + state.cpu.size.x - ball.size.x;
        award_point(state, Side::Human, events);
    }
}

pub fn bounce_ceiling_floor(ball: &mut Body, height: i32, events: &mut Events) {
    if (ball.pos.y <= 0 && ball.vel.y < 0) || (ball.bottom() >= height && ball.vel.y > 0) {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }
}

/// One rally tick: walls, controls, then movement if still in play
pub fn rally_step(state: &mut MatchState, input: &InputSnapshot, events: &mut Events) {
    check_side_walls(state, events);
    bounce_ceiling_floor(&mut state.ball, state.config.height, events);

    control::steer_human(&mut state.human, input, &state.config);
    control::steer_cpu(&mut state.cpu, &state.ball, &state.config);

    // a point this frame freezes everything where it is
    if !state.timer.is_paused() {
        state.ball.pos += state.ball.vel;
        let floor = state.config.height - state.config.paddle_height;
        for paddle in [&mut state.human, &mut state.cpu] {
            paddle.pos.y = (paddle.pos.y + paddle.vel.y).clamp(0, floor);
        }
    }
}

/// Vertical speed off a paddle from the ball's offset to the paddle centre:
/// one step each past 0, 3 and 6 pixels.
pub fn deflection(offset: i32) -> i32 {
    let tier = |t: i32| (offset > t) as i32 - (offset < -t) as i32;
    tier(0) + tier(3) + tier(6)
}

pub fn bounce_off_paddle(ball: &mut Body, paddle: &Body) {
    let offset = ball.center_y() - paddle.center_y();
    ball.vel.y = deflection(offset);
    let speed = if offset.abs() <= 4 { 4 } else { 3 };
    ball.vel.x = -ball.vel.x.signum() * speed;
}

/// Paddle contact, checked every frame whatever the round is doing
pub fn resolve_paddle_hits(state: &mut MatchState, events: &mut Events) {
    if overlaps(state.human.rect(), state.ball.rect()) && state.ball.vel.x < 0 {
        bounce_off_paddle(&mut state.ball, &state.human);
        events.paddle_hit = Some(Side::Human);
    }
    if overlaps(state.cpu.rect(), state.ball.rect()) && state.ball.vel.x > 0 {
        bounce_off_paddle(&mut state.ball, &state.cpu);
        events.paddle_hit = Some(Side::Computer);
    }
}
