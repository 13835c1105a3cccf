/// Fixed tuning for the handheld build
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (direct-color video mode)
    pub const SCREEN_WIDTH: i32 = 240;
    pub const SCREEN_HEIGHT: i32 = 160;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 8;
    pub const PADDLE_HEIGHT: i32 = 24;
    pub const PADDLE_SPEED: i32 = 2;

    // Ball
    pub const BALL_SIZE: i32 = 8;
    pub const BALL_SERVE_VEL: (i32, i32) = (2, 2);

    // Ball edge distance that counts as reaching a side wall
    pub const WALL_MARGIN: i32 = 3;

    // Score
    pub const WINNING_SCORE: u8 = 10;

    // Pauses, in frames
    pub const NEW_GAME_PAUSE: u32 = 120; // 2 seconds
    pub const ROUND_PAUSE: u32 = 90; // 1.5 seconds

    pub const FRAME_RATE: u32 = 60;
}

/// Match configuration, defaults from [`Params`]
#[derive(Debug, Clone)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_serve_vel: (i32, i32),
    pub wall_margin: i32,
    pub winning_score: u8,
    pub new_game_pause: u32,
    pub round_pause: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::SCREEN_WIDTH,
            height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_serve_vel: Params::BALL_SERVE_VEL,
            wall_margin: Params::WALL_MARGIN,
            winning_score: Params::WINNING_SCORE,
            new_game_pause: Params::NEW_GAME_PAUSE,
            round_pause: Params::ROUND_PAUSE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of the human (0) or computer (1) paddle
    pub fn paddle_x(&self, player_id: u8) -> i32 {
        if player_id == 0 {
            1
        } else {
            self.width - self.paddle_width - 1
        }
    }

    /// Paddle top edge when centred vertically
    pub fn paddle_serve_y(&self) -> i32 {
        self.height / 2 - self.paddle_height / 2
    }

    /// Ball top-left corner at the serve
    pub fn ball_serve_pos(&self) -> (i32, i32) {
        (
            self.width / 2 - self.ball_size / 2 + 1,
            self.height / 2 - self.ball_size / 2,
        )
    }
}

/// Desktop host settings
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub title: String,
    pub scale: u32,
}

impl HostConfig {
    pub const SCALE_VAR: &'static str = "FBPONG_SCALE";
    const DEFAULT_SCALE: u32 = 3;

    /// Defaults, with the scale taken from `FBPONG_SCALE` when it is set
    pub fn from_env() -> Self {
        Self::with_scale_var(std::env::var(Self::SCALE_VAR).ok().as_deref())
    }

    fn with_scale_var(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match raw.trim().parse::<u32>() {
                Ok(scale) if scale > 0 => config.scale = scale,
                _ => log::warn!(
                    "ignoring {}={raw:?}, using scale {}",
                    Self::SCALE_VAR,
                    config.scale
                ),
            }
        }
        config
    }

    pub fn window_size(&self) -> (u32, u32) {
        (
            Params::SCREEN_WIDTH as u32 * self.scale,
            Params::SCREEN_HEIGHT as u32 * self.scale,
        )
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "fbpong".to_string(),
            scale: Self::DEFAULT_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(0), 1, "Human paddle X position");
        assert_eq!(config.paddle_x(1), 231, "Computer paddle X position");
    }

    #[test]
    fn test_config_serve_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_serve_y(), 68);
        assert_eq!(config.ball_serve_pos(), (117, 76));
    }

    #[test]
    fn test_pauses_fit_frame_rate() {
        assert_eq!(Params::NEW_GAME_PAUSE, 2 * Params::FRAME_RATE);
        assert_eq!(Params::ROUND_PAUSE * 2, 3 * Params::FRAME_RATE);
    }

    #[test]
    fn test_host_scale_override() {
        assert_eq!(HostConfig::with_scale_var(None).scale, 3);
        assert_eq!(HostConfig::with_scale_var(Some("5")).scale, 5);
        assert_eq!(HostConfig::with_scale_var(Some(" 2 ")).scale, 2);
        assert_eq!(HostConfig::with_scale_var(Some("0")).scale, 3);
        assert_eq!(HostConfig::with_scale_var(Some("big")).scale, 3);
        assert_eq!(HostConfig::with_scale_var(Some("4")).window_size(), (960, 640));
    }
}
