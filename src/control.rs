//! Paddle velocities from player input and from the computer's rule.

use crate::input::{Buttons, InputSnapshot};
use crate::params::Config;
use crate::pong::Body;

/// Human paddle: a press sets the speed, any release of UP or DOWN stops it,
/// and it never keeps moving into the ceiling or floor.
pub fn steer_human(paddle: &mut Body, input: &InputSnapshot, config: &Config) {
    let floor = config.height - paddle.size.y;
    if input.released.intersects(Buttons::UP | Buttons::DOWN) {
        paddle.vel.y = 0;
    }
    if input.pressed.contains(Buttons::UP) && paddle.pos.y >= 0 {
        paddle.vel.y = -config.paddle_speed;
    }
    if input.pressed.contains(Buttons::DOWN) && paddle.pos.y <= floor {
        paddle.vel.y = config.paddle_speed;
    }
    if (paddle.pos.y <= 0 && paddle.vel.y < 0) || (paddle.pos.y >= floor && paddle.vel.y > 0) {
        paddle.vel.y = 0;
    }
}

/// Computer paddle: chase the ball only once it is past the first quarter,
/// coming this way or already on this half, and not climbing or diving away
/// faster than the paddle can follow.
pub fn steer_cpu(paddle: &mut Body, ball: &Body, config: &Config) {
    let target = ball.pos.y + (ball.size.y - 2);
    let middle = paddle.center_y();
    let in_reach = ball.pos.x > config.width / 4
        && (ball.vel.x > 0 || ball.pos.x > config.width / 2);

    paddle.vel.y = if in_reach && target > middle && paddle.bottom() < config.height && ball.vel.y >= -2 {
        config.paddle_speed
    } else if in_reach && target < middle && paddle.pos.y > 0 && ball.vel.y <= 2 {
        -config.paddle_speed
    } else {
        0
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn human_at(y: i32) -> Body {
        Body::new(1, y, 8, 24)
    }

    fn cpu_at(y: i32) -> Body {
        Body::new(231, y, 8, 24)
    }

    #[test]
    fn test_press_up_and_down() {
        let config = Config::new();
        let mut paddle = human_at(68);
        steer_human(&mut paddle, &InputSnapshot::pressed(Buttons::UP), &config);
        assert_eq!(paddle.vel.y, -2);
        steer_human(&mut paddle, &InputSnapshot::default(), &config);
        assert_eq!(paddle.vel.y, -2, "keeps moving until released");
        steer_human(&mut paddle, &InputSnapshot::pressed(Buttons::DOWN), &config);
        assert_eq!(paddle.vel.y, 2);
    }

    #[test]
    fn test_release_stops() {
        let config = Config::new();
        let mut paddle = human_at(68);
        paddle.vel.y = 2;
        steer_human(&mut paddle, &InputSnapshot::released(Buttons::DOWN), &config);
        assert_eq!(paddle.vel.y, 0);
        paddle.vel.y = -2;
        steer_human(&mut paddle, &InputSnapshot::released(Buttons::UP), &config);
        assert_eq!(paddle.vel.y, 0);
    }

    #[test]
    fn test_release_and_press_in_one_sample() {
        let config = Config::new();
        let mut paddle = human_at(68);
        paddle.vel.y = -2;
        let input = InputSnapshot::new(Buttons::DOWN, Buttons::UP);
        steer_human(&mut paddle, &input, &config);
        assert_eq!(paddle.vel.y, 2);
    }

    #[test]
    fn test_top_boundary_stops_up() {
        let config = Config::new();
        let mut paddle = human_at(0);
        steer_human(&mut paddle, &InputSnapshot::pressed(Buttons::UP), &config);
        assert_eq!(paddle.vel.y, 0);
        paddle.vel.y = -2;
        steer_human(&mut paddle, &InputSnapshot::default(), &config);
        assert_eq!(paddle.vel.y, 0);
    }

    #[test]
    fn test_bottom_boundary_stops_down() {
        let config = Config::new();
        let mut paddle = human_at(136);
        steer_human(&mut paddle, &InputSnapshot::pressed(Buttons::DOWN), &config);
        assert_eq!(paddle.vel.y, 0);
        steer_human(&mut paddle, &InputSnapshot::pressed(Buttons::UP), &config);
        assert_eq!(paddle.vel.y, -2);
    }

    #[test]
    fn test_other_buttons_ignored() {
        let config = Config::new();
        let mut paddle = human_at(68);
        paddle.vel.y = 2;
        let input = InputSnapshot::new(Buttons::A | Buttons::LEFT, Buttons::B);
        steer_human(&mut paddle, &input, &config);
        assert_eq!(paddle.vel.y, 2);
    }

    #[test]
    fn test_cpu_follows_approaching_ball() {
        let config = Config::new();
        let mut paddle = cpu_at(68);
        let ball = Body::new(150, 120, 8, 8).with_velocity(2, 1);
        steer_cpu(&mut paddle, &ball, &config);
        assert_eq!(paddle.vel.y, 2);

        let ball = Body::new(150, 20, 8, 8).with_velocity(2, -1);
        steer_cpu(&mut paddle, &ball, &config);
        assert_eq!(paddle.vel.y, -2);
    }

    #[test]
    fn test_cpu_waits_while_ball_is_far() {
        let config = Config::new();
        let mut paddle = cpu_at(68);
        paddle.vel.y = 2;
        // first quarter
        let ball = Body::new(40, 120, 8, 8).with_velocity(2, 0);
        steer_cpu(&mut paddle, &ball, &config);
        assert_eq!(paddle.vel.y, 0);

        // leaving and still on the far half
        let ball = Body::new(100, 120, 8, 8).with_velocity(-2, 0);
        steer_cpu(&mut paddle, &ball, &config);
        assert_eq!(paddle.vel.y, 0);

        // leaving but on the near half
        let ball = Body::new(150, 120, 8, 8).with_velocity(-2, 0);
        steer_cpu(&mut paddle, &ball, &config);
        assert_eq!(paddle.vel.y, 2);
    }

    #[test]
    fn test_cpu_gives_up_on_steep_ball() {
        let config = Config::new();
        let mut paddle = cpu_at(68);
        let climbing = Body::new(150, 120, 8, 8).with_velocity(2, -3);
        steer_cpu(&mut paddle, &climbing, &config);
        assert_eq!(paddle.vel.y, 0);

        let diving = Body::new(150, 20, 8, 8).with_velocity(2, 3);
        steer_cpu(&mut paddle, &diving, &config);
        assert_eq!(paddle.vel.y, 0);
    }

    #[test]
    fn test_cpu_holds_when_level() {
        let config = Config::new();
        let mut paddle = cpu_at(68);
        // ball.y + 6 == paddle centre
        let ball = Body::new(150, 74, 8, 8).with_velocity(2, 0);
        steer_cpu(&mut paddle, &ball, &config);
        assert_eq!(paddle.vel.y, 0);
    }

    #[test]
    fn test_cpu_stays_on_screen() {
        let config = Config::new();
        let ball_low = Body::new(200, 150, 8, 8).with_velocity(2, 1);
        let mut paddle = cpu_at(136);
        steer_cpu(&mut paddle, &ball_low, &config);
        assert_eq!(paddle.vel.y, 0);

        let ball_high = Body::new(200, 0, 8, 8).with_velocity(2, -1);
        let mut paddle = cpu_at(0);
        steer_cpu(&mut paddle, &ball_high, &config);
        assert_eq!(paddle.vel.y, 0);

        let mut paddle = cpu_at(134);
        steer_cpu(&mut paddle, &ball_low, &config);
        assert_eq!(paddle.vel, vector![0, 2]);
    }
}
