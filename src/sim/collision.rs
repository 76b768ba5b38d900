//! Collision predicates
//!
//! All tests use strict inequalities: a ball exactly tangent to an edge
//! has not collided. Brick and paddle tests are given the ball's lookahead
//! point (position plus one raw direction step), walls and ceiling the
//! integrated position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::Brick;

/// Surfaces the ball struck this tick; rebuilt from scratch every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub paddle: bool,
    pub wall: bool,
    pub ceiling: bool,
    pub brick: bool,
}

impl CollisionFlags {
    /// Whether the vertical direction flips this tick
    ///
    /// Single OR over every vertical cause, so it flips at most once.
    #[inline]
    pub fn flips_vertical(&self) -> bool {
        self.brick || self.paddle || self.ceiling
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.paddle || self.wall || self.ceiling || self.brick
    }
}

/// Lookahead point strictly inside the brick rectangle
#[inline]
pub fn brick_hit(brick: &Brick, lookahead: Vec2) -> bool {
    lookahead.x > brick.left()
        && lookahead.x < brick.right()
        && lookahead.y > brick.top()
        && lookahead.y < brick.bottom()
}

/// Lookahead point over the paddle and past its front edge
///
/// The front edge sits half a ball radius above the paddle top so fast
/// balls do not tunnel through.
#[inline]
pub fn paddle_hit(
    lookahead: Vec2,
    paddle_x: f32,
    paddle_width: f32,
    paddle_top: f32,
    ball_radius: f32,
) -> bool {
    let half = paddle_width / 2.0;
    lookahead.x > paddle_x - half
        && lookahead.x < paddle_x + half
        && lookahead.y > paddle_top - ball_radius / 2.0
}

/// Ball past either side wall
#[inline]
pub fn wall_hit(x: f32, ball_radius: f32, playfield_width: f32) -> bool {
    x < ball_radius || x > playfield_width - ball_radius
}

/// Ball past the ceiling
#[inline]
pub fn ceiling_hit(y: f32, ball_radius: f32) -> bool {
    y < ball_radius
}

/// Ball below the paddle zone: the session is lost
#[inline]
pub fn fell_out(y: f32, ball_radius: f32, playfield_height: f32) -> bool {
    y > playfield_height - ball_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Brick {
        // Spans x 25..125, y 25..125
        Brick::new(75.0, 75.0, 100.0, 100.0)
    }

    #[test]
    fn test_brick_hit_center() {
        assert!(brick_hit(&brick(), Vec2::new(75.0, 75.0)));
        assert!(!brick_hit(&brick(), Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_brick_hit_edges_are_strict() {
        let b = brick();
        // Exactly on each edge: no hit
        assert!(!brick_hit(&b, Vec2::new(25.0, 50.0)));
        assert!(!brick_hit(&b, Vec2::new(125.0, 50.0)));
        assert!(!brick_hit(&b, Vec2::new(50.0, 25.0)));
        assert!(!brick_hit(&b, Vec2::new(50.0, 125.0)));
        // Just inside each edge
        assert!(brick_hit(&b, Vec2::new(25.1, 50.0)));
        assert!(brick_hit(&b, Vec2::new(124.9, 50.0)));
        assert!(brick_hit(&b, Vec2::new(50.0, 25.1)));
        assert!(brick_hit(&b, Vec2::new(50.0, 124.9)));
    }

    #[test]
    fn test_paddle_hit() {
        // Paddle centered at 240, width 100, top at 300, ball radius 10 -> front edge 295
        assert!(paddle_hit(Vec2::new(240.0, 296.0), 240.0, 100.0, 300.0, 10.0));
        assert!(!paddle_hit(Vec2::new(240.0, 295.0), 240.0, 100.0, 300.0, 10.0));
        assert!(!paddle_hit(Vec2::new(240.0, 200.0), 240.0, 100.0, 300.0, 10.0));
        // Outside the half-width band
        assert!(!paddle_hit(Vec2::new(290.0, 310.0), 240.0, 100.0, 300.0, 10.0));
        assert!(paddle_hit(Vec2::new(289.9, 310.0), 240.0, 100.0, 300.0, 10.0));
        assert!(!paddle_hit(Vec2::new(190.0, 310.0), 240.0, 100.0, 300.0, 10.0));
    }

    #[test]
    fn test_wall_hit_is_strict() {
        assert!(!wall_hit(10.0, 10.0, 480.0));
        assert!(wall_hit(9.99, 10.0, 480.0));
        assert!(!wall_hit(470.0, 10.0, 480.0));
        assert!(wall_hit(470.01, 10.0, 480.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert!(!ceiling_hit(10.0, 10.0));
        assert!(ceiling_hit(9.0, 10.0));
        assert!(!fell_out(310.0, 10.0, 320.0));
        assert!(fell_out(310.5, 10.0, 320.0));
    }

    #[test]
    fn test_vertical_flip_is_single_or() {
        let flags = CollisionFlags {
            paddle: true,
            brick: true,
            ceiling: true,
            wall: false,
        };
        assert!(flags.flips_vertical());

        let wall_only = CollisionFlags {
            wall: true,
            ..Default::default()
        };
        assert!(!wall_only.flips_vertical());
        assert!(wall_only.any());
        assert!(!CollisionFlags::default().any());
    }
}
