//! Collision detection between the bird and the pipe
//!
//! The bird is treated as reaching `BIRD_RADIUS` to the right of its position
//! and not at all to the left; this matches how the sprite is anchored.

use super::state::{Bird, Pipe};
use crate::consts::{BIRD_RADIUS, PIPE_WIDTH};

/// Whether the bird's column overlaps the pipe horizontally
#[inline]
pub fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    bird.pos.x + BIRD_RADIUS > pipe.pos.x && bird.pos.x < pipe.pos.x + PIPE_WIDTH
}

/// Whether the bird's height lies within the gap band (edges inclusive)
#[inline]
pub fn within_gap(bird: &Bird, pipe: &Pipe) -> bool {
    bird.pos.y >= pipe.gap_top() && bird.pos.y <= pipe.gap_bottom()
}

/// Check the bird against the pipe walls
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe) -> bool {
    overlaps_horizontally(bird, pipe) && !within_gap(bird, pipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pipe_at(x: f32, gap_y: f32) -> Pipe {
        Pipe {
            pos: Vec2::new(x, 0.0),
            gap_y,
        }
    }

    fn bird_at(y: f32) -> Bird {
        let mut bird = Bird::new(false);
        bird.pos.y = y;
        bird
    }

    #[test]
    fn test_hit_above_gap() {
        let pipe = pipe_at(90.0, 200.0);
        assert!(overlaps_horizontally(&bird_at(50.0), &pipe));
        assert!(bird_pipe_collision(&bird_at(50.0), &pipe));
    }

    #[test]
    fn test_hit_below_gap() {
        let pipe = pipe_at(90.0, 200.0);
        assert!(bird_pipe_collision(&bird_at(300.0), &pipe));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let pipe = pipe_at(90.0, 200.0);
        assert!(!bird_pipe_collision(&bird_at(200.0), &pipe));
    }

    #[test]
    fn test_gap_edges_are_safe() {
        let pipe = pipe_at(90.0, 200.0);
        assert!(!bird_pipe_collision(&bird_at(125.0), &pipe));
        assert!(!bird_pipe_collision(&bird_at(275.0), &pipe));
        assert!(bird_pipe_collision(&bird_at(124.9), &pipe));
        assert!(bird_pipe_collision(&bird_at(275.1), &pipe));
    }

    #[test]
    fn test_no_horizontal_overlap() {
        // Pipe fully to the right of the bird's reach
        assert!(!bird_pipe_collision(&bird_at(0.0), &pipe_at(120.0, 200.0)));
        // Pipe fully behind the bird
        assert!(!bird_pipe_collision(&bird_at(0.0), &pipe_at(50.0, 200.0)));
        // Just touching the reach edge overlaps
        assert!(bird_pipe_collision(&bird_at(0.0), &pipe_at(119.0, 200.0)));
    }
}
