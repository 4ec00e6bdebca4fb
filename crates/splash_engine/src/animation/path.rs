//! Scripted motion for decorative props

use crate::foundation::math::{utils, Transform, Vec3};

/// Moves back and forth along a straight segment
#[derive(Debug, Clone)]
pub struct PingPongLerp {
    start: Vec3,
    end: Vec3,
    rate: f32,
    t: f32,
    forward: bool,
}

impl PingPongLerp {
    /// `rate` is the fraction of the segment covered per second
    pub fn new(start: Vec3, end: Vec3, rate: f32) -> Self {
        Self {
            start,
            end,
            rate,
            t: 0.0,
            forward: true,
        }
    }

    /// Advance and return the new position
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.t += dt * self.rate;
        if self.t >= 1.0 {
            self.t = 0.0;
            self.forward = !self.forward;
        }
        self.position()
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        if self.forward {
            utils::lerp_vec3(&self.start, &self.end, self.t)
        } else {
            utils::lerp_vec3(&self.end, &self.start, self.t)
        }
    }

    /// Whether the mover is heading from start to end
    pub fn is_forward(&self) -> bool {
        self.forward
    }
}

/// Moves back and forth along a Catmull-Rom segment through four control points
#[derive(Debug, Clone)]
pub struct PingPongCatmull {
    points: [Vec3; 4],
    rate: f32,
    t: f32,
    forward: bool,
}

impl PingPongCatmull {
    /// The prop travels between `points[1]` and `points[2]`
    pub fn new(points: [Vec3; 4], rate: f32) -> Self {
        Self {
            points,
            rate,
            t: 0.0,
            forward: true,
        }
    }

    /// Advance and return the new position
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.t += dt * self.rate;
        if self.t >= 1.0 {
            self.t = 0.0;
            self.forward = !self.forward;
        }
        self.position()
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        let [p0, p1, p2, p3] = &self.points;
        if self.forward {
            utils::catmull_rom(p0, p1, p2, p3, self.t)
        } else {
            utils::catmull_rom(p3, p2, p1, p0, self.t)
        }
    }

    /// Whether the mover is heading forward along the spline
    pub fn is_forward(&self) -> bool {
        self.forward
    }
}

/// Constant rotation around a local axis
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Euler rate in degrees per second
    pub degrees_per_second: Vec3,
}

impl Spinner {
    /// Spin about the local up axis
    pub fn yaw(degrees_per_second: f32) -> Self {
        Self {
            degrees_per_second: Vec3::new(0.0, degrees_per_second, 0.0),
        }
    }

    /// Rotate `transform` by one step
    pub fn apply(&self, transform: &mut Transform, dt: f32) {
        transform.rotate_local(self.degrees_per_second * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_reverses_at_end() {
        let start = Vec3::new(-30.0, 32.0, 5.0);
        let end = Vec3::new(-23.0, 32.0, 5.0);
        let mut mover = PingPongLerp::new(start, end, 0.5);

        let halfway = mover.advance(1.0);
        assert_relative_eq!(halfway, Vec3::new(-26.5, 32.0, 5.0), epsilon = 1e-4);
        assert!(mover.is_forward());

        let flipped = mover.advance(1.0);
        assert!(!mover.is_forward());
        assert_relative_eq!(flipped, end, epsilon = 1e-4);

        let back = mover.advance(1.0);
        assert_relative_eq!(back, Vec3::new(-26.5, 32.0, 5.0), epsilon = 1e-4);
    }

    #[test]
    fn test_catmull_starts_on_second_point() {
        let points = [
            Vec3::new(55.0, 3.0, 5.0),
            Vec3::new(42.0, 5.0, 5.0),
            Vec3::new(32.0, -5.0, 5.0),
            Vec3::new(35.0, -10.0, 5.0),
        ];
        let mut mover = PingPongCatmull::new(points, 0.25);

        assert_relative_eq!(mover.position(), points[1], epsilon = 1e-4);

        mover.advance(4.0);
        assert!(!mover.is_forward());
        assert_relative_eq!(mover.position(), points[2], epsilon = 1e-4);
    }

    #[test]
    fn test_spinner_rotates_by_rate() {
        let mut transform = Transform::identity();
        let spinner = Spinner::yaw(100.0);

        spinner.apply(&mut transform, 0.9);

        assert_relative_eq!(transform.rotation.angle(), utils::deg_to_rad(90.0), epsilon = 1e-4);
    }
}
