//! Math utilities and types
//!
//! Provides the vector, matrix and transform types used by gameplay code.

pub use nalgebra::{
    Vector2, Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Local axis a transform moves along when it moves "forward"
pub const LOCAL_FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Transform representing position, rotation, and scale
///
/// Gameplay treats `position` as the min corner of the entity's hitbox and
/// `scale` as its extent, so the same transform drives both collision and
/// the rendered world matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position, Euler angles in degrees and scale
    pub fn from_euler_degrees(position: Vec3, euler_degrees: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: utils::quat_from_euler_degrees(euler_degrees),
            scale,
        }
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Translate along the transform's own rotated axes
    ///
    /// Returns the world-space translation that was applied so callers can
    /// revert it exactly.
    pub fn move_local(&mut self, offset: Vec3) -> Vec3 {
        let world_offset = self.rotation * offset;
        self.position += world_offset;
        world_offset
    }

    /// Rotate by Euler angles (degrees) expressed in the local frame
    pub fn rotate_local(&mut self, euler_degrees: Vec3) {
        self.rotation *= utils::quat_from_euler_degrees(euler_degrees);
    }

    /// World-space direction of the local forward axis
    pub fn forward(&self) -> Vec3 {
        self.rotation * LOCAL_FORWARD
    }

    /// Copy position and rotation from another transform, keeping our scale
    pub fn snap_pose_to(&mut self, other: &Transform) {
        self.position = other.position;
        self.rotation = other.rotation;
    }

    /// Whether position and rotation match another transform within `epsilon`
    pub fn pose_eq(&self, other: &Transform, epsilon: f32) -> bool {
        (self.position - other.position).amax() <= epsilon
            && self.rotation.angle_to(&other.rotation) <= epsilon
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Quat, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Build a rotation from XYZ Euler angles in degrees
    pub fn quat_from_euler_degrees(euler_degrees: Vec3) -> Quat {
        Quat::from_euler_angles(
            deg_to_rad(euler_degrees.x),
            deg_to_rad(euler_degrees.y),
            deg_to_rad(euler_degrees.z),
        )
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Linear interpolation between two points
    pub fn lerp_vec3(a: &Vec3, b: &Vec3, t: f32) -> Vec3 {
        a * (1.0 - t) + b * t
    }

    /// Uniform Catmull-Rom interpolation between `p1` and `p2`
    pub fn catmull_rom(p0: &Vec3, p1: &Vec3, p2: &Vec3, p3: &Vec3, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        (p1 * 2.0
            + (p2 - p0) * t
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
            + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * t3)
            * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_transform_identity() {
        let transform = Transform::identity();

        assert_eq!(transform.position, Vec3::zeros());
        assert_relative_eq!(transform.rotation, Quat::identity(), epsilon = EPSILON);
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_move_local_follows_rotation() {
        // Tilted 90 degrees about X, the local forward axis lies in the XY plane
        let mut transform = Transform::from_euler_degrees(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        );

        let applied = transform.move_local(Vec3::new(0.0, 0.0, 2.0));

        assert_relative_eq!(applied, Vec3::new(0.0, -2.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(transform.position, Vec3::new(0.0, -2.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_local_yaw_stays_in_play_plane() {
        let mut transform = Transform::from_euler_degrees(
            Vec3::zeros(),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        );

        transform.rotate_local(Vec3::new(0.0, 90.0, 0.0));

        let forward = transform.forward();
        assert_relative_eq!(forward.z, 0.0, epsilon = EPSILON);
        assert_relative_eq!(forward, Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_to_matrix_applies_translation_and_scale() {
        let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::new(2.0, 3.0, 4.0));

        let point = transform.transform_point(Point3::new(1.0, 1.0, 1.0));

        assert_relative_eq!(point.coords, Vec3::new(3.0, 5.0, 7.0), epsilon = EPSILON);
    }

    #[test]
    fn test_snap_pose_keeps_scale() {
        let source = Transform::from_euler_degrees(
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(90.0, 30.0, 0.0),
            Vec3::new(3.0, 3.0, 3.0),
        );
        let mut target = Transform::identity();

        target.snap_pose_to(&source);

        assert!(target.pose_eq(&source, EPSILON));
        assert_eq!(target.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_lerp_and_catmull_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 1.0, 0.0);
        let p3 = Vec3::new(3.0, 1.0, 0.0);

        assert_relative_eq!(utils::lerp_vec3(&p1, &p2, 0.5), Vec3::new(1.5, 0.5, 0.0), epsilon = EPSILON);
        assert_relative_eq!(utils::catmull_rom(&p0, &p1, &p2, &p3, 0.0), p1, epsilon = EPSILON);
        assert_relative_eq!(utils::catmull_rom(&p0, &p1, &p2, &p3, 1.0), p2, epsilon = EPSILON);
        assert_relative_eq!(utils::lerp(2.0, 4.0, 0.25), 2.5, epsilon = EPSILON);
    }
}
