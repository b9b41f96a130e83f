use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::projection::Projection;

/// Constant angular velocity about a fixed axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    /// Radians per second.
    pub speed: f32,
    /// Rotation axis; normalized when the rotation is built.
    pub axis: Vec3,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            speed: 1.0,
            axis: Vec3::new(0.5, 1.0, 0.0),
        }
    }
}

impl Spin {
    /// Rotation covering `dt` seconds.
    ///
    /// A zero-length axis yields the identity.
    pub fn rotation(&self, dt: f32) -> Mat4 {
        match self.axis.try_normalize() {
            Some(axis) => Mat4::from_axis_angle(axis, self.speed * dt),
            None => Mat4::IDENTITY,
        }
    }
}

/// Model, view and projection matrices for the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformState {
    pub model: Mat4,
    view: Mat4,
    projection: Mat4,
}

impl TransformState {
    /// Identity model, camera looking down -Z from `eye_offset` applied as a view translation.
    pub fn new(eye_offset: Vec3, projection: &Projection) -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::from_translation(eye_offset),
            projection: projection.matrix(),
        }
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Replaces the projection (used when the projection tracks the window).
    pub fn set_projection(&mut self, projection: &Projection) {
        self.projection = projection.matrix();
    }

    /// Composes one rotation increment onto the model matrix.
    ///
    /// The rotation is applied in object space (`model * R`), so the
    /// orientation depends only on the accumulated time.
    pub fn advance(&mut self, spin: &Spin, dt: f32) {
        self.model *= spin.rotation(dt);
    }

    pub fn uniform(&self) -> TransformUniform {
        TransformUniform {
            model: self.model.to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
        }
    }
}

/// GPU layout of the `Transforms` uniform block in `cube.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn state() -> TransformState {
        TransformState::new(Vec3::new(0.0, 0.0, -3.0), &Projection::default())
    }

    #[test]
    fn rotations_about_fixed_axis_compose() {
        let spin = Spin::default();
        let (a, b) = (0.3f32, 1.1f32);

        let composed = spin.rotation(a) * spin.rotation(b);
        assert!(composed.abs_diff_eq(spin.rotation(a + b), EPS));
    }

    #[test]
    fn zero_delta_frames_leave_model_unchanged() {
        let spin = Spin::default();
        let mut t = state();
        t.advance(&spin, 0.7);
        let before = t.model;

        for _ in 0..100 {
            t.advance(&spin, 0.0);
        }

        assert!(t.model.abs_diff_eq(before, EPS));
    }

    #[test]
    fn one_second_frame_rotates_one_radian() {
        let spin = Spin::default();
        let mut t = state();
        let initial = t.model;

        t.advance(&spin, 1.0);

        let axis = Vec3::new(0.5, 1.0, 0.0).normalize();
        let expected = initial * Mat4::from_axis_angle(axis, 1.0);
        assert!(t.model.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn accumulated_frames_match_total_time() {
        let spin = Spin::default();
        let mut t = state();

        for _ in 0..60 {
            t.advance(&spin, 1.0 / 60.0);
        }

        assert!(t.model.abs_diff_eq(spin.rotation(1.0), 1e-4));
    }

    #[test]
    fn speed_scales_the_angle() {
        let slow = Spin::default();
        let fast = Spin { speed: 2.0, ..slow };
        assert!(fast.rotation(0.5).abs_diff_eq(slow.rotation(1.0), EPS));
    }

    #[test]
    fn degenerate_axis_is_identity() {
        let spin = Spin { speed: 1.0, axis: Vec3::ZERO };
        assert_eq!(spin.rotation(1.0), Mat4::IDENTITY);
    }

    #[test]
    fn view_moves_cube_back() {
        let t = state();
        let p = t.view().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPS));
    }

    #[test]
    fn advancing_does_not_touch_view_or_projection() {
        let mut t = state();
        let (view, projection) = (t.view(), t.projection());
        t.advance(&Spin::default(), 2.0);
        assert_eq!(t.view(), view);
        assert_eq!(t.projection(), projection);
    }

    #[test]
    fn uniform_block_is_three_matrices() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 192);

        let t = state();
        let u = t.uniform();
        assert_eq!(u.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(u.projection, t.projection().to_cols_array_2d());
    }
}
