use glam::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Right-handed perspective with wgpu's [0, 1] clip depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Returns a copy with the aspect ratio of a `width` x `height` target.
    ///
    /// Zero-sized targets keep the current aspect.
    pub fn with_target_size(self, width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return self;
        }
        Self {
            aspect: width as f32 / height as f32,
            ..self
        }
    }
}

/// How the projection reacts to window resizes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ProjectionPolicy {
    /// Keep the aspect ratio chosen at startup; resized windows stretch the image.
    #[default]
    Fixed,
    /// Recompute the aspect ratio from the new drawable size.
    TrackWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_projection_matches_reference() {
        let fovy = 45.0f32.to_radians();
        let aspect = 800.0f32 / 600.0;
        let (near, far) = (0.1f32, 100.0f32);
        let f = 1.0 / (fovy / 2.0).tan();

        #[rustfmt::skip]
        let reference = Mat4::from_cols_array(&[
            f / aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, far / (near - far), -1.0,
            0.0, 0.0, near * far / (near - far), 0.0,
        ]);

        assert!(Projection::default().matrix().abs_diff_eq(reference, 1e-5));
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let m = Projection::default().matrix();

        let near = m.project_point3(glam::Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point3(glam::Vec3::new(0.0, 0.0, -100.0));

        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn target_size_updates_aspect() {
        let p = Projection::default().with_target_size(1920, 1080);
        assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(p.fov_y_degrees, 45.0);
    }

    #[test]
    fn zero_sized_target_keeps_aspect() {
        let p = Projection::default().with_target_size(0, 600);
        assert_eq!(p, Projection::default());
    }
}
