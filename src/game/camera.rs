// Third-person camera that trails the player

use glam::{Mat4, Vec2, Vec3};

/// Base offset above and behind the player, scaled by zoom
const FOLLOW_OFFSET: f32 = 5.0;
const MIN_ZOOM: f32 = 0.1;

const FOV_Y_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

/// Perspective camera that keeps the player in view from above and behind
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// 1.0 = default distance, larger pulls the camera back
    pub zoom: f32,
    eye: Vec3,
    target: Vec3,
    /// Viewport size in physical pixels
    viewport: Vec2,
}

impl FollowCamera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            zoom: 1.0,
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            viewport: Vec2::ONE,
        };
        camera.resize(viewport_width, viewport_height);
        camera.follow(Vec3::ZERO);
        camera
    }

    /// Reposition relative to the player. The camera stays on the X = 0 plane.
    pub fn follow(&mut self, player_position: Vec3) {
        let offset = FOLLOW_OFFSET * self.zoom;
        self.eye = Vec3::new(0.0, offset, player_position.z + offset);
        self.target = Vec3::new(0.0, player_position.y, player_position.z);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect(), NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Point on the ground plane (y = 0) under a cursor position in pixels.
    /// `None` when the ray through the cursor never reaches the ground.
    pub fn screen_to_ground(&self, cursor: Vec2) -> Option<Vec3> {
        let ndc = Vec2::new(
            2.0 * cursor.x / self.viewport.x - 1.0,
            1.0 - 2.0 * cursor.y / self.viewport.y,
        );
        let inverse = self.view_proj_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));

        let ray = far - near;
        if ray.y.abs() < f32::EPSILON {
            return None;
        }
        let t = -near.y / ray.y;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(near + ray * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_follows_player() {
        let mut camera = FollowCamera::new(1280.0, 720.0);
        camera.follow(Vec3::new(3.0, 0.0, 25.0));

        assert_eq!(camera.eye, Vec3::new(0.0, 5.0, 30.0));
        assert_eq!(camera.target, Vec3::new(0.0, 0.0, 25.0));
    }

    #[test]
    fn test_zoom_scales_offset() {
        let mut camera = FollowCamera::new(1280.0, 720.0);
        camera.set_zoom(2.0);
        camera.follow(Vec3::ZERO);
        assert_eq!(camera.eye, Vec3::new(0.0, 10.0, 10.0));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = FollowCamera::new(1280.0, 720.0);
        camera.set_zoom(-3.0);
        assert_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let mut camera = FollowCamera::new(1280.0, 720.0);
        camera.follow(Vec3::new(0.0, 0.0, 12.0));

        let clip = camera.view_proj_matrix() * camera.target.extend(1.0);
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_click_on_screen_centre_hits_the_player_spot() {
        let mut camera = FollowCamera::new(1280.0, 720.0);
        camera.follow(Vec3::new(0.0, 0.0, 12.0));

        let ground = camera.screen_to_ground(Vec2::new(640.0, 360.0)).unwrap();
        assert_abs_diff_eq!(ground.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ground.y, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(ground.z, 12.0, epsilon = 1e-3);
    }

    #[test]
    fn test_click_below_centre_is_nearer_the_camera() {
        let mut camera = FollowCamera::new(1280.0, 720.0);
        camera.follow(Vec3::new(0.0, 0.0, 12.0));

        let ground = camera.screen_to_ground(Vec2::new(900.0, 600.0)).unwrap();
        assert!(ground.z > 12.0);
        assert!(ground.x > 0.0);
    }

    #[test]
    fn test_zero_sized_viewport_keeps_aspect() {
        let mut camera = FollowCamera::new(800.0, 400.0);
        camera.resize(0.0, 0.0);
        assert_eq!(camera.aspect(), 2.0);
        assert!(camera.projection_matrix().is_finite());
    }
}
