//! Camera model and projection matrices.
//!
//! A camera is a scene node payload holding viewport dimensions, clipping
//! planes and a projection. Perspective cameras carry a vertical field of
//! view; orthographic cameras project the viewport in screen space with
//! fixed -1/1 depth planes, which is what overlay-style rendering expects.

use cgmath::{ortho, perspective, Deg, Matrix4, SquareMatrix};

/// Default vertical field of view for perspective cameras, in degrees.
pub const DEFAULT_FOV_Y_DEG: f32 = 45.0;

/// Projection kind of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in degrees.
    Perspective { fov_y_deg: f32 },
    /// Screen-space orthographic projection over the viewport.
    Orthographic,
}

/// A viewpoint with viewport dimensions and clipping planes.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    width: u32,
    height: u32,
    near: f32,
    far: f32,
    projection: Projection,
}

impl Camera {
    /// Creates a perspective camera.
    ///
    /// # Arguments
    /// * `width`, `height` - Viewport dimensions in pixels
    /// * `near`, `far` - Clipping plane distances
    /// * `fov_y_deg` - Vertical field of view in degrees
    pub fn perspective(width: u32, height: u32, near: f32, far: f32, fov_y_deg: f32) -> Self {
        Self {
            width,
            height,
            near,
            far,
            projection: Projection::Perspective { fov_y_deg },
        }
    }

    /// Creates an orthographic camera over the viewport.
    ///
    /// Depth planes are pinned to -1/1, matching the screen-space use of
    /// orthographic projection for overlays.
    pub fn orthographic(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            near: -1.0,
            far: 1.0,
            projection: Projection::Orthographic,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Vertical field of view in degrees, for perspective cameras.
    pub fn fov_y_deg(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fov_y_deg } => Some(fov_y_deg),
            Projection::Orthographic => None,
        }
    }

    /// Changes the field of view. Ignored for orthographic cameras.
    pub fn set_fov_y_deg(&mut self, fov: f32) {
        if let Projection::Perspective { fov_y_deg } = &mut self.projection {
            *fov_y_deg = fov;
        }
    }

    /// Adjusts the camera to a resized viewport, preserving the field of
    /// view and recomputing the aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Builds the projection matrix for the current viewport.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let width = self.width.max(1) as f32;
        let height = self.height.max(1) as f32;
        match self.projection {
            Projection::Perspective { fov_y_deg } => {
                perspective(Deg(fov_y_deg), width / height, self.near, self.far)
            }
            Projection::Orthographic => ortho(0.0, width, 0.0, height, -1.0, 1.0),
        }
    }

    /// Inverts a camera node's world transform into a view matrix.
    ///
    /// Falls back to the identity when the transform is singular.
    pub fn view_from_transform(transform: Matrix4<f32>) -> Matrix4<f32> {
        transform.invert().unwrap_or_else(Matrix4::identity)
    }
}
