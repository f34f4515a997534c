//! Scene description for the backdrop: one wireframe mesh, two lights, one camera.

use crate::background::geometry::{Vec3, WireframeGeometry};

/// Radius of the backdrop icosahedron.
pub const MESH_RADIUS: f64 = 1.5;
/// Subdivision level of the backdrop icosahedron.
pub const MESH_DETAIL: u32 = 1;
/// Radians added to the x and y rotation on every frame.
pub const ROTATION_STEP: f64 = 0.0005;

/// Straight-alpha colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (invisible) ..= 1.0 (opaque)
    pub alpha: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        alpha: 0.0,
    };

    /// `0xRRGGBB` with the given opacity
    pub const fn from_hex(hex: u32, alpha: f32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            alpha,
        }
    }

    /// Composite this colour over an opaque backdrop colour
    pub fn over(self, backdrop: (u8, u8, u8)) -> (u8, u8, u8) {
        let alpha = self.alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
        };
        (
            mix(self.r, backdrop.0),
            mix(self.g, backdrop.1),
            mix(self.b, backdrop.2),
        )
    }
}

/// Unlit material drawn as edges only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireMaterial {
    pub color: Rgba,
    pub wireframe: bool,
}

impl Default for WireMaterial {
    /// Semi-transparent slate gray
    fn default() -> Self {
        Self {
            color: Rgba::from_hex(0x4B5563, 0.6),
            wireframe: true,
        }
    }
}

/// Geometry, material and orientation.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: WireframeGeometry,
    pub material: WireMaterial,
    /// Euler angles in radians (x, y)
    pub rotation: (f64, f64),
}

impl Mesh {
    pub fn new(geometry: WireframeGeometry, material: WireMaterial) -> Self {
        Self {
            geometry,
            material,
            rotation: (0.0, 0.0),
        }
    }

    /// Advance the spin by one frame's worth
    pub fn step(&mut self) {
        self.rotation.0 += ROTATION_STEP;
        self.rotation.1 += ROTATION_STEP;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgba,
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgba,
    pub intensity: f64,
    /// Unit vector pointing at the light
    pub direction: Vec3,
}

/// Perspective camera on the z axis looking towards the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::default(),
        }
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` for points outside the near/far range.
    pub fn project(&self, point: Vec3) -> Option<(f64, f64)> {
        let view = point.sub(self.position);
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let focal = 1.0 / (self.fov.to_radians() / 2.0).tan();
        Some((
            focal / self.aspect * view.x / depth,
            focal * view.y / depth,
        ))
    }
}

/// A projected line in normalized device coordinates (`-1..=1`, y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Everything one frame puts on the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub segments: Vec<Segment>,
    pub color: Rgba,
}

/// The backdrop scene.
#[derive(Debug, Clone)]
pub struct Scene {
    pub mesh: Mesh,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub camera: PerspectiveCamera,
}

impl Scene {
    /// Wireframe icosahedron, dim ambient light, white key light, camera at z = 2
    pub fn backdrop(aspect: f64) -> Self {
        let mut camera = PerspectiveCamera::new(75.0, aspect, 0.1, 1000.0);
        camera.position = Vec3::new(0.0, 0.0, 2.0);

        Self {
            mesh: Mesh::new(
                WireframeGeometry::icosahedron(MESH_RADIUS, MESH_DETAIL),
                WireMaterial::default(),
            ),
            ambient: AmbientLight {
                color: Rgba::from_hex(0x404040, 1.0),
                intensity: 5.0,
            },
            directional: DirectionalLight {
                color: Rgba::from_hex(0xffffff, 1.0),
                intensity: 1.0,
                direction: Vec3::new(0.0, 1.0, 1.0).normalize(),
            },
            camera,
        }
    }

    /// Rotate the mesh vertices and project every edge through the camera.
    ///
    /// Edges with an endpoint outside the clip range are skipped. The material is unlit,
    /// so the lights do not change the output.
    pub fn render(&self) -> RenderedFrame {
        let (angle_x, angle_y) = self.mesh.rotation;
        let projected: Vec<Option<(f64, f64)>> = self
            .mesh
            .geometry
            .vertices()
            .iter()
            .map(|vertex| self.camera.project(vertex.rotate_xy(angle_x, angle_y)))
            .collect();

        let segments = self
            .mesh
            .geometry
            .edges()
            .iter()
            .filter_map(|&(a, b)| match (projected[a], projected[b]) {
                (Some(from), Some(to)) => Some(Segment { from, to }),
                _ => None,
            })
            .collect();

        RenderedFrame {
            segments,
            color: self.mesh.material.color,
        }
    }
}
