//! Polyhedron geometry for the wireframe backdrop.
//!
//! Only what the backdrop needs: a small vector type and a subdivided icosahedron
//! reduced to unique vertices and unique edges, which is all a wireframe draws.

use std::collections::{BTreeSet, HashMap};

/// Point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self.scale(1.0 / len)
        }
    }

    /// Rotate by Euler angles in XYZ order (z is always zero for the backdrop)
    pub fn rotate_xy(self, angle_x: f64, angle_y: f64) -> Vec3 {
        let (sin_y, cos_y) = angle_y.sin_cos();
        let x1 = self.x * cos_y + self.z * sin_y;
        let z1 = -self.x * sin_y + self.z * cos_y;

        let (sin_x, cos_x) = angle_x.sin_cos();
        let y2 = self.y * cos_x - z1 * sin_x;
        let z2 = self.y * sin_x + z1 * cos_x;

        Vec3::new(x1, y2, z2)
    }
}

/// Vertex and edge lists of a wireframe mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeGeometry {
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
    face_count: usize,
}

impl WireframeGeometry {
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Unique undirected edges as vertex index pairs, lower index first
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Icosahedron of the given radius, each face split `detail` times into four.
    pub fn icosahedron(radius: f64, detail: u32) -> Self {
        let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let mut vertices: Vec<Vec3> = [
            (-1.0, t, 0.0),
            (1.0, t, 0.0),
            (-1.0, -t, 0.0),
            (1.0, -t, 0.0),
            (0.0, -1.0, t),
            (0.0, 1.0, t),
            (0.0, -1.0, -t),
            (0.0, 1.0, -t),
            (t, 0.0, -1.0),
            (t, 0.0, 1.0),
            (-t, 0.0, -1.0),
            (-t, 0.0, 1.0),
        ]
        .iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
        .collect();

        let mut faces: Vec<[usize; 3]> = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        for _ in 0..detail {
            faces = subdivide(&mut vertices, &faces);
        }

        for vertex in &mut vertices {
            *vertex = vertex.normalize().scale(radius);
        }

        let edges: BTreeSet<(usize, usize)> = faces
            .iter()
            .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();

        Self {
            vertices,
            edges: edges.into_iter().collect(),
            face_count: faces.len(),
        }
    }
}

/// Split every triangle into four, sharing midpoints between neighbours.
fn subdivide(vertices: &mut Vec<Vec3>, faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
    let mut midpoint = |a: usize, b: usize, vertices: &mut Vec<Vec3>| -> usize {
        let key = (a.min(b), a.max(b));
        *midpoints.entry(key).or_insert_with(|| {
            let mid = vertices[a].add(vertices[b]).scale(0.5).normalize();
            vertices.push(mid);
            vertices.len() - 1
        })
    };

    let mut out = Vec::with_capacity(faces.len() * 4);
    for &[a, b, c] in faces {
        let ab = midpoint(a, b, vertices);
        let bc = midpoint(b, c, vertices);
        let ca = midpoint(c, a, vertices);
        out.push([a, ab, ca]);
        out.push([ab, b, bc]);
        out.push([ca, bc, c]);
        out.push([ab, bc, ca]);
    }
    out
}
