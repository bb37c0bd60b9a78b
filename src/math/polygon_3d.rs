use crate::geometry::{Plane, Point};

/// Projects a 3D point onto the UV coordinate system of a plane.
///
/// Returns `(u, v)` coordinates in inches.
#[must_use]
fn project_to_uv(point: &Point, plane: &Plane) -> (f64, f64) {
    let diff = point.as_vector() - plane.base_point().as_vector();
    let u = diff.dot(&plane.u_dir().as_vector());
    let v = diff.dot(&plane.v_dir().as_vector());
    (u, v)
}

/// Point-in-polygon test for a 3D point coplanar with the polygon.
///
/// Projects to the plane's UV coordinate space and uses the winding number
/// algorithm. Points exactly on the boundary may land on either side; callers
/// that need boundary inclusion check the edges first.
#[must_use]
pub fn point_in_polygon_3d(point: &Point, polygon: &[Point], plane: &Plane) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (px, py) = project_to_uv(point, plane);
    let uvs: Vec<(f64, f64)> = polygon.iter().map(|p| project_to_uv(p, plane)).collect();

    winding_number_2d(px, py, &uvs) != 0
}

/// Winding number of point `(px, py)` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number_2d(px: f64, py: f64, verts: &[(f64, f64)]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];

        if y0 <= py {
            if y1 > py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}
