use crate::RenderPoint;

/// Ratio of the segment length the flight corridor extends past each marked
/// endpoint.
pub const DEFAULT_EXTENSION: f64 = 0.3;

/// Tolerance on the rooted discriminant under which the two quadratic roots
/// are treated as one tangent point.
const TANGENT_EPS: f64 = 1e-3;

/// An intersection between a line and a circle, with its parametric position
/// along the segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: RenderPoint,
    pub t: f64,
}

/// Intersect the line through `p1`/`p2` with the circle at `center`, keeping
/// roots whose parameter lies within `[-extension, 1 + extension]`.
///
/// Solves `a t^2 + b t + c = 0` for `P(t) = p1 + t (p2 - p1)`. A negative
/// discriminant or a zero-length segment yields no intersections; both are
/// ordinary outcomes, not errors. Results come back in ascending `t` order,
/// never more than two.
pub fn line_circle_intersections(
    p1: RenderPoint,
    p2: RenderPoint,
    center: RenderPoint,
    radius: f64,
    extension: f64,
) -> Vec<Intersection> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let fx = p1.x - center.x;
    let fy = p1.y - center.y;

    let a = dx * dx + dy * dy;
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - radius * radius;

    if a == 0.0 {
        return Vec::new();
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);

    let lo = -extension;
    let hi = 1.0 + extension;

    let mut intersections = Vec::new();
    if t1 >= lo && t1 <= hi {
        intersections.push(Intersection {
            point: point_at(p1, dx, dy, t1),
            t: t1,
        });
    }
    // Near-zero discriminant means the line is tangent; the second root is
    // the same point and is suppressed.
    if root > TANGENT_EPS && t2 >= lo && t2 <= hi {
        intersections.push(Intersection {
            point: point_at(p1, dx, dy, t2),
            t: t2,
        });
    }

    intersections
}

fn point_at(p1: RenderPoint, dx: f64, dy: f64, t: f64) -> RenderPoint {
    RenderPoint {
        x: p1.x + t * dx,
        y: p1.y + t * dy,
    }
}
