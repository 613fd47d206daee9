//! Offset-row hex layout for the arena map

use super::types::Tile;

/// A 2D position in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Transform from axial `(q, r)` tile coordinates to pixel-space centers.
///
/// Rows tile like bricks: every odd row is shifted right by half a hex, the
/// horizontal step is `1.5 * size` and the vertical step is
/// `sqrt(3) / 2 * size` for hexes of circumradius `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    size: f32,
}

impl HexLayout {
    /// Creates a layout for hexes of the given circumradius.
    /// `size` must be positive.
    pub fn new(size: f32) -> Self {
        debug_assert!(size > 0.0);
        Self { size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Center of the tile at `(q, r)`.
    ///
    /// The odd-row shift depends on the parity of `r`, not its sign:
    /// `rem_euclid` keeps the remainder in `{0, 1}` for negative rows.
    pub fn center(&self, q: i32, r: i32) -> PixelPos {
        let x_offset = self.size * 1.5;
        let y_offset = self.size * 3.0_f32.sqrt() / 2.0;
        let parity = r.rem_euclid(2) as f32;
        PixelPos::new(
            q as f32 * x_offset + parity * self.size / 2.0,
            r as f32 * y_offset,
        )
    }

    /// Vertex ring of the hexagon around the tile at `(q, r)`.
    pub fn corners(&self, q: i32, r: i32) -> [PixelPos; 6] {
        hex_corners(self.center(q, r), self.size)
    }

    /// Bounding box of the tile centers, or `None` for an empty map.
    pub fn bounds(&self, tiles: &[Tile]) -> Option<(PixelPos, PixelPos)> {
        let mut centers = tiles.iter().map(|t| self.center(t.q, t.r));
        let first = centers.next()?;
        let (mut min, mut max) = (first, first);
        for p in centers {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}

/// The 6 corners of a regular hexagon with a horizontal top edge: vertices
/// sit at angles `60 * i` degrees from the +x axis.
pub fn hex_corners(center: PixelPos, radius: f32) -> [PixelPos; 6] {
    let mut corners = [center; 6];
    for (i, corner) in corners.iter_mut().enumerate() {
        let angle = std::f32::consts::FRAC_PI_3 * i as f32;
        *corner = PixelPos::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
    }
    corners
}

/// Whether `p` lies inside the convex hexagon described by `corners`.
pub fn hex_contains(corners: &[PixelPos; 6], p: PixelPos) -> bool {
    let mut sign = 0.0_f32;
    for i in 0..6 {
        let a = corners[i];
        let b = corners[(i + 1) % 6];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return false;
        }
    }
    true
}
