use crate::foundation::core::{Point, Vec2};

/// FNV-1a 64 hasher used for stable, platform-independent ids.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Direction of `delta` in degrees, `0` pointing along +x and growing clockwise on screen.
pub(crate) fn angle_deg(delta: Vec2) -> f64 {
    if delta.hypot2() <= f64::EPSILON {
        return 0.0;
    }
    delta.atan2().to_degrees()
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    a.lerp(b, t)
}
