use glam::{EulerRot, Mat3, Mat4, Quat, Vec3, Vec4};

/// Affine transform split into translate/rotate/shear/scale factors.
///
/// Column-vector convention: `recompose` rebuilds `T * R * Sh * S`, where
/// `Sh` is unit upper-triangular with `shear = (xy, xz, yz)`. For any
/// invertible affine input, `recompose(&decompose(&m))` reproduces `m`
/// within floating-point tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParts {
    pub translate: Vec3,
    /// XYZ Euler angles in radians.
    pub rotate: Vec3,
    pub shear: Vec3,
    pub scale: Vec3,
}

pub fn decompose(m: &Mat4) -> TransformParts {
    let translate = m.w_axis.truncate();

    let mut col0 = m.x_axis.truncate();
    let mut col1 = m.y_axis.truncate();
    let mut col2 = m.z_axis.truncate();

    let mut scale = Vec3::ZERO;
    let mut shear = Vec3::ZERO;

    scale.x = col0.length();
    if scale.x != 0.0 {
        col0 /= scale.x;
    } else {
        // Collapsed axis: no direction left to recover, pick a stable one.
        col0 = Vec3::X;
    }

    let xy = col0.dot(col1);
    col1 -= xy * col0;
    scale.y = col1.length();
    if scale.y != 0.0 {
        col1 /= scale.y;
        shear.x = xy / scale.y;
    } else {
        col1 = col0.any_orthonormal_vector();
    }

    let xz = col0.dot(col2);
    col2 -= xz * col0;
    let yz = col1.dot(col2);
    col2 -= yz * col1;
    scale.z = col2.length();
    if scale.z != 0.0 {
        col2 /= scale.z;
        shear.y = xz / scale.z;
        shear.z = yz / scale.z;
    } else {
        col2 = col0.cross(col1);
    }

    // A reflection cannot live in the rotation factor. Fold it into the
    // scale on all three axes; the compensating half-turn lands in the
    // Euler angles below.
    if col0.dot(col1.cross(col2)) < 0.0 {
        scale = -scale;
        col0 = -col0;
        col1 = -col1;
        col2 = -col2;
    }

    let (rx, ry, rz) = Quat::from_mat3(&Mat3::from_cols(col0, col1, col2)).to_euler(EulerRot::XYZ);

    TransformParts { translate, rotate: Vec3::new(rx, ry, rz), shear, scale }
}

pub fn recompose(parts: &TransformParts) -> Mat4 {
    let shear = Mat4::from_cols(
        Vec4::X,
        Vec4::new(parts.shear.x, 1.0, 0.0, 0.0),
        Vec4::new(parts.shear.y, parts.shear.z, 1.0, 0.0),
        Vec4::W,
    );
    Mat4::from_translation(parts.translate)
        * Mat4::from_euler(EulerRot::XYZ, parts.rotate.x, parts.rotate.y, parts.rotate.z)
        * shear
        * Mat4::from_scale(parts.scale)
}

/// Rebuilds `m` with every scale component replaced by its sign.
///
/// Translate, rotate and shear pass through untouched, so the result keeps
/// the orientation of a mirrored transform without any of its magnitude.
/// A zero scale component maps to +1: a collapsed axis carries no
/// orientation cue, and +1 keeps the rebuilt basis drawable.
pub fn sign_only_scaling(m: &Mat4) -> Mat4 {
    let mut parts = decompose(m);
    parts.scale = Vec3::new(sign(parts.scale.x), sign(parts.scale.y), sign(parts.scale.z));
    recompose(&parts)
}

fn sign(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
