use std::f64::consts::TAU;

use glam::{Mat4, Vec3};

use super::Uniforms;

/// Fixed per-frame increments of the animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationParams {
    /// Simulated seconds added per rendered frame.
    pub timestep: f64,

    /// Radians added to the Z rotation per rendered frame.
    pub rotation_step: f64,

    /// Peak deviation of the pulse around a scale of 1.0. Must stay below 1.
    pub pulse_amplitude: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            rotation_step: 0.02,
            pulse_amplitude: 0.2,
        }
    }
}

/// Frame-counted animation state.
///
/// Time advances by `timestep` per call to [`advance`](Self::advance) no matter
/// how long the frame really took, so the motion is a function of the frame
/// count alone. Accumulators are `f64`; only the uploaded values are `f32`.
#[derive(Debug, Clone)]
pub struct Animation {
    params: AnimationParams,
    elapsed: f64,
    rotation: f64,
    frames: u64,
}

impl Animation {
    pub fn new(params: AnimationParams) -> Self {
        debug_assert!(
            params.pulse_amplitude.abs() < 1.0,
            "pulse amplitude {} would collapse the transform",
            params.pulse_amplitude
        );
        Self {
            params,
            elapsed: 0.0,
            rotation: 0.0,
            frames: 0,
        }
    }

    /// Simulated seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Accumulated rotation in radians, not wrapped.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Number of `advance` calls so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Current pulse factor, `1 + sin(elapsed) * amplitude`.
    pub fn scale(&self) -> f64 {
        1.0 + self.elapsed.sin() * self.params.pulse_amplitude
    }

    /// Model transform: rotate about Z, then scale X/Y (column vectors).
    pub fn transform(&self) -> Mat4 {
        let scale = self.scale() as f32;
        let angle = self.rotation.rem_euclid(TAU) as f32;

        Mat4::IDENTITY * Mat4::from_rotation_z(angle) * Mat4::from_scale(Vec3::new(scale, scale, 1.0))
    }

    /// Uniform block for the current state.
    pub fn uniforms(&self) -> Uniforms {
        Uniforms::new(self.transform(), self.elapsed as f32, self.scale() as f32)
    }

    /// Steps one frame forward and returns the block to upload.
    pub fn advance(&mut self) -> Uniforms {
        self.elapsed += self.params.timestep;
        self.rotation += self.params.rotation_step;
        self.frames += 1;
        self.uniforms()
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(AnimationParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec4;

    const EPS: f64 = 1e-6;

    fn run(frames: u64) -> Animation {
        let mut anim = Animation::default();
        for _ in 0..frames {
            anim.advance();
        }
        anim
    }

    #[test]
    fn starts_at_identity() {
        let anim = Animation::default();
        assert_eq!(anim.scale(), 1.0);
        assert_eq!(anim.transform(), Mat4::IDENTITY);
        assert_eq!(anim.uniforms().elapsed_time, 0.0);
    }

    #[test]
    fn elapsed_and_rotation_follow_frame_count() {
        for n in [1, 2, 59, 60, 61, 600, 3600] {
            let anim = run(n);
            assert!((anim.elapsed() - n as f64 / 60.0).abs() < EPS, "elapsed at {n}");
            assert!((anim.rotation() - 0.02 * n as f64).abs() < EPS, "rotation at {n}");
            assert_eq!(anim.frames(), n);
        }
    }

    #[test]
    fn scale_stays_in_pulse_envelope() {
        let mut anim = Animation::default();
        for n in 1..=2000u64 {
            let u = anim.advance();
            let expected = 1.0 + (n as f64 / 60.0).sin() * 0.2;
            assert!((u.scale as f64 - expected).abs() < 1e-5, "scale at {n}");
            assert!((0.8..=1.2).contains(&u.scale), "scale {} at {n}", u.scale);
        }
    }

    #[test]
    fn transform_rotates_then_scales() {
        let anim = run(30);
        let angle = 0.6f32;
        let s = (1.0 + (0.5f64).sin() * 0.2) as f32;

        // Unit X lands on the rotated axis, stretched by the pulse.
        let p = anim.transform() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - s * angle.cos()).abs() < 1e-5);
        assert!((p.y - s * angle.sin()).abs() < 1e-5);
        assert_eq!(p.z, 0.0);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn transform_is_never_degenerate() {
        let mut anim = Animation::default();
        for _ in 0..1000 {
            let det = anim.advance().transform().determinant();
            // det = scale^2 with scale in [0.8, 1.2].
            assert!(det >= 0.8 * 0.8 - 1e-4, "det {det}");
        }
    }

    #[test]
    fn seventy_five_frames() {
        let anim = run(75);
        let u = anim.uniforms();

        assert!((u.elapsed_time - 1.25).abs() < 1e-5);
        assert!((anim.rotation().rem_euclid(TAU) - 1.5).abs() < EPS);
        assert!((u.scale - 1.189_796).abs() < 1e-4);
    }

    #[test]
    fn long_runs_keep_rotation_precision() {
        let anim = run(100_000);
        let expected = (0.02 * 100_000.0f64).rem_euclid(TAU) as f32;
        let p = anim.transform() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        let s = anim.scale() as f32;
        assert!((p.x - s * expected.cos()).abs() < 1e-4);
        assert!((p.y - s * expected.sin()).abs() < 1e-4);
    }
}
