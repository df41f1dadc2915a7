//! SIMD capability detection for the spectral primitive.

/// Best SIMD instruction set available on the current CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    /// No SIMD support beyond auto-vectorization.
    Scalar,
    /// SSE2 (x86/x86_64).
    Sse2,
    /// AVX2 (x86/x86_64).
    Avx2,
    /// NEON (ARM/AArch64).
    Neon,
}

impl SimdLevel {
    /// Detect the best available SIMD level for the current CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") {
                return SimdLevel::Avx2;
            }
            if is_x86_feature_detected!("sse2") {
                return SimdLevel::Sse2;
            }
        }

        #[cfg(target_arch = "x86")]
        {
            if is_x86_feature_detected!("sse2") {
                return SimdLevel::Sse2;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            return SimdLevel::Neon;
        }

        SimdLevel::Scalar
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SimdLevel::Scalar => "Scalar (no SIMD)",
            SimdLevel::Sse2 => "SSE2",
            SimdLevel::Avx2 => "AVX2",
            SimdLevel::Neon => "NEON",
        }
    }

    /// Whether the current hardware supports at least this level.
    pub fn is_supported(&self) -> bool {
        matches!(Self::detect(), level if level >= *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_returns_a_valid_level() {
        let level = SimdLevel::detect();
        assert!(matches!(
            level,
            SimdLevel::Scalar | SimdLevel::Sse2 | SimdLevel::Avx2 | SimdLevel::Neon
        ));
    }

    #[test]
    fn levels_are_ordered() {
        assert!(SimdLevel::Scalar <= SimdLevel::Sse2);
        assert!(SimdLevel::Sse2 <= SimdLevel::Avx2);
        assert!(SimdLevel::Avx2 >= SimdLevel::Sse2);
    }
}
