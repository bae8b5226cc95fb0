//! Layout configuration and target architecture detection

/// The target architecture for vectorized consumers of padded layouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Architecture {
    /// Intel/AMD x86_64 with AVX-512 support
    X86WithAVX512,
    /// Intel/AMD x86_64 without AVX-512 support
    X86WithoutAVX512,
    /// ARM architecture with NEON support (e.g., Apple Silicon)
    ArmNeon,
    /// Generic implementation for any architecture
    Generic,
}

impl Architecture {
    /// Get the vector width in bytes for this architecture
    pub fn vector_width_bytes(&self) -> usize {
        match self {
            Architecture::X86WithAVX512 => 64,    // 512 bits
            Architecture::X86WithoutAVX512 => 32, // 256 bits (AVX2)
            Architecture::ArmNeon => 16,          // 128 bits
            Architecture::Generic => 8,           // Scalar
        }
    }

    /// Number of `T` lanes in one vector register, at least 1
    pub fn lanes_for<T>(&self) -> usize {
        let size = std::mem::size_of::<T>().max(1);
        (self.vector_width_bytes() / size).max(1)
    }
}

/// Configuration for the padded layouts
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Target architecture, used to derive the padding modulus
    pub architecture: Architecture,

    /// Explicit padding modulus
    /// If None, the lane count of the target architecture is used
    pub pad_modulo: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            architecture: detect_architecture(),
            pad_modulo: None,
        }
    }
}

impl LayoutConfig {
    /// Create a config for a specific architecture
    pub fn for_architecture(arch: Architecture) -> Self {
        Self {
            architecture: arch,
            pad_modulo: None,
        }
    }

    /// Override the padding modulus
    pub fn with_pad_modulo(mut self, modulo: usize) -> Self {
        self.pad_modulo = Some(modulo);
        self
    }

    /// Padding modulus for rows of `T`
    ///
    /// An explicit zero override is passed through unchanged and rejected by
    /// the conversion.
    pub fn pad_modulo_for<T>(&self) -> usize {
        self.pad_modulo
            .unwrap_or_else(|| self.architecture.lanes_for::<T>())
    }
}

/// Detects the current CPU architecture
pub fn detect_architecture() -> Architecture {
    #[cfg(all(target_arch = "aarch64", target_os = "macos"))]
    {
        // Apple Silicon always has NEON
        return Architecture::ArmNeon;
    }

    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(target_feature = "avx512f")]
        {
            return Architecture::X86WithAVX512;
        }
        #[cfg(not(target_feature = "avx512f"))]
        {
            // Runtime detection for x86
            if std::is_x86_feature_detected!("avx512f") {
                return Architecture::X86WithAVX512;
            } else {
                return Architecture::X86WithoutAVX512;
            }
        }
    }

    #[cfg(all(target_arch = "aarch64", not(target_os = "macos")))]
    {
        // Other ARM platforms with NEON
        return Architecture::ArmNeon;
    }

    // Fallback for other architectures
    #[allow(unreachable_code)]
    Architecture::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes() {
        assert_eq!(Architecture::X86WithAVX512.lanes_for::<f64>(), 8);
        assert_eq!(Architecture::X86WithoutAVX512.lanes_for::<f32>(), 8);
        assert_eq!(Architecture::ArmNeon.lanes_for::<i32>(), 4);
        assert_eq!(Architecture::Generic.lanes_for::<f64>(), 1);
        assert_eq!(Architecture::Generic.lanes_for::<[f64; 4]>(), 1);
    }

    #[test]
    fn test_pad_modulo_override() {
        let config = LayoutConfig::for_architecture(Architecture::X86WithoutAVX512);
        assert_eq!(config.pad_modulo_for::<f64>(), 4);

        let config = config.with_pad_modulo(16);
        assert_eq!(config.pad_modulo_for::<f64>(), 16);
        assert_eq!(config.pad_modulo_for::<i32>(), 16);
    }

    #[test]
    fn test_default_detects_architecture() {
        let config = LayoutConfig::default();
        assert_eq!(config.architecture, detect_architecture());
        assert!(config.pad_modulo_for::<f32>() >= 1);
    }
}
