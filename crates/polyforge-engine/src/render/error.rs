use core::fmt;

/// Shader stage a compile diagnostic refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failures that abort renderer construction.
///
/// None of these are retried; the caller decides whether to exit.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    /// No surface, adapter or device could be obtained for the window.
    #[error("GPU context unavailable: {0}")]
    ContextUnavailable(String),

    /// A shader stage failed to parse or validate. `log` holds the
    /// compiler diagnostic.
    #[error("{stage} shader failed to compile:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    /// The stages compiled but do not form a usable program.
    #[error("shader program failed to link:\n{log}")]
    ProgramLink { log: String },
}
