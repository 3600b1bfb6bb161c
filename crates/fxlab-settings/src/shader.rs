//! Hook into the shader baking pipeline.
//!
//! Switching the legacy-shaders preference invalidates every baked shader,
//! so the coordinator has to tell the pipeline to rebuild. The pipeline
//! itself lives in another crate; [`ShaderManager`] is the seam it plugs
//! into.

/// Receiver for shader invalidation triggered by preference changes.
pub trait ShaderManager {
    /// Re-tags baked shaders with the target shader version.
    fn update_baked_versions(&mut self);

    /// Rebakes the current effect from scratch.
    fn rebake(&mut self);
}

/// Manager that ignores every trigger.
///
/// Useful for tools that load settings without running the render
/// pipeline, and as a test stand-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopShaderManager;

impl ShaderManager for NoopShaderManager {
    fn update_baked_versions(&mut self) {}

    fn rebake(&mut self) {}
}
