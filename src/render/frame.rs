use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::PathPrimitive;

/// Backend-agnostic scene for one graph draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        for path in &self.paths {
            path.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.paths.iter().map(|path| path.commands.len()).sum()
    }
}
