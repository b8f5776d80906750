//! Generation entry point.

use contractgen_codegen::generation::FileRegistry;
use contractgen_model::{TypeId, TypeModel};
use tracing::{debug, info};

use crate::{
    config::GeneratorConfig,
    error::Result,
    hooks::TypeOverride,
    planner::{self, PlannedFile},
    render::Renderer,
    unit::{Unit, UnitRegistry},
    walker::Walker,
};

/// Output of one generation run.
#[derive(Debug)]
pub struct Generation {
    /// Units in first-reserved order.
    pub units: Vec<Unit>,
    pub files: Vec<PlannedFile>,
}

impl Generation {
    /// Collect the planned files into a registry ready to be written.
    pub fn registry(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();
        registry.register_all(self.files.iter().map(PlannedFile::entry));
        registry
    }

    pub fn file(&self, path: &str) -> Option<&PlannedFile> {
        self.files.iter().find(|file| file.path == path)
    }
}

/// TypeScript contract generator.
///
/// # Example
///
/// ```
/// use contractgen_codegen_typescript::{Generator, GeneratorConfig};
/// use contractgen_model::{ComplexType, Member, PrimitiveKind, TypeModel};
///
/// let mut model = TypeModel::new();
/// let int = model.primitive(PrimitiveKind::Integer);
/// let user = model.complex(ComplexType::new("User").member(Member::new("Id", int)));
///
/// let generation = Generator::new(GeneratorConfig::new())
///     .generate(&model, &[user])
///     .unwrap();
///
/// assert_eq!(generation.files[0].path, "user.ts");
/// assert!(generation.files[0].content.ends_with("export type User = {\n    id: number;\n};\n"));
/// ```
#[derive(Default)]
pub struct Generator {
    config: GeneratorConfig,
    hook: Option<Box<dyn TypeOverride>>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, hook: None }
    }

    /// Install a hook consulted before every conversion.
    pub fn with_override(mut self, hook: impl TypeOverride + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Walk the model from `roots` and return the completed units.
    pub fn convert(&self, model: &TypeModel, roots: &[TypeId]) -> Result<Vec<Unit>> {
        debug!(roots = roots.len(), types = model.len(), "Converting type model.");
        let mut walker = Walker::new(model, &self.config, UnitRegistry::new());
        if let Some(hook) = self.hook.as_deref() {
            walker = walker.with_override(hook);
        }
        walker.walk(roots)
    }

    /// Convert, then plan the output files.
    pub fn generate(&self, model: &TypeModel, roots: &[TypeId]) -> Result<Generation> {
        let units = self.convert(model, roots)?;
        let files = planner::plan(&units, &self.config);
        info!(units = units.len(), files = files.len(), "Planned TypeScript output.");
        Ok(Generation { units, files })
    }

    /// Render a single unit's declaration.
    pub fn render_unit(&self, unit: &Unit) -> String {
        Renderer::new(self.config.indent).render_declaration(&unit.declaration)
    }
}
