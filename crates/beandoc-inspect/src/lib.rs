//! Bean-property discovery for beandoc.
//!
//! Classes expose "bean-style" properties through setter methods following
//! the `setX` naming convention. This crate walks a class hierarchy, matches
//! methods against the setter/getter conventions, and produces typed,
//! documented property descriptors. It reads the class model and nothing
//! else: no I/O, no rendering, no shared state.

use beandoc_model::{ClassId, ClassStore};

mod engine;
pub mod inspectors;

pub use engine::{
    capitalize, decapitalize, find_getter, find_properties, find_setter, is_getter, is_setter,
    methods, superclass_chain, Property,
};

/// Per-document-type capability contract.
///
/// Each implementation identifies the base type its target classes must
/// realize, the template used to render them, and how a documentation page
/// name is derived from class metadata. All three operations are pure and
/// order-independent.
pub trait Inspector: Send + Sync {
    /// Fully-qualified name of the base type all target classes must extend
    /// or implement.
    fn base_class_name(&self) -> &str;

    /// Identifier of the template resource used to render matched classes.
    fn template(&self) -> &str;

    /// Derives a stable documentation page name from a class's metadata.
    fn page_name(&self, store: &ClassStore, class: ClassId) -> String;
}

/// Explicit registration table of inspector implementations.
///
/// Inspectors are registered at startup by the orchestrator; there is no
/// runtime service discovery.
#[derive(Default)]
pub struct InspectorRegistry {
    inspectors: Vec<Box<dyn Inspector>>,
}

impl InspectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in document types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(inspectors::DetectorInspector));
        registry.register(Box::new(inspectors::MonitorInspector));
        registry
    }

    pub fn register(&mut self, inspector: Box<dyn Inspector>) {
        self.inspectors.push(inspector);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Inspector> {
        self.inspectors.iter().map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }
}
