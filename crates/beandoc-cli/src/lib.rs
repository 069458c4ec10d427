//! Orchestration for beandoc.
//!
//! Drives every registered inspector over a loaded class model: resolves the
//! inspector's base class, filters concrete classes that realize it, runs
//! property discovery, renders the inspector's template and hands the result
//! to a page sink.

use std::path::Path;

use beandoc_inspect::{find_properties, InspectorRegistry};
use beandoc_model::{extends_or_implements, ClassStore};
use beandoc_render::{PageContext, PageSink, RenderError, Template};
use tracing::{debug, error, warn};

/// Outcome of one documentation run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Page names published, in publication order.
    pub published: Vec<String>,
    /// Pages that failed to render or publish (logged, not fatal).
    pub failed: usize,
}

/// Runs every registered inspector over `store`.
///
/// An inspector whose base class is absent from the model is skipped with a
/// warning, matching the behavior of a model built from a partial source
/// tree. A page that fails to render or publish is logged and skipped; a
/// missing template is fatal.
pub fn run_inspections(
    store: &ClassStore,
    registry: &InspectorRegistry,
    templates: &Path,
    namespace: &str,
    sink: &mut dyn PageSink,
) -> Result<RunSummary, RenderError> {
    let mut summary = RunSummary::default();

    for inspector in registry.iter() {
        let base = inspector.base_class_name();
        debug!(base, "running inspector");

        if store.class_named(base).is_none() {
            warn!(base, "base class not found in model; skipping inspector");
            continue;
        }

        let template = Template::load(templates, inspector.template())?;

        for class in store.classes() {
            let data = store.class(class);
            debug!(class = %data.name, "processing class");

            if data.is_abstract || !extends_or_implements(store, class, base) {
                continue;
            }

            let page = format!("{namespace}:{}", inspector.page_name(store, class));
            let context = PageContext {
                page: page.clone(),
                class: data.simple_name().to_string(),
                qualified: data.name.clone(),
                properties: find_properties(store, class),
            };

            debug!(page = %page, "rendering page");
            match template
                .render(&context)
                .and_then(|text| sink.publish(&page, &text))
            {
                Ok(()) => summary.published.push(page),
                Err(err) => {
                    error!(page = %page, error = %err, "failed to render page");
                    summary.failed += 1;
                }
            }
        }
    }

    Ok(summary)
}
