//! Template rendering and page publication for beandoc.
//!
//! Templates are plain text files with `{page}`, `{class}`, `{qualified}`
//! and `{properties}` placeholders; `{properties}` expands to a pre-rendered
//! MediaWiki table of discovered properties. Rendered pages go to a
//! [`PageSink`]: files on disk or stdout.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use beandoc_inspect::Property;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load template `{name}`: {source}")]
    Template {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("template substitution failed: {0}")]
    Format(#[from] strfmt::FmtError),
    #[error("failed to publish page `{page}`: {source}")]
    Publish {
        page: String,
        #[source]
        source: std::io::Error,
    },
}

/// Everything a template can reference for one documentation page.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Namespaced page name, e.g. `Spec:HttpDetector`.
    pub page: String,
    /// Simple class name.
    pub class: String,
    /// Fully-qualified class name.
    pub qualified: String,
    pub properties: Vec<Property>,
}

/// A loaded template resource.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// Loads the template named `name` from `dir`.
    pub fn load(dir: &Path, name: &str) -> Result<Self, RenderError> {
        let text = fs::read_to_string(dir.join(name)).map_err(|source| RenderError::Template {
            name: name.to_string(),
            source,
        })?;
        Ok(Self { text })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Renders this template against `context`.
    pub fn render(&self, context: &PageContext) -> Result<String, RenderError> {
        let mut vars = HashMap::new();
        vars.insert("page".to_string(), context.page.clone());
        vars.insert("class".to_string(), context.class.clone());
        vars.insert("qualified".to_string(), context.qualified.clone());
        vars.insert(
            "properties".to_string(),
            properties_table(&context.properties),
        );
        Ok(strfmt::strfmt(&self.text, &vars)?)
    }
}

/// Renders discovered properties as a MediaWiki table, one row per property
/// in discovery order.
pub fn properties_table(properties: &[Property]) -> String {
    let mut out = String::from("{| class=\"wikitable\"\n! Property !! Type !! Description\n");
    for property in properties {
        out.push_str("|-\n");
        out.push_str(&format!(
            "| {} || {} || {}\n",
            property.name, property.ty, property.comment
        ));
    }
    out.push_str("|}");
    out
}

/// Receives rendered pages.
pub trait PageSink {
    fn publish(&mut self, page: &str, text: &str) -> Result<(), RenderError>;
}

/// Writes each page to `<out_dir>/<page>.wiki`.
///
/// Namespace separators (`:`) are not portable in file names and are mapped
/// to `_`.
pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn page_path(&self, page: &str) -> PathBuf {
        self.out_dir.join(format!("{}.wiki", page.replace(':', "_")))
    }
}

impl PageSink for FileSink {
    fn publish(&mut self, page: &str, text: &str) -> Result<(), RenderError> {
        let wrap = |source| RenderError::Publish {
            page: page.to_string(),
            source,
        };
        fs::create_dir_all(&self.out_dir).map_err(wrap)?;
        fs::write(self.page_path(page), text).map_err(wrap)
    }
}

/// Echoes each page to stdout, separated by a header line.
#[derive(Default)]
pub struct StdoutSink;

impl PageSink for StdoutSink {
    fn publish(&mut self, page: &str, text: &str) -> Result<(), RenderError> {
        println!("== {page} ==");
        println!("{text}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use beandoc_model::Type;
    use pretty_assertions::assert_eq;

    use super::*;

    fn context() -> PageContext {
        PageContext {
            page: "Spec:HttpDetector".into(),
            class: "HttpDetector".into(),
            qualified: "org.opennms.netmgt.provision.HttpDetector".into(),
            properties: vec![Property {
                name: "port".into(),
                ty: Type::int(),
                comment: "Port to probe.".into(),
            }],
        }
    }

    #[test]
    fn renders_placeholders() {
        let template = Template::from_text("= {class} =\n{qualified}\n\n{properties}\n");
        let text = template.render(&context()).unwrap();
        assert!(text.starts_with("= HttpDetector ="));
        assert!(text.contains("org.opennms.netmgt.provision.HttpDetector"));
        assert!(text.contains("| port || int || Port to probe."));
    }

    #[test]
    fn properties_table_is_empty_but_valid_without_rows() {
        let table = properties_table(&[]);
        assert_eq!(
            table,
            "{| class=\"wikitable\"\n! Property !! Type !! Description\n|}"
        );
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let template = Template::from_text("{nope}");
        assert!(matches!(
            template.render(&context()),
            Err(RenderError::Format(_))
        ));
    }

    #[test]
    fn load_reports_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(dir.path(), "detector.vm").unwrap_err();
        assert!(matches!(err, RenderError::Template { name, .. } if name == "detector.vm"));
    }

    #[test]
    fn file_sink_sanitizes_namespace_separator() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path());
        sink.publish("Spec:HttpDetector", "content").unwrap();
        let written = std::fs::read_to_string(dir.path().join("Spec_HttpDetector.wiki")).unwrap();
        assert_eq!(written, "content");
    }
}
