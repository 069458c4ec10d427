//! JSON class-model loading.
//!
//! The source-model provider emits a flat list of classes whose superclass
//! references are qualified names. Loading resolves those names into arena
//! ids after every class has been added.

use std::collections::HashSet;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::{ClassData, ClassStore, MethodData, Type, Visibility};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read class model: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse class model: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate class `{0}` in model")]
    DuplicateClass(String),
    #[error("class `{class}` references unknown superclass `{superclass}`")]
    UnknownSuperclass { class: String, superclass: String },
}

#[derive(Debug, Deserialize)]
struct RawModel {
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    name: String,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    #[serde(default)]
    superclass: Option<String>,
    #[serde(default)]
    interfaces: Vec<String>,
    #[serde(default)]
    methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
struct RawMethod {
    name: String,
    #[serde(default = "default_visibility")]
    visibility: String,
    #[serde(default)]
    params: Vec<String>,
    #[serde(default = "default_return")]
    returns: String,
    #[serde(default)]
    doc: String,
}

fn default_visibility() -> String {
    "public".to_string()
}

fn default_return() -> String {
    "void".to_string()
}

/// Load a class model from a JSON reader.
pub fn load_model(reader: impl Read) -> Result<ClassStore, ModelError> {
    let raw: RawModel = serde_json::from_reader(reader)?;
    build_store(raw)
}

/// Load a class model from a JSON string.
pub fn load_model_from_str(json: &str) -> Result<ClassStore, ModelError> {
    let raw: RawModel = serde_json::from_str(json)?;
    build_store(raw)
}

fn build_store(raw: RawModel) -> Result<ClassStore, ModelError> {
    let mut seen = HashSet::new();
    for class in &raw.classes {
        if !seen.insert(class.name.as_str()) {
            return Err(ModelError::DuplicateClass(class.name.clone()));
        }
    }

    // First pass: add every class without its superclass link so forward
    // references resolve in the second pass.
    let mut store = ClassStore::new();
    for class in &raw.classes {
        store.add_class(ClassData {
            name: class.name.clone(),
            is_abstract: class.is_abstract,
            superclass: None,
            interfaces: class.interfaces.clone(),
            methods: class.methods.iter().map(convert_method).collect(),
        });
    }

    for class in &raw.classes {
        let Some(super_name) = &class.superclass else {
            continue;
        };
        let super_id = store.class_named(super_name).ok_or_else(|| {
            ModelError::UnknownSuperclass {
                class: class.name.clone(),
                superclass: super_name.clone(),
            }
        })?;
        let id = store
            .class_named(&class.name)
            .expect("class added in first pass");
        store.classes[id.raw() as usize].superclass = Some(super_id);
    }

    Ok(store)
}

fn convert_method(raw: &RawMethod) -> MethodData {
    let visibility = if raw.visibility == "public" {
        Visibility::Public
    } else {
        Visibility::NonPublic
    };
    MethodData {
        name: raw.name.clone(),
        visibility,
        params: raw.params.iter().map(|p| Type::parse(p)).collect(),
        return_type: Type::parse(&raw.returns),
        doc: raw.doc.clone(),
    }
}
