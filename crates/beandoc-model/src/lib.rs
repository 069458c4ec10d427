//! Class metadata model for beandoc.
//!
//! An external source-model provider parses Java sources and hands us a tree
//! of class/method metadata. This crate holds that tree in an immutable,
//! arena-backed [`ClassStore`] which the discovery engine reads but never
//! mutates.

use std::collections::HashMap;
use std::fmt;

mod loader;

pub use loader::{load_model, load_model_from_str, ModelError};

/// Upper bound on superclass-chain walks.
///
/// Well-formed hierarchies are acyclic by construction; this cap truncates
/// walks over malformed input instead of looping.
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// Arena index of a class inside a [`ClassStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Method visibility as the engine cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    NonPublic,
}

/// A Java type descriptor, reduced to what property discovery needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Primitive(PrimitiveType),
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(name.into())
    }

    pub fn int() -> Self {
        Type::Primitive(PrimitiveType::Int)
    }

    pub fn boolean() -> Self {
        Type::Primitive(PrimitiveType::Boolean)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Parse a type descriptor string from the source model.
    ///
    /// `"void"` and primitive names map onto their variants; everything else
    /// is kept as a (possibly qualified) class name.
    pub fn parse(s: &str) -> Self {
        match s {
            "void" => Type::Void,
            "boolean" => Type::Primitive(PrimitiveType::Boolean),
            "byte" => Type::Primitive(PrimitiveType::Byte),
            "short" => Type::Primitive(PrimitiveType::Short),
            "int" => Type::Primitive(PrimitiveType::Int),
            "long" => Type::Primitive(PrimitiveType::Long),
            "char" => Type::Primitive(PrimitiveType::Char),
            "float" => Type::Primitive(PrimitiveType::Float),
            "double" => Type::Primitive(PrimitiveType::Double),
            other => Type::Named(other.to_string()),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => f.write_str("void"),
            Type::Primitive(p) => f.write_str(match p {
                PrimitiveType::Boolean => "boolean",
                PrimitiveType::Byte => "byte",
                PrimitiveType::Short => "short",
                PrimitiveType::Int => "int",
                PrimitiveType::Long => "long",
                PrimitiveType::Char => "char",
                PrimitiveType::Float => "float",
                PrimitiveType::Double => "double",
            }),
            Type::Named(name) => f.write_str(name),
        }
    }
}

/// A single method declaration, owned by its declaring [`ClassData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodData {
    pub name: String,
    pub visibility: Visibility,
    pub params: Vec<Type>,
    pub return_type: Type,
    /// Documentation text attached to the declaration.
    pub doc: String,
}

impl MethodData {
    pub fn new(
        name: impl Into<String>,
        visibility: Visibility,
        params: Vec<Type>,
        return_type: Type,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            params,
            return_type,
            doc: String::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassData {
    /// Fully-qualified name, e.g. `org.opennms.netmgt.provision.HttpDetector`.
    pub name: String,
    pub is_abstract: bool,
    /// Arena reference to the direct superclass, if any.
    pub superclass: Option<ClassId>,
    /// Qualified names of directly implemented interfaces.
    pub interfaces: Vec<String>,
    /// Declared methods, in declaration order.
    pub methods: Vec<MethodData>,
}

impl ClassData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            superclass: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// The unqualified class name (everything after the last `.`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl Default for ClassData {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Arena of classes indexed by [`ClassId`] and by qualified name.
#[derive(Debug, Default)]
pub struct ClassStore {
    classes: Vec<ClassData>,
    by_name: HashMap<String, ClassId>,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassData) -> ClassId {
        let id = ClassId::new(self.classes.len() as u32);
        self.by_name.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    /// Looks up class data by id.
    ///
    /// Ids minted by other stores are a caller bug.
    pub fn class(&self, id: ClassId) -> &ClassData {
        &self.classes[id.raw() as usize]
    }

    pub fn class_named(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// All classes in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len() as u32).map(ClassId::new)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Returns `true` when `class` inherits from or implements `base`.
///
/// Checks the class itself, every class on its superclass chain, and the
/// interfaces each of them declares. The walk is capped at
/// [`MAX_HIERARCHY_DEPTH`].
pub fn extends_or_implements(store: &ClassStore, class: ClassId, base: &str) -> bool {
    let mut current = Some(class);
    let mut depth = 0;
    while let Some(id) = current {
        if depth >= MAX_HIERARCHY_DEPTH {
            return false;
        }
        let data = store.class(id);
        if data.name == base || data.interfaces.iter().any(|i| i == base) {
            return true;
        }
        current = data.superclass;
        depth += 1;
    }
    false
}
