//! Hierarchy traversal and property extraction.

use beandoc_model::{ClassId, ClassStore, MethodData, Type, MAX_HIERARCHY_DEPTH};

/// A discovered bean property.
///
/// Constructed fresh on every [`find_properties`] call; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name derived from the setter (`setPort` => `port`).
    pub name: String,
    /// The setter's sole parameter type.
    pub ty: Type,
    /// The setter's documentation text.
    pub comment: String,
}

/// The superclass chain from `class` (inclusive) to the root, leaf first.
///
/// The walk is capped at [`MAX_HIERARCHY_DEPTH`] so malformed (cyclic) input
/// terminates instead of looping.
pub fn superclass_chain(store: &ClassStore, class: ClassId) -> Vec<ClassId> {
    let mut chain = Vec::new();
    let mut current = Some(class);
    while let Some(id) = current {
        if chain.len() >= MAX_HIERARCHY_DEPTH {
            break;
        }
        chain.push(id);
        current = store.class(id).superclass;
    }
    chain
}

/// Methods declared anywhere on the hierarchy of `class`, leaf first and in
/// declaration order within each class.
///
/// With `name` set, only methods whose name matches exactly are yielded.
/// Same-named methods declared at multiple hierarchy levels all appear;
/// shadowing is preserved, not collapsed.
pub fn methods<'s>(
    store: &'s ClassStore,
    class: ClassId,
    name: Option<&str>,
) -> impl Iterator<Item = &'s MethodData> + 's {
    let name = name.map(str::to_owned);
    superclass_chain(store, class)
        .into_iter()
        .flat_map(move |id| store.class(id).methods.iter())
        .filter(move |m| name.as_deref().map_or(true, |n| m.name == n))
}

/// A method qualifies as a setter iff it is public, named `set` plus a
/// non-empty suffix of at least two characters, returns void, and declares
/// exactly one parameter.
pub fn is_setter(method: &MethodData) -> bool {
    method.is_public()
        && method.name.len() > 4
        && method.name.starts_with("set")
        && method.return_type.is_void()
        && method.params.len() == 1
}

/// Getter counterpart of [`is_setter`]: public, `get` prefix with the same
/// length rule, non-void return, no parameters.
pub fn is_getter(method: &MethodData) -> bool {
    method.is_public()
        && method.name.len() > 4
        && method.name.starts_with("get")
        && !method.return_type.is_void()
        && method.params.is_empty()
}

/// Uppercases the first character, leaving the rest unchanged. Identity on
/// empty input.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lowercases the first character, leaving the rest unchanged. Identity on
/// empty input.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Finds the setter for `property` on the hierarchy of `class`.
///
/// The leaf-first walk means a setter re-declared in a subclass shadows one
/// declared by an ancestor. Absence is `None`, never an error.
pub fn find_setter<'s>(
    store: &'s ClassStore,
    class: ClassId,
    property: &str,
) -> Option<&'s MethodData> {
    let target = format!("set{}", capitalize(property));
    methods(store, class, Some(&target)).find(|m| is_setter(m))
}

/// Finds the getter for `property` on the hierarchy of `class`, with the same
/// shadowing precedence as [`find_setter`].
pub fn find_getter<'s>(
    store: &'s ClassStore,
    class: ClassId,
    property: &str,
) -> Option<&'s MethodData> {
    let target = format!("get{}", capitalize(property));
    methods(store, class, Some(&target)).find(|m| is_getter(m))
}

/// Discovers every bean property on the hierarchy of `class`.
///
/// Each qualifying setter produces one descriptor, in leaf-first hierarchy
/// order. No deduplication: a setter shadowed by a subclass still yields its
/// own descriptor, and no matching getter is required, so "write-only"
/// properties are reported like any other.
pub fn find_properties(store: &ClassStore, class: ClassId) -> Vec<Property> {
    methods(store, class, None)
        .filter_map(|method| {
            if !is_setter(method) {
                return None;
            }
            let suffix = method.name.strip_prefix("set")?;
            Some(Property {
                name: decapitalize(suffix),
                ty: method.params.first()?.clone(),
                comment: method.doc.clone(),
            })
        })
        .collect()
}
