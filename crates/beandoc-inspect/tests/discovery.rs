//! End-to-end discovery over a JSON-loaded class model.

use beandoc_inspect::{find_properties, find_setter, Inspector, InspectorRegistry};
use beandoc_model::{extends_or_implements, load_model_from_str, Type};
use pretty_assertions::assert_eq;

const MODEL: &str = r#"{
    "classes": [
        {
            "name": "org.opennms.netmgt.provision.AbstractDetector",
            "abstract": true,
            "interfaces": ["org.opennms.netmgt.provision.ServiceDetector"],
            "methods": [
                {
                    "name": "setTimeout",
                    "params": ["long"],
                    "returns": "void",
                    "doc": "Probe timeout in milliseconds."
                },
                {
                    "name": "setRetries",
                    "params": ["int"],
                    "returns": "void",
                    "doc": "Number of retries."
                },
                { "name": "init", "params": [], "returns": "void" }
            ]
        },
        {
            "name": "org.opennms.netmgt.provision.HttpDetector",
            "superclass": "org.opennms.netmgt.provision.AbstractDetector",
            "methods": [
                {
                    "name": "setPort",
                    "params": ["int"],
                    "returns": "void",
                    "doc": "Port to probe."
                },
                {
                    "name": "setTimeout",
                    "params": ["long"],
                    "returns": "void",
                    "doc": "Overridden timeout."
                },
                { "name": "getPort", "params": [], "returns": "int" }
            ]
        }
    ]
}"#;

#[test]
fn discovers_properties_across_hierarchy() {
    let store = load_model_from_str(MODEL).unwrap();
    let detector = store
        .class_named("org.opennms.netmgt.provision.HttpDetector")
        .unwrap();

    let properties = find_properties(&store, detector);
    let names: Vec<_> = properties.iter().map(|p| p.name.as_str()).collect();
    // Leaf-first, declaration order within each class; the shadowed
    // `timeout` appears twice.
    assert_eq!(names, vec!["port", "timeout", "timeout", "retries"]);
    assert_eq!(properties[0].ty, Type::int());
    assert_eq!(properties[0].comment, "Port to probe.");
}

#[test]
fn shadowed_setter_resolves_to_leaf_declaration() {
    let store = load_model_from_str(MODEL).unwrap();
    let detector = store
        .class_named("org.opennms.netmgt.provision.HttpDetector")
        .unwrap();

    let timeout = find_setter(&store, detector, "timeout").unwrap();
    assert_eq!(timeout.doc, "Overridden timeout.");
}

#[test]
fn detector_inspector_matches_loaded_hierarchy() {
    let store = load_model_from_str(MODEL).unwrap();
    let registry = InspectorRegistry::with_defaults();
    let detector_inspector = registry.iter().next().unwrap();

    let leaf = store
        .class_named("org.opennms.netmgt.provision.HttpDetector")
        .unwrap();
    assert!(extends_or_implements(
        &store,
        leaf,
        detector_inspector.base_class_name()
    ));
    assert_eq!(detector_inspector.page_name(&store, leaf), "HttpDetector");
}
