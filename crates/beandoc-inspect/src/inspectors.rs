//! Built-in inspector implementations.
//!
//! One inspector per documented OpenNMS plugin family. Both derive the page
//! name from the simple class name; the namespace prefix is applied by the
//! orchestrator.

use beandoc_model::{ClassId, ClassStore};

use crate::Inspector;

/// Documents provisioning service detectors.
pub struct DetectorInspector;

impl Inspector for DetectorInspector {
    fn base_class_name(&self) -> &str {
        "org.opennms.netmgt.provision.ServiceDetector"
    }

    fn template(&self) -> &str {
        "detector.vm"
    }

    fn page_name(&self, store: &ClassStore, class: ClassId) -> String {
        store.class(class).simple_name().to_string()
    }
}

/// Documents poller service monitors.
pub struct MonitorInspector;

impl Inspector for MonitorInspector {
    fn base_class_name(&self) -> &str {
        "org.opennms.netmgt.poller.ServiceMonitor"
    }

    fn template(&self) -> &str {
        "monitor.vm"
    }

    fn page_name(&self, store: &ClassStore, class: ClassId) -> String {
        store.class(class).simple_name().to_string()
    }
}
