use tracing::debug;

use crate::body::{parse_instances, parse_port_declarations};
use crate::extract::ModuleBoundary;
use crate::header::{parse_parameters, parse_port_names};
use crate::{Module, Port};

/// Build the [`Module`] record for one extracted block.
///
/// Body declarations win over the header; header names are used only when
/// the body declares no ports at all.
pub fn assemble(boundary: &ModuleBoundary<'_>) -> Module {
    let mut ports = parse_port_declarations(boundary.body);
    if ports.is_empty() {
        ports = parse_port_names(boundary.ports)
            .into_iter()
            .map(Port::named)
            .collect();
        debug!(
            "module '{}': {} port(s) taken from header",
            boundary.name,
            ports.len()
        );
    }

    let module = Module {
        name: boundary.name.to_string(),
        parameters: parse_parameters(boundary.parameters),
        ports,
        instances: parse_instances(boundary.body),
    };

    debug!(
        "module '{}': {} parameter(s), {} port(s), {} instance(s)",
        module.name,
        module.parameters.len(),
        module.ports.len(),
        module.instances.len()
    );

    module
}
