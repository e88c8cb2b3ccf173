use hdl_docgen::{Connection, Instance, Module};

/// Find a module by name, panicking with the available names otherwise.
#[allow(dead_code)]
pub fn module_named<'a>(modules: &'a [Module], name: &str) -> &'a Module {
    modules.iter().find(|m| m.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        panic!("Expected module '{}', found {:?}", name, names)
    })
}

#[allow(dead_code)]
pub fn port_names(module: &Module) -> Vec<&str> {
    module.ports.iter().map(|p| p.name.as_str()).collect()
}

#[allow(dead_code)]
pub fn instance_named<'a>(module: &'a Module, instance_name: &str) -> &'a Instance {
    module
        .instances
        .iter()
        .find(|i| i.instance_name == instance_name)
        .unwrap_or_else(|| panic!("Expected instance '{}' in {}", instance_name, module.name))
}

#[allow(dead_code)]
pub fn connections(pairs: &[(&str, &str)]) -> Vec<Connection> {
    pairs
        .iter()
        .map(|(port, signal)| Connection::new(*port, *signal))
        .collect()
}
