//! Markdown rendering of the extracted design, with a Mermaid diagram of
//! which module instantiates what.

use std::collections::HashSet;

use crate::{Instance, Module, Port};

const TITLE: &str = "# Verilog Design Documentation";
const MISSING: &str = "-";

/// Render the full document for `modules`, in the order given.
///
/// The output depends only on `modules`, so equal inputs render
/// byte-identical documents.
pub fn render_documentation(modules: &[Module]) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];

    lines.push("## Module Diagram".to_string());
    lines.push(String::new());
    lines.push("```mermaid".to_string());
    lines.extend(mermaid_lines(modules));
    lines.push("```".to_string());
    lines.push(String::new());

    lines.push("## Modules".to_string());
    for module in modules {
        lines.push(String::new());
        lines.extend(module_section(module));
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

/// `flowchart LR` body: one subgraph per module, one edge per instance.
///
/// A module whose name is already taken as an id gets `<name>_<k>` with
/// the smallest free `k >= 2`, so repeated definitions stay separate.
pub fn mermaid_lines(modules: &[Module]) -> Vec<String> {
    let mut lines = vec!["flowchart LR".to_string()];
    let mut used_ids: HashSet<String> = HashSet::new();

    for module in modules {
        let graph_id = unique_id(&module.name, &used_ids);
        used_ids.insert(graph_id.clone());

        let module_id = format!("{}_self", graph_id);
        if graph_id == module.name {
            lines.push(format!("  subgraph {}", graph_id));
        } else {
            lines.push(format!(
                "  subgraph {}[\"{}\"]",
                graph_id,
                mermaid_label(&module.name)
            ));
        }
        lines.push(format!(
            "    {}[\"{}\"]",
            module_id,
            mermaid_label(&module.name)
        ));

        for (idx, instance) in module.instances.iter().enumerate() {
            let instance_id = format!("{}_inst_{}", graph_id, idx + 1);
            let label = format!("{} {}", instance.module_name, instance.instance_name);
            lines.push(format!(
                "    {}[\"{}\"]",
                instance_id,
                mermaid_label(&label)
            ));
            lines.push(format!("    {} --> {}", module_id, instance_id));
        }

        lines.push("  end".to_string());
    }

    lines
}

fn module_section(module: &Module) -> Vec<String> {
    let mut lines = vec![format!("### {}", module.name)];

    if !module.parameters.is_empty() {
        lines.push(String::new());
        lines.push("**Parameters**".to_string());
        for param in &module.parameters {
            lines.push(format!("- {}", inline(param)));
        }
    }

    lines.push(String::new());
    lines.push("**Ports**".to_string());
    lines.extend(port_table(&module.ports));

    lines.push(String::new());
    lines.push("**Instances**".to_string());
    if module.instances.is_empty() {
        lines.push("- None".to_string());
    } else {
        for instance in &module.instances {
            lines.extend(instance_entry(instance));
        }
    }

    lines
}

/// Header, separator, and one row per port; absent fields render as `-`.
pub fn port_table(ports: &[Port]) -> Vec<String> {
    let mut rows = vec![
        "| Name | Direction | Type | Width |".to_string(),
        "| --- | --- | --- | --- |".to_string(),
    ];

    for port in ports {
        rows.push(format!(
            "| {} | {} | {} | {} |",
            table_cell(&port.name),
            port.direction.map_or(MISSING, |d| d.as_str()),
            table_cell(port.data_type.as_deref().unwrap_or(MISSING)),
            table_cell(port.width.as_deref().unwrap_or(MISSING)),
        ));
    }

    rows
}

fn instance_entry(instance: &Instance) -> Vec<String> {
    let mut lines = vec![format!(
        "- `{}` `{}`",
        instance.module_name, instance.instance_name
    )];

    for param in &instance.parameters {
        lines.push(format!("  - #.{}({})", param.port, inline(&param.signal)));
    }
    for conn in &instance.connections {
        lines.push(format!("  - .{}({})", conn.port, inline(&conn.signal)));
    }

    lines
}

fn unique_id(name: &str, used_ids: &HashSet<String>) -> String {
    if !used_ids.contains(name) {
        return name.to_string();
    }
    (2..)
        .map(|k| format!("{}_{}", name, k))
        .find(|id| !used_ids.contains(id))
        .unwrap_or_else(|| name.to_string())
}

// Multi-line expressions would break list items and table rows.
fn inline(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn table_cell(text: &str) -> String {
    inline(text).replace('|', "\\|")
}

fn mermaid_label(text: &str) -> String {
    text.replace('"', "#quot;")
}
