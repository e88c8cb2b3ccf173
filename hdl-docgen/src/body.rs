//! Port declarations and sub-module instantiations inside a module body.
//!
//! Matching is pattern based and not statement aware. Known gaps:
//! - a direction keyword used outside a declaration still starts one;
//! - `else if (...) ...;` and similar two-word shapes look like instances;
//! - a connection signal ends at its first `)`, so `.a(f(x))` yields `f(x`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::header::{declared_name, split_top_level};
use crate::{Connection, Instance, Port, PortDirection};

/// Words that can precede `name (...);` without being a module type.
const NON_MODULE_KEYWORDS: &[&str] = &[
    "if",
    "for",
    "case",
    "always",
    "assign",
    "generate",
    "endmodule",
];

static PORT_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(input|output|inout)\b([^;]*);").expect("port declaration pattern")
});

// [type] [range...] names
static DECLARATION_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*(?:([A-Za-z_]\w*)\s*)?((?:\[[^\]]*\]\s*)+)?\s*(.*)$")
        .expect("declaration clause pattern")
});

static INSTANCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\b([A-Za-z_]\w*)(?:\s*#\s*\(((?:[^()]|\([^()]*\))*)\))?\s+([A-Za-z_]\w*)\s*\((.*?)\)\s*;",
    )
    .expect("instance pattern")
});

static NAMED_CONNECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.([A-Za-z_]\w*)\s*\(([^)]*)\)").expect("named connection pattern")
});

/// Every `input|output|inout ... ;` declaration in `body`, one port per name.
pub fn parse_port_declarations(body: &str) -> Vec<Port> {
    let mut ports = Vec::new();

    for caps in PORT_DECLARATION.captures_iter(body) {
        let Some(direction) = caps.get(1).and_then(|m| PortDirection::from_keyword(m.as_str()))
        else {
            continue;
        };
        let clause = caps.get(2).map_or("", |m| m.as_str());
        let (data_type, width, names) = split_clause(clause);

        for fragment in split_top_level(names) {
            if let Some(name) = declared_name(fragment) {
                ports.push(Port {
                    name,
                    direction: Some(direction),
                    data_type: data_type.map(str::to_string),
                    width: width.map(str::to_string),
                });
            }
        }
    }

    ports
}

/// Split the text after a direction keyword into (type, range, names).
fn split_clause(clause: &str) -> (Option<&str>, Option<&str>, &str) {
    let Some(caps) = DECLARATION_CLAUSE.captures(clause) else {
        return (None, None, clause);
    };

    let kind = caps.get(1).map(|m| m.as_str());
    let width = caps.get(2).map(|m| m.as_str().trim_end());
    let names = caps.get(3).map_or("", |m| m.as_str());

    // With nothing but `,`/`=` after it, the identifier is the first name.
    let first_is_name = names.is_empty() || names.starts_with(',') || names.starts_with('=');
    if kind.is_some() && first_is_name {
        return (None, None, clause);
    }

    (kind, width, names)
}

/// Every `type [#(...)] name ( ... );` instantiation in `body`, in order.
pub fn parse_instances(body: &str) -> Vec<Instance> {
    let mut instances = Vec::new();

    for caps in INSTANCE.captures_iter(body) {
        let (Some(module_name), Some(instance_name)) = (caps.get(1), caps.get(3)) else {
            continue;
        };

        if NON_MODULE_KEYWORDS.contains(&module_name.as_str()) {
            debug!(
                "ignoring '{} {}': not a module type",
                module_name.as_str(),
                instance_name.as_str()
            );
            continue;
        }

        instances.push(Instance {
            module_name: module_name.as_str().to_string(),
            instance_name: instance_name.as_str().to_string(),
            parameters: caps
                .get(2)
                .map(|m| named_connections(m.as_str()))
                .unwrap_or_default(),
            connections: caps
                .get(4)
                .map(|m| named_connections(m.as_str()))
                .unwrap_or_default(),
        });
    }

    instances
}

fn named_connections(raw: &str) -> Vec<Connection> {
    NAMED_CONNECTION
        .captures_iter(raw)
        .filter_map(|caps| {
            let port = caps.get(1)?.as_str();
            let signal = caps.get(2).map_or("", |m| m.as_str().trim());
            Some(Connection::new(port, signal))
        })
        .collect()
}
