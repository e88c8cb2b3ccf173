pub mod body;
pub mod cli;
pub mod comments;
pub mod extract;
pub mod header;
pub mod model;
pub mod render;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use cli::{parse_docgen_args, OutputFormat, ParsedArgs};
pub use comments::strip_comments;
pub use extract::{extract_modules, ModuleBoundary};
pub use render::render_documentation;

#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub error_type: ParseErrorType,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    NoModulesFound,
}

impl ParseError {
    pub fn new(message: String, error_type: ParseErrorType) -> Self {
        Self {
            message,
            error_type,
            suggestions: Vec::new(),
        }
    }

    pub fn no_modules_found() -> Self {
        Self::new(
            "No modules found in input".to_string(),
            ParseErrorType::NoModulesFound,
        )
        .with_suggestion(
            "Check that the input contains at least one `module ... endmodule` block".to_string(),
        )
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)?;

        if !self.suggestions.is_empty() {
            write!(f, " (Suggestions: {})", self.suggestions.join(", "))?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
    Inout,
}

impl PortDirection {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "input" => Some(PortDirection::Input),
            "output" => Some(PortDirection::Output),
            "inout" => Some(PortDirection::Inout),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Inout => "inout",
        }
    }
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub direction: Option<PortDirection>,
    pub data_type: Option<String>, // e.g. "wire", "reg", "logic"
    pub width: Option<String>,     // raw range text, e.g. "[7:0]"
}

impl Port {
    /// A port known only by name, as listed in a module header.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: None,
            data_type: None,
            width: None,
        }
    }
}

/// A named `.port(signal)` fragment. The signal is opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub port: String,
    pub signal: String,
}

impl Connection {
    pub fn new(port: impl Into<String>, signal: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            signal: signal.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub module_name: String,
    pub instance_name: String,
    pub parameters: Vec<Connection>, // #(.NAME(value)) overrides
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub parameters: Vec<String>,
    pub ports: Vec<Port>,
    pub instances: Vec<Instance>,
}

/// Extract every module in `content`, in source order.
///
/// Comments are stripped first. Fails only when no module block is found.
pub fn parse_modules(content: &str) -> Result<Vec<Module>, ParseError> {
    let stripped = strip_comments(content);

    let modules: Vec<Module> = extract_modules(&stripped)
        .iter()
        .map(model::assemble)
        .collect();

    if modules.is_empty() {
        debug!("no module boundaries in {} bytes of input", content.len());
        return Err(ParseError::no_modules_found());
    }

    info!("extracted {} module(s)", modules.len());
    Ok(modules)
}
