mod common;

use hdl_docgen::{parse_modules, render_documentation};

#[test]
fn test_render_alu_top_sections() {
    let modules = common::assert_parse_ok("designs/alu_top.v");
    let doc = render_documentation(&modules);

    assert!(doc.starts_with("# Verilog Design Documentation\n"));
    assert!(doc.contains("```mermaid\nflowchart LR\n"));

    // Sections follow source order.
    let adder = doc.find("### adder").unwrap();
    let register = doc.find("### register").unwrap();
    let top = doc.find("### alu_top").unwrap();
    assert!(adder < register && register < top);
}

#[test]
fn test_render_diagram_edges() {
    let modules = common::assert_parse_ok("designs/alu_top.v");
    let doc = render_documentation(&modules);

    assert!(doc.contains("  subgraph alu_top\n    alu_top_self[\"alu_top\"]\n"));
    assert!(doc.contains("    alu_top_inst_1[\"adder u_add\"]\n    alu_top_self --> alu_top_inst_1\n"));
    assert!(doc.contains("    alu_top_inst_2[\"register u_reg\"]\n    alu_top_self --> alu_top_inst_2\n"));
    // Leaf modules get a node but no edges.
    assert!(doc.contains("  subgraph adder\n    adder_self[\"adder\"]\n  end\n"));
}

#[test]
fn test_render_port_rows() {
    let modules = common::assert_parse_ok("designs/alu_top.v");
    let doc = render_documentation(&modules);

    assert!(doc.contains("| a | input | wire | [WIDTH-1:0] |\n"));
    assert!(doc.contains("| q | output | reg | [WIDTH-1:0] |\n"));
    assert!(doc.contains("| clk | input | - | - |\n"));
}

#[test]
fn test_render_instances_and_none() {
    let modules = common::assert_parse_ok("designs/alu_top.v");
    let doc = render_documentation(&modules);

    assert!(doc.contains("- `adder` `u_add`\n  - #.WIDTH(8)\n  - .a(x)\n  - .b(y)\n  - .sum(sum)\n"));
    let adder_section = &doc[doc.find("### adder").unwrap()..doc.find("### register").unwrap()];
    assert!(adder_section.contains("**Instances**\n- None\n"));
}

#[test]
fn test_render_header_only_ports() {
    let modules = common::assert_parse_ok("designs/legacy_ports.v");
    let doc = render_documentation(&modules);

    assert!(doc.contains("| clk | - | - | - |\n| rst | - | - | - |\n| out | - | - | - |\n"));
    assert!(!doc.contains("**Parameters**"));
}

#[test]
fn test_render_is_deterministic() {
    let content = common::TestHarness::default().read_fixture("designs/alu_top.v");
    let first = render_documentation(&parse_modules(&content).unwrap());
    let second = render_documentation(&parse_modules(&content).unwrap());
    assert_eq!(first, second);
}
