//! JavaScript renderer for ESM and CJS config modules

use super::node::{JsModule, Node, Property};
use super::TAB_WIDTH;
use crate::options::ModuleType;

/// Render a config module with the header and export syntax of `module_type`
pub fn render_module(module: &JsModule, module_type: ModuleType) -> String {
    let mut out = String::new();

    for import in &module.imports {
        let line = match module_type {
            ModuleType::Esm => format!(
                "import {} from {};\n",
                import.binding,
                quote(&import.source)
            ),
            ModuleType::Cjs => format!(
                "const {} = require({});\n",
                import.binding,
                quote(&import.source)
            ),
        };
        out.push_str(&line);
    }
    if !module.imports.is_empty() {
        out.push('\n');
    }

    match module_type {
        ModuleType::Esm => out.push_str("export default "),
        ModuleType::Cjs => out.push_str("module.exports = "),
    }
    write_node(&mut out, &module.export, 0);
    out.push_str(";\n");

    out
}

/// Render a single expression at the top level
#[cfg(test)]
fn render_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Number(n) => out.push_str(&n.to_string()),
        Node::String(s) => out.push_str(&quote(s)),
        Node::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for item in items {
                indent(out, depth + 1);
                write_node(out, item, depth + 1);
                out.push_str(",\n");
            }
            indent(out, depth);
            out.push(']');
        }
        Node::Object(props) => {
            if props.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for prop in props {
                indent(out, depth + 1);
                match prop {
                    Property::Field(key, value) => {
                        out.push_str(&object_key(key));
                        out.push_str(": ");
                        write_node(out, value, depth + 1);
                    }
                    Property::Spread(value) => {
                        out.push_str("...");
                        write_node(out, value, depth + 1);
                    }
                }
                out.push_str(",\n");
            }
            indent(out, depth);
            out.push('}');
        }
        Node::Path(segments) => write_path(out, segments),
        Node::Spread(inner) => {
            out.push_str("...");
            write_node(out, inner, depth);
        }
        Node::Call { callee, args } => {
            write_path(out, callee);
            if args.is_empty() {
                out.push_str("()");
                return;
            }
            out.push_str("(\n");
            for arg in args {
                indent(out, depth + 1);
                write_node(out, arg, depth + 1);
                out.push_str(",\n");
            }
            indent(out, depth);
            out.push(')');
        }
    }
}

fn write_path(out: &mut String, segments: &[String]) {
    for (idx, segment) in segments.iter().enumerate() {
        if idx == 0 {
            out.push_str(segment);
        } else if is_identifier(segment) {
            out.push('.');
            out.push_str(segment);
        } else {
            out.push('[');
            out.push_str(&quote(segment));
            out.push(']');
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    out.push_str(&" ".repeat(depth * TAB_WIDTH));
}

fn object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quoted JavaScript string literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::Import;

    fn sample_module() -> JsModule {
        JsModule {
            imports: vec![Import::new("globals", "globals")],
            export: Node::object([(
                "globals",
                Node::Object(vec![Property::Spread(Node::path(&["globals", "node"]))]),
            )]),
        }
    }

    #[test]
    fn test_esm_header_and_export() {
        let text = render_module(&sample_module(), ModuleType::Esm);
        assert_eq!(
            text,
            "import globals from 'globals';\n\
             \n\
             export default {\n    globals: {\n        ...globals.node,\n    },\n};\n"
        );
    }

    #[test]
    fn test_cjs_header_and_export() {
        let text = render_module(&sample_module(), ModuleType::Cjs);
        assert!(text.starts_with("const globals = require('globals');\n"));
        assert!(text.contains("module.exports = {"));
        assert!(!text.contains("import "));
        assert!(!text.contains("export default"));
    }

    #[test]
    fn test_module_without_imports_has_no_blank_line() {
        let text = render_module(&JsModule::exporting(Node::Bool(true)), ModuleType::Cjs);
        assert_eq!(text, "module.exports = true;\n");
    }

    #[test]
    fn test_non_identifier_members_use_brackets() {
        let node = Node::spread(Node::path(&["vue", "configs", "flat/recommended"]));
        assert_eq!(render_node(&node), "...vue.configs['flat/recommended']");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let node = Node::object([("suspicious/no-process-env", Node::string("off"))]);
        assert_eq!(
            render_node(&node),
            "{\n    'suspicious/no-process-env': 'off',\n}"
        );
    }

    #[test]
    fn test_call_arguments_one_per_line() {
        let node = Node::call(
            &["tseslint", "config"],
            vec![Node::path(&["a"]), Node::spread(Node::path(&["b", "c"]))],
        );
        assert_eq!(render_node(&node), "tseslint.config(\n    a,\n    ...b.c,\n)");
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(render_node(&Node::string("it's")), "'it\\'s'");
        assert_eq!(render_node(&Node::Array(vec![])), "[]");
        assert_eq!(render_node(&Node::Object(vec![])), "{}");
    }
}
