//! Developer tools
//!
//! [`TreePrinter`] renders an [`Expr`] as an indented tree, one node per line.

use super::ast::Expr;
use super::vocab::Symbol;
use std::fmt::Write;

/// Expression tree pretty printer
pub struct TreePrinter {
    /// Indentation string
    indent: String,
    /// Maximum depth to print
    max_depth: Option<usize>,
}

impl TreePrinter {
    /// Create a new tree printer
    pub fn new() -> Self {
        Self {
            indent: "  ".to_string(),
            max_depth: None,
        }
    }

    /// Set the indentation string
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Set the maximum depth to print
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Print an expression
    pub fn print(&self, expr: &Expr<'_>) -> String {
        let mut output = String::new();
        self.print_node(expr, 0, &mut output);
        output
    }

    fn print_node(&self, expr: &Expr<'_>, depth: usize, output: &mut String) {
        let indent = self.indent.repeat(depth);
        if self.max_depth.is_some_and(|max| depth > max) {
            let _ = writeln!(output, "{}...", indent);
            return;
        }

        match expr {
            Expr::Identifier { name } => {
                let _ = writeln!(output, "{}identifier {}", indent, name);
            }
            Expr::Numeric { value } => {
                let _ = writeln!(output, "{}numeric {}", indent, value);
            }
            Expr::Literal { quote, value } => {
                let _ = writeln!(output, "{}literal {}{}{}", indent, quote, value, quote);
            }
            Expr::UnaryPrefix { op, operand } => {
                let _ = writeln!(output, "{}prefix {}", indent, op);
                self.print_node(operand, depth + 1, output);
            }
            Expr::UnaryPostfix { operand, op } => {
                let _ = writeln!(output, "{}postfix {}", indent, op);
                self.print_node(operand, depth + 1, output);
            }
            Expr::Binary { left, op, right } => {
                let _ = writeln!(output, "{}binary {}", indent, op);
                self.print_node(left, depth + 1, output);
                self.print_node(right, depth + 1, output);
            }
            Expr::MultiAri { first, rest } => {
                let ops: Vec<&str> = rest.iter().map(|(op, _)| op.symbol()).collect();
                let _ = writeln!(output, "{}chain {}", indent, ops.join(" "));
                self.print_node(first, depth + 1, output);
                for (_, operand) in rest {
                    self.print_node(operand, depth + 1, output);
                }
            }
            Expr::InBrackets { bracket, inner } => {
                let _ = writeln!(output, "{}brackets {}", indent, bracket);
                self.print_node(inner, depth + 1, output);
            }
            Expr::Sequence { terms, separator } => {
                let _ = writeln!(output, "{}sequence {:?}", indent, separator);
                for term in terms {
                    self.print_node(term, depth + 1, output);
                }
            }
        }
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}
