//! Abstract Syntax Tree node definitions.

use serde::Serialize;

/// AST node representing Brio program elements.
///
/// The tree is the sole output of the front end. Serialization emits
/// one record per node with a `type` field naming the variant, which is
/// what the CLI prints as JSON.
///
/// A node is either a leaf or holds only fully-formed child nodes; the
/// parser never returns a partially constructed node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Numeric literal
    NumberLiteral {
        /// The numeric value
        value: f64,
    },

    /// String literal
    StringLiteral {
        /// The string contents after escape processing
        value: String,
    },

    /// Boolean literal
    BooleanLiteral {
        /// The boolean value
        value: bool,
    },

    /// Reference to a variable by name
    VariableReference {
        /// The variable name
        name: String,
    },

    /// Assignment expression; the operator is always `=`
    Assignment {
        /// Assignment target
        left: Box<Node>,
        /// Assigned value
        right: Box<Node>,
    },

    /// Binary operation
    BinaryOp {
        /// Operator spelling, e.g. `+` or `&&`
        operator: String,
        /// Left operand
        left: Box<Node>,
        /// Right operand
        right: Box<Node>,
    },

    /// `if` conditional expression
    Conditional {
        /// Condition expression
        condition: Box<Node>,
        /// Branch taken when the condition holds
        then_branch: Box<Node>,
        /// Optional `else` branch
        else_branch: Option<Box<Node>>,
    },

    /// Function literal
    FunctionLiteral {
        /// Parameter names, in order
        parameters: Vec<String>,
        /// Function body expression
        body: Box<Node>,
    },

    /// Call expression
    Call {
        /// Expression being called
        callee: Box<Node>,
        /// Call arguments, in order
        arguments: Vec<Node>,
    },

    /// Sequence of expressions. Represents both `{ ... }` groupings and
    /// the whole program. A `{ ... }` sub-block with zero statements
    /// collapses to `BooleanLiteral(false)` and one with a single
    /// statement collapses to that statement; the program root is
    /// always a `Block`.
    Block {
        /// The statements, in order
        statements: Vec<Node>,
    },
}
