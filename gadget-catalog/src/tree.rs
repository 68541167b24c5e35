//! Recursive tree of integers.

use gadget_model::{FieldDescriptor, FieldKind, Schema, Shared, Value, impl_gadget};
use std::sync::OnceLock;

#[derive(Clone, Default)]
struct TreeData {
    value: i64,
    children: Vec<TreeNode>,
}

/// A node holding an integer and any number of child nodes.
///
/// Children are full gadgets: cloning a node shares the whole subtree until
/// one side is modified.
#[derive(Clone, Default)]
pub struct TreeNode {
    d: Shared<TreeData>,
}

impl TreeNode {
    #[must_use]
    pub fn leaf(value: i64) -> Self {
        let mut node = Self::default();
        node.set_value(value);
        node
    }

    #[must_use]
    pub fn with_children(value: i64, children: Vec<TreeNode>) -> Self {
        let mut node = Self::leaf(value);
        node.set_children(children);
        node
    }

    pub fn value(&self) -> i64 {
        self.d.read().value
    }

    pub fn set_value(&mut self, value: i64) {
        if self.value() == value {
            return;
        }
        self.d.mutate().value = value;
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.d.read().children
    }

    pub fn set_children(&mut self, children: Vec<TreeNode>) {
        self.d.mutate().children = children;
    }

    pub fn push_child(&mut self, child: TreeNode) {
        self.d.mutate().children.push(child);
    }

    /// Depth of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}

fn tree_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("TreeNode")
            .field(FieldDescriptor::new::<TreeNode>(
                "value",
                FieldKind::Int,
                |g| Value::Int(g.value()),
                |g, v| {
                    g.set_value(v.into_int()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<TreeNode>(
                "children",
                FieldKind::list(FieldKind::NestedObject("TreeNode")),
                |g| Value::object_list(g.children()),
                |g, v| {
                    g.set_children(v.into_list_of(Value::into_object)?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(TreeNode, "TreeNode", tree_schema, d);
