//! Arena storage for the intermediate node tree
//!
//! Nodes live in slots indexed by [`NodeId`]; each slot carries a generation
//! counter bumped on removal. A [`NodeRef`] captures the generation it was
//! created against, so "is this reference still valid" is a checkable
//! property instead of a discipline. Passes collect references while
//! reading, then mutate afterwards.

use crate::error::WeftError;
use crate::result::Result;

use super::node::{IrNode, IrNodeKind};

/// Index of a node slot in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A generation-checked handle to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub id: NodeId,
    generation: u32,
}

impl NodeRef {
    /// Whether the referenced node still exists with the captured generation
    pub fn is_valid(&self, tree: &IrTree) -> bool {
        tree.slots
            .get(self.id.index())
            .is_some_and(|slot| slot.generation == self.generation && slot.node.is_some())
    }

    /// Detach the referenced node from its parent, invalidating every other
    /// reference to it
    pub fn remove(self, tree: &mut IrTree) -> Result<()> {
        if !self.is_valid(tree) {
            return Err(WeftError::StaleNodeReference { id: self.id.0 });
        }
        tree.remove(self.id);
        Ok(())
    }
}

struct Slot {
    node: Option<IrNode>,
    parent: Option<NodeId>,
    generation: u32,
}

/// The lowered document tree
pub struct IrTree {
    slots: Vec<Slot>,
    root: NodeId,
}

impl IrTree {
    /// Create a tree with the given node as its document root
    pub fn new(root: IrNode) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.alloc(root);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a detached node
    pub fn alloc(&mut self, node: IrNode) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            node: Some(node),
            parent: None,
            generation: 0,
        });
        id
    }

    /// Allocate a node and append it to `parent`
    pub fn append(&mut self, parent: NodeId, node: IrNode) -> NodeId {
        let id = self.alloc(node);
        self.append_child(parent, id);
        id
    }

    pub fn node(&self, id: NodeId) -> &IrNode {
        self.slots[id.index()]
            .node
            .as_ref()
            .expect("node was removed")
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut IrNode {
        self.slots[id.index()]
            .node
            .as_mut()
            .expect("node was removed")
    }

    pub fn try_node(&self, id: NodeId) -> Option<&IrNode> {
        self.slots.get(id.index())?.node.as_ref()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    /// A generation-checked reference to `id`
    pub fn reference(&self, id: NodeId) -> NodeRef {
        NodeRef {
            id,
            generation: self.slots[id.index()].generation,
        }
    }

    /// Append an already-allocated node to `parent`, detaching it from its
    /// current parent if it has one
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.slots[child.index()].parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Insert an already-allocated node into `parent` at `index`
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        self.slots[child.index()].parent = Some(parent);
        self.node_mut(parent).children.insert(index, child);
    }

    /// Detach a node from its parent without invalidating it
    ///
    /// The parent may itself have been removed already; orphaned children
    /// keep a stale parent id until they are detached or removed.
    pub fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.slots[child.index()].parent.take() {
            if let Some(parent_node) = self.slots[parent.index()].node.as_mut() {
                let children = &mut parent_node.children;
                if let Some(position) = children.iter().position(|&id| id == child) {
                    children.remove(position);
                }
            }
        }
    }

    /// Remove a node (and orphan its subtree), bumping its generation so
    /// outstanding references to it report stale
    pub fn remove(&mut self, id: NodeId) {
        self.detach(id);
        let slot = &mut self.slots[id.index()];
        slot.node = None;
        slot.generation += 1;
    }

    /// Ids of `id` and all its descendants, depth-first
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            // Reverse so the leftmost child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// References to every node matching `predicate`, in document order
    pub fn collect(&self, predicate: impl Fn(&IrNode) -> bool) -> Vec<NodeRef> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&id| predicate(self.node(id)))
            .map(|id| self.reference(id))
            .collect()
    }

    /// The single primary class of the document, or `None` on malformed input
    pub fn find_primary_class(&self) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|&id| {
            self.node(id)
                .as_class()
                .is_some_and(|class| class.is_primary)
        })
    }

    /// The primary render method, or `None` when the document has none
    pub fn find_primary_method(&self) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|&id| {
            matches!(
                &self.node(id).kind,
                IrNodeKind::Method(method) if method.kind == super::node::MethodKind::Render
            )
        })
    }

    /// References to every directive node for `directive`
    ///
    /// Malformed (error-recovery) directive nodes are skipped unless
    /// `include_malformed` is set.
    pub fn find_directives(&self, directive: &str, include_malformed: bool) -> Vec<NodeRef> {
        self.collect(|node| {
            node.as_directive().is_some_and(|d| {
                d.descriptor.directive == directive && (include_malformed || !d.is_malformed)
            })
        })
    }
}
