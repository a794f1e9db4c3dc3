use crate::prelude::*;
use crate::Arena;

/// Which side of a parent a new leaf hangs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Left,
    Right,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TreeNode<T> {
    data: T,
    left: Option<Idx>,
    right: Option<Idx>,
}

/// Binary tree grown by hand, one leaf at a time.
///
/// Nothing orders the values; the caller shapes the tree by naming a parent
/// and a [`Branch`]. The root exists from birth, so `len` is never zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryTree<T> {
    arena: Arena<TreeNode<T>>,
    root: Idx,
}

impl<T> BinaryTree<T> {
    pub fn new(root_value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(TreeNode { data: root_value, left: None, right: None });
        Self { arena, root }
    }

    pub fn root(&self) -> Idx {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Attach a leaf under `parent` on the given side and hand back its
    /// index. `None` when that side is already taken; the tree is unchanged
    /// and the caller knows nothing was stored.
    pub fn add(&mut self, parent: Idx, branch: Branch, value: T) -> Option<Idx> {
        let taken = match branch {
            Branch::Left => self.arena[parent].left,
            Branch::Right => self.arena[parent].right,
        };
        if taken.is_some() {
            return None;
        }
        let node = self.arena.alloc(TreeNode { data: value, left: None, right: None });
        match branch {
            Branch::Left => self.arena[parent].left = Some(node),
            Branch::Right => self.arena[parent].right = Some(node),
        }
        Some(node)
    }

    /// The tree only ever hands out live indices, so access is direct.
    pub fn get(&self, idx: Idx) -> &T {
        &self.arena[idx].data
    }

    /// Left, root, right.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.walk(Some(self.root), &mut values);
        values
    }

    fn walk<'a>(&'a self, at: Option<Idx>, into: &mut Vec<&'a T>) {
        if let Some(idx) = at {
            let node = &self.arena[idx];
            self.walk(node.left, into);
            into.push(&node.data);
            self.walk(node.right, into);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_its_root() {
        let tree = BinaryTree::new("root");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(tree.root()), &"root");
    }

    #[test]
    fn add_attaches_on_the_named_side() {
        let mut tree = BinaryTree::new(1);
        let left = tree.add(tree.root(), Branch::Left, 2).unwrap();
        let right = tree.add(tree.root(), Branch::Right, 3).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(left), &2);
        assert_eq!(tree.get(right), &3);

        let deeper = tree.add(left, Branch::Right, 4).unwrap();
        assert_eq!(tree.get(deeper), &4);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn an_occupied_side_stays_as_it_is() {
        let mut tree = BinaryTree::new(1);
        let first = tree.add(tree.root(), Branch::Left, 2).unwrap();

        assert_eq!(tree.add(tree.root(), Branch::Left, 99), None);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(first), &2);
    }

    #[test]
    fn inorder_walks_left_root_right() {
        let mut tree = BinaryTree::new(4);
        let l = tree.add(tree.root(), Branch::Left, 2).unwrap();
        let r = tree.add(tree.root(), Branch::Right, 6).unwrap();
        tree.add(l, Branch::Left, 1).unwrap();
        tree.add(l, Branch::Right, 3).unwrap();
        tree.add(r, Branch::Left, 5).unwrap();
        tree.add(r, Branch::Right, 7).unwrap();

        let values: Vec<i32> = tree.inorder().into_iter().copied().collect();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7]);
    }
}
