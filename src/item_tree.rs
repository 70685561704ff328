use frequent_itemsets::FrequentItemsets;
use itemset::ItemSet;
use std::cmp;

struct Node {
    value: ItemSet,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    height: i32,
}

impl Node {
    fn new(value: ItemSet) -> Node {
        Node {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = cmp::max(height(&self.left), height(&self.right)) + 1;
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(node: &Option<Box<Node>>) -> i32 {
    match *node {
        Some(ref node) => node.height,
        None => 0,
    }
}

/// A self-balancing search tree holding one size-1 itemset per distinct
/// item label seen during the dataset scan. Deduplicates items in
/// O(log n) per occurrence and yields the itemsets in label order.
pub struct ItemTree {
    root: Option<Box<Node>>,
    count: usize,
}

impl ItemTree {
    pub fn new() -> ItemTree {
        ItemTree {
            root: None,
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns the itemset registered for `label`, inserting an
    /// empty-support one if the label has not been seen before.
    pub fn find_or_insert(&mut self, label: &str) -> &mut ItemSet {
        let (root, inserted) = match self.root.take() {
            Some(node) => insert(node, ItemSet::single(label)),
            None => (Box::new(Node::new(ItemSet::single(label))), true),
        };
        self.root = Some(root);
        if inserted {
            self.count += 1;
        }
        self.find_mut(label).unwrap()
    }

    fn find_mut(&mut self, label: &str) -> Option<&mut ItemSet> {
        let mut current = self.root.as_mut();
        while let Some(node) = current {
            current = match label.cmp(node.value.items()[0].as_str()) {
                cmp::Ordering::Less => node.left.as_mut(),
                cmp::Ordering::Greater => node.right.as_mut(),
                cmp::Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Consumes the tree, yielding its itemsets in ascending label
    /// order. The registry's job ends with the scan; from here on the
    /// level lists take over.
    pub fn drain_sorted(self) -> FrequentItemsets {
        let mut itemsets = Vec::with_capacity(self.count);
        drain(self.root, &mut itemsets);
        FrequentItemsets::new(itemsets)
    }
}

fn insert(mut node: Box<Node>, value: ItemSet) -> (Box<Node>, bool) {
    let inserted;
    if value < node.value {
        match node.left.take() {
            Some(child) => {
                let (child, was_inserted) = insert(child, value);
                node.left = Some(child);
                inserted = was_inserted;
            }
            None => {
                node.left = Some(Box::new(Node::new(value)));
                inserted = true;
            }
        }
    } else if value > node.value {
        match node.right.take() {
            Some(child) => {
                let (child, was_inserted) = insert(child, value);
                node.right = Some(child);
                inserted = was_inserted;
            }
            None => {
                node.right = Some(Box::new(Node::new(value)));
                inserted = true;
            }
        }
    } else {
        // Already present; the caller gets the resident itemset.
        return (node, false);
    }
    if inserted {
        node = rebalance(node);
    }
    (node, inserted)
}

// Restores the height-balance invariant at `node` after an insertion
// somewhere below it. Rotations only touch the heights of the two nodes
// they move.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance_factor();
    if balance > 1 {
        if node.left.as_ref().unwrap().balance_factor() > 0 {
            // Left-left case.
            node = rotate_right(node);
        } else {
            // Left-right case.
            let left = node.left.take().unwrap();
            node.left = Some(rotate_left(left));
            node = rotate_right(node);
        }
    } else if balance < -1 {
        if node.right.as_ref().unwrap().balance_factor() < 0 {
            // Right-right case.
            node = rotate_left(node);
        } else {
            // Right-left case.
            let right = node.right.take().unwrap();
            node.right = Some(rotate_right(right));
            node = rotate_left(node);
        }
    }
    node
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut new_root = node.left.take().unwrap();
    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut new_root = node.right.take().unwrap();
    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}

fn drain(node: Option<Box<Node>>, out: &mut Vec<ItemSet>) {
    if let Some(node) = node {
        let node = *node;
        drain(node.left, out);
        out.push(node.value);
        drain(node.right, out);
    }
}
