// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use tid_set::TidSet;

/// An ordered set of item labels, plus the ids of every basket in which
/// all of those labels occur together.
#[derive(Clone, Debug)]
pub struct ItemSet {
    items: Vec<String>,
    tids: TidSet,
}

impl ItemSet {
    pub fn new(items: Vec<String>, tids: TidSet) -> ItemSet {
        let mut items = items;
        items.sort();
        ItemSet { items, tids }
    }

    /// A size-1 itemset with no support recorded yet; the starting
    /// point for every item the dataset scan encounters.
    pub fn single(label: &str) -> ItemSet {
        ItemSet {
            items: vec![String::from(label)],
            tids: TidSet::new(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn tids(&self) -> &TidSet {
        &self.tids
    }

    pub fn add_basket(&mut self, basket_id: usize) {
        self.tids.insert(basket_id);
    }

    pub fn support_count(&self) -> usize {
        self.tids.len()
    }

    // Attempts the k-1 x k-1 join of two size-k itemsets: if both share
    // the same first k-1 labels, the result holds that prefix plus each
    // side's final label, supported by the baskets common to both.
    // Merging itemsets of different sizes is a caller bug.
    pub fn try_merge(&self, other: &ItemSet) -> Option<ItemSet> {
        assert_eq!(
            self.items.len(),
            other.items.len(),
            "can only merge itemsets of equal size"
        );
        let prefix_len = self.items.len() - 1;
        if self.items[..prefix_len] != other.items[..prefix_len] {
            return None;
        }
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items[..prefix_len]);
        items.push(self.items[prefix_len].clone());
        items.push(other.items[prefix_len].clone());
        Some(ItemSet {
            items,
            tids: self.tids.intersect(&other.tids),
        })
    }

    /// True when no compared label position of `self` orders after the
    /// matching position of `other`. The weak counterpart of the
    /// prefix ordering below; `<=` on the operator cannot express it
    /// for prefix-incomparable itemsets.
    pub fn weakly_precedes(&self, other: &ItemSet) -> bool {
        self.items.iter().zip(other.items.iter()).all(|(a, b)| a <= b)
    }
}

impl PartialEq for ItemSet {
    fn eq(&self, other: &ItemSet) -> bool {
        self.items == other.items
    }
}

// Itemsets compare over their common prefix length only: an itemset is
// less than another iff every compared label position is less. A tie at
// any compared position leaves the pair unordered (None), so this is not
// a total order. Only the level-1 registry, where all itemsets are
// singletons and the relation degenerates to label order, sorts with it.
impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<Ordering> {
        if self.items == other.items {
            return Some(Ordering::Equal);
        }
        let mut less = true;
        let mut greater = true;
        for (a, b) in self.items.iter().zip(other.items.iter()) {
            match a.cmp(b) {
                Ordering::Less => greater = false,
                Ordering::Greater => less = false,
                Ordering::Equal => {
                    less = false;
                    greater = false;
                }
            }
        }
        match (less, greater) {
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.items.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::ItemSet;
    use tid_set::TidSet;

    fn itemset(labels: &[&str], tids: &[usize]) -> ItemSet {
        let mut set = ItemSet::new(
            labels.iter().map(|s| String::from(*s)).collect(),
            TidSet::new(),
        );
        for &tid in tids {
            set.add_basket(tid);
        }
        set
    }

    #[test]
    fn test_ordering() {
        let a = itemset(&["a"], &[]);
        let b = itemset(&["b"], &[]);
        assert!(a < b);
        assert!(b > a);
        assert!(a == itemset(&["a"], &[]));
        assert!(a != b);

        // A tie at any compared position breaks both strict relations.
        let ab = itemset(&["a", "b"], &[]);
        let ac = itemset(&["a", "c"], &[]);
        assert!(!(ab < ac));
        assert!(!(ab > ac));
        assert!(ab != ac);
        assert!(ab.weakly_precedes(&ac));
        assert!(!ac.weakly_precedes(&ab));

        // Strict ordering needs every compared position to agree, even
        // across different lengths.
        let bc = itemset(&["b", "c"], &[]);
        assert!(a < bc);
        assert!(ab < bc);
        assert!(!(ac < bc));

        // Mixed positions are unordered in both directions.
        let ad = itemset(&["a", "d"], &[]);
        let ba = itemset(&["b", "a"], &[]);
        assert!(ad.partial_cmp(&ba).is_none());
        assert!(!ad.weakly_precedes(&ba));
        assert!(!ba.weakly_precedes(&ad));
    }

    #[test]
    fn test_try_merge_singles() {
        let a = itemset(&["a"], &[0, 1, 2]);
        let b = itemset(&["b"], &[0, 2]);
        // Size-1 itemsets share the empty prefix, so they always merge.
        let merged = a.try_merge(&b).unwrap();
        assert_eq!(merged.items(), &["a".to_owned(), "b".to_owned()]);
        assert_eq!(merged.tids().as_slice(), &[0, 2]);
        assert_eq!(merged.support_count(), 2);
    }

    #[test]
    fn test_try_merge_prefix_match() {
        let ab = itemset(&["a", "b"], &[0, 2, 5]);
        let ac = itemset(&["a", "c"], &[1, 2, 5]);
        let merged = ab.try_merge(&ac).unwrap();
        assert_eq!(
            merged.items(),
            &["a".to_owned(), "b".to_owned(), "c".to_owned()]
        );
        assert_eq!(merged.tids().as_slice(), &[2, 5]);

        // The merged support is the intersection of the parents', and so
        // a subset of each.
        assert_eq!(
            merged.tids(),
            &ab.tids().intersect(ac.tids())
        );
        assert!(merged.support_count() <= ab.support_count());
        assert!(merged.support_count() <= ac.support_count());
    }

    #[test]
    fn test_try_merge_prefix_mismatch() {
        let ab = itemset(&["a", "b"], &[0]);
        let bc = itemset(&["b", "c"], &[0]);
        assert!(ab.try_merge(&bc).is_none());
    }

    #[test]
    #[should_panic(expected = "equal size")]
    fn test_try_merge_unequal_sizes() {
        let a = itemset(&["a"], &[]);
        let bc = itemset(&["b", "c"], &[]);
        let _ = a.try_merge(&bc);
    }

    #[test]
    fn test_new_sorts_labels() {
        let set = itemset(&["c", "a", "b"], &[]);
        assert_eq!(
            set.items(),
            &["a".to_owned(), "b".to_owned(), "c".to_owned()]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(itemset(&["a"], &[]).to_string(), "a");
        assert_eq!(itemset(&["a", "b", "c"], &[]).to_string(), "a b c");
    }
}
