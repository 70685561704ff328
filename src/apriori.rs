use frequent_itemsets::FrequentItemsets;
use item_tree::ItemTree;

/// Accumulates one pass over the dataset into the item registry, then
/// hands over the first level of frequent itemsets. Later levels come
/// from FrequentItemsets::generate_next_level.
pub struct Apriori {
    items: ItemTree,
}

impl Apriori {
    pub fn new() -> Apriori {
        Apriori {
            items: ItemTree::new(),
        }
    }

    /// Records one basket. Baskets must arrive in increasing basket-id
    /// order with duplicate labels already removed; the reader
    /// guarantees both.
    pub fn ingest(&mut self, basket_id: usize, labels: &[String]) {
        for label in labels {
            self.items.find_or_insert(label).add_basket(basket_id);
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Consumes the registry: the scan is over, and all that remains is
    /// the sorted, pruned list of frequent single items.
    pub fn finalize_level1(self, min_count: usize) -> FrequentItemsets {
        let mut level = self.items.drain_sorted();
        level.prune(min_count);
        level
    }
}
