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

use itemset::ItemSet;
use rayon::prelude::*;
use std::slice;

/// The frequent itemsets of one level, in ascending itemset order. The
/// order is established by the registry drain for level 1 and preserved
/// by construction at every later level; generation and pruning both
/// rely on it and never re-sort.
pub struct FrequentItemsets {
    itemsets: Vec<ItemSet>,
}

impl FrequentItemsets {
    pub fn new(itemsets: Vec<ItemSet>) -> FrequentItemsets {
        FrequentItemsets { itemsets }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<ItemSet> {
        self.itemsets.iter()
    }

    /// Drops every itemset below the support threshold, keeping the
    /// survivors in order.
    pub fn prune(&mut self, min_count: usize) {
        self.itemsets
            .retain(|itemset| itemset.support_count() >= min_count);
    }

    /// Builds the next level: every mergeable pair of size-k itemsets
    /// becomes a size-k+1 candidate, kept only if its merged support
    /// meets the threshold. Candidates are support-tested as they are
    /// generated, so the returned level needs no separate prune() call.
    ///
    /// The inner scan stops at the first merge failure: the list is
    /// sorted, so once an itemset stops sharing the outer itemset's
    /// prefix, none of its successors can share it either.
    pub fn generate_next_level(&self, min_count: usize) -> FrequentItemsets {
        let itemsets = &self.itemsets;
        let next: Vec<ItemSet> = (0..itemsets.len())
            .into_par_iter()
            .flat_map(|a| {
                let mut merged = vec![];
                for b in (a + 1)..itemsets.len() {
                    match itemsets[a].try_merge(&itemsets[b]) {
                        Some(candidate) => {
                            if candidate.support_count() >= min_count {
                                merged.push(candidate);
                            }
                        }
                        None => break,
                    }
                }
                merged
            })
            .collect();
        debug_assert!(next.windows(2).all(|w| w[0].weakly_precedes(&w[1])));
        FrequentItemsets::new(next)
    }
}
