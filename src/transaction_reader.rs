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

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;

pub struct TransactionReader {
    reader: BufReader<File>,
}

impl TransactionReader {
    pub fn new(path: &str) -> io::Result<TransactionReader> {
        let file = File::open(path)?;
        Ok(TransactionReader {
            reader: BufReader::new(file),
        })
    }
}

impl Iterator for TransactionReader {
    type Item = Vec<String>;
    fn next(&mut self) -> Option<Vec<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            let len = self.reader.read_line(&mut line).unwrap();
            if len == 0 {
                return None;
            }
            let basket = parse_basket(&line);
            if basket.len() > 0 {
                return Some(basket);
            }
        }
    }
}

// Splits one line of input into its item labels, sorted and with
// duplicates removed; some input files repeat an item within a
// transaction, and the mining engine requires each basket to be a set.
fn parse_basket(line: &str) -> Vec<String> {
    let mut labels = line
        .split(",")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect::<Vec<String>>();
    labels.sort();
    labels.dedup();
    labels
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_parse_basket() {
        let cases = [
            ("", vec![]),
            ("\n", vec![]),
            (",,,", vec![]),
            ("a", vec!["a"]),
            ("a,b,c\n", vec!["a", "b", "c"]),
            ("c, b, a", vec!["a", "b", "c"]),
            ("a,a,b,a", vec!["a", "b"]),
            (" milk , bread , milk \n", vec!["bread", "milk"]),
        ];
        for &(line, ref expected) in cases.iter() {
            let expected: Vec<String> =
                expected.iter().map(|s| String::from(*s)).collect();
            assert_eq!(super::parse_basket(line), expected);
        }
    }
}
