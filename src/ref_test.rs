// Reference multiset, counts of each key in 0..capacity.
struct RefNodes {
    counts: Vec<usize>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        RefNodes {
            counts: vec![0; capacity],
        }
    }

    fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    fn get(&self, key: i64) -> bool {
        self.counts[key as usize] > 0
    }

    fn insert(&mut self, key: i64) {
        self.counts[key as usize] += 1;
    }

    fn delete(&mut self, key: i64) -> Option<i64> {
        let count = &mut self.counts[key as usize];
        if *count == 0 {
            None
        } else {
            *count -= 1;
            Some(key)
        }
    }

    fn min(&self) -> Option<i64> {
        self.counts.iter().position(|c| *c > 0).map(|k| k as i64)
    }

    fn max(&self) -> Option<i64> {
        self.counts.iter().rposition(|c| *c > 0).map(|k| k as i64)
    }

    fn to_vec(&self) -> Vec<i64> {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(key, count)| std::iter::repeat(key as i64).take(*count))
            .collect()
    }
}
