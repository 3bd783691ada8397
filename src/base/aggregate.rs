/// Sums values by key. Keys iterate in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate<K, V> {
    m: std::collections::BTreeMap<K, V>,
}

impl<K, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self {
            m: Default::default(),
        }
    }
}

impl<K, V> Aggregate<K, V> {
    pub fn add(&mut self, key: K, value: V)
    where
        K: Ord,
        V: Copy + Default + std::ops::AddAssign,
    {
        *(self.m.entry(key).or_default()) += value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, V)>
    where
        V: Copy,
    {
        self.m.iter().map(|(k, &v)| (k, v))
    }

    /// Iterates keys with the running sum of values up to and including each
    /// key.
    pub fn iter_cumulative(&self) -> impl Iterator<Item = (&K, V)>
    where
        V: Copy + Default + std::ops::AddAssign,
    {
        let mut acc = V::default();
        self.iter().map(move |(k, v)| {
            acc += v;
            (k, acc)
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Ord,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
