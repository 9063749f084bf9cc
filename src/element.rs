use std::fmt;

/// Something the heap can order. Only the key takes part in comparisons.
pub trait Keyed {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}

/// A key paired with an opaque payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element<K, D> {
    pub key: K,
    pub data: D,
}

impl<K, D> Element<K, D> {
    pub fn new(key: K, data: D) -> Self {
        Element { key, data }
    }
}

impl<K: Ord, D> Keyed for Element<K, D> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }
}

impl<K, D> From<(K, D)> for Element<K, D> {
    fn from(pair: (K, D)) -> Self {
        Element {
            key: pair.0,
            data: pair.1,
        }
    }
}

impl<K: fmt::Display, D: fmt::Display> fmt::Display for Element<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.data)
    }
}

macro_rules! keyed_by_self {
    ($($T: ty),*) => {
        $(
            impl Keyed for $T {
                type Key = Self;

                fn key(&self) -> &Self {
                    self
                }
            }
        )*
    };
}

keyed_by_self!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String
);

impl<'a> Keyed for &'a str {
    type Key = Self;

    fn key(&self) -> &Self {
        self
    }
}
