//! Value identity for nodes.

/// A value that can identify a node.
///
/// Two nodes in one graph never hold values that are `same_value`. Text
/// values are trimmed before storage and before comparison, so `" A "` and
/// `"A"` name the same node.
pub trait NodeValue: PartialEq {
    /// Returns the canonical form stored inside a node.
    fn normalize(self) -> Self;

    /// Compares two values after normalization.
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl NodeValue for String {
    fn normalize(self) -> Self {
        let trimmed = self.trim();
        if trimmed.len() == self.len() {
            self
        } else {
            trimmed.to_owned()
        }
    }

    fn same_value(&self, other: &Self) -> bool {
        self.trim() == other.trim()
    }
}

impl NodeValue for Box<str> {
    fn normalize(self) -> Self {
        let trimmed = self.trim();
        if trimmed.len() == self.len() {
            self
        } else {
            trimmed.into()
        }
    }

    fn same_value(&self, other: &Self) -> bool {
        self.trim() == other.trim()
    }
}

impl NodeValue for &str {
    fn normalize(self) -> Self {
        self.trim()
    }

    fn same_value(&self, other: &Self) -> bool {
        self.trim() == other.trim()
    }
}

macro_rules! identity_node_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NodeValue for $ty {
                #[inline]
                fn normalize(self) -> Self {
                    self
                }
            }
        )*
    };
}

identity_node_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_values_are_trimmed() {
        assert_eq!("  A\t".normalize(), "A");
        assert_eq!(String::from(" node ").normalize(), "node");
        assert_eq!(Box::<str>::from("x ").normalize(), Box::from("x"));
        assert!(" B".same_value(&"B "));
        assert!(!String::from("B").same_value(&String::from("b")));
    }

    #[test]
    fn test_numbers_keep_identity() {
        assert_eq!(7_i32.normalize(), 7);
        assert!(2.5_f64.same_value(&2.5));
        assert!(!f64::NAN.same_value(&f64::NAN));
    }
}
