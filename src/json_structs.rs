/*

    Declare data structs needed to parse JSON.

    - SingleOrVec: a field holding one <object> or an array of them

    @date: 13 Oct, 2025
    @author: Bartu
*/

use serde::Deserialize;

// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T> {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match &self {
            SingleOrVec::Empty => 0,
            SingleOrVec::Single(_) => 1,
            SingleOrVec::Multiple(vec) => vec.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_multiple() {
        let one: SingleOrVec<u32> = serde_json::from_str("7").unwrap();
        let many: SingleOrVec<u32> = serde_json::from_str("[1, 2]").unwrap();
        let none: SingleOrVec<u32> = serde_json::from_str("null").unwrap();
        assert_eq!(one.all(), vec![7]);
        assert_eq!(many.all(), vec![1, 2]);
        assert!(none.is_empty());
    }
}
