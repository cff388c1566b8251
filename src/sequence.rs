//! Ordered token list with the mutation, ordering, and slicing primitives
//! the list walkthrough demonstrates.
//!
//! Indices are signed: negative values count from the end, so `-1` is the
//! last token. Operations that can fail return [`SequenceError`] instead of
//! panicking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SequenceError, SequenceResult};
use crate::text;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Resolve a signed index to a position inside the list.
    fn position(&self, operation: &'static str, index: isize) -> SequenceResult<usize> {
        let len = self.tokens.len();
        let resolved = if index < 0 {
            index.checked_add_unsigned(len)
        } else {
            Some(index)
        };

        match resolved {
            Some(i) if i >= 0 && (i as usize) < len => Ok(i as usize),
            _ => Err(SequenceError::IndexOutOfRange {
                operation,
                index,
                len,
            }),
        }
    }

    /// Clamp a signed slice bound into `0..=len`.
    fn clamp_bound(&self, bound: isize) -> usize {
        let len = self.tokens.len();
        if bound < 0 {
            len.saturating_sub(bound.unsigned_abs())
        } else {
            (bound as usize).min(len)
        }
    }

    pub fn get(&self, index: isize) -> SequenceResult<&str> {
        let pos = self.position("get", index)?;
        Ok(&self.tokens[pos])
    }

    pub fn set(&mut self, index: isize, token: impl Into<String>) -> SequenceResult<()> {
        let pos = self.position("assignment", index)?;
        self.tokens[pos] = token.into();
        Ok(())
    }

    pub fn append(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Insert before `index`. Never fails: indices past either end clamp to
    /// the nearest end.
    pub fn insert(&mut self, index: isize, token: impl Into<String>) {
        let pos = self.clamp_bound(index);
        self.tokens.insert(pos, token.into());
    }

    pub fn delete(&mut self, index: isize) -> SequenceResult<()> {
        let pos = self.position("assignment", index)?;
        self.tokens.remove(pos);
        Ok(())
    }

    /// Remove and return the last token.
    pub fn pop(&mut self) -> SequenceResult<String> {
        self.tokens.pop().ok_or(SequenceError::PopEmpty)
    }

    /// Remove and return the token at `index`.
    pub fn pop_at(&mut self, index: isize) -> SequenceResult<String> {
        if self.tokens.is_empty() {
            return Err(SequenceError::PopEmpty);
        }
        let pos = self.position("pop", index)?;
        Ok(self.tokens.remove(pos))
    }

    /// Remove the first token equal to `value`.
    pub fn remove(&mut self, value: &str) -> SequenceResult<()> {
        let pos = self
            .tokens
            .iter()
            .position(|t| t == value)
            .ok_or_else(|| SequenceError::ValueNotFound {
                value: value.to_string(),
            })?;
        self.tokens.remove(pos);
        Ok(())
    }

    pub fn sort(&mut self) {
        self.tokens.sort();
    }

    pub fn sort_desc(&mut self) {
        self.tokens.sort_by(|a, b| b.cmp(a));
    }

    /// Sorted copy; `self` keeps its order.
    pub fn sorted(&self) -> TokenList {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    pub fn reverse(&mut self) {
        self.tokens.reverse();
    }

    /// Half-open `[start:end]` slice. Missing bounds mean the list ends,
    /// negative bounds count from the end, and out-of-range bounds clamp.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> TokenList {
        let from = start.map_or(0, |s| self.clamp_bound(s));
        let to = end.map_or(self.tokens.len(), |e| self.clamp_bound(e));

        if from >= to {
            return TokenList::default();
        }
        TokenList {
            tokens: self.tokens[from..to].to_vec(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&text::repr(token))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motorcycles() -> TokenList {
        TokenList::new(["honda", "yamaha", "suzuki"])
    }

    #[test]
    fn test_display_matches_list_literal() {
        assert_eq!(motorcycles().to_string(), "['honda', 'yamaha', 'suzuki']");
        assert_eq!(TokenList::default().to_string(), "[]");
    }

    #[test]
    fn test_get_supports_negative_indices() {
        let list = motorcycles();
        assert_eq!(list.get(0).unwrap(), "honda");
        assert_eq!(list.get(-1).unwrap(), "suzuki");
        assert_eq!(list.get(-3).unwrap(), "honda");
        assert!(matches!(
            list.get(3),
            Err(SequenceError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert!(list.get(-4).is_err());
    }

    #[test]
    fn test_mutation_sequence() {
        let mut list = motorcycles();
        list.set(0, "ducati").unwrap();
        list.append("davidson");
        list.insert(0, "harley");
        assert_eq!(
            list.to_string(),
            "['harley', 'ducati', 'yamaha', 'suzuki', 'davidson']"
        );

        list.delete(0).unwrap();
        assert_eq!(list.pop().unwrap(), "davidson");
        assert_eq!(list.pop_at(0).unwrap(), "ducati");
        assert_eq!(list.as_slice(), ["yamaha", "suzuki"]);
    }

    #[test]
    fn test_insert_clamps_out_of_range() {
        let mut list = motorcycles();
        list.insert(99, "tail");
        list.insert(-99, "head");
        list.insert(-1, "before-last");
        assert_eq!(
            list.as_slice(),
            ["head", "honda", "yamaha", "suzuki", "before-last", "tail"]
        );
    }

    #[test]
    fn test_pop_empty_list() {
        let mut list = TokenList::default();
        assert_eq!(list.pop(), Err(SequenceError::PopEmpty));
        assert_eq!(list.pop_at(0), Err(SequenceError::PopEmpty));
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut list = TokenList::new(["a", "b", "a"]);
        list.remove("a").unwrap();
        assert_eq!(list.as_slice(), ["b", "a"]);

        let err = list.remove("honda").unwrap_err();
        assert_eq!(err.to_string(), "\"honda\" is not in list");
    }

    #[test]
    fn test_sorting_and_reverse() {
        let mut list = TokenList::new(["yamaha", "suzuki", "ducati"]);
        assert_eq!(list.sorted().as_slice(), ["ducati", "suzuki", "yamaha"]);
        // sorted() leaves the original alone
        assert_eq!(list.as_slice(), ["yamaha", "suzuki", "ducati"]);

        list.sort_desc();
        assert_eq!(list.as_slice(), ["yamaha", "suzuki", "ducati"]);
        list.sort();
        assert_eq!(list.as_slice(), ["ducati", "suzuki", "yamaha"]);
        list.reverse();
        assert_eq!(list.as_slice(), ["yamaha", "suzuki", "ducati"]);
    }

    #[test]
    fn test_slices() {
        let players = TokenList::new(["kyle", "mike", "corey"]);
        assert_eq!(players.slice(Some(0), Some(2)).to_string(), "['kyle', 'mike']");
        assert_eq!(players.slice(None, Some(2)).to_string(), "['kyle', 'mike']");
        assert_eq!(players.slice(Some(-1), None).to_string(), "['corey']");
        assert_eq!(players.slice(Some(2), Some(1)).to_string(), "[]");
        assert_eq!(players.slice(Some(-10), Some(10)), players);
    }
}
