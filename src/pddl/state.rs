use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use super::fluent::FluentState;
use super::predicate::Proposition;

/// Fixed ordering of every proposition a problem talks about. The position
/// of a proposition is its bit in an [`EncodedState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMap {
    fluents: Vec<Proposition>,
    mapping: HashMap<Proposition, usize>,
}

impl StateMap {
    /// Duplicates keep their first index. An empty map is rejected since it
    /// can't encode anything.
    pub fn new<I: IntoIterator<Item = Proposition>>(fluents: I) -> Result<StateMap> {
        let mut map = StateMap { fluents: Vec::new(), mapping: HashMap::new() };
        for p in fluents {
            if !map.mapping.contains_key(&p) {
                map.mapping.insert(p.clone(), map.fluents.len());
                map.fluents.push(p);
            }
        }
        if map.fluents.is_empty() {
            return Err(Error::Configuration("the state map has no propositions".to_owned()));
        }
        Ok(map)
    }

    /// Positive fluents first, then negative ones.
    pub fn from_fluent(state: &FluentState) -> Result<StateMap> {
        StateMap::new(state.pos().iter().chain(state.neg()).cloned())
    }

    pub fn len(&self) -> usize {
        self.fluents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fluents.is_empty()
    }

    #[inline]
    pub fn index_of(&self, p: &Proposition) -> Option<usize> {
        self.mapping.get(p).copied()
    }

    pub fn contains(&self, p: &Proposition) -> bool {
        self.mapping.contains_key(p)
    }

    pub fn get(&self, index: usize) -> Option<&Proposition> {
        self.fluents.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Proposition> {
        self.fluents.iter()
    }

    /// Anything not in `state.pos()` is encoded false.
    pub fn encode(&self, state: &FluentState) -> EncodedState {
        let truths = state.pos_set();
        EncodedState(self.fluents.iter().map(|p| truths.contains(p)).collect())
    }

    pub fn decode(&self, state: &EncodedState) -> FluentState {
        debug_assert_eq!(state.len(), self.len());
        let mut pos = Vec::new();
        let mut neg = Vec::new();
        for (p, value) in self.fluents.iter().zip(state.iter()) {
            if value {
                pos.push(p.clone());
            } else {
                neg.push(p.clone());
            }
        }
        FluentState::from_parts(pos, neg)
    }

    pub fn validate(&self, state: &EncodedState) -> Result<()> {
        if state.len() == self.len() {
            Ok(())
        } else {
            Err(Error::StateLength { expected: self.len(), found: state.len() })
        }
    }
}

impl std::ops::Index<usize> for StateMap {
    type Output = Proposition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fluents[index]
    }
}

/// Truth value of each state map entry under the closed-world assumption.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedState(Vec<bool>);

impl EncodedState {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn count_true(&self) -> usize {
        self.0.iter().filter(|v| **v).count()
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: bool) {
        self.0[index] = value
    }
}

impl From<Vec<bool>> for EncodedState {
    fn from(bits: Vec<bool>) -> Self {
        EncodedState(bits)
    }
}

impl std::ops::Index<usize> for EncodedState {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for EncodedState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().try_for_each(|v| write!(f, "{}", if *v { 'T' } else { 'F' }))
    }
}

impl fmt::Debug for EncodedState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EncodedState({})", self)
    }
}

pub fn encode_state(state: &FluentState, map: &StateMap) -> EncodedState {
    map.encode(state)
}

pub fn decode_state(state: &EncodedState, map: &StateMap) -> FluentState {
    map.decode(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Proposition {
        text.parse().unwrap()
    }

    fn cake() -> FluentState {
        FluentState::new(vec![p("Have(Cake)")], vec![p("Eaten(Cake)")]).unwrap()
    }

    #[test]
    fn test_map_order() {
        let map = StateMap::from_fluent(&cake()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.index_of(&p("Have(Cake)")), Some(0));
        assert_eq!(map.index_of(&p("Eaten(Cake)")), Some(1));
        assert_eq!(map.index_of(&p("Have(Pie)")), None);
        assert_eq!(map[1], p("Eaten(Cake)"));
        assert_eq!(map.get(0), Some(&p("Have(Cake)")));
        assert_eq!(map.get(2), None);
    }

    #[test]
    fn test_empty_map() {
        assert!(matches!(StateMap::new(Vec::new()), Err(Error::Configuration(_))));
        assert!(StateMap::from_fluent(&FluentState::default()).is_err());
    }

    #[test]
    fn test_duplicates_keep_first_index() {
        let map = StateMap::new(vec![p("A"), p("B"), p("A")]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.index_of(&p("A")), Some(0));
    }

    #[test]
    fn test_encode() {
        let map = StateMap::new(vec![p("A"), p("B"), p("C")]).unwrap();
        // C is in neither list and defaults to false
        let state = FluentState::new(vec![p("B")], vec![p("A")]).unwrap();
        let encoded = encode_state(&state, &map);
        assert_eq!(encoded, EncodedState::from(vec![false, true, false]));
        assert_eq!(encoded.to_string(), "FTF");
        assert_eq!(encoded.count_true(), 1);
    }

    #[test]
    fn test_round_trip() {
        let state = cake();
        let map = StateMap::from_fluent(&state).unwrap();
        assert_eq!(decode_state(&encode_state(&state, &map), &map), state);

        let flipped = EncodedState::from(vec![false, true]);
        let decoded = map.decode(&flipped);
        assert_eq!(decoded.pos(), &[p("Eaten(Cake)")]);
        assert_eq!(decoded.neg(), &[p("Have(Cake)")]);
        assert_eq!(map.encode(&decoded), flipped);
    }

    #[test]
    fn test_validate() {
        let map = StateMap::from_fluent(&cake()).unwrap();
        assert!(map.validate(&EncodedState::from(vec![true, true])).is_ok());
        match map.validate(&EncodedState::from(vec![true])) {
            Err(Error::StateLength { expected, found }) => assert_eq!((expected, found), (2, 1)),
            other => panic!("Expected a length error, got {:?}", other),
        }
    }
}
