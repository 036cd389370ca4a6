//! Set of selected option indices.

use std::collections::BTreeSet;

use crate::option::OptionList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index` in `options`.
    ///
    /// Returns the new membership, or None for an index outside the list.
    pub fn toggle(&mut self, index: usize, options: &OptionList) -> Option<bool> {
        if !options.contains_index(index) {
            return None;
        }
        if self.indices.remove(&index) {
            Some(false)
        } else {
            self.indices.insert(index);
            Some(true)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Selected indices in ascending (list) order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Labels of the selected options, rescanned in list order.
    pub fn labels<'a>(&self, options: &'a OptionList) -> Vec<&'a str> {
        options
            .iter()
            .enumerate()
            .filter(|(i, _)| self.contains(*i))
            .map(|(_, opt)| opt.label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::ComboOption;

    fn continents() -> OptionList {
        OptionList::new(vec![
            ComboOption::simple("Europe"),
            ComboOption::simple("Asia"),
            ComboOption::simple("Africa"),
        ])
    }

    #[test]
    fn toggle_twice_restores() {
        let options = continents();
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle(1, &options), Some(true));
        assert_eq!(set.toggle(1, &options), Some(false));
        assert!(set.is_empty());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle(3, &continents()), None);
        assert_eq!(set.toggle(0, &OptionList::default()), None);
        assert!(set.is_empty());
    }

    #[test]
    fn labels_follow_list_order() {
        let options = continents();
        let mut set = SelectionSet::new();
        set.toggle(2, &options);
        set.toggle(0, &options);
        assert_eq!(set.labels(&options), vec!["Europe", "Africa"]);
    }
}
