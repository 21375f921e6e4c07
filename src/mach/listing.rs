use crate::lang::{Line, LineNumber};
use std::collections::HashMap;

/// ## Program store
///
/// Statements sorted by line number. The position of a statement in this
/// table is the program counter; `index` maps line numbers back to it.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Vec<Line>,
    index: HashMap<LineNumber, usize>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
        self.index.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, position: usize) -> Option<&Line> {
        self.source.get(position)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.source.iter()
    }

    /// Position of the statement labelled `line_number`.
    pub fn position(&self, line_number: LineNumber) -> Option<usize> {
        self.index.get(&line_number).copied()
    }

    /// Build a listing from editor or file text. Lines without a leading
    /// line number are dropped. When a line number repeats, the last one wins.
    pub fn commit<'a, T: IntoIterator<Item = &'a str>>(text: T) -> Listing {
        let mut lines: Vec<Line> = text.into_iter().filter_map(Line::parse).collect();
        // Stable, so equal numbers keep their buffer order.
        lines.sort_by_key(|line| line.number());
        let mut source: Vec<Line> = Vec::with_capacity(lines.len());
        for line in lines {
            match source.last_mut() {
                Some(last) if last.number() == line.number() => *last = line,
                _ => source.push(line),
            }
        }
        let mut listing = Listing {
            source,
            index: HashMap::default(),
        };
        listing.rebuild_index();
        listing
    }

    /// Replace or add one statement.
    pub fn insert(&mut self, line: Line) {
        match self
            .source
            .binary_search_by_key(&line.number(), |l| l.number())
        {
            Ok(position) => self.source[position] = line,
            Err(position) => self.source.insert(position, line),
        }
        self.rebuild_index();
    }

    pub fn remove(&mut self, line_number: LineNumber) -> Option<Line> {
        let position = self.position(line_number)?;
        let line = self.source.remove(position);
        self.rebuild_index();
        Some(line)
    }

    /// Program text as the editor and `.bas` files show it.
    pub fn text(&self) -> Vec<String> {
        self.source.iter().map(|line| line.to_string()).collect()
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .source
            .iter()
            .enumerate()
            .map(|(position, line)| (line.number(), position))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_sorts_and_filters() {
        let listing = Listing::commit(vec!["  30 END ", "10 PRINT 1", "hello", "", "20FD 5"]);
        assert_eq!(listing.text(), ["10 PRINT 1", "20 FD 5", "30 END"]);
        assert_eq!(listing.position(10), Some(0));
        assert_eq!(listing.position(30), Some(2));
        assert_eq!(listing.position(15), None);
    }

    #[test]
    fn test_commit_last_wins() {
        let listing = Listing::commit(vec!["20 B", "10 A", "20 C", "5 X"]);
        assert_eq!(listing.text(), ["5 X", "10 A", "20 C"]);
        assert_eq!(listing.position(20), Some(2));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut listing = Listing::commit(vec!["10 A", "30 C"]);
        listing.insert(Line::new(20, "B"));
        listing.insert(Line::new(10, "AA"));
        assert_eq!(listing.text(), ["10 AA", "20 B", "30 C"]);
        assert_eq!(listing.position(30), Some(2));
        assert_eq!(listing.remove(20).map(|l| l.number()), Some(20));
        assert_eq!(listing.remove(20), None);
        assert_eq!(listing.position(30), Some(1));
    }
}
