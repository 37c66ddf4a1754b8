use std::iter::Peekable;

// loop position metadata
//
// the pages need to know whether an item is the first one (active carousel
// slide) or the last one (no trailing separator), so every ordered sequence
// that cares is walked through with_position() instead of join-then-trim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position<T> {
    pub index: usize,
    pub first: bool,
    pub last: bool,
    pub value: T,
}

impl<T> Position<T> {
    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn is_last(&self) -> bool {
        self.last
    }
}

pub struct WithPosition<I: Iterator> {
    iter: Peekable<I>,
    index: usize,
}

impl<I: Iterator> Iterator for WithPosition<I> {
    type Item = Position<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.index;
        self.index += 1;

        Some(Position {
            index,
            first: index == 0,
            last: self.iter.peek().is_none(),
            value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

pub trait PositionExt: Iterator + Sized {
    fn with_position(self) -> WithPosition<Self> {
        WithPosition {
            iter: self.peekable(),
            index: 0,
        }
    }
}

impl<I: Iterator> PositionExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_first_and_last() {
        let positions: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .with_position()
            .map(|p| (p.index, p.is_first(), p.is_last(), p.value))
            .collect();

        assert_eq!(
            positions,
            vec![(0, true, false, "a"), (1, false, false, "b"), (2, false, true, "c")]
        );
    }

    #[test]
    fn single_item_is_both() {
        let only = std::iter::once(7).with_position().next().unwrap();

        assert!(only.is_first());
        assert!(only.is_last());
        assert_eq!(only.index, 0);
    }

    #[test]
    fn empty_yields_nothing() {
        assert_eq!(std::iter::empty::<u8>().with_position().count(), 0);
    }
}
