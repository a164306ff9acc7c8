use std::iter::FusedIterator;

use num_traits::Float;

use super::{AxisTics, Tick, TicSequence, util};

/// Iterator over all tics of an [`AxisTics`], produced by [`AxisTics::ticks`].
///
/// Walks the minor grid in ascending order. Every `multiple`-th minor tic,
/// counted from the first major tic, is reported at level 0 with the major
/// tic's own value, so major values come out exactly as
/// [`AxisTics::major_values`] yields them.
#[derive(Debug, Clone)]
pub struct TickIter<D> {
    major: TicSequence<D>,
    minor: TicSequence<D>,
    stride: usize,
    offset: usize,
    index: usize,
}

impl<D: Float> TickIter<D> {
    pub(crate) fn new(tics: &AxisTics<D>) -> Self {
        let major = *tics.major();
        let minor = *tics.minor();
        // Position of the first major tic within the minor grid.
        let offset = util::steps_between(minor.first(), major.first(), minor.delta());
        Self {
            major,
            minor,
            stride: tics.multiple().factor() as usize,
            offset,
            index: 0,
        }
    }

    fn tick_at(&self, index: usize) -> Tick<D> {
        if let Some(steps) = index.checked_sub(self.offset) {
            let major_index = steps / self.stride;
            if steps % self.stride == 0 && major_index < self.major.count() {
                return Tick {
                    value: self.major.value(major_index),
                    level: Tick::<D>::MAJOR,
                };
            }
        }
        Tick {
            value: self.minor.value(index),
            level: Tick::<D>::MINOR,
        }
    }
}

impl<D: Float> Iterator for TickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.minor.count() {
            return None;
        }
        let tick = self.tick_at(self.index);
        self.index += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.minor.count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<D: Float> ExactSizeIterator for TickIter<D> {}

impl<D: Float> FusedIterator for TickIter<D> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(tics: &AxisTics<f64>) -> Vec<u8> {
        tics.ticks().map(|t| t.level).collect()
    }

    #[test]
    fn test_majors_every_multiple_from_first() {
        let tics = AxisTics::from_interval(0.0, 1.0, 0.5);
        let levels = levels(&tics);
        assert_eq!(levels.len(), 11);
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(*level, if i % 5 == 0 { 0 } else { 1 }, "tick {i}");
        }
    }

    #[test]
    fn test_offset_when_minor_starts_below_major() {
        // Minor tics start at -3.0, the first major tic at -2.0.
        let tics = AxisTics::from_interval(-3.0, 5.0, 2.0);
        let ticks: Vec<_> = tics.ticks().collect();
        assert_eq!(ticks.len(), 9);
        assert_eq!(ticks[0], Tick { value: -3.0, level: 1 });
        assert_eq!(ticks[1], Tick { value: -2.0, level: 0 });
        let majors: Vec<f64> = ticks.iter().filter(|t| t.is_major()).map(|t| t.value).collect();
        assert_eq!(majors, tics.major_values().collect::<Vec<_>>());
    }

    #[test]
    fn test_unit_multiple_is_all_major() {
        let tics = AxisTics::from_interval(0.0, 1.0, 0.3);
        assert!(tics.ticks().all(|t| t.is_major()));
        assert_eq!(tics.ticks().count(), 4);
    }

    #[test]
    fn test_no_major_in_range() {
        let tics = AxisTics::from_interval(0.11, 0.19, 0.1);
        assert_eq!(tics.count_major(), 0);
        assert!(tics.ticks().all(|t| !t.is_major()));
        assert_eq!(tics.ticks().len(), tics.count_minor());
    }

    #[test]
    fn test_size_hint_shrinks() {
        let tics = AxisTics::from_interval(0.0, 10.0, 5.0);
        let mut iter = tics.ticks();
        assert_eq!(iter.len(), 11);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 9);
        assert_eq!(iter.by_ref().count(), 9);
        assert_eq!(iter.next(), None);
    }
}
