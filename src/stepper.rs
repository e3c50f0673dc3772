use crate::error::{Error, Result};

/// A numeric range split into `steps` evenly spaced values, one per
/// color of a legend.
///
/// The values are spaced linearly or, if `log` is set, so that two
/// consecutive values have a constant ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendDomain {
    pub min: f64,
    pub max: f64,
    /// Number of steps, including both bounds.  At least 2.
    pub steps: usize,
    pub log: bool,
}

impl LegendDomain {
    /// Return a linear domain, checking its invariants.
    pub fn linear(min: f64, max: f64, steps: usize) -> Result<Self> {
        let d = LegendDomain { min, max, steps, log: false };
        d.check()?;
        Ok(d)
    }

    /// Return a logarithmic domain, checking its invariants.
    pub fn log(min: f64, max: f64, steps: usize) -> Result<Self> {
        let d = LegendDomain { min, max, steps, log: true };
        d.check()?;
        Ok(d)
    }

    /// Check that the domain has at least 2 steps, finite bounds and,
    /// in log mode, positive bounds.
    pub fn check(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidDomain(msg));
        if self.steps < 2 {
            return invalid(format!("{} step(s), at least 2 required",
                                   self.steps))
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return invalid(format!("bounds {} and {} must be finite",
                                   self.min, self.max))
        }
        if self.log && (self.min <= 0. || self.max <= 0.) {
            return invalid(format!("logarithmic bounds {} and {} must be \
                                    positive", self.min, self.max))
        }
        Ok(())
    }

    /// Value at position `index` (from `0` to `steps - 1`).  The first
    /// and last positions return exactly `min` and `max`.  Larger
    /// indices extrapolate past `max`.
    ///
    /// # Example
    ///
    /// ```
    /// use color_legend::LegendDomain;
    /// let d = LegendDomain::linear(0., 10., 5).unwrap();
    /// assert_eq!(d.step_value(2).unwrap(), 5.);
    /// ```
    pub fn step_value(&self, index: usize) -> Result<f64> {
        self.check()?;
        Ok(self.value(index))
    }

    /// Same as [`Self::step_value`] without checking the invariants.
    fn value(&self, index: usize) -> f64 {
        let last = self.steps - 1;
        if index == 0 {
            self.min
        } else if index == last {
            self.max
        } else if self.log {
            let (lmin, lmax) = (self.min.ln(), self.max.ln());
            (lmin + index as f64 * (lmax - lmin) / last as f64).exp()
        } else {
            self.min + (self.max - self.min) / last as f64 * index as f64
        }
    }

    /// Return an iterator over `(index, value)` for every step.
    ///
    /// ```
    /// use color_legend::LegendDomain;
    /// let d = LegendDomain::log(1., 1000., 4).unwrap();
    /// let v: Vec<f64> = d.steps().unwrap().map(|(_, x)| x.round()).collect();
    /// assert_eq!(v, [1., 10., 100., 1000.]);
    /// ```
    pub fn steps(&self) -> Result<Steps> {
        self.check()?;
        Ok(Steps { domain: *self, i: 0, j: self.steps - 1 })
    }
}

/// Value at position `index` of `domain`.  See
/// [`LegendDomain::step_value`].
#[inline]
pub fn step_value(domain: &LegendDomain, index: usize) -> Result<f64> {
    domain.step_value(index)
}

/// Round `n` to `digits` decimal places, halves away from zero.
///
/// ```
/// use color_legend::round_to;
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.5, 0), 3.);
/// ```
pub fn round_to(n: f64, digits: i32) -> f64 {
    let m = 10f64.powi(digits);
    (n * m).round() / m
}

/// An iterator over the steps of a [`LegendDomain`].
///
/// Created by [`LegendDomain::steps`].
#[derive(Debug, Clone)]
pub struct Steps {
    domain: LegendDomain,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl Iterator for Steps {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = (self.i, self.domain.value(self.i));
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Steps {}

impl DoubleEndedIterator for Steps {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = (self.j, self.domain.value(self.j));
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(x: f64, y: f64) -> bool { (x - y).abs() <= 1e-9 * y.abs().max(1.) }

    #[test]
    fn linear() {
        let d = LegendDomain::linear(0., 10., 5).unwrap();
        assert_eq!(d.step_value(0), Ok(0.));
        assert_eq!(d.step_value(2), Ok(5.));
        assert_eq!(d.step_value(4), Ok(10.));
    }

    #[test]
    fn linear_with_offset() {
        let d = LegendDomain::linear(20., 30., 3).unwrap();
        assert_eq!(d.step_value(1), Ok(25.));
        let d = LegendDomain::linear(-1., 1., 5).unwrap();
        assert_eq!(d.step_value(1), Ok(-0.5));
        // Decreasing domains are allowed.
        let d = LegendDomain::linear(10., 0., 3).unwrap();
        assert_eq!(d.step_value(1), Ok(5.));
    }

    #[test]
    fn logarithmic() {
        let d = LegendDomain::log(1., 100., 3).unwrap();
        assert_eq!(d.step_value(0), Ok(1.));
        assert_eq!(d.step_value(2), Ok(100.));
        let mid = d.step_value(1).unwrap();
        assert!(close(mid, 10.), "{mid}");
    }

    #[test]
    fn extrapolation() {
        let d = LegendDomain::linear(0., 10., 3).unwrap();
        assert_eq!(d.step_value(4), Ok(20.));
    }

    #[test]
    fn invalid_domains() {
        let d = LegendDomain { min: 0., max: 10., steps: 1, log: false };
        assert!(matches!(step_value(&d, 0), Err(Error::InvalidDomain(_))));
        let d = LegendDomain { steps: 0, ..d };
        assert!(matches!(d.steps(), Err(Error::InvalidDomain(_))));
        assert!(LegendDomain::log(0., 100., 3).is_err());
        assert!(LegendDomain::log(1., -100., 3).is_err());
        assert!(LegendDomain::linear(f64::NAN, 1., 3).is_err());
        assert!(LegendDomain::linear(0., f64::INFINITY, 3).is_err());
        // Non-positive bounds are fine in linear mode.
        assert!(LegendDomain::linear(-5., 0., 2).is_ok());
    }

    #[test]
    fn steps_iterator() {
        let d = LegendDomain::linear(0., 1., 11).unwrap();
        let steps = d.steps().unwrap();
        assert_eq!(steps.len(), 11);
        for (i, x) in steps {
            assert!(close(x, 0.1 * i as f64), "{} ≉ {}", x, 0.1 * i as f64);
        }
        let rev: Vec<_> = d.steps().unwrap().rev().map(|(i, _)| i).collect();
        assert_eq!(rev, (0 ..= 10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn steps_both_ends() {
        let d = LegendDomain::log(2., 32., 5).unwrap();
        let mut s = d.steps().unwrap();
        assert_eq!(s.next(), Some((0, 2.)));
        assert_eq!(s.next_back(), Some((4, 32.)));
        assert_eq!(s.len(), 3);
        let inner: Vec<_> = s.map(|(_, x)| x.round()).collect();
        assert_eq!(inner, [4., 8., 16.]);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.);
        assert_eq!(round_to(-2.5, 0), -3.);
        assert_eq!(round_to(9.96, 1), 10.);
        assert_eq!(round_to(1234., -2), 1200.);
    }
}
