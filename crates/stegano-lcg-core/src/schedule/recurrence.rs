use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::{debug, trace};

use super::IndexSequence;
use crate::{Result, SteganoError};

/// Parameters of the recurrence `U(n+1) = (a * U(n) + b) mod m`, seeded at `u0`.
///
/// All remainders are taken as the non-negative (euclidean) remainder, so negative
/// `a`, `b` or `u0` are well defined and always land in `[0, m)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct LcgParams {
    pub a: i64,
    pub b: i64,
    pub m: i64,
    pub u0: i64,
}

impl LcgParams {
    pub fn new(a: i64, b: i64, m: i64, u0: i64) -> Self {
        Self { a, b, m, u0 }
    }

    fn validate(&self) -> Result<()> {
        if self.m <= 0 {
            return Err(SteganoError::InvalidParameter(format!(
                "modulo m must be positive, got {}",
                self.m
            )));
        }
        Ok(())
    }
}

impl Display for LcgParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.a, self.b, self.m, self.u0)
    }
}

/// Parses `"a,b,m,u0"`, whitespace around the numbers is ignored
impl FromStr for LcgParams {
    type Err = SteganoError;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s
            .split(',')
            .map(|p| {
                p.trim().parse::<i64>().map_err(|e| {
                    SteganoError::InvalidParameter(format!("'{}' is not an integer: {e}", p.trim()))
                })
            })
            .collect::<Result<Vec<i64>>>()?;

        match parts.as_slice() {
            [a, b, m, u0] => Ok(Self::new(*a, *b, *m, *u0)),
            _ => Err(SteganoError::InvalidParameter(format!(
                "expected 4 comma separated values a,b,m,u0 but got {}",
                parts.len()
            ))),
        }
    }
}

/// Stateful generator for one sequence generation call.
///
/// ## Example of usage
/// ```rust
/// use stegano_lcg_core::schedule::{LcgParams, Recurrence};
///
/// let indices = Recurrence::new(LcgParams::new(5, 3, 16, 1))
///     .indices(3, 100)
///     .expect("parameters are valid");
///
/// assert_eq!(indices.as_slice(), &[1, 9, 20, 30]);
/// ```
#[derive(Debug)]
pub struct Recurrence {
    params: LcgParams,
    u: i64,
}

impl Recurrence {
    pub fn new(params: LcgParams) -> Self {
        Self {
            params,
            u: params.u0,
        }
    }

    /// advances the accumulator by one step and returns the new value
    fn advance(&mut self) -> i64 {
        let LcgParams { a, b, m, .. } = self.params;
        let next = (a as i128 * self.u as i128 + b as i128).rem_euclid(m as i128);
        // remainder of a positive i64 modulo fits into i64
        self.u = next as i64;
        self.u
    }

    /// `U(n)`, where `U(0)` is the seed itself
    pub fn nth(params: LcgParams, n: usize) -> Result<i64> {
        params.validate()?;
        let mut r = Self::new(params);
        for _ in 0..n {
            r.advance();
        }
        Ok(r.u)
    }

    /// The raw terms `U(1)..=U(len)` of the recurrence
    pub fn terms(mut self, len: usize) -> Result<Vec<i64>> {
        self.params.validate()?;
        Ok((0..len).map(|_| self.advance()).collect())
    }

    /// Generates `count + 1` indices in `[0, capacity)`.
    ///
    /// The first index is `u0 mod capacity`, every following index is the previous
    /// one plus the freshly advanced accumulator, wrapped at `capacity`.
    pub fn indices(mut self, count: usize, capacity: u64) -> Result<IndexSequence> {
        self.params.validate()?;
        if capacity == 0 {
            return Err(SteganoError::InvalidParameter(
                "capacity must be positive".to_string(),
            ));
        }
        let capacity = capacity as i128;

        let mut current = (self.params.u0 as i128).rem_euclid(capacity);
        let mut indices = Vec::with_capacity(count + 1);
        indices.push(current as u64);

        for step in 1..=count {
            let u = self.advance();
            current = (current + u as i128).rem_euclid(capacity);
            trace!("U{step} = {u} -> index {current}");
            indices.push(current as u64);
        }
        debug!(
            "generated {} indices for ({}) within capacity {capacity}",
            indices.len(),
            self.params
        );

        Ok(IndexSequence::from(indices))
    }
}
