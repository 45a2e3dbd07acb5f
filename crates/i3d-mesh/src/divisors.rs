//! Divisor sequence for domain decomposition.

/// Lazy iterator over `0` followed by every divisor of `n`, ascending.
///
/// `0` stands for auto-tuning of the processor grid. Divisors are found by
/// trial division up to `√n`; the large half of each pair is buffered and
/// emitted in reverse once the small halves are exhausted.
///
/// ```
/// use i3d_mesh::divisors;
///
/// assert_eq!(divisors(8).collect::<Vec<_>>(), [0, 1, 2, 4, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct Divisors {
    n: u64,
    next: u64,
    started: bool,
    large: Vec<u64>,
}

/// Divisor sequence for `n`. Clone the iterator to restart it.
pub fn divisors(n: u64) -> Divisors {
    Divisors {
        n,
        next: 1,
        started: false,
        large: Vec::new(),
    }
}

impl Divisors {
    /// The number whose divisors are produced.
    pub fn n(&self) -> u64 {
        self.n
    }
}

impl Iterator for Divisors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.started {
            self.started = true;
            return Some(0);
        }
        while self.next.saturating_mul(self.next) <= self.n {
            let i = self.next;
            self.next += 1;
            if self.n % i == 0 {
                let j = self.n / i;
                if j != i {
                    self.large.push(j);
                }
                return Some(i);
            }
        }
        self.large.pop()
    }
}
