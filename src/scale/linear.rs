/// Continuous linear mapping from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    /// Data interval `[d0, d1]`; `d0 > d1` is allowed.
    pub domain: [f64; 2],
    /// Output interval `[r0, r1]`; `r0 > r1` flips the axis.
    pub range: [f64; 2],
}

impl LinearScale {
    /// Build a scale from a domain and range.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. Values outside the domain extrapolate.
    pub fn map(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if d1 == d0 { 0.5 } else { (v - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` round tick values inside the domain, in domain order.
    ///
    /// Steps are 1, 2 or 5 times a power of ten; ticks sit on integer multiples of the step.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [mut lo, mut hi] = self.domain;
        if count == 0 || !(hi - lo).is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let reverse = hi < lo;
        if reverse {
            std::mem::swap(&mut lo, &mut hi);
        }

        let inc = tick_increment(lo, hi, count);
        let mut out = Vec::new();
        if inc > 0.0 {
            let mut i0 = (lo / inc).round();
            let mut i1 = (hi / inc).round();
            if i0 * inc < lo {
                i0 += 1.0;
            }
            if i1 * inc > hi {
                i1 -= 1.0;
            }
            for i in (i0 as i64)..=(i1 as i64) {
                out.push(i as f64 * inc);
            }
        } else if inc < 0.0 {
            // Negative increments encode 1/step to keep decimal ticks exact.
            let inv = -inc;
            let mut i0 = (lo * inv).round();
            let mut i1 = (hi * inv).round();
            if i0 / inv < lo {
                i0 += 1.0;
            }
            if i1 / inv > hi {
                i1 -= 1.0;
            }
            for i in (i0 as i64)..=(i1 as i64) {
                out.push(i as f64 / inv);
            }
        }

        if reverse {
            out.reverse();
        }
        out
    }

    /// Positive distance between adjacent ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let [a, b] = self.domain;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if count == 0 || lo == hi || !(hi - lo).is_finite() {
            return 0.0;
        }
        let inc = tick_increment(lo, hi, count);
        if inc >= 0.0 { inc } else { 1.0 / -inc }
    }

    /// Decimal digits needed to print every tick for `count` without loss.
    pub fn tick_precision(&self, count: usize) -> usize {
        let step = self.tick_step(count);
        if step <= 0.0 || !step.is_finite() {
            return 0;
        }
        (0..=15)
            .find(|&p| {
                let scaled = step * 10f64.powi(p as i32);
                (scaled - scaled.round()).abs() < 1e-6
            })
            .unwrap_or(15)
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Print a tick value with fixed precision.
pub fn format_fixed(v: f64, precision: usize) -> String {
    // `+ 0.0` folds negative zero.
    format!("{:.*}", precision, v + 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scale/linear.rs"]
mod tests;
