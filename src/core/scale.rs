use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto a pixel extent `[0, extent_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits a domain around `min..=max`.
    ///
    /// A zero span is widened by `1.0`, or by a few ulps of the value when
    /// `0.5` is below the value's precision.
    pub fn fitted(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "scale bounds must be finite and ordered".to_owned(),
            ));
        }
        if min == max {
            let half_width = (min.abs() * f64::EPSILON * 4.0).max(0.5);
            return Self::new(
                (min - half_width).max(f64::MIN),
                (max + half_width).min(f64::MAX),
            );
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        check_extent(extent_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        Ok((value * 0.5 - self.domain_start * 0.5) / self.half_span() * extent_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent_px: f64) -> ChartResult<f64> {
        check_extent(extent_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = pixel / extent_px;
        Ok((self.domain_start * 0.5 + normalized * self.half_span()) * 2.0)
    }

    // Halved so domains spanning most of the f64 range never overflow.
    fn half_span(self) -> f64 {
        self.domain_end * 0.5 - self.domain_start * 0.5
    }
}

fn check_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
