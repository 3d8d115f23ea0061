//! Summary statistics over a single instrument's price series.

use crate::error::{Result, StockPriceError};
use crate::models::{PricePoint, PriceStatistics};

/// Compute start/end dates, average, max, min and population standard
/// deviation for `series`.
///
/// Fails with [`StockPriceError::EmptySeries`] when `series` is empty and with
/// [`StockPriceError::MixedInstrument`] when any record belongs to a different
/// instrument than the first. `series` is not reordered; sorting happens on a
/// copy.
pub fn compute_statistics(series: &[PricePoint]) -> Result<PriceStatistics> {
    let first = series.first().ok_or(StockPriceError::EmptySeries)?;

    if let Some(other) = series
        .iter()
        .find(|p| p.instrument_id != first.instrument_id)
    {
        return Err(StockPriceError::MixedInstrument {
            expected: first.instrument_id.clone(),
            found: other.instrument_id.clone(),
        });
    }

    let mut sorted = series.to_vec();
    sorted.sort_by_key(|p| p.price_date);

    let start_date = sorted[0].price_date;
    let end_date = sorted[sorted.len() - 1].price_date;

    let mut sum = 0.0;
    let mut max = sorted[0].price;
    let mut min = sorted[0].price;
    for p in &sorted {
        sum += p.price;
        if p.price > max {
            max = p.price;
        }
        if p.price < min {
            min = p.price;
        }
    }

    let count = sorted.len() as f64;

    // Identical prices: rounding in the sum must not reach the average or deviation.
    let (average, standard_deviation) = if min == max {
        (min, 0.0)
    } else {
        // min <= average <= max. Not f64::clamp: it panics on NaN bounds.
        let raw = sum / count;
        let average = if raw < min {
            min
        } else if raw > max {
            max
        } else {
            raw
        };

        let squared_diff: f64 = sorted
            .iter()
            .map(|p| {
                let diff = p.price - average;
                diff * diff
            })
            .sum();
        (average, (squared_diff / count).sqrt())
    };

    Ok(PriceStatistics {
        instrument_id: first.instrument_id.clone(),
        start_date,
        end_date,
        average,
        max,
        min,
        standard_deviation,
    })
}
