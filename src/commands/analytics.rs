//! Scalar and search subcommands; adds CLI context to library errors.

use anyhow::{Context, Result};

use super::Outcome;
use crate::core::analytics as core_analytics;

pub fn sum(n: usize) -> Result<Outcome> {
    let value = core_analytics::prefix_rational_sum(n).with_context(|| format!("sum {n}"))?;
    Ok(Outcome::Scalar(value))
}

pub fn meaningless(n: usize) -> Result<Outcome> {
    let value = core_analytics::meaningless(n).with_context(|| format!("meaningless {n}"))?;
    Ok(Outcome::Scalar(value))
}

pub fn aimless(n: usize) -> Result<Outcome> {
    let value = core_analytics::aimless(n).with_context(|| format!("aimless {n}"))?;
    Ok(Outcome::Scalar(value))
}

pub fn worthless(n: usize, limit: usize) -> Result<Outcome> {
    let values = core_analytics::worthless_with_limit(n, limit)
        .with_context(|| format!("worthless {n} (limit {limit})"))?;
    Ok(Outcome::Rationals(values))
}
