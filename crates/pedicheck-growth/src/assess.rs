use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::curves::{Curve, Percentile, PercentileBand, Sex};
use crate::error::GrowthError;

pub const AGE_RANGE_MONTHS: (u32, u32) = (0, 24);
pub const WEIGHT_RANGE_KG: (f64, f64) = (2.0, 20.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (45.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GrowthMeasurement {
    pub sex: Sex,
    pub age_months: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// One measurement against one curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Placement {
    pub value: f64,
    pub median: f64,
    pub band: PercentileBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GrowthAssessment {
    pub weight_for_age: Placement,
    pub height_for_age: Placement,
    pub weight_for_height: Placement,
}

impl GrowthAssessment {
    pub fn needs_attention(&self) -> bool {
        [self.weight_for_age, self.height_for_age, self.weight_for_height]
            .iter()
            .any(|p| p.band.needs_attention())
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), GrowthError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GrowthError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn place(curve: Curve, sex: Sex, x: f64, value: f64) -> Placement {
    Placement {
        value,
        median: curve.value_at(sex, x, Percentile::P50),
        band: curve.band(sex, x, value),
    }
}

pub fn assess(measurement: &GrowthMeasurement) -> Result<GrowthAssessment, GrowthError> {
    let GrowthMeasurement {
        sex,
        age_months,
        weight_kg,
        height_cm,
    } = *measurement;

    check_range(
        "age_months",
        f64::from(age_months),
        (f64::from(AGE_RANGE_MONTHS.0), f64::from(AGE_RANGE_MONTHS.1)),
    )?;
    check_range("weight_kg", weight_kg, WEIGHT_RANGE_KG)?;
    check_range("height_cm", height_cm, HEIGHT_RANGE_CM)?;

    let age = f64::from(age_months);
    Ok(GrowthAssessment {
        weight_for_age: place(Curve::WeightForAge, sex, age, weight_kg),
        height_for_age: place(Curve::HeightForAge, sex, age, height_cm),
        weight_for_height: place(Curve::WeightForHeight, sex, height_cm, weight_kg),
    })
}
