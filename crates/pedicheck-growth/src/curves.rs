use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Percentile {
    #[serde(rename = "3rd")]
    P3,
    #[serde(rename = "15th")]
    P15,
    #[serde(rename = "50th")]
    P50,
    #[serde(rename = "85th")]
    P85,
    #[serde(rename = "97th")]
    P97,
}

impl Percentile {
    pub const ALL: [Percentile; 5] = [
        Percentile::P3,
        Percentile::P15,
        Percentile::P50,
        Percentile::P85,
        Percentile::P97,
    ];
}

/// Where a measurement falls between the five reference curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PercentileBand {
    Below3rd,
    From3rdTo15th,
    From15thTo50th,
    From50thTo85th,
    From85thTo97th,
    Above97th,
}

impl PercentileBand {
    /// Outside the 3rd..97th corridor.
    pub fn needs_attention(self) -> bool {
        matches!(self, PercentileBand::Below3rd | PercentileBand::Above97th)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Curve {
    WeightForAge,
    HeightForAge,
    WeightForHeight,
}

struct CurveShape {
    male_base: f64,
    female_base: f64,
    /// x where every percentile equals the base value.
    origin: f64,
    /// Per-unit growth of the 3rd..97th curves.
    slopes: [f64; 5],
}

const WEIGHT_FOR_AGE: CurveShape = CurveShape {
    male_base: 3.2,
    female_base: 3.0,
    origin: 0.0,
    slopes: [0.3, 0.35, 0.42, 0.49, 0.55],
};

const HEIGHT_FOR_AGE: CurveShape = CurveShape {
    male_base: 49.9,
    female_base: 49.1,
    origin: 0.0,
    slopes: [0.7, 0.75, 0.8, 0.85, 0.9],
};

const WEIGHT_FOR_HEIGHT: CurveShape = CurveShape {
    male_base: 2.5,
    female_base: 2.3,
    origin: 45.0,
    slopes: [0.1, 0.13, 0.15, 0.18, 0.20],
};

impl Curve {
    fn shape(self) -> &'static CurveShape {
        match self {
            Curve::WeightForAge => &WEIGHT_FOR_AGE,
            Curve::HeightForAge => &HEIGHT_FOR_AGE,
            Curve::WeightForHeight => &WEIGHT_FOR_HEIGHT,
        }
    }

    /// Reference values of the five percentiles at `x` (months or cm),
    /// in `Percentile::ALL` order.
    pub fn values_at(self, sex: Sex, x: f64) -> [f64; 5] {
        let shape = self.shape();
        let base = match sex {
            Sex::Male => shape.male_base,
            Sex::Female => shape.female_base,
        };
        shape.slopes.map(|slope| base + slope * (x - shape.origin))
    }

    pub fn value_at(self, sex: Sex, x: f64, percentile: Percentile) -> f64 {
        self.values_at(sex, x)[percentile as usize]
    }

    /// Band for `value` at `x`. Values sitting exactly on a curve are
    /// placed on the side nearer the median.
    pub fn band(self, sex: Sex, x: f64, value: f64) -> PercentileBand {
        let [p3, p15, p50, p85, p97] = self.values_at(sex, x);
        if value <= p50 {
            if value >= p15 {
                PercentileBand::From15thTo50th
            } else if value >= p3 {
                PercentileBand::From3rdTo15th
            } else {
                PercentileBand::Below3rd
            }
        } else if value <= p85 {
            PercentileBand::From50thTo85th
        } else if value <= p97 {
            PercentileBand::From85thTo97th
        } else {
            PercentileBand::Above97th
        }
    }
}
