use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency value of one focus hour when collapsing a value vector into a
/// single monetary figure.
pub const FOCUS_HOUR_CURRENCY_RATE: f64 = 100.0;

/// The four-axis reward shape shared by habit definitions (reward per
/// occurrence), habit events (snapshotted value) and the per-user running
/// aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueVector {
    pub life_days: f64,
    pub medical_savings: f64,
    pub skill_assets: f64,
    pub focus_hours: f64,
}

impl ValueVector {
    pub fn new(life_days: f64, medical_savings: f64, skill_assets: f64, focus_hours: f64) -> Self {
        Self {
            life_days,
            medical_savings,
            skill_assets,
            focus_hours,
        }
    }

    /// Reward vector scaled by an event's duration multiplier.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            life_days: self.life_days * factor,
            medical_savings: self.medical_savings * factor,
            skill_assets: self.skill_assets * factor,
            focus_hours: self.focus_hours * factor,
        }
    }

    /// Single monetary figure: medical savings plus skill assets, with focus
    /// hours converted at `FOCUS_HOUR_CURRENCY_RATE`. Life days carry no
    /// direct currency value.
    pub fn total_value(&self) -> f64 {
        self.medical_savings + self.skill_assets + self.focus_hours * FOCUS_HOUR_CURRENCY_RATE
    }
}

impl Add for ValueVector {
    type Output = ValueVector;
    fn add(self, rhs: ValueVector) -> ValueVector {
        ValueVector {
            life_days: self.life_days + rhs.life_days,
            medical_savings: self.medical_savings + rhs.medical_savings,
            skill_assets: self.skill_assets + rhs.skill_assets,
            focus_hours: self.focus_hours + rhs.focus_hours,
        }
    }
}

impl AddAssign for ValueVector {
    fn add_assign(&mut self, rhs: ValueVector) {
        *self = *self + rhs;
    }
}

impl Sub for ValueVector {
    type Output = ValueVector;
    fn sub(self, rhs: ValueVector) -> ValueVector {
        self + (-rhs)
    }
}

impl SubAssign for ValueVector {
    fn sub_assign(&mut self, rhs: ValueVector) {
        *self = *self - rhs;
    }
}

impl Neg for ValueVector {
    type Output = ValueVector;
    fn neg(self) -> ValueVector {
        ValueVector {
            life_days: -self.life_days,
            medical_savings: -self.medical_savings,
            skill_assets: -self.skill_assets,
            focus_hours: -self.focus_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_value_converts_focus_hours() {
        let v = ValueVector::new(0.02, 60.0, 0.0, 0.5);
        assert_eq!(v.total_value(), 110.0);
    }

    #[test]
    fn scaled_multiplies_every_component() {
        let v = ValueVector::new(0.01, 30.0, 50.0, 1.0).scaled(2.0);
        assert_eq!(v, ValueVector::new(0.02, 60.0, 100.0, 2.0));
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = ValueVector::new(0.02, 60.0, 0.0, 0.5);
        let b = ValueVector::new(0.01, 12.0, 84.0, 1.0);
        assert_eq!((a + b) - b, a);
    }
}
