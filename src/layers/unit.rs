/// Whether a unit computes a value or stands in for a constant bias input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
    Ordinary,
    Bias,
}

/// A single scalar node of a layer.
///
/// A bias unit always reads as `1.0`; writes to it are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    role: UnitRole,
    value: f64,
}

impl Unit {
    pub fn ordinary() -> Unit {
        Unit { role: UnitRole::Ordinary, value: 0.0 }
    }

    pub fn bias() -> Unit {
        Unit { role: UnitRole::Bias, value: 1.0 }
    }

    pub fn role(&self) -> UnitRole {
        self.role
    }

    pub fn is_bias(&self) -> bool {
        self.role == UnitRole::Bias
    }

    pub fn value(&self) -> f64 {
        match self.role {
            UnitRole::Bias => 1.0,
            UnitRole::Ordinary => self.value,
        }
    }

    pub fn set_value(&mut self, value: f64) {
        if self.role == UnitRole::Ordinary {
            self.value = value;
        }
    }
}
