use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Linear modifier `x * a + b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackPowerModifier {
    pub a: f64,
    pub b: f64,
}

impl Default for AttackPowerModifier {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Hash for AttackPowerModifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.to_bits().hash(state);
        self.b.to_bits().hash(state);
    }
}

impl AttackPowerModifier {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0 };

    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn multiply(a: f64) -> Self {
        Self { a, b: 0.0 }
    }

    pub fn add(b: f64) -> Self {
        Self { a: 1.0, b }
    }

    pub fn apply(&self, x: f64) -> f64 {
        x * self.a + self.b
    }

    /// `self` first, then `next`.
    pub fn then(self, next: Self) -> Self {
        Self {
            a: self.a * next.a,
            b: self.b * next.a + next.b,
        }
    }
}
