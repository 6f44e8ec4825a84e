use nsga_kit::prelude::Float;

/// Specifies which objective the scalar fitness and demand attribution favour.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectiveVariant {
    /// A weighted trade-off between cost and emissions.
    Tradeoff {
        /// A weight of cost term.
        cost_weight: Float,
        /// A weight of emissions term.
        emission_weight: Float,
    },
    /// Minimizes cost only.
    CostMinimizing,
    /// Minimizes emissions only.
    EmissionMinimizing,
}

impl Default for ObjectiveVariant {
    fn default() -> Self {
        Self::Tradeoff { cost_weight: 0.5, emission_weight: 0.5 }
    }
}

impl ObjectiveVariant {
    /// Returns cost and emission weights normalized to sum to one.
    pub fn weights(&self) -> (Float, Float) {
        match self {
            Self::Tradeoff { cost_weight, emission_weight } => {
                let total = cost_weight + emission_weight;
                if total.is_finite() && total > 0. {
                    (cost_weight / total, emission_weight / total)
                } else {
                    (0.5, 0.5)
                }
            }
            Self::CostMinimizing => (1., 0.),
            Self::EmissionMinimizing => (0., 1.),
        }
    }

    /// Returns a short name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tradeoff { .. } => "tradeoff",
            Self::CostMinimizing => "cost",
            Self::EmissionMinimizing => "emission",
        }
    }
}
