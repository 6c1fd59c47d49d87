use serde::Serialize;

/// The ten canonical pitch elements, in analysis-question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PitchCategory {
    Problem,
    Solution,
    Market,
    ProductTechStack,
    BusinessModel,
    Competition,
    GtmStrategy,
    Team,
    TractionResults,
    FinancialsInvestmentAsk,
}

impl PitchCategory {
    pub const ALL: [PitchCategory; 10] = [
        PitchCategory::Problem,
        PitchCategory::Solution,
        PitchCategory::Market,
        PitchCategory::ProductTechStack,
        PitchCategory::BusinessModel,
        PitchCategory::Competition,
        PitchCategory::GtmStrategy,
        PitchCategory::Team,
        PitchCategory::TractionResults,
        PitchCategory::FinancialsInvestmentAsk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PitchCategory::Problem => "Problem",
            PitchCategory::Solution => "Solution",
            PitchCategory::Market => "Market",
            PitchCategory::ProductTechStack => "Product / Tech Stack",
            PitchCategory::BusinessModel => "Business Model",
            PitchCategory::Competition => "Competition",
            PitchCategory::GtmStrategy => "GTM Strategy",
            PitchCategory::Team => "Team",
            PitchCategory::TractionResults => "Traction / Results",
            PitchCategory::FinancialsInvestmentAsk => "Financials & Investment Ask",
        }
    }

    /// 1-based analysis question number.
    pub fn question_number(&self) -> u32 {
        match self {
            PitchCategory::Problem => 1,
            PitchCategory::Solution => 2,
            PitchCategory::Market => 3,
            PitchCategory::ProductTechStack => 4,
            PitchCategory::BusinessModel => 5,
            PitchCategory::Competition => 6,
            PitchCategory::GtmStrategy => 7,
            PitchCategory::Team => 8,
            PitchCategory::TractionResults => 9,
            PitchCategory::FinancialsInvestmentAsk => 10,
        }
    }

    /// First category whose label occurs (case-insensitively) in `element`.
    pub fn resolve(element: &str) -> Option<Self> {
        let element = element.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| element.contains(&category.label().to_lowercase()))
    }
}

/// The extracted fact a quantitative criterion is scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuantitativeFact {
    /// Market size, gated by the market analysis.
    MarketSize,
    /// Current revenue, mapped directly.
    TractionRevenue,
}

impl QuantitativeFact {
    /// Routes on `market` before `traction` (case-insensitive), so an element naming
    /// both is scored as market size.
    pub fn resolve(element: &str) -> Option<Self> {
        let element = element.to_lowercase();
        if element.contains("market") {
            Some(QuantitativeFact::MarketSize)
        } else if element.contains("traction") {
            Some(QuantitativeFact::TractionRevenue)
        } else {
            None
        }
    }
}

impl std::fmt::Display for PitchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
