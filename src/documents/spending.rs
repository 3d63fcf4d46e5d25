use serde::{Deserialize, Serialize};

/// Synthetic spending figures for the statistics carousel. Prices are
/// fabricated from coarse tiers, not storefront data; every invocation of
/// the estimator produces a fresh document.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct SpendingEstimate {
    #[serde(default)]
    pub total_spent: u64,

    #[serde(default)]
    pub average_per_game: f64,

    #[serde(default)]
    pub estimated_free_games: u64,

    #[serde(default)]
    pub estimated_paid_games: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_expensive: Option<PricedGame>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_expensive: Vec<PricedGame>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub yearly: Vec<YearlySpend>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategorySlice>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct PricedGame {
    pub name: String,
    pub price: u64,
    pub playtime_minutes: u64,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct YearlySpend {
    pub year: i32,
    pub amount: u64,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct CategorySlice {
    pub label: String,
    pub game_count: u64,
    pub amount: u64,
}
