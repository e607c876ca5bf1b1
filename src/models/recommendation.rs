use serde::{Deserialize, Serialize};

/// Advisory label attached to every prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::StrongBuy => write!(f, "strong-buy"),
            Recommendation::Buy => write!(f, "buy"),
            Recommendation::Hold => write!(f, "hold"),
            Recommendation::Sell => write!(f, "sell"),
        }
    }
}

/// A recommendation together with the icon and text the renderer shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub recommendation: Recommendation,
    pub icon: &'static str,
    pub text: &'static str,
}

impl Advice {
    pub const STRONG_BUY: Advice = Advice {
        recommendation: Recommendation::StrongBuy,
        icon: "🚀",
        text: "Strong Buy - High growth potential with positive momentum",
    };

    pub const BUY: Advice = Advice {
        recommendation: Recommendation::Buy,
        icon: "📈",
        text: "Buy - Upward trend with good entry point",
    };

    pub const SELL: Advice = Advice {
        recommendation: Recommendation::Sell,
        icon: "⚠️",
        text: "Consider Selling - Downward trend or overbought conditions",
    };

    pub const HOLD_CAUTION: Advice = Advice {
        recommendation: Recommendation::Hold,
        icon: "📊",
        text: "Hold Position - Market consolidation or high volatility",
    };

    pub const HOLD_STABLE: Advice = Advice {
        recommendation: Recommendation::Hold,
        icon: "💼",
        text: "Hold Position - Stable market conditions",
    };

    // Basic fallback path
    pub const POSITIVE_MOMENTUM: Advice = Advice {
        recommendation: Recommendation::Buy,
        icon: "📈",
        text: "Positive Momentum",
    };

    pub const NEUTRAL_POSITION: Advice = Advice {
        recommendation: Recommendation::Hold,
        icon: "📊",
        text: "Neutral Position",
    };
}
