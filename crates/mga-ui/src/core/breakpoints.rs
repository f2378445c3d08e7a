//! Responsive breakpoints and the description budget each one allows.

/// Breakpoint with an inclusive maximum width and the teaser budget it allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name used in logs and CSS hooks.
    pub name: &'static str,
    /// Inclusive upper bound in CSS pixels; `None` for the widest tier.
    pub max_width: Option<u32>,
    /// Maximum description length in characters, ellipsis included.
    pub description_budget: usize,
}

/// Phones.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    max_width: Some(576),
    description_budget: 80,
};
/// Large phones and small tablets.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    max_width: Some(768),
    description_budget: 80,
};
/// Tablets.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    max_width: Some(992),
    description_budget: 130,
};
/// Small desktops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    max_width: Some(1200),
    description_budget: 140,
};
/// Everything wider.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    max_width: None,
    description_budget: 190,
};

/// Ordered breakpoints, narrowest first.
pub const BREAKPOINTS: [Breakpoint; 5] = [XS, SM, MD, LG, XL];

/// Width assumed when the viewport cannot be measured.
pub const FALLBACK_WIDTH: u32 = 1280;

/// Find the first breakpoint whose maximum covers `width`.
#[must_use]
pub fn for_width(width: u32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XL)
}

/// Convert a raw `innerWidth` reading into whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn width_from_px(raw: Option<f64>) -> u32 {
    match raw {
        Some(px) if px.is_finite() && px >= 0.0 => px.min(f64::from(u32::MAX)) as u32,
        _ => FALLBACK_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budgets_follow_breakpoint_table() {
        assert_eq!(for_width(320).description_budget, 80);
        assert_eq!(for_width(576).description_budget, 80);
        assert_eq!(for_width(577).description_budget, 80);
        assert_eq!(for_width(768).description_budget, 80);
        assert_eq!(for_width(900).description_budget, 130);
        assert_eq!(for_width(1200).description_budget, 140);
        assert_eq!(for_width(1400).description_budget, 190);
    }

    #[test]
    fn breakpoint_names_match_ranges() {
        assert_eq!(for_width(0).name, XS.name);
        assert_eq!(for_width(700).name, SM.name);
        assert_eq!(for_width(1000).name, LG.name);
        assert_eq!(for_width(4000).name, XL.name);
    }

    #[test]
    fn unreadable_width_falls_back() {
        assert_eq!(width_from_px(None), FALLBACK_WIDTH);
        assert_eq!(width_from_px(Some(f64::NAN)), FALLBACK_WIDTH);
        assert_eq!(width_from_px(Some(-3.0)), FALLBACK_WIDTH);
        assert_eq!(width_from_px(Some(1023.7)), 1023);
    }
}
