/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";
/// Storage key holding `"on"` or `"off"`.
pub const MOTION_KEY: &str = "reduce-motion";

pub const THEME_TRANSITION_MS: u32 = 400;
pub const TOAST_LIFETIME_MS: u32 = 3_000;
pub const PRICE_TWEEN_MS: f64 = 400.0;

/// How far above a section's top edge it already counts as the active one.
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub const PARTICLE_COUNT: usize = 40;
pub const CONFETTI_COUNT: usize = 80;
pub const CONFETTI_DURATION_MS: f64 = 2_200.0;

pub const EASTER_EGG_SEQUENCE: &str = "NEBULA";

pub const MAGNETIC_STRENGTH: f64 = 0.15;
pub const TILT_MAX_DEG: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in document order. The nav bar and the scroll tracker both
/// read this list.
pub const SECTIONS: &[Section] = &[
    Section { id: "hero", label: "Home" },
    Section { id: "features", label: "Features" },
    Section { id: "pricing", label: "Pricing" },
    Section { id: "team", label: "Team" },
    Section { id: "gallery", label: "Gallery" },
    Section { id: "timeline", label: "Timeline" },
    Section { id: "faq", label: "FAQ" },
    Section { id: "contact", label: "Contact" },
];

/// Command palette destinations. Each label lower-cased is a section id.
pub const PALETTE_ITEMS: &[&str] = &["Features", "Pricing", "Team", "Gallery", "Timeline", "Contact"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_items_point_at_sections() {
        for item in PALETTE_ITEMS {
            let id = item.to_lowercase();
            assert!(SECTIONS.iter().any(|s| s.id == id), "no section for {item}");
        }
    }
}
