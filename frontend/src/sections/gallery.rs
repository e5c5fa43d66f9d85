use yew::prelude::*;

pub const ALL: &str = "all";

const FILTERS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("design", "Design"),
    ("motion", "Motion"),
    ("code", "Code"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryCard {
    pub title: &'static str,
    pub category: &'static str,
}

pub const CARDS: &[GalleryCard] = &[
    GalleryCard { title: "Orbit identity", category: "design" },
    GalleryCard { title: "Starfield intro", category: "motion" },
    GalleryCard { title: "Signal dashboard", category: "code" },
    GalleryCard { title: "Aurora type scale", category: "design" },
    GalleryCard { title: "Comet transitions", category: "motion" },
    GalleryCard { title: "Pulse API", category: "code" },
];

/// `"all"` matches every card; any other filter matches its own category.
pub fn is_visible(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

/// The single active chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryFilter {
    active: String,
}

impl Default for GalleryFilter {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl GalleryFilter {
    pub fn select(&mut self, filter: &str) {
        self.active = filter.to_string();
    }

    #[cfg(test)]
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, filter: &str) -> bool {
        self.active == filter
    }

    pub fn shows(&self, category: &str) -> bool {
        is_visible(&self.active, category)
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let filter = use_state(GalleryFilter::default);

    let chips = FILTERS.iter().map(|(value, label)| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*filter).clone();
                next.select(value);
                filter.set(next);
            })
        };
        let active = filter.is_active(value);
        html! {
            <button
                class={classes!("chip", active.then_some("active"))}
                data-filter={*value}
                aria-pressed={active.to_string()}
                {onclick}
            >
                {*label}
            </button>
        }
    });

    let cards = CARDS.iter().map(|card| {
        html! {
            <article
                class={classes!("gallery-card", (!filter.shows(card.category)).then_some("is-hidden"))}
                data-category={card.category}
                data-tilt=""
            >
                <span class="gallery-tag">{card.category}</span>
                <h3>{card.title}</h3>
            </article>
        }
    });

    html! {
        <>
            <div class="chips" role="toolbar" aria-label="Filter gallery">
                { for chips }
            </div>
            <div class="gallery-grid">
                { for cards }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_card() {
        let filter = GalleryFilter::default();
        assert!(CARDS.iter().all(|card| filter.shows(card.category)));
    }

    #[test]
    fn design_hides_other_categories() {
        let mut filter = GalleryFilter::default();
        filter.select("design");
        for card in CARDS {
            assert_eq!(filter.shows(card.category), card.category == "design");
        }
    }

    #[test]
    fn exactly_one_chip_is_active() {
        let mut filter = GalleryFilter::default();
        filter.select("motion");
        let active: Vec<_> = FILTERS.iter().filter(|(value, _)| filter.is_active(value)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(filter.active(), "motion");
    }
}
