use serde::Serialize;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: u32,
    pub year: u16,
    pub title: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry { id: 1, year: 2019, title: "First sketches of the nebula grid" },
    TimelineEntry { id: 2, year: 2020, title: "Studio opens with three people" },
    TimelineEntry { id: 3, year: 2022, title: "Motion system ships to clients" },
    TimelineEntry { id: 4, year: 2024, title: "Open-source component kit" },
    TimelineEntry { id: 5, year: 2026, title: "Nebula 2.0" },
];

/// JSON listing written to the console once when the table mounts.
pub fn listing(entries: &[TimelineEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|e| format!("<unserializable timeline: {}>", e))
}

#[function_component(TimelineTable)]
pub fn timeline_table() -> Html {
    use_effect_with_deps(
        |_| {
            log::info!("Timeline: {}", listing(TIMELINE));
            || ()
        },
        (),
    );

    html! {
        <table class="timeline-table">
            <thead>
                <tr>
                    <th scope="col">{"Year"}</th>
                    <th scope="col">{"Milestone"}</th>
                </tr>
            </thead>
            <tbody>
                { for TIMELINE.iter().map(|entry| html! {
                    <tr key={entry.id} id={format!("milestone-{}", entry.id)}>
                        <td>{entry.year.to_string()}</td>
                        <td>{entry.title}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_json_in_order() {
        let json = listing(&TIMELINE[..2]);
        assert_eq!(
            json,
            r#"[{"id":1,"year":2019,"title":"First sketches of the nebula grid"},{"id":2,"year":2020,"title":"Studio opens with three people"}]"#
        );
    }

    #[test]
    fn years_ascend() {
        assert!(TIMELINE.windows(2).all(|pair| pair[0].year <= pair[1].year));
    }
}
