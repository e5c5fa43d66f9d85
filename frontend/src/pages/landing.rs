use yew::prelude::*;

use crate::components::copy::{CopyButton, ToastButton};
use crate::effects::easter_egg::EasterEgg;
use crate::effects::parallax::ParallaxLayers;
use crate::effects::particles::ParticleCanvas;
use crate::effects::pointer::use_pointer_effects;
use crate::effects::reveal::Reveal;
use crate::navigation::nav_bar::NavBar;
use crate::sections::contact::ContactSection;
use crate::sections::faq::Faq;
use crate::sections::gallery::Gallery;
use crate::sections::pricing::Pricing;
use crate::sections::timeline::TimelineTable;

const FEATURES: &[(&str, &str)] = &[
    ("Theme aware", "Dark and light palettes that remember your choice."),
    ("Calm by request", "One switch turns every decorative animation off."),
    ("Keyboard first", "Press Ctrl K anywhere to jump between sections."),
];

const TEAM: &[(&str, &str)] = &[
    ("Ada", "Engineering"),
    ("Grace", "Design"),
    ("Linus", "Motion"),
];

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: &'static str,
    title: &'static str,
    #[prop_or_default]
    children: Children,
}

#[function_component(PageSection)]
fn page_section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id} class="page-section" data-section="">
            <Reveal>
                <h2 class="section-title">{props.title}</h2>
            </Reveal>
            { for props.children.iter() }
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_pointer_effects();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <NavBar />
            <EasterEgg />
            <header id="hero" class="hero" data-section="">
                <ParallaxLayers />
                <ParticleCanvas />
                <div class="hero-content">
                    <h1 class="hero-title">{"Design that moves, when you want it to."}</h1>
                    <p class="hero-subtitle">{"A small studio making calm, fast interfaces."}</p>
                    <div class="hero-cta-group">
                        <a class="btn btn-primary" href="#contact" data-magnetic="">{"Start a project"}</a>
                        <ToastButton message="Try typing the studio's name.">{"Psst"}</ToastButton>
                    </div>
                </div>
            </header>

            <PageSection id="features" title="Features">
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, body)| html! {
                        <Reveal class={classes!("feature-card")}>
                            <div data-tilt="">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </PageSection>

            <PageSection id="pricing" title="Pricing">
                <Pricing />
            </PageSection>

            <PageSection id="team" title="Team">
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <Reveal class={classes!("team-card")}>
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </Reveal>
                    }) }
                </div>
                <CopyButton text="https://nebula.studio/#team">{"Copy team link"}</CopyButton>
            </PageSection>

            <PageSection id="gallery" title="Gallery">
                <Gallery />
            </PageSection>

            <PageSection id="timeline" title="Timeline">
                <Reveal>
                    <TimelineTable />
                </Reveal>
            </PageSection>

            <PageSection id="faq" title="FAQ">
                <Faq />
            </PageSection>

            <PageSection id="contact" title="Contact">
                <Reveal>
                    <ContactSection />
                </Reveal>
            </PageSection>

            <footer class="footer">
                <p>{"© Nebula Studio"}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    :root { --bg: #0b0d17; --fg: #e8ecff; --accent: #7eb2ff; --muted: #9aa3c7; --card: rgba(255,255,255,0.05); }
    :root[data-theme="light"] { --bg: #f7f8fc; --fg: #141827; --accent: #3b6fd8; --muted: #566080; --card: rgba(0,0,0,0.04); }
    body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; }
    body.theme-transition, body.theme-transition * { transition: background-color 0.4s ease, color 0.4s ease; }
    body.reduce-motion *, body.reduce-motion *::before, body.reduce-motion *::after {
        animation: none !important;
        transition: none !important;
        scroll-behavior: auto !important;
    }
    .site-header { position: sticky; top: 0; z-index: 10; background: var(--bg); }
    .scroll-progress { height: 3px; background: var(--accent); width: 0; }
    .nav { display: flex; align-items: center; gap: 1.5rem; padding: 0.75rem 2rem; }
    .nav-logo { font-weight: 700; color: var(--fg); text-decoration: none; }
    .nav-links { display: flex; gap: 1rem; flex: 1; }
    .nav-link { color: var(--muted); text-decoration: none; }
    .nav-link.active { color: var(--accent); }
    .nav-actions { display: flex; gap: 0.5rem; align-items: center; }
    .icon-button, .btn { border: 1px solid var(--card); background: var(--card); color: var(--fg);
        border-radius: 999px; padding: 0.5rem 1rem; cursor: pointer; text-decoration: none;
        transition: transform 0.2s ease; }
    .btn-primary { background: var(--accent); color: var(--bg); }
    .hero { position: relative; min-height: 90vh; display: grid; place-items: center; overflow: hidden; }
    .parallax { position: absolute; inset: 0; pointer-events: none; }
    .parallax-layer { position: absolute; inset: -20%; opacity: 0.35;
        background: radial-gradient(circle at 30% 40%, var(--accent), transparent 40%); }
    .parallax-layer-2 { background: radial-gradient(circle at 70% 60%, #b57eff, transparent 35%); }
    .parallax-layer-3 { background: radial-gradient(circle at 50% 20%, #ff7eb6, transparent 30%); }
    .particle-canvas { position: absolute; inset: 0; width: 100%; height: 100%; }
    .hero-content { position: relative; text-align: center; max-width: 720px; padding: 2rem; }
    .hero-title { font-size: 3rem; margin-bottom: 1rem; }
    .hero-subtitle { color: var(--muted); font-size: 1.3rem; }
    .hero-cta-group { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }
    .page-section { max-width: 1100px; margin: 0 auto; padding: 5rem 2rem; }
    .section-title { font-size: 2.2rem; }
    .reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
    .reveal.visible { opacity: 1; transform: none; }
    .feature-grid, .team-grid, .pricing-grid, .gallery-grid {
        display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
    .feature-card, .team-card, .price-card, .gallery-card { background: var(--card); border-radius: 16px; padding: 1.5rem; }
    .pricing-switch-row { display: flex; gap: 1rem; align-items: center; margin-bottom: 2rem; }
    .pricing-switch { width: 52px; height: 28px; border-radius: 999px; border: none; background: var(--card); position: relative; cursor: pointer; }
    .pricing-knob { position: absolute; top: 4px; left: 4px; width: 20px; height: 20px; border-radius: 50%; background: var(--accent); transition: left 0.2s ease; }
    .pricing-switch.active .pricing-knob { left: 28px; }
    .price { font-size: 2.5rem; font-weight: 700; }
    .chips { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
    .chip { border-radius: 999px; border: 1px solid var(--muted); background: none; color: var(--fg); padding: 0.3rem 0.9rem; cursor: pointer; }
    .chip.active { background: var(--accent); color: var(--bg); }
    .gallery-card.is-hidden { display: none; }
    .gallery-tag { color: var(--accent); font-size: 0.8rem; text-transform: uppercase; }
    .timeline-table { width: 100%; border-collapse: collapse; }
    .timeline-table th, .timeline-table td { text-align: left; padding: 0.75rem; border-bottom: 1px solid var(--card); }
    .faq-question { width: 100%; display: flex; justify-content: space-between; background: none; border: none; color: var(--fg); font-size: 1.1rem; padding: 1rem 0; cursor: pointer; }
    .faq-item.open .faq-question { color: var(--accent); }
    .contact-form { display: grid; gap: 1rem; max-width: 520px; }
    .field { display: grid; gap: 0.3rem; }
    .field input, .field textarea { padding: 0.6rem; border-radius: 8px; border: 1px solid var(--muted); background: transparent; color: var(--fg); }
    .error { color: #ff7e7e; min-height: 1em; font-size: 0.85rem; }
    .form-success { color: #7effb2; }
    .command-palette { position: fixed; inset: 0; background: rgba(0,0,0,0.6); display: grid; place-items: start center; padding-top: 15vh; z-index: 20; }
    .command-palette[hidden] { display: none; }
    .command-dialog { background: var(--bg); border-radius: 12px; width: min(480px, 90vw); padding: 1rem; }
    .command-dialog input { width: 100%; padding: 0.6rem; box-sizing: border-box; }
    .command-dialog ul { list-style: none; padding: 0; max-height: 240px; overflow: auto; }
    .command-item { padding: 0.5rem; border-radius: 6px; cursor: pointer; }
    .command-item.active { background: var(--card); color: var(--accent); }
    .toast-container { position: fixed; bottom: 1.5rem; right: 1.5rem; display: grid; gap: 0.5rem; z-index: 30; }
    .toast { background: var(--fg); color: var(--bg); padding: 0.75rem 1rem; border-radius: 8px; }
    .confetti { position: fixed; inset: 0; pointer-events: none; z-index: 40; }
    .footer { text-align: center; color: var(--muted); padding: 3rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(selector: &str) -> &'static str {
        let start = LANDING_CSS
            .find(&format!("{} {{", selector))
            .unwrap_or_else(|| panic!("no rule for {selector}"));
        let body = &LANDING_CSS[start..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn sticky_header_does_not_trap_fixed_children() {
        // Any of these turns the header into the containing block for
        // position: fixed descendants.
        let header = rule(".site-header");
        for property in ["backdrop-filter", "filter:", "transform", "perspective", "contain"] {
            assert!(!header.contains(property), "header sets {property}");
        }
    }

    #[test]
    fn palette_overlay_covers_the_viewport() {
        let overlay = rule(".command-palette");
        assert!(overlay.contains("position: fixed"));
        assert!(overlay.contains("inset: 0"));
    }
}
