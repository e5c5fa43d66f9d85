use yew::prelude::*;

use crate::components::hooks::use_reduced_motion;
use crate::config::PRICE_TWEEN_MS;
use crate::utils::animation::{FrameLoop, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Billing {
    Monthly,
    Yearly,
}

impl Billing {
    pub fn toggled(self) -> Self {
        match self {
            Billing::Monthly => Billing::Yearly,
            Billing::Yearly => Billing::Monthly,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub month: i64,
    pub year: i64,
}

impl Plan {
    pub fn price(&self, billing: Billing) -> i64 {
        match billing {
            Billing::Monthly => self.month,
            Billing::Yearly => self.year,
        }
    }
}

pub const PLANS: &[Plan] = &[
    Plan { name: "Starter", month: 19, year: 190 },
    Plan { name: "Studio", month: 49, year: 490 },
    Plan { name: "Scale", month: 99, year: 990 },
];

/// Moves every price label from its displayed value to its target together.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceAnimation {
    tweens: Vec<Tween>,
}

impl PriceAnimation {
    pub fn new(from: &[i64], to: &[i64], reduced_motion: bool) -> Self {
        let duration = if reduced_motion { 0.0 } else { PRICE_TWEEN_MS };
        let tweens = from
            .iter()
            .zip(to)
            .map(|(from, to)| Tween::new(*from as f64, *to as f64, duration))
            .collect();
        Self { tweens }
    }

    /// Values to display at frame time `now`, and whether all are final.
    pub fn step(&mut self, now: f64) -> (Vec<i64>, bool) {
        let mut done = true;
        let values = self
            .tweens
            .iter_mut()
            .map(|tween| {
                let (value, finished) = tween.sample(now);
                done &= finished;
                value as i64
            })
            .collect();
        (values, done)
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let billing = use_state(|| Billing::Monthly);
    let displayed = use_state(|| PLANS.iter().map(|p| p.month).collect::<Vec<_>>());
    let frames = use_mut_ref(FrameLoop::default);
    let reduced = use_reduced_motion();

    {
        let frames = frames.borrow().clone();
        use_effect_with_deps(move |_| move || frames.stop(), ());
    }

    let onclick = {
        let billing = billing.clone();
        let displayed = displayed.clone();
        let frames = frames.borrow().clone();
        Callback::from(move |_: MouseEvent| {
            let next = billing.toggled();
            billing.set(next);
            let targets: Vec<i64> = PLANS.iter().map(|plan| plan.price(next)).collect();
            let mut animation = PriceAnimation::new(&displayed, &targets, reduced);
            if reduced {
                frames.stop();
                displayed.set(animation.step(0.0).0);
                return;
            }
            let displayed = displayed.clone();
            frames.start(move |now| {
                let (values, done) = animation.step(now);
                displayed.set(values);
                !done
            });
        })
    };

    let yearly = *billing == Billing::Yearly;
    let cards = PLANS.iter().zip(displayed.iter()).map(|(plan, value)| {
        html! {
            <article class="price-card" data-tilt="">
                <h3>{plan.name}</h3>
                <p class="price-line">
                    {"€"}
                    <span class="price" data-month={plan.month.to_string()} data-year={plan.year.to_string()}>
                        {value.to_string()}
                    </span>
                    <span class="price-period">{if yearly { "/year" } else { "/month" }}</span>
                </p>
            </article>
        }
    });

    html! {
        <>
            <div class="pricing-switch-row">
                <span>{"Monthly"}</span>
                <button
                    class={classes!("pricing-switch", yearly.then_some("active"))}
                    data-pricing-switch=""
                    aria-pressed={yearly.to_string()}
                    aria-label="Bill yearly"
                    {onclick}
                >
                    <span class="pricing-knob"></span>
                </button>
                <span>{"Yearly"}</span>
            </div>
            <div class="pricing-grid">
                { for cards }
            </div>
        </>
    }
}
