use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_events::EventListener;
use rand::Rng;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::components::hooks::{use_page_visible, use_reduced_motion};
use crate::config::PARTICLE_COUNT;
use crate::utils::animation::FrameLoop;
use crate::utils::dom;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Drifting dots that bounce off the canvas edges.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, count: usize, rng: &mut R) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::with_capacity(count),
        };
        field.regenerate(count, rng);
        field
    }

    pub fn regenerate<R: Rng>(&mut self, count: usize, rng: &mut R) {
        self.particles.clear();
        for _ in 0..count {
            self.particles.push(Particle {
                x: rng.gen::<f64>() * self.width,
                y: rng.gen::<f64>() * self.height,
                r: 1.0 + rng.gen::<f64>() * 2.0,
                vx: rng.gen::<f64>() - 0.5,
                vy: rng.gen::<f64>() - 0.5,
            });
        }
    }

    /// Advances one frame. A particle outside the bounds has that velocity
    /// component reversed.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str("rgba(255,255,255,0.4)");
        for p in &self.particles {
            ctx.begin_path();
            if ctx.arc(p.x, p.y, p.r, 0.0, TAU).is_ok() {
                ctx.fill();
            }
        }
    }
}

/// Matches the backing store to the element size times the pixel ratio.
fn resize(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let ratio = dom::device_pixel_ratio();
    let width = (canvas.offset_width() as f64 * ratio).max(0.0);
    let height = (canvas.offset_height() as f64 * ratio).max(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn fresh_field(canvas: &HtmlCanvasElement) -> ParticleField {
    let (width, height) = resize(canvas);
    ParticleField::new(width, height, PARTICLE_COUNT, &mut rand::thread_rng())
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();
    let frames = use_mut_ref(FrameLoop::default);
    let field: Rc<RefCell<Option<ParticleField>>> = use_mut_ref(|| None);
    let reduced = use_reduced_motion();
    let visible = use_page_visible();

    {
        let canvas_ref = canvas_ref.clone();
        let frames = frames.borrow().clone();
        let field = field.clone();
        use_effect_with_deps(
            move |(reduced, visible)| {
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                let context = canvas.as_ref().map(dom::context_2d);
                match (canvas, context) {
                    (Some(canvas), Some(Ok(ctx))) if !*reduced && *visible => {
                        *field.borrow_mut() = Some(fresh_field(&canvas));
                        let field = field.clone();
                        frames.start(move |_| {
                            if let Some(field) = field.borrow_mut().as_mut() {
                                field.step();
                                field.draw(&ctx);
                            }
                            true
                        });
                    }
                    (Some(canvas), Some(Ok(ctx))) => {
                        frames.stop();
                        if *reduced {
                            field.borrow_mut().take();
                            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
                        }
                    }
                    (_, Some(Err(e))) => log::warn!("Particle canvas disabled: {}", e),
                    _ => {}
                }
                move || frames.stop()
            },
            (reduced, visible),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window().map(|window| {
                    EventListener::new(&window, "resize", move |_| {
                        let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                            return;
                        };
                        let mut field = field.borrow_mut();
                        if field.is_some() {
                            *field = Some(fresh_field(&canvas));
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true"></canvas>
    }
}
