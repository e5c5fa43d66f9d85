use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{CONFETTI_COUNT, CONFETTI_DURATION_MS};
use crate::error::DomError;
use crate::utils::animation::FrameLoop;
use crate::utils::dom;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub hue: f64,
    pub vx: f64,
    pub vy: f64,
}

impl ConfettiPiece {
    pub fn color(&self) -> String {
        format!("hsl({:.0}, 80%, 60%)", self.hue)
    }
}

/// A single burst: pieces start above the viewport and fall with a little
/// sideways drift until the burst times out.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    started_at: Option<f64>,
}

impl ConfettiBurst {
    pub fn new<R: Rng>(viewport_width: f64, count: usize, rng: &mut R) -> Self {
        let pieces = (0..count)
            .map(|_| ConfettiPiece {
                x: rng.gen::<f64>() * viewport_width,
                y: -20.0 - rng.gen::<f64>() * 200.0,
                size: 4.0 + rng.gen::<f64>() * 6.0,
                hue: rng.gen::<f64>() * 360.0,
                vx: -1.0 + rng.gen::<f64>() * 2.0,
                vy: 2.0 + rng.gen::<f64>() * 3.0,
            })
            .collect();
        Self {
            pieces,
            started_at: None,
        }
    }

    #[cfg(test)]
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Advances every piece and reports whether the burst should keep going
    /// at frame time `now`. The first call sets the start time.
    pub fn step(&mut self, now: f64) -> bool {
        let started_at = *self.started_at.get_or_insert(now);
        for piece in &mut self.pieces {
            piece.x += piece.vx;
            piece.y += piece.vy;
        }
        now - started_at < CONFETTI_DURATION_MS
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        for piece in &self.pieces {
            ctx.set_fill_style_str(&piece.color());
            ctx.fill_rect(piece.x, piece.y, piece.size, piece.size);
        }
    }
}

fn confetti_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), DomError> {
    let document = dom::document().ok_or(DomError::NoWindow)?;
    let body = document.body().ok_or(DomError::MissingElement("body"))?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DomError::UnexpectedElement("canvas"))?;
    canvas.set_class_name("confetti");
    body.append_child(&canvas)?;

    let (width, height) = dom::viewport_size();
    let ratio = dom::device_pixel_ratio();
    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);
    let style = canvas.style();
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;

    let ctx = dom::context_2d(&canvas)?;
    ctx.scale(ratio, ratio)?;
    Ok((canvas, ctx))
}

/// Drops a burst over the page, then removes its canvas. Does nothing with
/// reduced motion on.
pub fn launch_confetti(reduced_motion: bool) {
    if reduced_motion {
        return;
    }
    let (canvas, ctx) = match confetti_canvas() {
        Ok(parts) => parts,
        Err(e) => {
            log::warn!("Confetti skipped: {}", e);
            return;
        }
    };
    let (width, height) = dom::viewport_size();
    let mut burst = ConfettiBurst::new(width, CONFETTI_COUNT, &mut rand::thread_rng());

    // The pending frame owns the loop until the burst ends.
    FrameLoop::default().start(move |now| {
        let running = burst.step(now);
        if running {
            burst.draw(&ctx, width, height);
        } else {
            canvas.remove();
        }
        running
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn burst() -> ConfettiBurst {
        ConfettiBurst::new(1280.0, CONFETTI_COUNT, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn pieces_start_above_the_viewport() {
        let burst = burst();
        assert_eq!(burst.pieces().len(), 80);
        for piece in burst.pieces() {
            assert!(piece.y <= -20.0 && piece.y > -220.0);
            assert!((0.0..1280.0).contains(&piece.x));
            assert!((4.0..10.0).contains(&piece.size));
            assert!((2.0..5.0).contains(&piece.vy));
            assert!((-1.0..1.0).contains(&piece.vx));
        }
    }

    #[test]
    fn pieces_fall_each_frame() {
        let mut burst = burst();
        let before: Vec<f64> = burst.pieces().iter().map(|p| p.y).collect();
        burst.step(0.0);
        for (piece, y) in burst.pieces().iter().zip(before) {
            assert!(piece.y > y);
        }
    }

    #[test]
    fn ends_after_duration() {
        let mut burst = burst();
        assert!(burst.step(100.0));
        assert!(burst.step(100.0 + CONFETTI_DURATION_MS - 1.0));
        assert!(!burst.step(100.0 + CONFETTI_DURATION_MS));
    }

    #[test]
    fn color_is_hsl() {
        let burst = burst();
        let piece = &burst.pieces()[0];
        assert!(piece.color().starts_with("hsl("));
        assert!(piece.color().ends_with(", 80%, 60%)"));
    }
}
