use leptos::{html, prelude::*};

use crate::starfield::drift::{FloatingLabel, Particle, BLOCKCHAIN_PLATFORMS};

#[cfg(feature = "hydrate")]
use crate::starfield::{Animation, Starfield, StarfieldConfig, Surface, SurfaceError, Viewport};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(feature = "hydrate")]
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[cfg(feature = "hydrate")]
impl CanvasSurface {
    fn acquire(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

#[cfg(feature = "hydrate")]
impl Surface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fade(&mut self, alpha: f64, width: f64, height: f64) {
        self.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x, y, radius, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
        }
    }
}

#[cfg(feature = "hydrate")]
fn window_viewport() -> Result<Viewport, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Ok(Viewport::new(width, height)),
        _ => Err(SurfaceError::NoWindow),
    }
}

#[cfg(feature = "hydrate")]
fn start_animation(
    canvas: HtmlCanvasElement,
    config: StarfieldConfig,
) -> Result<Animation<CanvasSurface>, SurfaceError> {
    let surface = CanvasSurface::acquire(canvas)?;
    let field = Starfield::new(config, window_viewport()?);
    Ok(Animation::new(surface, field))
}

/// Full-bleed canvas running the starfield, one frame per display refresh.
///
/// The loop only exists in the browser. If no 2D context can be had the
/// canvas stays blank and the frame loop is stopped for good.
#[component]
pub fn StarfieldCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_event_listener, use_raf_fn, use_window, utils::Pausable};

        let animation = StoredValue::new_local(None::<Animation<CanvasSurface>>);

        let Pausable { pause, .. } = use_raf_fn(move |_| {
            animation.try_update_value(|anim| {
                if let Some(anim) = anim.as_mut() {
                    anim.frame();
                }
            });
        });

        let stop = pause.clone();
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            match start_animation(canvas, StarfieldConfig::default()) {
                Ok(anim) => animation.set_value(Some(anim)),
                Err(err) => {
                    log::debug!("starfield disabled: {err}");
                    stop();
                }
            }
        });

        let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| {
            let Ok(viewport) = window_viewport() else {
                return;
            };
            animation.try_update_value(|anim| {
                if let Some(anim) = anim.as_mut() {
                    anim.resize(viewport);
                }
            });
        });

        on_cleanup(move || {
            pause();
            animation.try_update_value(|anim| {
                if let Some(anim) = anim.as_mut() {
                    anim.halt();
                }
            });
        });
    }

    view! { <canvas node_ref=canvas_ref class="absolute inset-0 z-0" /> }
}

#[component]
pub fn FloatingLabels() -> impl IntoView {
    let labels = RwSignal::new(Vec::<FloatingLabel>::new());
    // effects are browser-only, so the server never renders a layout the
    // client would disagree with
    Effect::new(move |_| {
        let mut rng = fastrand::Rng::new();
        labels.set(FloatingLabel::scatter(&mut rng, &BLOCKCHAIN_PLATFORMS));
    });

    view! {
        <div class="absolute inset-0 z-10 pointer-events-none overflow-hidden">
            {move || {
                labels
                    .get()
                    .into_iter()
                    .map(|label| {
                        view! {
                            <div
                                class="absolute text-cyan-500/30 text-sm md:text-base font-mono whitespace-nowrap"
                                style=label.style()
                            >
                                {label.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn InterstellarBackground() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden bg-black">
            <StarfieldCanvas />
            <FloatingLabels />
            <div class="absolute inset-0 z-0 bg-gradient-radial from-blue-900/20 via-transparent to-transparent opacity-50" />
        </div>
    }
}

/// Scattered CSS-animated dots; regenerated per page load in the browser.
#[component]
pub fn ParticleField(
    count: usize,
    make: fn(&mut fastrand::Rng) -> Particle,
    keyframes: &'static str,
    #[prop(into)] class: String,
) -> impl IntoView {
    let particles = RwSignal::new(Vec::<Particle>::new());
    Effect::new(move |_| {
        let mut rng = fastrand::Rng::new();
        particles.set(Particle::scatter(&mut rng, count, make));
    });

    view! {
        {move || {
            particles
                .get()
                .into_iter()
                .map(|p| view! { <div class=class.clone() style=p.style(keyframes) /> })
                .collect_view()
        }}
    }
}
