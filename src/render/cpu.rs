use crate::foundation::core::{BezPath, Point, Rgba8Premul};
use crate::foundation::error::{PolarError, PolarResult};
use crate::render::scene::{DrawOp, LayerStyle, Scene};

/// Rendered pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data, as expected by PNG encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            };
            out.extend_from_slice(&c.to_straight_rgba());
        }
        out
    }

    /// Premultiplied pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Renderer options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderSettings {
    /// Straight RGBA clear color; `None` uses the scene background.
    pub clear_rgba: Option<[u8; 4]>,
}

/// CPU rasterizer powered by `vello_cpu`.
///
/// The render context is kept between calls and reused while the canvas size is unchanged.
pub struct CpuRenderer {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    /// Renderer with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    /// Rasterize `scene`.
    #[tracing::instrument(skip(self, scene), fields(ops = scene.ops.len()))]
    pub fn render(&mut self, scene: &Scene) -> PolarResult<FrameRGBA> {
        let width: u16 = scene
            .canvas
            .width
            .try_into()
            .map_err(|_| PolarError::render("canvas width exceeds u16"))?;
        let height: u16 = scene
            .canvas
            .height
            .try_into()
            .map_err(|_| PolarError::render("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        let background = self
            .settings
            .clear_rgba
            .unwrap_or_else(|| scene.background.to_straight_rgba());
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        for op in &scene.ops {
            draw_op(&mut ctx, op);
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data,
            premultiplied: true,
        })
    }
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    match op {
        DrawOp::Stroke { path, style } => {
            ctx.set_paint(style_paint(style));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.width));
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        DrawOp::Fill { path, style } => {
            ctx.set_paint(style_paint(style));
            ctx.fill_path(&bezpath_to_cpu(path));
        }
    }
}

fn style_paint(style: &LayerStyle) -> vello_cpu::peniko::Color {
    color_to_cpu(style.color.to_straight_rgba())
}

fn color_to_cpu([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
