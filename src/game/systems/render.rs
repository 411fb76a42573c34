//! Render system
//!
//! Places every renderable for the current window size and fills the draw
//! batch. Nothing is drawn here; the screen submits the batch on paint.
//!
//! Both axes are scaled by the window height, so positions keep their
//! distance from the bottom-left corner in proportion to the height and a
//! wide window simply shows more room on the right.

use crate::game::components::Renderable;
use crate::game::World;
use crate::render::DrawCommand;
use super::{System, SystemContext};

pub struct RenderSystem;

impl System for RenderSystem {
    fn name(&self) -> &'static str {
        "render"
    }

    fn update(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let window = ctx.surface.size();
        ctx.batch.clear();

        for (entity, renderable) in world.renderables.iter_mut() {
            let position = world.positions.expect(entity);
            let x = window.height * position.x;
            let y = window.height * position.y;

            match renderable {
                Renderable::Sprite(sprite) => {
                    sprite.drawable.x = x;
                    sprite.drawable.y = y;
                    // Rescale in case the window or the proportion changed
                    sprite.drawable.scale = window.width * sprite.proportion / sprite.image.width;

                    ctx.batch.push(DrawCommand::Sprite {
                        image: sprite.image.id,
                        x: sprite.drawable.x,
                        y: sprite.drawable.y,
                        scale: sprite.drawable.scale,
                    });
                }
                Renderable::Text(label) => {
                    let font_size = (window.height * label.proportion).round().max(1.0) as u16;
                    let surface = ctx.surface;
                    let drawable = label.drawable_for(font_size, |text, font, size| {
                        surface.measure_text(text, font, size)
                    });
                    drawable.x = x;
                    drawable.y = y;
                    let placed = drawable.clone();

                    ctx.batch.push(DrawCommand::Text {
                        text: label.text.clone(),
                        font: label.font,
                        font_size: placed.font_size,
                        metrics: placed.metrics,
                        x: placed.x,
                        y: placed.y,
                    });
                }
            }
        }
    }
}
