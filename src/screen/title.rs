//! Title screen: the game name and a prompt, nothing moves

use crate::app::Assets;
use crate::game::components::Position;
use crate::game::systems::{RenderSystem, Schedule};
use crate::game::World;
use super::Scene;

pub const TITLE_TEXT: &str = "SPACE SHOOTER";
pub const PROMPT_TEXT: &str = "press ENTER to start, ESC to quit";

/// `center_x` is the window's horizontal middle in window heights
pub fn build_title(assets: &Assets, center_x: f32) -> Scene {
    let mut world = World::new();
    world.spawn_label(TITLE_TEXT, assets.font, 0.1, Position::new(center_x, 0.6));
    world.spawn_label(PROMPT_TEXT, assets.font, 0.04, Position::new(center_x, 0.4));

    let mut schedule = Schedule::new();
    schedule.add_system(RenderSystem);
    Scene::new(world, schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::Renderable;
    use crate::input::InputState;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_title_draws_both_labels() {
        let mut scene = build_title(&Assets::default(), 0.6667);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        scene.tick(1.0 / 120.0, &InputState::new(), &surface);
        scene.draw(&mut surface);

        let texts: Vec<_> = surface.submitted[0]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![TITLE_TEXT, PROMPT_TEXT]);
    }

    #[test]
    fn test_title_is_static() {
        let mut scene = build_title(&Assets::default(), 0.6667);
        let surface = RecordingSurface::new(800.0, 600.0);
        assert_eq!(scene.world.count::<Renderable>(), 2);

        for _ in 0..10 {
            scene.tick(1.0 / 120.0, &InputState::new(), &surface);
        }
        // Labels are measured once, then reused
        assert_eq!(surface.measure_calls(), 2);
    }

    #[test]
    fn test_labels_placed_at_center() {
        let scene = build_title(&Assets::default(), 1.25);
        let xs: Vec<_> = scene.world.pairs::<Position>().map(|(_, p)| p.x).collect();
        assert_eq!(xs, vec![1.25, 1.25]);
    }
}
