//! macroquad backend
//!
//! Owns the loaded textures and fonts and turns draw batches into
//! macroquad draw calls. macroquad puts the origin at the top-left, so
//! y is flipped on the way out.

use std::path::{Path, PathBuf};

use log::{info, warn};
use macroquad::prelude::*;
use thiserror::Error;

use super::{DrawBatch, DrawCommand, FontId, ImageHandle, ImageId, Surface, TextMetrics, WindowSize};
use crate::input::Key;

/// Side length of the stand-in texture used when an image fails to load
const PLACEHOLDER_SIZE: u16 = 64;

/// Error type for asset loading
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {path:?}: {message}")]
    Image { path: PathBuf, message: String },
    #[error("failed to load font {path:?}: {message}")]
    Font { path: PathBuf, message: String },
}

/// A [`Surface`] backed by the macroquad window
pub struct MacroquadSurface {
    textures: Vec<Texture2D>,
    fonts: Vec<Font>,
    background: Color,
}

impl MacroquadSurface {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            fonts: Vec::new(),
            background: BLACK,
        }
    }

    fn add_texture(&mut self, texture: Texture2D) -> ImageHandle {
        let handle = ImageHandle::new(ImageId(self.textures.len()), texture.width(), texture.height());
        self.textures.push(texture);
        handle
    }

    /// Load an image file as a texture.
    pub async fn load_image(&mut self, path: &Path) -> Result<ImageHandle, AssetError> {
        let texture = load_texture(&path.to_string_lossy())
            .await
            .map_err(|e| AssetError::Image { path: path.to_path_buf(), message: e.to_string() })?;
        texture.set_filter(FilterMode::Linear);
        Ok(self.add_texture(texture))
    }

    /// Load an image, or stand in a flat magenta square if it can't be read.
    pub async fn load_image_or_placeholder(&mut self, path: &Path) -> ImageHandle {
        match self.load_image(path).await {
            Ok(handle) => {
                info!("Loaded image {:?} ({}x{})", path, handle.width, handle.height);
                handle
            }
            Err(e) => {
                warn!("{}, using placeholder", e);
                self.placeholder()
            }
        }
    }

    fn placeholder(&mut self) -> ImageHandle {
        let pixels: Vec<u8> = [255, 0, 255, 255]
            .iter()
            .copied()
            .cycle()
            .take(PLACEHOLDER_SIZE as usize * PLACEHOLDER_SIZE as usize * 4)
            .collect();
        let texture = Texture2D::from_rgba8(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, &pixels);
        self.add_texture(texture)
    }

    /// Load a TTF font.
    pub async fn load_font(&mut self, path: &Path) -> Result<FontId, AssetError> {
        let font = load_ttf_font(&path.to_string_lossy())
            .await
            .map_err(|e| AssetError::Font { path: path.to_path_buf(), message: e.to_string() })?;
        self.fonts.push(font);
        Ok(FontId(Some(self.fonts.len() - 1)))
    }

    fn font(&self, id: FontId) -> Option<&Font> {
        id.0.and_then(|index| self.fonts.get(index))
    }

    /// Clear the window. Call at the start of every frame.
    pub fn begin_frame(&self) {
        clear_background(self.background);
    }

    /// Frame rate readout in the top-left corner
    pub fn draw_fps(&self) {
        draw_text(&format!("{} FPS", get_fps()), 8.0, 20.0, 20.0, GREEN);
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn key_codes(key: Key) -> &'static [KeyCode] {
    match key {
        Key::Left => &[KeyCode::Left],
        Key::Right => &[KeyCode::Right],
        Key::Up => &[KeyCode::Up],
        Key::Down => &[KeyCode::Down],
        Key::Confirm => &[KeyCode::Enter, KeyCode::KpEnter, KeyCode::Space],
        Key::Back => &[KeyCode::Escape],
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> WindowSize {
        WindowSize::new(screen_width(), screen_height())
    }

    fn key_down(&self, key: Key) -> bool {
        key_codes(key).iter().any(|code| is_key_down(*code))
    }

    fn measure_text(&self, text: &str, font: FontId, font_size: u16) -> TextMetrics {
        let dims = measure_text(text, self.font(font), font_size, 1.0);
        TextMetrics {
            width: dims.width,
            height: dims.height,
            offset_y: dims.offset_y,
        }
    }

    fn submit(&mut self, batch: &DrawBatch) {
        let screen_h = screen_height();

        for command in batch {
            match command {
                DrawCommand::Sprite { image, x, y, scale } => {
                    let Some(texture) = self.textures.get(image.0) else {
                        warn!("draw batch references unknown image {:?}", image);
                        continue;
                    };
                    let w = texture.width() * scale;
                    let h = texture.height() * scale;
                    draw_texture_ex(
                        texture,
                        x - w / 2.0,
                        screen_h - y - h / 2.0,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(Vec2::new(w, h)),
                            ..Default::default()
                        },
                    );
                }
                DrawCommand::Text { text, font, font_size, metrics, x, y } => {
                    let top = screen_h - y - metrics.height / 2.0;
                    draw_text_ex(
                        text,
                        (x - metrics.width / 2.0).round(),
                        (top + metrics.offset_y).round(),
                        TextParams {
                            font: self.font(*font),
                            font_size: *font_size,
                            color: WHITE,
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }
}
