//! Presentation state of the menu.
//!
//! The presenter keeps everything a renderer needs to draw the menu: title and
//! line texts, per-glyph corner colors, the vertical text offset, the selector
//! width and the overall opacity. All motion is exponential smoothing on the
//! unscaled frame delta; nothing snaps except a [`rebuild`](MenuPresenter::rebuild).

use glam::Vec4;

use crate::animation::{AnimatedProperties, smooth_toward};

const CLEAR: Vec4 = Vec4::ZERO;
const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

const fn white(alpha: f32) -> Vec4 {
    Vec4::new(1.0, 1.0, 1.0, alpha)
}

/// Colors of the four corners of a glyph quad.
///
/// Order: left-down, left-up, right-up, right-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadColors(pub [Vec4; 4]);

impl QuadColors {
    pub const CLEAR: Self = Self([CLEAR; 4]);

    #[must_use]
    pub const fn new(left_down: Vec4, left_up: Vec4, right_up: Vec4, right_down: Vec4) -> Self {
        Self([left_down, left_up, right_up, right_down])
    }

    /// Moves every corner toward `target` by the fraction `t`.
    pub fn lerp_toward(&mut self, target: &QuadColors, t: f32) {
        let t = t.clamp(0.0, 1.0);
        for (corner, goal) in self.0.iter_mut().zip(target.0) {
            *corner = corner.lerp(goal, t);
        }
    }

    /// Largest corner alpha.
    #[must_use]
    pub fn max_alpha(&self) -> f32 {
        self.0.iter().map(|c| c.w).fold(0.0, f32::max)
    }
}

/// Target glyph colors for a line `distance` lines away from the selection.
///
/// The selected line is solid black; neighbours fade out with a vertical
/// gradient that darkens toward the selection; lines three or more away are
/// fully transparent.
#[must_use]
pub fn line_palette(distance: isize) -> QuadColors {
    match distance {
        -2 => QuadColors::new(white(0.7), white(0.2), white(0.2), white(0.7)),
        -1 => QuadColors::new(white(0.9), white(0.8), white(0.8), white(0.9)),
        0 => QuadColors([BLACK; 4]),
        1 => QuadColors::new(white(0.8), white(0.9), white(0.9), white(0.8)),
        2 => QuadColors::new(white(0.2), white(0.7), white(0.7), white(0.2)),
        _ => QuadColors::CLEAR,
    }
}

/// One displayed line.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLine {
    text: String,
    /// One entry per visible (non-whitespace) character.
    glyphs: Vec<QuadColors>,
}

impl MenuLine {
    fn new(text: &str) -> Self {
        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        Self {
            text: text.to_string(),
            glyphs: vec![QuadColors::CLEAR; visible],
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn glyphs(&self) -> &[QuadColors] {
        &self.glyphs
    }

    fn lerp_toward(&mut self, target: &QuadColors, t: f32) {
        for glyph in &mut self.glyphs {
            glyph.lerp_toward(target, t);
        }
    }
}

/// Everything a renderer needs to draw the menu for the current frame.
#[derive(Debug, Clone, Default)]
pub struct MenuPresenter {
    title: String,
    title_alpha: f32,
    canvas_alpha: f32,
    lines: Vec<MenuLine>,
    text_offset_y: f32,
    selector_scale_x: f32,
}

impl MenuPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Snapshot ==========

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn title_alpha(&self) -> f32 {
        self.title_alpha
    }

    /// Opacity of the whole menu.
    #[must_use]
    pub fn canvas_alpha(&self) -> f32 {
        self.canvas_alpha
    }

    #[must_use]
    pub fn lines(&self) -> &[MenuLine] {
        &self.lines
    }

    #[must_use]
    pub fn line_text(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(MenuLine::text)
    }

    /// All lines joined by line breaks, as a text renderer would receive them.
    #[must_use]
    pub fn menu_text(&self) -> String {
        self.lines
            .iter()
            .map(MenuLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn text_offset_y(&self) -> f32 {
        self.text_offset_y
    }

    /// Horizontal scale of the selector graphic.
    #[must_use]
    pub fn selector_scale_x(&self) -> f32 {
        self.selector_scale_x
    }

    // ========== Updates ==========

    /// Replaces the displayed level. Snaps the offset to `offset_y` and every
    /// glyph to transparent so the new level fades in from nothing.
    pub fn rebuild<'a>(
        &mut self,
        title: &str,
        lines: impl IntoIterator<Item = &'a str>,
        offset_y: f32,
    ) {
        self.title.clear();
        self.title.push_str(title);
        self.lines = lines.into_iter().map(MenuLine::new).collect();
        self.text_offset_y = offset_y;
    }

    /// Moves the text toward `target_y`.
    pub fn scroll_toward(&mut self, target_y: f32, rate: f32, dt: f32) {
        self.text_offset_y = smooth_toward(self.text_offset_y, target_y, rate, dt);
    }

    /// Fades each line toward its [`line_palette`] color for the given selection.
    pub fn fade_lines_toward(&mut self, selected: usize, rate: f32, dt: f32) {
        let t = rate * dt;
        for (index, line) in self.lines.iter_mut().enumerate() {
            let distance = index as isize - selected as isize;
            line.lerp_toward(&line_palette(distance), t);
        }
    }

    /// Fades every line and the title toward transparent.
    pub fn fade_text_out(&mut self, rate: f32, dt: f32) {
        let t = rate * dt;
        for line in &mut self.lines {
            line.lerp_toward(&QuadColors::CLEAR, t);
        }
        self.title_alpha = smooth_toward(self.title_alpha, 0.0, rate, dt);
    }

    pub fn fade_title_toward(&mut self, target: f32, rate: f32, dt: f32) {
        self.title_alpha = smooth_toward(self.title_alpha, target, rate, dt);
    }

    pub fn fade_canvas_toward(&mut self, target: f32, rate: f32, dt: f32) {
        self.canvas_alpha = smooth_toward(self.canvas_alpha, target, rate, dt);
    }

    /// Sizes the selector from the selected line's width and the animated
    /// selector properties.
    pub fn update_selector(&mut self, text_width: f32, properties: &AnimatedProperties) {
        self.selector_scale_x = (properties.target_width - text_width) * properties.selector_blend
            + text_width
            + properties.selector_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_symmetric_and_culls_far_lines() {
        assert_eq!(line_palette(0), QuadColors([BLACK; 4]));
        assert_eq!(line_palette(3), QuadColors::CLEAR);
        assert_eq!(line_palette(-7), QuadColors::CLEAR);

        // Mirrored vertically: the top of line -1 matches the bottom of line +1.
        let above = line_palette(-1).0;
        let below = line_palette(1).0;
        assert_eq!(above[1], below[0]);
        assert_eq!(above[0], below[1]);
    }

    #[test]
    fn rebuild_clears_glyphs_and_skips_whitespace() {
        let mut presenter = MenuPresenter::new();
        presenter.rebuild("Title", ["Load game", "Quit"], 12.0);

        assert_eq!(presenter.menu_text(), "Load game\nQuit");
        assert_eq!(presenter.lines()[0].glyphs().len(), 8);
        assert!(presenter.lines()[0].glyphs().iter().all(|g| *g == QuadColors::CLEAR));
        assert_eq!(presenter.text_offset_y(), 12.0);
    }

    #[test]
    fn selector_blends_between_text_and_target_width() {
        let mut presenter = MenuPresenter::new();
        let mut properties = AnimatedProperties {
            selector_blend: 0.0,
            target_width: 5.0,
            selector_offset: 0.5,
        };
        presenter.update_selector(2.0, &properties);
        assert!((presenter.selector_scale_x() - 2.5).abs() < 1e-6);

        properties.selector_blend = 1.0;
        presenter.update_selector(2.0, &properties);
        assert!((presenter.selector_scale_x() - 5.5).abs() < 1e-6);
    }
}
