use std::ops::{Deref, DerefMut};

use crate::paint::Color;

use super::{Attribs, Backend, Canvas};

/// Draw-color register plus the point/line attribute state.
///
/// Owned by a `Canvas` and written immediately before every submission, so no
/// call inherits another call's color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RenderState {
    pub(crate) color: Color,
    pub(crate) attribs: Attribs,
}

impl RenderState {
    /// Loads the register from a packed `0x00RRGGBB` value (or an already decoded `Color`).
    #[inline]
    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn attribs(&self) -> Attribs {
        self.attribs
    }
}

/// Restores the canvas attribute state when dropped.
///
/// Point and line calls mutate attributes through this guard, so the prior values
/// come back even if the call returns early.
pub(crate) struct AttribScope<'c, B: Backend> {
    canvas: &'c mut Canvas<B>,
    saved: Attribs,
}

impl<'c, B: Backend> AttribScope<'c, B> {
    pub(crate) fn new(canvas: &'c mut Canvas<B>) -> Self {
        let saved = canvas.state.attribs;
        Self { canvas, saved }
    }

    #[inline]
    pub(crate) fn attribs_mut(&mut self) -> &mut Attribs {
        &mut self.canvas.state.attribs
    }
}

impl<B: Backend> Deref for AttribScope<'_, B> {
    type Target = Canvas<B>;

    fn deref(&self) -> &Canvas<B> {
        self.canvas
    }
}

impl<B: Backend> DerefMut for AttribScope<'_, B> {
    fn deref_mut(&mut self) -> &mut Canvas<B> {
        self.canvas
    }
}

impl<B: Backend> Drop for AttribScope<'_, B> {
    fn drop(&mut self) {
        self.canvas.state.attribs = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Recorder;

    #[test]
    fn set_color_decodes_packed() {
        let mut state = RenderState::default();
        state.set_color(0x00_80_FFu32);
        assert_eq!(state.color(), Color::from_packed(0x00_80_FF));
    }

    #[test]
    fn scope_restores_on_drop() {
        let mut canvas = Canvas::new(Recorder::new(), 10, 10);
        {
            let mut scope = AttribScope::new(&mut canvas);
            scope.attribs_mut().line_width = 9.0;
            scope.attribs_mut().line_smooth = true;
            assert_eq!(scope.state().attribs().line_width, 9.0);
        }
        assert_eq!(canvas.state().attribs(), Attribs::default());
    }
}
