use crate::coords::Projection;

use super::DrawCall;

/// Consumer of draw calls.
///
/// The GPU backend (`render::PrimitiveRenderer`) turns each call into one device draw;
/// `Recorder` keeps calls for inspection.
pub trait Backend {
    /// Applies a new pixel-to-clip mapping. Called on creation and after every resize.
    fn configure(&mut self, projection: &Projection);

    /// Consumes one draw call.
    fn submit(&mut self, call: DrawCall);
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn configure(&mut self, projection: &Projection) {
        (**self).configure(projection);
    }

    fn submit(&mut self, call: DrawCall) {
        (**self).submit(call);
    }
}

/// Backend that records draw calls instead of rendering them.
///
/// Useful for headless runs and for asserting on emitted geometry.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<DrawCall>,
    projection: Option<Projection>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in submission order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Moves the recorded calls out, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Last projection passed to `configure`.
    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }
}

impl Backend for Recorder {
    fn configure(&mut self, projection: &Projection) {
        self.projection = Some(*projection);
    }

    fn submit(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}
