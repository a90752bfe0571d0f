use crate::frame::Frame;

/// Fournit une séquence ordonnée de frames au pipeline.
///
/// Implémenté par : `ImageSource` (1 frame), `GifSource` (N frames).
///
/// # Example
/// ```
/// use ba_core::traits::Source;
/// use ba_core::frame::{Frame, FrameBuffer};
///
/// struct Single(Vec<Frame>);
/// impl Source for Single {
///     fn frames(&self) -> &[Frame] { &self.0 }
///     fn native_size(&self) -> (u32, u32) { (4, 4) }
///     fn is_animated(&self) -> bool { false }
/// }
///
/// let s = Single(vec![Frame::still(FrameBuffer::new(4, 4))]);
/// assert_eq!(s.frame_count(), 1);
/// ```
pub trait Source {
    /// Frames in display order. Never empty.
    fn frames(&self) -> &[Frame];

    /// Dimensions logiques de la source, partagées par toutes les frames.
    fn native_size(&self) -> (u32, u32);

    /// Indique si la source est une animation (GIF multi-frames).
    fn is_animated(&self) -> bool;

    fn frame_count(&self) -> usize {
        self.frames().len()
    }
}
