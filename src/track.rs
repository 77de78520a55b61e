use crate::offset::Percent;

/// The horizontally laid out strip holding every slide panel.
///
/// Writes are synchronous layout updates; how (or whether) the surface
/// animates between offsets is up to the implementation.
pub trait Track {
    /// Width of the whole track, as a percentage of the viewport.
    fn set_extent(&mut self, extent: Percent);

    /// Translation of the track, as a percentage of its own width.
    fn apply_offset(&mut self, offset: Percent);
}
