// ============================================================
// Layer 4 — Pixel Layout
// ============================================================
// The HDF5 files store every image channels-last:
//
//   on disk:   [4, H, W, 3]   (image, row, column, channel)
//   for Burn:  [4, 3, H, W]   (image, channel, row, column)
//
// ndarray's permuted_axes only rewrites the shape and strides,
// so both conversions are free: no pixel is copied or moved.
// Iterating the result still walks it in logical order, which
// is what the batcher relies on when it flattens a batch.

use ndarray::{Array4, ArrayView3};

/// [4, H, W, C] → [4, C, H, W] without copying.
pub fn to_channels_first(block: Array4<u8>) -> Array4<u8> {
    block.permuted_axes([0, 3, 1, 2])
}

/// One channels-first image [C, H, W] → [H, W, C], as a view.
pub fn to_channels_last(image: ArrayView3<'_, u8>) -> ArrayView3<'_, u8> {
    image.permuted_axes([1, 2, 0])
}
