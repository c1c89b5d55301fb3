use saliency_detector::image::{ImageF32, ImageRgbF32};

/// Generates a flat RGB image with every pixel set to `value`.
pub fn flat_rgb(width: usize, height: usize, value: f32) -> ImageRgbF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let plane = || ImageF32::from_vec(width, height, vec![value; width * height]);
    ImageRgbF32::from_planes(plane(), plane(), plane())
}

/// Black image with a white axis-aligned square of side `size` whose top-left
/// corner sits at (`x0`, `y0`).
pub fn white_square_on_black(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    size: usize,
) -> ImageRgbF32 {
    assert!(x0 + size <= width && y0 + size <= height, "square out of bounds");
    let mut plane = ImageF32::new(width, height);
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            plane.set(x, y, 1.0);
        }
    }
    ImageRgbF32::from_planes(plane.clone(), plane.clone(), plane)
}

/// Left half black, right half white: one dominant vertical edge.
pub fn vertical_edge(width: usize, height: usize) -> ImageRgbF32 {
    let mut plane = ImageF32::new(width, height);
    for y in 0..height {
        for x in width / 2..width {
            plane.set(x, y, 1.0);
        }
    }
    ImageRgbF32::from_planes(plane.clone(), plane.clone(), plane)
}
