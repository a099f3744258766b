/// Horizontal stripes: alternating dark/bright bands, `band` rows each.
pub fn horizontal_stripes_u8(width: usize, height: usize, band: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(band > 0, "band size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        let val = if (y / band) & 1 == 0 { 32u8 } else { 220u8 };
        for x in 0..width {
            img[y * width + x] = val;
        }
    }
    img
}

/// Vertical stripes: alternating dark/bright bands, `band` columns each.
pub fn vertical_stripes_u8(width: usize, height: usize, band: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(band > 0, "band size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let val = if (x / band) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Single vertical step edge: dark left half, bright right half.
pub fn vertical_step_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 1 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = if x < width / 2 { 32u8 } else { 220u8 };
        }
    }
    img
}

/// Half-plane split along the anti-diagonal: bright below-right of the
/// `x + y == width` line.
pub fn diagonal_split_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = if x + y < width { 32u8 } else { 220u8 };
        }
    }
    img
}
