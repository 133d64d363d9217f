//! Fixed 16x16 red icon
//!
//! An ICO header followed by 256 red BGR pixels and a zeroed AND mask.

/// ICONDIR plus the single ICONDIRENTRY
const ICON_HEADER: [u8; 22] = [
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x10, 0x00, 0x00, 0x01, 0x00, 0x18, 0x00, 0x68,
    0x03, 0x00, 0x00, 0x16, 0x00, 0x00, 0x00,
];

const PIXELS: usize = 16 * 16;
const PIXEL: [u8; 3] = [0xFF, 0x00, 0x00];
const MASK_LEN: usize = 64;

pub const FAVICON_LEN: usize = ICON_HEADER.len() + PIXELS * PIXEL.len() + MASK_LEN;

/// Icon bytes served on the favicon routes and fed to the favicon hash
pub static FAVICON: [u8; FAVICON_LEN] = build_icon();

const fn build_icon() -> [u8; FAVICON_LEN] {
    let mut icon = [0u8; FAVICON_LEN];

    let mut i = 0;
    while i < ICON_HEADER.len() {
        icon[i] = ICON_HEADER[i];
        i += 1;
    }

    let mut px = 0;
    while px < PIXELS {
        let offset = ICON_HEADER.len() + px * PIXEL.len();
        icon[offset] = PIXEL[0];
        icon[offset + 1] = PIXEL[1];
        icon[offset + 2] = PIXEL[2];
        px += 1;
    }

    // Trailing mask bytes stay zero
    icon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_layout() {
        assert_eq!(FAVICON.len(), 854);
        assert_eq!(&FAVICON[..22], &ICON_HEADER);
        assert_eq!(&FAVICON[22..25], &[0xFF, 0x00, 0x00]);
        assert_eq!(&FAVICON[787..790], &[0xFF, 0x00, 0x00]);
        assert!(FAVICON[790..].iter().all(|&b| b == 0));
    }
}
