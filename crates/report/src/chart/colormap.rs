use image::Rgb;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const FRAME: Rgb<u8> = Rgb([64, 64, 64]);
pub const UNDERGROUND: Rgb<u8> = Rgb([31, 119, 180]);
pub const SURFACE: Rgb<u8> = Rgb([255, 127, 14]);
pub const NO_DATA: Rgb<u8> = Rgb([200, 200, 200]);

fn ramp(t: f64, start: f64, end: f64) -> u8 {
    let v = ((t - start) / (end - start)).clamp(0.0, 1.0);
    (v * 255.0).round() as u8
}

/// Black to red to yellow to white, `t` is clamped to [0, 1]
pub fn hot(t: f64) -> Rgb<u8> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Rgb([ramp(t, 0.0, 0.365), ramp(t, 0.365, 0.746), ramp(t, 0.746, 1.0)])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn hot_endpoints() {
        assert_eq!(hot(0.0), Rgb([0, 0, 0]));
        assert_eq!(hot(1.0), Rgb([255, 255, 255]));
        assert_eq!(hot(-3.0), Rgb([0, 0, 0]));
        assert_eq!(hot(f64::NAN), Rgb([0, 0, 0]));
        // red saturates before green starts
        let Rgb([r, g, b]) = hot(0.4);
        assert_eq!(r, 255);
        assert!(g > 0 && g < 255);
        assert_eq!(b, 0);
    }

    #[test]
    pub fn hot_is_monotonic() {
        let mut last = [0u8; 3];
        for i in 0..=100 {
            let Rgb(rgb) = hot(i as f64 / 100.0);
            for c in 0..3 {
                assert!(rgb[c] >= last[c]);
            }
            last = rgb;
        }
    }
}
