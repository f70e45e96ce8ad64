//! Integration tests for color helpers and the color registry

use lamp_engine::{
    ColorRegistry, DEFAULT_COLORS, LampError, NUM_COLORS, Rgb8, apply_polarity, interpolate,
};

const SAMPLES: [Rgb8; 5] = [
    Rgb8::new(0, 0, 0),
    Rgb8::new(255, 255, 255),
    Rgb8::new(200, 200, 0),
    Rgb8::new(0, 128, 128),
    Rgb8::new(17, 250, 99),
];

#[test]
fn interpolate_returns_endpoints() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(interpolate(a, b, 0.0), a);
            assert_eq!(interpolate(a, b, 1.0), b);
        }
    }
}

#[test]
fn interpolate_is_monotonic_per_channel() {
    let a = Rgb8::new(250, 0, 128);
    let b = Rgb8::new(3, 255, 128);

    let mut previous = a;
    for i in 1..=100 {
        let color = interpolate(a, b, i as f32 / 100.0);
        assert!(color.red <= previous.red);
        assert!(color.green >= previous.green);
        assert_eq!(color.blue, 128);
        previous = color;
    }
    assert_eq!(previous, b);
}

#[test]
fn interpolate_rounds_to_nearest() {
    let black = Rgb8::new(0, 0, 0);
    let white = Rgb8::new(255, 255, 255);
    // 127.5 rounds up, 25.5 rounds up
    assert_eq!(interpolate(black, white, 0.5).red, 128);
    assert_eq!(interpolate(black, white, 0.1).green, 26);
}

#[test]
fn polarity_is_an_involution() {
    for color in SAMPLES {
        assert_eq!(apply_polarity(apply_polarity(color, true), true), color);
        assert_eq!(apply_polarity(color, false), color);
    }
    assert_eq!(
        apply_polarity(Rgb8::new(200, 200, 0), true),
        Rgb8::new(55, 55, 255)
    );
}

#[test]
fn every_registry_name_resolves_to_its_entry() {
    let registry = ColorRegistry::new(&DEFAULT_COLORS).unwrap();
    assert_eq!(registry.len(), NUM_COLORS);
    for code in DEFAULT_COLORS {
        assert_eq!(registry.resolve(code.name), Ok(code.color));
    }
    assert_eq!(registry.resolve("teal"), Ok(Rgb8::new(0, 128, 128)));
}

#[test]
fn other_names_are_unknown() {
    let registry = ColorRegistry::stock();
    for name in ["octarine", "", "RED", "red ", "tea", "teal\n"] {
        assert_eq!(registry.resolve(name), Err(LampError::UnknownColorName));
    }
}
