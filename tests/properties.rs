//! Whole-crate properties of the conversions, through the public interface only.

extern crate rgbhsl;

use std::f64::consts::PI;

use rgbhsl::packing::{decompose_compound_rgb, pack_integer_rgb};
use rgbhsl::prelude::*;

const HUES: [f64; 8] = [0.0, 0.05, 1. / 6., 0.4, 0.5, 2. / 3., 0.9, 1.0];

#[test]
fn test_black() {
    for &hue in HUES.iter() {
        assert_eq!(Color::from_hsl_normalized(hue, 0., 0.), Color::from_channels(0, 0, 0));
    }
}

#[test]
fn test_white() {
    for &hue in HUES.iter() {
        for &sat in [0., 0.25, 0.5, 1.].iter() {
            assert_eq!(
                Color::from_hsl_normalized(hue, sat, 1.),
                Color::from_channels(255, 255, 255)
            );
        }
    }
}

#[test]
fn test_grayscale() {
    for &hue in HUES.iter() {
        for i in 0..=20 {
            let color = Color::from_hsl_normalized(hue, 0., f64::from(i) / 20.);
            assert_eq!(color.red, color.green);
            assert_eq!(color.green, color.blue);
            assert_eq!(color.sat(), 0.);
        }
    }
}

#[test]
fn test_hue_wraparound() {
    for &(sat, lum) in [(100., 50.), (50., 50.), (10., 10.), (75., 30.)].iter() {
        assert_eq!(
            Color::from_hsl_standard(360., sat, lum),
            Color::from_hsl_standard(0., sat, lum)
        );
        assert_eq!(
            Color::from_hsl_radians(2. * PI, sat, lum),
            Color::from_hsl_radians(0., sat, lum)
        );
    }
}

#[test]
fn test_literal_scenarios() {
    assert_eq!(Color::from_hsl_standard(270., 100., 50.), Color::from_channels(128, 0, 255));
    assert_eq!(Color::from_hsl_standard(120., 100., 20.), Color::from_channels(0, 102, 0));
    assert_eq!(Color::from_hsl_standard(0., 50., 50.), Color::from_channels(191, 64, 64));
    assert_eq!(Color::from_hsl_standard(180., 50., 50.), Color::from_channels(64, 191, 191));
    assert_eq!(Color::from_hsl_normalized(0., 0.1, 0.1), Color::from_channels(28, 23, 23));
}

#[test]
fn test_segment_edges_in_degrees() {
    let edges = [
        (0., "#FF0000"),
        (60., "#FFFF00"),
        (120., "#00FF00"),
        (180., "#00FFFF"),
        (240., "#0000FF"),
        (300., "#FF00FF"),
    ];
    for &(hue, hex) in edges.iter() {
        assert_eq!(Color::from_hsl_standard(hue, 100., 50.).to_string(), hex);
    }
}

#[test]
fn test_pack_decompose_round_trip() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in [0u8, 1, 128, 254, 255].iter() {
                let color = Color::from_channels(r, g, *b);
                assert_eq!(decompose_compound_rgb(pack_integer_rgb(&color)), (r, g, *b));
            }
        }
    }
}

#[test]
fn test_text_round_trip() {
    for &compound in [0u32, 0xFFFFFF, 0x123456, 0x40BFBF, 0xFF0080].iter() {
        let color = Color::from_compound(compound);
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
    }
}

#[test]
fn test_unsupported_rgb_radians() {
    match Color::from_rgb_with(1., 1., 1., ChannelUnit::Radians) {
        Err(ConversionError::Unsupported(_)) => {}
        other => panic!("expected an unsupported error, got {:?}", other),
    }
}
