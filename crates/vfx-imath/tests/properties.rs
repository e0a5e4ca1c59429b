//! Behavioural checks across the public value types.
//!
//! Covers name/code round trips for every enumerated constant, field-wise
//! equality of records, and the defaults the native library expects.

use vfx_imath::prelude::*;
use vfx_imath::V2;

// ============================================================================
// Enumerated constants
// ============================================================================

fn assert_name_round_trip<E>()
where
    E: Enumerated + PartialEq + std::fmt::Debug + std::fmt::Display,
{
    for name in E::NAMES {
        let v = E::from_name(name).unwrap();
        assert_eq!(v.to_string(), *name);
        assert_eq!(E::from_code(i32::from(v.code())).unwrap(), v);
        assert_eq!(E::name_for_code(i32::from(v.code())).unwrap(), *name);
    }
    let past_end = E::NAMES.len() as i32;
    assert!(E::from_code(past_end).unwrap_err().is_invalid_enumerant());
    assert!(E::name_for_code(past_end).unwrap_err().is_render_error());
}

#[test]
fn enumerated_names_round_trip() {
    assert_name_round_trip::<LineOrder>();
    assert_name_round_trip::<Compression>();
    assert_name_round_trip::<PixelType>();
    assert_name_round_trip::<LevelMode>();
    assert_name_round_trip::<LevelRoundingMode>();
}

#[test]
fn compression_codes() {
    let expected = [
        (0, "NO_COMPRESSION"),
        (1, "RLE_COMPRESSION"),
        (2, "ZIPS_COMPRESSION"),
        (3, "ZIP_COMPRESSION"),
        (4, "PIZ_COMPRESSION"),
        (5, "PXR24_COMPRESSION"),
        (6, "B44_COMPRESSION"),
        (7, "B44A_COMPRESSION"),
        (8, "DWAA_COMPRESSION"),
        (9, "DWAB_COMPRESSION"),
        (10, "HTJ2K_COMPRESSION"),
    ];
    for (code, name) in expected {
        assert_eq!(Compression::from_code(code).unwrap().name(), name);
    }
}

#[test]
fn piz_by_code_equals_by_name() {
    let by_code = Compression::from_code(4).unwrap();
    assert_eq!(by_code.to_string(), "PIZ_COMPRESSION");
    assert_eq!(Compression::from_name("PIZ_COMPRESSION").unwrap(), by_code);
}

#[test]
fn enumerated_equality_is_by_code() {
    assert_eq!(PixelType::from_code(2).unwrap(), PixelType::Float);
    assert_ne!(PixelType::Float, PixelType::Half);
    assert!(LineOrder::IncreasingY < LineOrder::RandomY);
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn channel_requires_pixel_type() {
    let ok = Channel::from_value(&Value::from(PixelType::Float), 1, 1).unwrap();
    assert_eq!(ok.pixel_type, PixelType::Float);

    let err = Channel::from_value(&Value::Int(2), 1, 1).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn tile_description_defaults() {
    let td = TileDescription::default();
    assert_eq!(td.x_size, 32);
    assert_eq!(td.y_size, 32);
    assert_eq!(td.mode.code(), 0);
    assert_eq!(td.rounding_mode.code(), 0);
}

#[test]
fn box_equality() {
    let a = Box2i::new(V2::new(0, 0), V2::new(10, 10));
    let b = Box2i::new(V2::new(0, 0), V2::new(10, 10));
    let c = Box2i::new(V2::new(0, 0), V2::new(10, 11));
    assert_eq!(a, b);
    assert_ne!(a, c);

    // Absent corners compare equal to absent corners
    assert_eq!(Box2f::empty(), Box2f { min: None, max: None });
}

#[test]
fn records_differ_in_one_field() {
    let kc = KeyCode::default();
    for other in [
        KeyCode { film_mfc_code: 1, ..kc },
        KeyCode { film_type: 1, ..kc },
        KeyCode { prefix: 1, ..kc },
        KeyCode { count: 1, ..kc },
        KeyCode { perf_offset: 1, ..kc },
        KeyCode { perfs_per_frame: 3, ..kc },
        KeyCode { perfs_per_count: 20, ..kc },
    ] {
        assert_ne!(kc, other);
    }

    let c = Chromaticities::rec709();
    assert_eq!(c, Chromaticities::rec709());
    assert_ne!(c, Chromaticities { white: Some(Chromaticity::new(0.32168, 0.33767)), ..c });

    assert_eq!(Rational::new(24, 1), Rational::new(24, 1));
    assert_ne!(Rational::new(24, 1), Rational::new(25, 1));
}

#[test]
fn timecode_differs_in_each_field() {
    let tc = TimeCode::new(1, 2, 3, 4);
    let variants = [
        TimeCode { hours: 9, ..tc },
        TimeCode { minutes: 9, ..tc },
        TimeCode { seconds: 9, ..tc },
        TimeCode { frame: 9, ..tc },
        TimeCode { drop_frame: true, ..tc },
        TimeCode { color_frame: true, ..tc },
        TimeCode { field_phase: true, ..tc },
        TimeCode { bgf0: true, ..tc },
        TimeCode { bgf1: true, ..tc },
        TimeCode { bgf2: true, ..tc },
        TimeCode { binary_group1: 1, ..tc },
        TimeCode { binary_group2: 1, ..tc },
        TimeCode { binary_group3: 1, ..tc },
        TimeCode { binary_group4: 1, ..tc },
        TimeCode { binary_group5: 1, ..tc },
        TimeCode { binary_group6: 1, ..tc },
        TimeCode { binary_group7: 1, ..tc },
        TimeCode { binary_group8: 1, ..tc },
    ];
    for other in variants {
        assert_ne!(tc, other);
    }
    assert_eq!(tc, TimeCode::new(1, 2, 3, 4));
}

#[test]
fn geometry_differs_in_each_field() {
    let p = V2i::new(3, 4);
    assert_ne!(p, V2i { x: 0, ..p });
    assert_ne!(p, V2i { y: 0, ..p });

    let c = Chromaticity::new(0.3127, 0.3290);
    assert_eq!(c, Chromaticity::new(0.3127, 0.3290));
    assert_ne!(c, Chromaticity { x: 0.5, ..c });
    assert_ne!(c, Chromaticity { y: 0.5, ..c });

    let b = Box2i::new(V2::new(0, 0), V2::new(10, 10));
    assert_ne!(b, Box2i { min: Some(V2::new(1, 0)), ..b });
    assert_ne!(b, Box2i { max: Some(V2::new(10, 11)), ..b });
    assert_ne!(b, Box2i { min: None, ..b });
    assert_ne!(b, Box2i { max: None, ..b });

    let rec = Chromaticities::rec709();
    let other = Some(Chromaticity::new(0.0, 0.0));
    for changed in [
        Chromaticities { red: other, ..rec },
        Chromaticities { green: other, ..rec },
        Chromaticities { blue: other, ..rec },
        Chromaticities { white: other, ..rec },
        Chromaticities { red: None, ..rec },
    ] {
        assert_ne!(rec, changed);
    }
}

#[test]
fn descriptors_differ_in_each_field() {
    let r = Rational::new(24000, 1001);
    assert_ne!(r, Rational { n: 24, ..r });
    assert_ne!(r, Rational { d: 1000, ..r });

    let ch = Channel::default();
    assert_ne!(ch, Channel { pixel_type: PixelType::Float, ..ch });
    assert_ne!(ch, Channel { x_sampling: 2, ..ch });
    assert_ne!(ch, Channel { y_sampling: 2, ..ch });

    let td = TileDescription::default();
    assert_ne!(td, TileDescription { x_size: 64, ..td });
    assert_ne!(td, TileDescription { y_size: 64, ..td });
    assert_ne!(td, TileDescription { mode: LevelMode::MipmapLevels, ..td });
    assert_ne!(td, TileDescription { rounding_mode: LevelRoundingMode::RoundUp, ..td });
}

#[test]
fn box_size_reports_overflow() {
    let b = Box2i::new(V2::new(i32::MIN, 0), V2::new(i32::MAX, 0));
    assert_eq!(b.size(), None);
    let b = Box2i::new(V2::new(0, i32::MIN), V2::new(0, 0));
    assert_eq!(b.size(), None);
    let b = Box2i::new(V2::new(-10, -10), V2::new(9, 9));
    assert_eq!(b.size(), Some(V2i::new(20, 20)));
}

#[test]
fn rendering_is_stable() {
    let ch = Channel::new(PixelType::Uint, 2, 2);
    assert_eq!(ch.to_string(), "UINT (2, 2)");
    assert_eq!(ch.to_string(), Value::from(ch).to_string());

    let c = Chromaticities::new(
        Chromaticity::new(1.0, 0.0),
        Chromaticity::new(0.0, 1.0),
        Chromaticity::new(0.0, 0.0),
        Chromaticity::new(0.5, 0.5),
    );
    assert_eq!(c.to_string(), "(1, 0) (0, 1) (0, 0) (0.5, 0.5)");
}

#[test]
fn values_are_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Channel>();
    assert_send_sync::<TileDescription>();
    assert_send_sync::<TimeCode>();
    assert_send_sync::<Box2i>();
    assert_send_sync::<Chromaticities>();
}
