//! Fit specifications loaded from JSON configuration.

#![cfg(feature = "serde")]

use zenfit::{CanvasColor, Fit, FitMode, Ratio, Rect, Resample};

#[test]
fn fit_from_json_with_defaults() {
    let fit: Fit = serde_json::from_str(r#"{"mode":"pad","width":640,"height":480}"#).unwrap();
    assert_eq!(fit, Fit::pad(640, 480));
    assert_eq!(fit.fill, CanvasColor::Transparent);
    assert_eq!(fit.resample, Resample::Antialias);
}

#[test]
fn fit_round_trips_through_json() {
    let fit = Fit::new(FitMode::Pad, 100, 50)
        .fill(CanvasColor::opaque(1, 2, 3))
        .resample(Resample::Nearest);
    let json = serde_json::to_string(&fit).unwrap();
    assert_eq!(serde_json::from_str::<Fit>(&json).unwrap(), fit);
}

#[test]
fn ratio_is_a_string() {
    let r: Ratio = serde_json::from_str(r#""32:18""#).unwrap();
    assert_eq!(serde_json::to_string(&r).unwrap(), r#""16:9""#);
    assert!(serde_json::from_str::<Ratio>(r#""16-9""#).is_err());
}

#[test]
fn rect_corners_are_reordered_on_load() {
    let r: Rect = serde_json::from_str(r#"{"x0":5,"y0":9,"x1":0,"y1":2}"#).unwrap();
    assert_eq!(r, Rect::new(0, 2, 5, 9));
    assert_eq!((r.width(), r.height()), (5, 7));
}
