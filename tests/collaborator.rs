//! Plans driven through a recording collaborator.
//!
//! The mock never touches pixels; it logs every call so the tests can check
//! exactly which resize, crop, canvas and paste operations a plan issues.

use std::cell::RefCell;

use zenfit::*;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Resize(Size, Resample),
    Crop(Rect),
    Canvas(Size, CanvasColor),
    Paste { image: Size, x: u32, y: u32 },
}

// The test harness runs each test on its own thread.
thread_local! {
    static LOG: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

fn record(call: Call) {
    LOG.with(|l| l.borrow_mut().push(call));
}

fn calls() -> Vec<Call> {
    LOG.with(|l| l.borrow().clone())
}

#[derive(Debug, PartialEq)]
enum MockError {
    Layout(LayoutError),
    Refused,
}

impl From<LayoutError> for MockError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

#[derive(Clone, Debug)]
struct Mock {
    size: Size,
    refuse_resize: bool,
}

impl Mock {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            refuse_resize: false,
        }
    }
}

impl FitImage for Mock {
    type Error = MockError;

    fn dimensions(&self) -> Size {
        self.size
    }

    fn resize(&self, size: Size, resample: Resample) -> Result<Self, MockError> {
        if self.refuse_resize {
            return Err(MockError::Refused);
        }
        record(Call::Resize(size, resample));
        Ok(Mock::new(size.width, size.height))
    }

    fn crop(&self, rect: Rect) -> Result<Self, MockError> {
        if !rect.fits_within(self.size) {
            return Err(LayoutError::RectOutOfBounds {
                rect,
                bounds: self.size,
            }
            .into());
        }
        record(Call::Crop(rect));
        Ok(Mock::new(rect.width(), rect.height()))
    }

    fn canvas(size: Size, color: CanvasColor) -> Result<Self, MockError> {
        record(Call::Canvas(size, color));
        Ok(Mock::new(size.width, size.height))
    }

    fn paste(&mut self, image: &Self, x: u32, y: u32) -> Result<(), MockError> {
        record(Call::Paste {
            image: image.size,
            x,
            y,
        });
        Ok(())
    }
}

#[test]
fn autofit_resizes_then_crops() {
    let image = Mock::new(300, 250);
    let out = autofit(&image, 125, 125).unwrap();
    assert_eq!(out.size, Size::new(125, 125));
    assert_eq!(
        calls(),
        vec![
            Call::Resize(Size::new(150, 125), Resample::Antialias),
            Call::Crop(Rect::new(12, 0, 137, 125)),
        ]
    );
}

#[test]
fn autofit_same_aspect_skips_crop() {
    let image = Mock::new(1000, 500);
    let out = autofit(&image, 400, 200).unwrap();
    assert_eq!(out.size, Size::new(400, 200));
    assert_eq!(
        calls(),
        vec![Call::Resize(Size::new(400, 200), Resample::Antialias)]
    );
}

#[test]
fn autopad_builds_canvas_and_pastes() {
    let image = Mock::new(1000, 500);
    let out = autopad(&image, 400, 300, CanvasColor::white()).unwrap();
    assert_eq!(out.size, Size::new(400, 300));
    assert_eq!(
        calls(),
        vec![
            Call::Resize(Size::new(400, 200), Resample::Antialias),
            Call::Canvas(Size::new(400, 300), CanvasColor::white()),
            Call::Paste {
                image: Size::new(400, 200),
                x: 0,
                y: 50
            },
        ]
    );
}

#[test]
fn pad_without_margins_returns_resized() {
    let image = Mock::new(1000, 500);
    let out = autopad(&image, 400, 200, CanvasColor::Transparent).unwrap();
    assert_eq!(out.size, Size::new(400, 200));
    assert_eq!(
        calls(),
        vec![Call::Resize(Size::new(400, 200), Resample::Antialias)]
    );
}

#[test]
fn plan_uses_requested_resample() {
    let image = Mock::new(640, 480);
    Fit::crop(100, 100)
        .resample(Resample::Nearest)
        .plan(640, 480)
        .unwrap()
        .apply(&image)
        .unwrap();
    assert_eq!(
        calls()[0],
        Call::Resize(Size::new(133, 100), Resample::Nearest)
    );
}

#[test]
fn plan_for_other_source_is_rejected() {
    let plan = Fit::crop(100, 100).plan(640, 480).unwrap();
    let image = Mock::new(480, 640);
    assert_eq!(
        plan.apply(&image).unwrap_err(),
        MockError::Layout(LayoutError::SourceMismatch {
            expected: Size::new(640, 480),
            actual: Size::new(480, 640),
        })
    );
    assert!(calls().is_empty());
}

#[test]
fn collaborator_errors_pass_through() {
    let mut image = Mock::new(300, 250);
    image.refuse_resize = true;
    assert_eq!(autofit(&image, 125, 125).unwrap_err(), MockError::Refused);
}

#[test]
fn layout_errors_surface_before_any_call() {
    let image = Mock::new(300, 250);
    assert_eq!(
        autofit(&image, 0, 125).unwrap_err(),
        MockError::Layout(LayoutError::InvalidDimension {
            width: 0,
            height: 125
        })
    );
    assert!(calls().is_empty());
}
