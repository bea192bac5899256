mod common;

use std::path::Path;

use image::{Rgb, RgbImage};

use pagecrop_core::config::{CropperConfig, RenderOptions, SurfaceSize};
use pagecrop_core::error::CropperError;
use pagecrop_core::geometry::DisplayPoint;
use pagecrop_core::session::{CropOutcome, InteractionState, Session};

use common::{coordinate_image, BrokenRasterizer, FakeRasterizer, ScriptedPicker};

const DOC: &str = "page.pdf";

/// Session with a 2000x1000 page loaded onto the default 600x800 surface.
fn loaded_session() -> Session {
    let mut session = Session::default();
    let rasterizer = FakeRasterizer::with_pages(vec![coordinate_image(2000, 1000)]);
    session.load_document(Path::new(DOC), &rasterizer).unwrap();
    session
}

fn drag(session: &mut Session, from: (f64, f64), to: (f64, f64)) {
    session.pointer_press(DisplayPoint::new(from.0, from.1));
    session.pointer_drag(DisplayPoint::new(to.0, to.1));
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn test_load_single_page() {
    let session = loaded_session();
    let source = session.source().unwrap();
    assert_eq!((source.width(), source.height()), (2000, 1000));
    assert_eq!(source.origin(), Some(Path::new(DOC)));

    let t = session.transform().unwrap();
    assert_eq!((t.offset_x, t.offset_y), (0, 250));
    assert!(session.state().is_idle());
}

#[test]
fn test_load_uses_configured_dpi() {
    let config = CropperConfig {
        dpi: 150,
        ..CropperConfig::default()
    };
    let mut session = Session::new(config);
    let rasterizer = FakeRasterizer::with_pages(vec![coordinate_image(10, 10)]);
    session.load_document(Path::new(DOC), &rasterizer).unwrap();
    assert_eq!(rasterizer.requested_dpi.get(), Some(150));
}

#[test]
fn test_two_page_document_rejected() {
    let mut session = Session::default();
    let rasterizer =
        FakeRasterizer::with_pages(vec![coordinate_image(10, 10), coordinate_image(10, 10)]);
    let err = session
        .load_document(Path::new(DOC), &rasterizer)
        .unwrap_err();
    assert!(matches!(err, CropperError::MultiPageNotSupported { pages: 2 }));
    assert!(session.source().is_none());
    assert!(session.transform().is_none());
}

#[test]
fn test_empty_document_rejected() {
    let mut session = Session::default();
    let rasterizer = FakeRasterizer::with_pages(vec![]);
    let err = session
        .load_document(Path::new(DOC), &rasterizer)
        .unwrap_err();
    assert!(matches!(err, CropperError::MultiPageNotSupported { pages: 0 }));
}

#[test]
fn test_failed_load_keeps_previous_image() {
    let mut session = loaded_session();
    let before = *session.transform().unwrap();

    let err = session
        .load_document(Path::new("broken.pdf"), &BrokenRasterizer)
        .unwrap_err();
    assert!(matches!(err, CropperError::Rasterization(_)));

    let rasterizer =
        FakeRasterizer::with_pages(vec![coordinate_image(5, 5), coordinate_image(5, 5)]);
    assert!(session.load_document(Path::new(DOC), &rasterizer).is_err());

    assert_eq!(session.source().unwrap().width(), 2000);
    assert_eq!(session.transform(), Some(&before));
}

#[test]
fn test_new_load_replaces_image() {
    let mut session = loaded_session();
    let rasterizer = FakeRasterizer::with_pages(vec![coordinate_image(300, 400)]);
    session.load_document(Path::new("other.pdf"), &rasterizer).unwrap();
    let t = session.transform().unwrap();
    assert_eq!((t.scaled_width, t.scaled_height), (600, 800));
}

#[test]
fn test_surface_change_refits() {
    let mut session = loaded_session();
    session
        .set_surface_size(SurfaceSize {
            width: 1000,
            height: 1000,
        })
        .unwrap();
    let t = session.transform().unwrap();
    assert_eq!((t.scaled_width, t.scaled_height), (1000, 500));
    assert_eq!(session.config().surface.width, 1000);
}

// ---------------------------------------------------------------------------
// Pointer interaction
// ---------------------------------------------------------------------------

#[test]
fn test_press_without_image_stays_idle() {
    let mut session = Session::default();
    session.pointer_press(DisplayPoint::new(10.0, 10.0));
    assert!(session.state().is_idle());
}

#[test]
fn test_release_without_image_reports_error() {
    let mut session = Session::default();
    let mut picker = ScriptedPicker::answering("never.png");
    let err = session
        .pointer_release(DisplayPoint::new(10.0, 10.0), &mut picker)
        .unwrap_err();
    assert!(matches!(err, CropperError::NoImageLoaded));
    assert_eq!(picker.calls, 0);
    assert!(session.state().is_idle());
}

#[test]
fn test_drag_is_clamped_to_surface() {
    let mut session = loaded_session();
    drag(&mut session, (50.0, 300.0), (900.0, -40.0));
    match session.state() {
        InteractionState::Selecting(rect) => {
            assert_eq!(rect.anchor, DisplayPoint::new(50.0, 300.0));
            assert_eq!(rect.current, DisplayPoint::new(600.0, 0.0));
        }
        other => panic!("expected Selecting, got {other}"),
    }
}

#[test]
fn test_pending_region_follows_drag() {
    let mut session = loaded_session();
    assert!(session.pending_region().is_none());
    drag(&mut session, (50.0, 300.0), (650.0, 550.0));
    let region = session.pending_region().unwrap();
    assert_eq!((region.x1, region.y1, region.x2, region.y2), (166, 166, 2000, 1000));
}

#[test]
fn test_release_saves_crop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crop.png");
    let mut session = loaded_session();
    let mut picker = ScriptedPicker::answering(&path);

    drag(&mut session, (30.0, 280.0), (60.0, 310.0));
    let outcome = session
        .pointer_release(DisplayPoint::new(60.0, 310.0), &mut picker)
        .unwrap();

    // (30, 30)..(60, 60) image-local -> (100, 100)..(200, 200) source
    assert_eq!(
        outcome,
        CropOutcome::Saved {
            path: path.clone(),
            width: 100,
            height: 100,
        }
    );
    assert!(session.state().is_idle());

    let saved = image::open(&path).unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (100, 100));
    assert_eq!(saved.get_pixel(0, 0), &Rgb([100, 100, 0]));
}

#[test]
fn test_release_applies_render_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crop.png");
    let mut session = Session::default();
    let page = RgbImage::from_pixel(600, 800, Rgb([240, 240, 240]));
    session
        .load_document(Path::new(DOC), &FakeRasterizer::with_pages(vec![page]))
        .unwrap();
    session.options = RenderOptions {
        grayscale: true,
        threshold: true,
    };

    let mut picker = ScriptedPicker::answering(&path);
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));
    session
        .pointer_release(DisplayPoint::new(10.0, 10.0), &mut picker)
        .unwrap();

    let saved = image::open(&path).unwrap();
    let gray = saved.as_luma8().expect("thresholded crop saved as L8");
    assert!(gray.pixels().all(|p| p.0[0] == 0));
}

#[test]
fn test_render_options_persist_across_crops() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = loaded_session();
    session.options.grayscale = true;

    for name in ["a.png", "b.png"] {
        let mut picker = ScriptedPicker::answering(dir.path().join(name));
        drag(&mut session, (0.0, 250.0), (30.0, 280.0));
        session
            .pointer_release(DisplayPoint::new(30.0, 280.0), &mut picker)
            .unwrap();
    }
    assert!(session.options.grayscale);
    assert!(image::open(dir.path().join("b.png")).unwrap().as_luma8().is_some());
}

#[test]
fn test_cancelled_save_discards() {
    let mut session = loaded_session();
    let before = *session.transform().unwrap();
    let mut picker = ScriptedPicker::cancelling();

    drag(&mut session, (30.0, 280.0), (60.0, 310.0));
    let outcome = session
        .pointer_release(DisplayPoint::new(60.0, 310.0), &mut picker)
        .unwrap();

    assert_eq!(outcome, CropOutcome::Discarded);
    assert_eq!(picker.calls, 1);
    assert!(session.state().is_idle());
    assert_eq!(session.transform(), Some(&before));
}

#[test]
fn test_margin_selection_is_not_prompted() {
    let mut session = loaded_session();
    let mut picker = ScriptedPicker::answering("unused.png");

    drag(&mut session, (10.0, 10.0), (500.0, 200.0));
    let outcome = session
        .pointer_release(DisplayPoint::new(500.0, 200.0), &mut picker)
        .unwrap();

    assert_eq!(outcome, CropOutcome::EmptySelection);
    assert_eq!(picker.calls, 0);
    assert!(session.state().is_idle());
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut session = loaded_session();
    let mut picker = ScriptedPicker::answering("unused.png");
    let outcome = session
        .pointer_release(DisplayPoint::new(100.0, 400.0), &mut picker)
        .unwrap();
    assert_eq!(outcome, CropOutcome::Ignored);
    assert_eq!(picker.calls, 0);
}

#[test]
fn test_save_failure_clears_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("crop.png");
    let mut session = loaded_session();
    let mut picker = ScriptedPicker::answering(&path);

    drag(&mut session, (30.0, 280.0), (60.0, 310.0));
    let err = session
        .pointer_release(DisplayPoint::new(60.0, 310.0), &mut picker)
        .unwrap_err();

    assert!(matches!(err, CropperError::Save { .. }));
    assert!(session.state().is_idle());
    assert!(session.source().is_some());
}

#[test]
fn test_save_path_without_extension_gets_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = loaded_session();
    let mut picker = ScriptedPicker::answering(dir.path().join("crop"));

    drag(&mut session, (30.0, 280.0), (60.0, 310.0));
    let outcome = session
        .pointer_release(DisplayPoint::new(60.0, 310.0), &mut picker)
        .unwrap();

    let expected = dir.path().join("crop.png");
    assert!(matches!(outcome, CropOutcome::Saved { ref path, .. } if *path == expected));
    assert!(expected.exists());
}
